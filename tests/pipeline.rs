use std::fs;
use std::process::Command;

use swiggy_recommender::data::loader::{
    self, CLEANED_FILE, CatalogError, ENCODED_FILE, ENCODER_FILE, RAW_FILE,
};
use swiggy_recommender::pipeline::{self, PreprocessOptions};
use swiggy_recommender::recommend::{Query, RecommendError, recommend};

const RAW: &str = "\
id,name,city,rating,rating_count,cost,cuisine,lic_no,link,address,menu
1,Spice Route,Bangalore,4.4,100+ ratings,₹ 350,\"Biryani,Andhra\",L1,https://www.swiggy.com/1 ,Koramangala,m1
2,Dragon Wok,Bangalore,3.9,50+ ratings,₹ 450,\"Chinese,Thai\",L2,https://www.swiggy.com/2,Indiranagar,m2
3,Meghana,Bangalore,--,Too Few Ratings,\"₹ 1,200\",Biryani,L3,https://www.swiggy.com/3,Residency Rd,m3
4,Paradise,Hyderabad,4.1,1K+ ratings,₹ 400,Biryani,L4,https://www.swiggy.com/4,Secunderabad,m4
2,Dragon Wok,Bangalore,3.9,50+ ratings,₹ 450,\"Chinese,Thai\",L2,https://www.swiggy.com/2,Indiranagar,m2
5,Udupi Grand,Bangalore,4.0,20+ ratings,₹ 150,South Indian,L5,https://www.swiggy.com/5,Jayanagar,m5
6,Chai Point,Bangalore,4.2,500+ ratings,free,Beverages,L6,https://www.swiggy.com/6,MG Road,m6
";

#[test]
fn preprocess_then_recommend() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join(RAW_FILE);
    fs::write(&input, RAW).unwrap();

    let report = pipeline::run(&input, dir.path(), &PreprocessOptions::default()).unwrap();
    assert_eq!(report.rows_read, 7);
    assert_eq!(report.rows_sampled, 7);
    assert_eq!(report.duplicates_dropped, 1);
    assert_eq!(report.rows_written, 6);
    // rating, cost, 2 cities, 4 cuisines
    assert_eq!(report.feature_columns, 8);
    for name in [CLEANED_FILE, ENCODED_FILE, ENCODER_FILE] {
        assert!(dir.path().join(name).is_file(), "{name} missing");
    }

    let catalog = loader::load_catalog(dir.path()).unwrap();
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.cities().collect::<Vec<_>>(), ["Bangalore", "Hyderabad"]);
    assert_eq!(
        catalog.cuisines_in("Bangalore").collect::<Vec<_>>(),
        ["Beverages", "Biryani", "Chinese", "South Indian"]
    );

    let meghana = &catalog.restaurants[2];
    assert_eq!(meghana.rating, 4.0);
    assert_eq!(meghana.cost, 1200.0);
    let chai = &catalog.restaurants[5];
    assert_eq!(chai.cost, 300.0);

    let recs = recommend(&catalog, &Query::new("Bangalore", "Biryani", 500.0)).unwrap();
    let names: Vec<&str> = recs
        .iter()
        .map(|r| catalog.restaurants[r.index].name.as_str())
        .collect();
    assert_eq!(names[0], "Spice Route");
    assert!(!names.contains(&"Meghana"));
    assert!(!names.contains(&"Paradise"));
    assert!(recs.iter().all(|r| catalog.restaurants[r.index].cost <= 500.0));
    assert_eq!(
        catalog.restaurants[recs[0].index].order_link(),
        "https://www.swiggy.com/1"
    );

    let err = recommend(&catalog, &Query::new("Hyderabad", "Chinese", 500.0)).unwrap_err();
    assert!(matches!(err, RecommendError::NoReference { .. }));
}

#[test]
fn sampling_caps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join(RAW_FILE);
    fs::write(&input, RAW).unwrap();

    let opts = PreprocessOptions {
        sample_size: 3,
        seed: 7,
    };
    let report = pipeline::run(&input, dir.path(), &opts).unwrap();
    assert_eq!(report.rows_sampled, 3);
    assert!(report.rows_written <= 3);

    let catalog = loader::load_catalog(dir.path()).unwrap();
    assert_eq!(catalog.len(), report.rows_written);
}

#[test]
fn missing_raw_export_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = pipeline::run(
        &dir.path().join(RAW_FILE),
        dir.path(),
        &PreprocessOptions::default(),
    )
    .unwrap_err();
    assert!(CatalogError::is_missing_file(&err));
    assert!(format!("{err:#}").contains("'swiggy.csv' not found"));
}

#[test]
fn preprocess_binary_fails_on_missing_export() {
    let dir = tempfile::tempdir().unwrap();
    let status = Command::new(env!("CARGO_BIN_EXE_preprocess"))
        .arg("--input")
        .arg(dir.path().join(RAW_FILE))
        .arg("--out-dir")
        .arg(dir.path())
        .status()
        .unwrap();
    assert!(!status.success());
    assert!(!dir.path().join(CLEANED_FILE).exists());
}
