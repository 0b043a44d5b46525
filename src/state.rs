use std::path::PathBuf;

use swiggy_recommender::data::loader::{self, CatalogError};
use swiggy_recommender::data::model::Catalog;
use swiggy_recommender::recommend::{self, Query, Recommendation, RecommendError};

/// Slider bounds and starting value for the budget, in rupees.
pub const BUDGET_MIN: u32 = 100;
pub const BUDGET_MAX: u32 = 2000;
pub const BUDGET_DEFAULT: u32 = 500;

// ---------------------------------------------------------------------------
// Search outcome
// ---------------------------------------------------------------------------

/// Result of the last "Find Food" press, kept until the next one.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Matches {
        city: String,
        cuisine: String,
        budget: u32,
        recommendations: Vec<Recommendation>,
    },
    /// The city has no restaurant with the chosen cuisine.
    NoReference { city: String, cuisine: String },
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Folder holding the cleaned and encoded files.
    pub data_dir: PathBuf,

    /// Loaded catalog (None until a load succeeds).
    pub catalog: Option<Catalog>,

    pub city: Option<String>,
    pub cuisine: Option<String>,
    pub budget: u32,

    /// Cards shown per search.
    pub limit: usize,

    pub outcome: Option<SearchOutcome>,

    /// Set when the last load failed because a data file was absent.
    pub data_missing: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, limit: usize) -> Self {
        Self {
            data_dir,
            catalog: None,
            city: None,
            cuisine: None,
            budget: BUDGET_DEFAULT,
            limit,
            outcome: None,
            data_missing: false,
            status_message: None,
        }
    }

    /// (Re)load the catalog from `data_dir`.
    pub fn reload(&mut self) {
        match loader::load_catalog(&self.data_dir) {
            Ok(catalog) => self.set_catalog(catalog),
            Err(e) => {
                log::error!("Failed to load catalog: {e:#}");
                self.catalog = None;
                self.city = None;
                self.cuisine = None;
                self.outcome = None;
                self.data_missing = CatalogError::is_missing_file(&e);
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Point at another data folder and load from it.
    pub fn set_data_dir(&mut self, dir: PathBuf) {
        self.data_dir = dir;
        self.reload();
    }

    /// Ingest a newly loaded catalog and default the selectors.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.city = catalog.cities().next().map(str::to_string);
        self.cuisine = self
            .city
            .as_deref()
            .and_then(|c| catalog.cuisines_in(c).next())
            .map(str::to_string);
        self.catalog = Some(catalog);
        self.outcome = None;
        self.data_missing = false;
        self.status_message = None;
    }

    /// Change city; the cuisine resets to the city's first one.
    pub fn select_city(&mut self, city: &str) {
        if self.city.as_deref() == Some(city) {
            return;
        }
        self.cuisine = self
            .catalog
            .as_ref()
            .and_then(|c| c.cuisines_in(city).next())
            .map(str::to_string);
        self.city = Some(city.to_string());
    }

    pub fn select_cuisine(&mut self, cuisine: &str) {
        self.cuisine = Some(cuisine.to_string());
    }

    /// Run a search for the current selection.
    pub fn find_food(&mut self) {
        let (Some(catalog), Some(city), Some(cuisine)) =
            (&self.catalog, self.city.as_deref(), self.cuisine.as_deref())
        else {
            return;
        };

        let query = Query::new(city, cuisine, f64::from(self.budget)).with_limit(self.limit);
        self.outcome = Some(match recommend::recommend(catalog, &query) {
            Ok(recommendations) => {
                log::info!(
                    "{} matches for {} in {} under ₹{}",
                    recommendations.len(),
                    query.cuisine,
                    query.city,
                    self.budget
                );
                SearchOutcome::Matches {
                    city: query.city,
                    cuisine: query.cuisine,
                    budget: self.budget,
                    recommendations,
                }
            }
            Err(RecommendError::NoReference { city, cuisine }) => {
                log::warn!("No {cuisine} restaurant in {city}");
                SearchOutcome::NoReference { city, cuisine }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiggy_recommender::data::encoder::OneHotEncoder;
    use swiggy_recommender::data::model::Restaurant;

    fn restaurant(name: &str, city: &str, cuisine: &str, cost: f64) -> Restaurant {
        Restaurant {
            id: String::new(),
            name: name.to_string(),
            city: city.to_string(),
            rating: 4.0,
            rating_count: String::new(),
            cost,
            cuisine: cuisine.to_string(),
            lic_no: String::new(),
            link: String::new(),
            address: String::new(),
            menu: String::new(),
        }
    }

    fn loaded() -> AppState {
        let restaurants = vec![
            restaurant("a", "Pune", "Thali", 250.0),
            restaurant("b", "Agra", "Mughlai", 400.0),
            restaurant("c", "Agra", "Chaat", 90.0),
            restaurant("d", "Pune", "Biryani", 900.0),
        ];
        let features = OneHotEncoder::fit(&restaurants).encode_all(&restaurants);
        let mut state = AppState::new(PathBuf::from("."), 5);
        state.set_catalog(Catalog::new(restaurants, features).unwrap());
        state
    }

    #[test]
    fn catalog_defaults_to_first_city_and_cuisine() {
        let state = loaded();
        assert_eq!(state.city.as_deref(), Some("Agra"));
        assert_eq!(state.cuisine.as_deref(), Some("Chaat"));
        assert_eq!(state.budget, BUDGET_DEFAULT);
    }

    #[test]
    fn switching_city_resets_cuisine() {
        let mut state = loaded();
        state.select_city("Pune");
        assert_eq!(state.cuisine.as_deref(), Some("Biryani"));
    }

    #[test]
    fn find_food_respects_budget() {
        let mut state = loaded();
        state.select_city("Pune");
        state.select_cuisine("Thali");
        state.find_food();
        let Some(SearchOutcome::Matches { recommendations, budget, .. }) = &state.outcome else {
            panic!("expected matches, got {:?}", state.outcome);
        };
        assert_eq!(*budget, BUDGET_DEFAULT);
        let catalog = state.catalog.as_ref().unwrap();
        let names: Vec<&str> = recommendations
            .iter()
            .map(|r| catalog.restaurants[r.index].name.as_str())
            .collect();
        assert_eq!(names, ["a"]);
    }

    #[test]
    fn unknown_pair_reports_no_reference() {
        let mut state = loaded();
        state.select_cuisine("Biryani");
        state.find_food();
        assert_eq!(
            state.outcome,
            Some(SearchOutcome::NoReference {
                city: "Agra".into(),
                cuisine: "Biryani".into()
            })
        );
    }

    #[test]
    fn reload_flags_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = loaded();
        state.set_data_dir(dir.path().to_path_buf());
        assert!(state.catalog.is_none());
        assert!(state.data_missing);
        assert!(state.status_message.is_some());
    }
}
