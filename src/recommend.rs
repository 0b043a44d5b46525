//! Content-based ranking: score a city's restaurants by cosine similarity to
//! a reference restaurant, then apply the budget.

use thiserror::Error;

use crate::data::filter::{city_indices, is_within_budget, reference_index};
use crate::data::model::Catalog;

/// Number of cards shown per search.
pub const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendError {
    #[error("no restaurant in {city} serves {cuisine}")]
    NoReference { city: String, cuisine: String },
}

/// A single search request.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub city: String,
    pub cuisine: String,
    /// Inclusive upper bound on cost.
    pub budget: f64,
    pub limit: usize,
}

impl Query {
    pub fn new(city: impl Into<String>, cuisine: impl Into<String>, budget: f64) -> Self {
        Self {
            city: city.into(),
            cuisine: cuisine.into(),
            budget,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// A ranked hit. `index` points into `Catalog::restaurants`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    pub index: usize,
    pub score: f64,
}

/// Cosine of the angle between `a` and `b`; `0.0` when either is a zero vector.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Rank the query city's restaurants against the first one serving the
/// requested cuisine, most similar first, then drop anything over budget.
pub fn recommend(catalog: &Catalog, query: &Query) -> Result<Vec<Recommendation>, RecommendError> {
    let reference = reference_index(catalog, &query.city, &query.cuisine).ok_or_else(|| {
        RecommendError::NoReference {
            city: query.city.clone(),
            cuisine: query.cuisine.clone(),
        }
    })?;
    let target = catalog.features.row(reference).unwrap_or_default();

    let mut scored: Vec<Recommendation> = city_indices(catalog, &query.city)
        .into_iter()
        .map(|index| Recommendation {
            index,
            score: catalog
                .features
                .row(index)
                .map_or(0.0, |row| cosine_similarity(target, row)),
        })
        .collect();
    // Stable: equal scores keep catalog order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let ranked = scored.len();

    let recs: Vec<Recommendation> = scored
        .into_iter()
        .filter(|r| is_within_budget(catalog, r.index, query.budget))
        .take(query.limit)
        .collect();

    log::debug!(
        "{} in {}: reference #{reference}, {} ranked, {} within ₹{}",
        query.cuisine,
        query.city,
        ranked,
        recs.len(),
        query.budget
    );
    Ok(recs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::encoder::OneHotEncoder;
    use crate::data::model::Restaurant;
    use crate::data::model::tests::restaurant;

    fn catalog(restaurants: Vec<Restaurant>) -> Catalog {
        let features = OneHotEncoder::fit(&restaurants).encode_all(&restaurants);
        Catalog::new(restaurants, features).unwrap()
    }

    fn bangalore() -> Catalog {
        catalog(vec![
            restaurant("elsewhere", "Delhi", "Biryani", 4.5, 300.0),
            restaurant("ref", "Bangalore", "Biryani", 4.0, 300.0),
            restaurant("twin", "Bangalore", "Biryani", 4.0, 310.0),
            restaurant("pricey", "Bangalore", "Biryani", 4.4, 1800.0),
            restaurant("cafe", "Bangalore", "Cafe", 4.0, 300.0),
            restaurant("thali", "Bangalore", "Thali", 3.1, 150.0),
            restaurant("pizza", "Bangalore", "Pizzas", 4.2, 450.0),
            restaurant("rolls", "Bangalore", "Rolls", 3.9, 200.0),
        ])
    }

    fn names(c: &Catalog, recs: &[Recommendation]) -> Vec<String> {
        recs.iter().map(|r| c.restaurants[r.index].name.clone()).collect()
    }

    #[test]
    fn cosine_handles_degenerate_vectors() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert!((cosine_similarity(&[1.0, 2.0], &[2.0, 4.0]) - 1.0).abs() < 1e-12);
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-12);
    }

    #[test]
    fn reference_ranks_first_and_scores_descend() {
        let c = bangalore();
        let recs = recommend(&c, &Query::new("Bangalore", "Biryani", 2000.0)).unwrap();
        assert_eq!(recs.len(), DEFAULT_LIMIT);
        assert_eq!(c.restaurants[recs[0].index].name, "ref");
        assert!((recs[0].score - 1.0).abs() < 1e-12);
        assert!(recs.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(recs.iter().all(|r| c.restaurants[r.index].city == "Bangalore"));
    }

    #[test]
    fn nothing_over_budget_is_returned() {
        let c = bangalore();
        for budget in [100.0, 150.0, 299.0, 300.0, 500.0, 2000.0] {
            let recs = recommend(&c, &Query::new("Bangalore", "Biryani", budget).with_limit(10)).unwrap();
            assert!(recs.iter().all(|r| c.restaurants[r.index].cost <= budget));
        }
        let recs = recommend(&c, &Query::new("Bangalore", "Biryani", 500.0)).unwrap();
        assert!(!names(&c, &recs).contains(&"pricey".to_string()));
    }

    #[test]
    fn budget_can_exclude_everything() {
        let c = bangalore();
        let recs = recommend(&c, &Query::new("Bangalore", "Biryani", 100.0)).unwrap();
        assert!(recs.is_empty());
    }

    #[test]
    fn limit_caps_results() {
        let c = bangalore();
        let recs = recommend(&c, &Query::new("Bangalore", "Biryani", 2000.0).with_limit(2)).unwrap();
        assert_eq!(names(&c, &recs), ["ref", "twin"]);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let c = catalog(vec![
            restaurant("first", "Pune", "Thali", 4.0, 200.0),
            restaurant("second", "Pune", "Thali", 4.0, 200.0),
            restaurant("third", "Pune", "Thali", 4.0, 200.0),
        ]);
        let recs = recommend(&c, &Query::new("Pune", "Thali", 500.0)).unwrap();
        assert_eq!(names(&c, &recs), ["first", "second", "third"]);
    }

    #[test]
    fn missing_pair_is_an_error() {
        let c = bangalore();
        let err = recommend(&c, &Query::new("Delhi", "Cafe", 500.0)).unwrap_err();
        assert_eq!(
            err,
            RecommendError::NoReference {
                city: "Delhi".into(),
                cuisine: "Cafe".into()
            }
        );
    }
}
