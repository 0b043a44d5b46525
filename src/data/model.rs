use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use super::loader::CatalogError;

// ---------------------------------------------------------------------------
// Restaurant – one row of the cleaned catalog
// ---------------------------------------------------------------------------

/// A single cleaned restaurant row.
///
/// Text columns the recommender never reads are carried through unchanged so
/// the cleaned file keeps the shape of the raw export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    pub rating: f64,
    #[serde(default)]
    pub rating_count: String,
    pub cost: f64,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub lic_no: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub menu: String,
}

impl Restaurant {
    /// Value of a categorical column by name (`city` or `cuisine`).
    pub fn categorical(&self, column: &str) -> Option<&str> {
        match column {
            "city" => Some(&self.city),
            "cuisine" => Some(&self.cuisine),
            _ => None,
        }
    }

    /// Order link with surrounding whitespace removed.
    pub fn order_link(&self) -> &str {
        self.link.trim()
    }
}

// ---------------------------------------------------------------------------
// FeatureMatrix – the encoded table
// ---------------------------------------------------------------------------

/// Dense feature rows, one per restaurant, sharing a single header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureMatrix {
    /// Column names (`rating`, `cost`, `city_*`, `cuisine_*`).
    pub columns: Vec<String>,
    /// Row `i` encodes restaurant `i`.
    pub rows: Vec<Vec<f64>>,
}

impl FeatureMatrix {
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Restaurants joined positionally with their feature rows, plus a
/// city → cuisines index for the selectors.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub restaurants: Vec<Restaurant>,
    pub features: FeatureMatrix,
    /// For each city the sorted set of cuisines served there.
    pub cuisines_by_city: BTreeMap<String, BTreeSet<String>>,
}

impl Catalog {
    /// Join restaurants with their feature rows. Both tables must have the
    /// same number of rows.
    pub fn new(restaurants: Vec<Restaurant>, features: FeatureMatrix) -> Result<Self> {
        if restaurants.len() != features.len() {
            bail!(CatalogError::RowCountMismatch {
                restaurants: restaurants.len(),
                features: features.len(),
            });
        }

        let mut cuisines_by_city: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for r in &restaurants {
            cuisines_by_city
                .entry(r.city.clone())
                .or_default()
                .insert(r.cuisine.clone());
        }

        Ok(Catalog {
            restaurants,
            features,
            cuisines_by_city,
        })
    }

    /// Sorted unique cities.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cuisines_by_city.keys().map(String::as_str)
    }

    /// Sorted unique cuisines served in `city` (empty for an unknown city).
    pub fn cuisines_in<'a>(&'a self, city: &str) -> impl Iterator<Item = &'a str> {
        self.cuisines_by_city
            .get(city)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Number of restaurants.
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}
