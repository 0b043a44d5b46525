use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::model::{FeatureMatrix, Restaurant};

/// Categorical columns expanded into one-hot features, in output order.
pub const CATEGORICAL_COLUMNS: [&str; 2] = ["city", "cuisine"];
/// Numeric columns copied verbatim ahead of the one-hot block.
pub const NUMERIC_COLUMNS: [&str; 2] = ["rating", "cost"];

/// Sorted categories seen for one column at fit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalFeature {
    pub column: String,
    pub categories: Vec<String>,
}

impl CategoricalFeature {
    fn position(&self, value: &str) -> Option<usize> {
        self.categories
            .binary_search_by(|c| c.as_str().cmp(value))
            .ok()
    }
}

/// One-hot encoder over [`CATEGORICAL_COLUMNS`].
///
/// Values not seen at fit time encode as all zeros for their column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneHotEncoder {
    pub features: Vec<CategoricalFeature>,
}

impl OneHotEncoder {
    /// Learn the sorted category set of each categorical column.
    pub fn fit(restaurants: &[Restaurant]) -> Self {
        let features = CATEGORICAL_COLUMNS
            .iter()
            .map(|&column| {
                let categories: BTreeSet<&str> = restaurants
                    .iter()
                    .filter_map(|r| r.categorical(column))
                    .collect();
                CategoricalFeature {
                    column: column.to_string(),
                    categories: categories.into_iter().map(str::to_string).collect(),
                }
            })
            .collect();
        OneHotEncoder { features }
    }

    /// Output names, `<column>_<category>`.
    pub fn feature_names(&self) -> Vec<String> {
        self.features
            .iter()
            .flat_map(|f| {
                f.categories
                    .iter()
                    .map(move |c| format!("{}_{c}", f.column))
            })
            .collect()
    }

    /// Total width of the one-hot block.
    pub fn width(&self) -> usize {
        self.features.iter().map(|f| f.categories.len()).sum()
    }

    /// One-hot vector for a single restaurant.
    pub fn transform(&self, restaurant: &Restaurant) -> Vec<f64> {
        let mut out = vec![0.0; self.width()];
        let mut offset = 0;
        for feature in &self.features {
            let hit = restaurant
                .categorical(&feature.column)
                .and_then(|value| feature.position(value));
            if let Some(pos) = hit {
                out[offset + pos] = 1.0;
            }
            offset += feature.categories.len();
        }
        out
    }

    /// Header of the encoded table: numeric columns then one-hot names.
    pub fn encoded_columns(&self) -> Vec<String> {
        NUMERIC_COLUMNS
            .iter()
            .map(|c| c.to_string())
            .chain(self.feature_names())
            .collect()
    }

    /// `[rating, cost, one-hot...]` for a single restaurant.
    pub fn encode_row(&self, restaurant: &Restaurant) -> Vec<f64> {
        let mut row = Vec::with_capacity(NUMERIC_COLUMNS.len() + self.width());
        row.push(restaurant.rating);
        row.push(restaurant.cost);
        row.extend(self.transform(restaurant));
        row
    }

    /// Encode every restaurant, row `i` for restaurant `i`.
    pub fn encode_all(&self, restaurants: &[Restaurant]) -> FeatureMatrix {
        FeatureMatrix {
            columns: self.encoded_columns(),
            rows: restaurants.iter().map(|r| self.encode_row(r)).collect(),
        }
    }
}
