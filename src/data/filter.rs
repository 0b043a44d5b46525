use super::model::Catalog;

/// Indices of restaurants located in `city`, in catalog order.
pub fn city_indices(catalog: &Catalog, city: &str) -> Vec<usize> {
    catalog
        .restaurants
        .iter()
        .enumerate()
        .filter(|(_, r)| r.city == city)
        .map(|(i, _)| i)
        .collect()
}

/// First restaurant in `city` serving `cuisine`. Its feature row is the
/// query vector for similarity ranking.
pub fn reference_index(catalog: &Catalog, city: &str, cuisine: &str) -> Option<usize> {
    catalog
        .restaurants
        .iter()
        .position(|r| r.city == city && r.cuisine == cuisine)
}

/// Whether restaurant `index` costs no more than `budget`. Out-of-range
/// indices never pass.
pub fn is_within_budget(catalog: &Catalog, index: usize, budget: f64) -> bool {
    catalog
        .restaurants
        .get(index)
        .is_some_and(|r| r.cost <= budget)
}
