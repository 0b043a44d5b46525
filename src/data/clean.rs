use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::model::Restaurant;

/// Rating used when the export has `--` or an unparsable value.
pub const DEFAULT_RATING: f64 = 4.0;
/// Cost used when the export's cost cell cannot be parsed.
pub const DEFAULT_COST: f64 = 300.0;
/// Rows kept when the export is larger than this.
pub const DEFAULT_SAMPLE_SIZE: usize = 20_000;
pub const DEFAULT_SEED: u64 = 42;

// ---------------------------------------------------------------------------
// RawRestaurant – one uncleaned export row
// ---------------------------------------------------------------------------

/// A raw export row with every column kept as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRestaurant {
    pub id: String,
    pub name: String,
    pub city: String,
    pub rating: String,
    pub rating_count: String,
    pub cost: String,
    pub cuisine: String,
    pub lic_no: String,
    pub link: String,
    pub address: String,
    pub menu: String,
}

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

/// Parse a rating cell. `--`, blanks and junk fall back to [`DEFAULT_RATING`].
pub fn parse_rating(s: &str) -> f64 {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(DEFAULT_RATING)
}

/// Parse a cost cell such as `"₹ 1,200"`. Junk falls back to [`DEFAULT_COST`].
pub fn parse_cost(s: &str) -> f64 {
    let cleaned: String = s.replace('₹', "").replace(',', "");
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(DEFAULT_COST)
}

/// Keep only the first listed cuisine: `"Chinese,Indian"` → `"Chinese"`.
pub fn primary_cuisine(s: &str) -> &str {
    s.split(',').next().unwrap_or_default().trim()
}

/// Clean a raw row into a [`Restaurant`].
pub fn clean(raw: RawRestaurant) -> Restaurant {
    let rating = parse_rating(&raw.rating);
    let cost = parse_cost(&raw.cost);
    let cuisine = primary_cuisine(&raw.cuisine).to_string();
    Restaurant {
        id: raw.id,
        name: raw.name,
        city: raw.city,
        rating,
        rating_count: raw.rating_count,
        cost,
        cuisine,
        lic_no: raw.lic_no,
        link: raw.link,
        address: raw.address,
        menu: raw.menu,
    }
}

// ---------------------------------------------------------------------------
// Row-level passes
// ---------------------------------------------------------------------------

/// Keep a seeded random subset of `n` rows when there are more than `n`.
/// Survivors come out in draw order, not file order.
pub fn sample_rows<T>(rows: Vec<T>, n: usize, seed: u64) -> Vec<T> {
    if rows.len() <= n {
        return rows;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let picks = rand::seq::index::sample(&mut rng, rows.len(), n);

    let mut slots: Vec<Option<T>> = rows.into_iter().map(Some).collect();
    picks.into_iter().filter_map(|i| slots[i].take()).collect()
}

/// Drop rows identical to an earlier row, keeping the first occurrence.
/// Returns the surviving rows and the number dropped.
pub fn dedupe(rows: Vec<RawRestaurant>) -> (Vec<RawRestaurant>, usize) {
    let before = rows.len();
    let mut seen: HashSet<RawRestaurant> = HashSet::with_capacity(before);
    let kept: Vec<RawRestaurant> = rows
        .into_iter()
        .filter(|row| seen.insert(row.clone()))
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}
