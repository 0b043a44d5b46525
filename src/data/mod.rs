/// Data layer: restaurant types, cleaning, encoding, loading, and filtering.
///
/// Architecture:
/// ```text
///  swiggy.csv
///        │
///        ▼
///   ┌──────────┐
///   │  clean    │  sample → dedupe → parse rating/cost/cuisine
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ encoder   │  rating, cost + one-hot(city, cuisine)
///   └──────────┘
///        │
///        ▼
///  cleaned_data.csv + encoded_data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  join by row position → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  city rows, reference row, budget
///   └──────────┘
/// ```

pub mod clean;
pub mod encoder;
pub mod filter;
pub mod loader;
pub mod model;
