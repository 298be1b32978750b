//! Domain logic for the rate board and price estimator lives here.

pub mod app_state;
pub mod entities;
pub mod estimate;
pub mod summary;

pub use app_state::AppState;
pub use entities::{Director, GoldRates, Purity, RateTier, Store, StoreInfo};
pub use estimate::{compute_estimate, parse_weight, Breakdown, EstimateInput, GST_RATE};
pub use summary::{estimate_summary, format_inr, format_inr_whole, rates_summary};
