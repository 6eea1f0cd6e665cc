pub mod models;

pub use models::lists::{ImportSummary, SavedList};
pub use models::product::{sanitize_price, NewProduct, ProductItem, ProductSource};
pub use models::settings::{AppSettings, ColumnVisibility, PricingTier, RoundingRule};
