pub mod merge;
pub mod pricing;
pub mod product;

pub use merge::{reconcile, MergeOutcome};
pub use pricing::{price_catalog, price_item, round_price, summary_text, PricedProduct};
pub use product::{dedup_key, generate_id, normalize, now_timestamp};
