use serde::{Deserialize, Serialize};

/// Where a catalog entry originally came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProductSource {
    Manual,
    Spreadsheet,
    Csv,
    Image,
    Url,
    Backup,
}

/// One entry of the master product catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductItem {
    /// Opaque unique identifier, assigned once and never changed by merges
    pub id: String,
    pub name: String,
    /// Empty string means "no brand"
    #[serde(default)]
    pub brand: String,
    /// Non-negative, in the source currency
    pub original_price: f64,
    pub currency: String,
    pub source: ProductSource,
    /// ISO 8601 timestamp string; lexicographic order matches chronological
    /// order for this format
    pub last_updated: String,
}

/// A candidate line item that has not been given a catalog identity yet.
/// Produced by the extraction side (image, spreadsheet, manual entry)
/// and consumed by the upsert-merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub original_price: f64,
    pub currency: String,
    pub source: ProductSource,
    pub last_updated: String,
}

impl NewProduct {
    /// Builds a candidate, coercing invalid price input to zero at the
    /// boundary so NaN or negatives never reach the catalog.
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        original_price: f64,
        currency: impl Into<String>,
        source: ProductSource,
        last_updated: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            original_price: sanitize_price(original_price),
            currency: currency.into(),
            source,
            last_updated: last_updated.into(),
        }
    }
}

/// Maps negative or non-finite price input to zero.
pub fn sanitize_price(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_price_coerces_bad_input() {
        assert_eq!(sanitize_price(12.5), 12.5);
        assert_eq!(sanitize_price(0.0), 0.0);
        assert_eq!(sanitize_price(-3.0), 0.0);
        assert_eq!(sanitize_price(f64::NAN), 0.0);
        assert_eq!(sanitize_price(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_new_product_sanitizes_price() {
        let item = NewProduct::new("Coke", "", f64::NAN, "$", ProductSource::Image, "2024-01-01T00:00:00Z");
        assert_eq!(item.original_price, 0.0);
    }

    #[test]
    fn test_source_tags_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&ProductSource::Spreadsheet).unwrap(), "\"spreadsheet\"");
        assert_eq!(serde_json::to_string(&ProductSource::Image).unwrap(), "\"image\"");
        let parsed: ProductSource = serde_json::from_str("\"backup\"").unwrap();
        assert_eq!(parsed, ProductSource::Backup);
    }

    #[test]
    fn test_product_item_tolerates_missing_brand() {
        let raw = r#"{
            "id": "p1",
            "name": "Coke",
            "original_price": 10.0,
            "currency": "$",
            "source": "manual",
            "last_updated": "2024-01-01T00:00:00Z"
        }"#;
        let item: ProductItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.brand, "");
    }
}
