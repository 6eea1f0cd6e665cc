use markato_shared::{sanitize_price, AppSettings, ProductItem, RoundingRule};
use serde::Serialize;

/// A catalog entry plus its three derived display prices. Recomputed from
/// current settings on every call and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct PricedProduct {
    pub item: ProductItem,
    /// `original_price` converted into the local currency
    pub calculated_cost_local: f64,
    /// Local cost with the active tier markup, rounded
    pub seller_price: f64,
    /// Seller price with the client adjustment on top, rounded again
    pub suggested_price: f64,
}

/// Rounds `value` up to the boundary the rule names. Values at a boundary
/// stay put, so every rule is idempotent. Zero and negative inputs map to
/// zero rather than being pushed up to the first boundary.
pub fn round_price(value: f64, rule: RoundingRule) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    match rule {
        RoundingRule::None => value,
        RoundingRule::Ends99 => {
            // Next integer whose last two digits are 99
            ((value.ceil() - 99.0) / 100.0).ceil() * 100.0 + 99.0
        }
        RoundingRule::Ten => round_up_to(value, 10.0),
        RoundingRule::Fifty => round_up_to(value, 50.0),
        RoundingRule::Ends00 | RoundingRule::Hundred => round_up_to(value, 100.0),
        RoundingRule::FiveHundred => round_up_to(value, 500.0),
        RoundingRule::Thousand => round_up_to(value, 1000.0),
    }
}

fn round_up_to(value: f64, step: f64) -> f64 {
    (value / step).ceil() * step
}

/// Derives the three display prices for one catalog entry. Pure: reads
/// nothing but its arguments, touches no storage.
///
/// The suggested price is computed from the *rounded* seller price, not
/// from the unrounded intermediate.
pub fn price_item(item: &ProductItem, settings: &AppSettings) -> PricedProduct {
    let cost = sanitize_price(item.original_price) * settings.exchange_rate;
    let seller = round_price(
        cost * (1.0 + settings.active_markup() / 100.0),
        settings.rounding_rule,
    );
    let suggested = round_price(
        seller * (1.0 + settings.client_adjustment / 100.0),
        settings.rounding_rule,
    );

    PricedProduct {
        item: item.clone(),
        calculated_cost_local: cost,
        seller_price: seller,
        suggested_price: suggested,
    }
}

/// Prices a whole catalog in order
pub fn price_catalog(items: &[ProductItem], settings: &AppSettings) -> Vec<PricedProduct> {
    items.iter().map(|item| price_item(item, settings)).collect()
}

/// Plain-text summary of one priced row for sharing, honoring the column
/// visibility flags. The base cost keeps the item's source currency; the
/// derived prices carry the display symbol.
pub fn summary_text(priced: &PricedProduct, settings: &AppSettings) -> String {
    let mut lines = Vec::new();
    if priced.item.brand.is_empty() {
        lines.push(priced.item.name.clone());
    } else {
        lines.push(format!("{} ({})", priced.item.name, priced.item.brand));
    }
    if settings.visibility.base_cost {
        lines.push(format!(
            "Cost: {}{:.2}",
            priced.item.currency, priced.calculated_cost_local
        ));
    }
    if settings.visibility.seller_price {
        lines.push(format!(
            "Sell: {}{}",
            settings.global_currency, priced.seller_price
        ));
    }
    if settings.visibility.suggested_price {
        lines.push(format!(
            "Final: {}{}",
            settings.global_currency, priced.suggested_price
        ));
    }
    lines.join("\n")
}
