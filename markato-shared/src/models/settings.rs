use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named markup tiers; `custom` holds a user-entered percentage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum PricingTier {
    Tier1,
    Tier2,
    Tier3,
    Tier4,
    Tier5,
    Custom,
}

/// How derived prices snap to "pretty" boundaries. Every rule rounds
/// upward and is idempotent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundingRule {
    #[serde(rename = "none")]
    None,
    /// Next integer ending in the digits 99
    #[serde(rename = "99")]
    Ends99,
    /// Next multiple of 100 (value ending in 00)
    #[serde(rename = "00")]
    Ends00,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "50")]
    Fifty,
    #[serde(rename = "100")]
    Hundred,
    #[serde(rename = "500")]
    FiveHundred,
    #[serde(rename = "1000")]
    Thousand,
}

/// Per-column display toggles for the derived price columns
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ColumnVisibility {
    pub base_cost: bool,
    pub seller_price: bool,
    pub suggested_price: bool,
}

impl Default for ColumnVisibility {
    fn default() -> Self {
        Self {
            base_cost: true,
            seller_price: true,
            suggested_price: true,
        }
    }
}

/// Process-wide pricing configuration. Loaded once at startup from the
/// settings record (or defaults), mutated by the user, persisted on every
/// change. Pricing reads it explicitly instead of any ambient state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub business_name: String,
    /// Multiplier converting `original_price` into the local currency
    pub exchange_rate: f64,
    pub rounding_rule: RoundingRule,
    /// Markup percentage per tier
    pub markups: BTreeMap<PricingTier, f64>,
    pub active_tier: PricingTier,
    /// Extra percentage on top of the seller price for the suggested price
    pub client_adjustment: f64,
    /// Display symbol for derived prices
    pub global_currency: String,
    pub visibility: ColumnVisibility,
}

impl Default for AppSettings {
    fn default() -> Self {
        let mut markups = BTreeMap::new();
        markups.insert(PricingTier::Tier1, 20.0);
        markups.insert(PricingTier::Tier2, 30.0);
        markups.insert(PricingTier::Tier3, 50.0);
        markups.insert(PricingTier::Tier4, 80.0);
        markups.insert(PricingTier::Tier5, 100.0);
        markups.insert(PricingTier::Custom, 0.0);

        Self {
            business_name: String::new(),
            exchange_rate: 1.0,
            rounding_rule: RoundingRule::None,
            markups,
            active_tier: PricingTier::Tier1,
            client_adjustment: 0.0,
            global_currency: "$".to_string(),
            visibility: ColumnVisibility::default(),
        }
    }
}

impl AppSettings {
    /// Markup percentage for a tier; a missing entry reads as 0
    pub fn markup_for(&self, tier: PricingTier) -> f64 {
        self.markups.get(&tier).copied().unwrap_or(0.0)
    }

    /// Markup percentage for the currently active tier
    pub fn active_markup(&self) -> f64 {
        self.markup_for(self.active_tier)
    }
}
