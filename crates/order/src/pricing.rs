//! Order pricing.

use serde::{Deserialize, Serialize};
use srb_core::config::PricingConfig;

/// Unit price and flat shipping fee, in whole kronor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    pub unit_price: u64,
    pub shipping_fee: u64,
    pub currency: String,
}

impl Pricing {
    /// Total for `quantity` copies including shipping. Saturates instead of
    /// overflowing.
    pub fn total(&self, quantity: u32) -> u64 {
        u64::from(quantity)
            .saturating_mul(self.unit_price)
            .saturating_add(self.shipping_fee)
    }

    /// Amount with currency, e.g. `449 kr`.
    pub fn format_amount(&self, amount: u64) -> String {
        format!("{} {}", amount, self.currency)
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Self::from(&PricingConfig::default())
    }
}

impl From<&PricingConfig> for Pricing {
    fn from(config: &PricingConfig) -> Self {
        Self {
            unit_price: config.unit_price,
            shipping_fee: config.shipping_fee,
            currency: config.currency.clone(),
        }
    }
}

/// Total at the default prices: `quantity * 200 + 49`.
pub fn calculate_total(quantity: u32) -> u64 {
    Pricing::default().total(quantity)
}
