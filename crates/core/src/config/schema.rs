//! Configuration schema definitions
//!
//! Every section defaults to the values the website ships with, so an empty
//! or missing file yields a working configuration.

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub bible: BibleConfig,

    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default)]
    pub order: OrderConfig,

    #[serde(default)]
    pub variants: VariantsConfig,
}

/// Site search configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of website results per query
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Number of queries kept in the result cache
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Shorter query terms are ignored
    #[serde(default = "default_min_term_len")]
    pub min_term_len: usize,

    /// Fuzzy matching only runs for terms at least this long
    #[serde(default = "default_fuzzy_min_term_len")]
    pub fuzzy_min_term_len: usize,

    /// Input debounce in milliseconds
    #[serde(default = "default_search_debounce_ms")]
    pub debounce_ms: u64,

    /// Parse queries like `joh3:16` as Bible references
    #[serde(default = "default_true")]
    pub bible_lookup: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            cache_capacity: default_cache_capacity(),
            min_term_len: default_min_term_len(),
            fuzzy_min_term_len: default_fuzzy_min_term_len(),
            debounce_ms: default_search_debounce_ms(),
            bible_lookup: true,
        }
    }
}

fn default_max_results() -> usize {
    12
}

fn default_cache_capacity() -> usize {
    50
}

fn default_min_term_len() -> usize {
    2
}

fn default_fuzzy_min_term_len() -> usize {
    4
}

fn default_search_debounce_ms() -> u64 {
    150
}

fn default_true() -> bool {
    true
}

/// External Bible reader link settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BibleConfig {
    /// Base URL of the reading service
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// Bible edition id on the service
    #[serde(default = "default_edition")]
    pub edition: u32,

    /// Translation code appended to verse links
    #[serde(default = "default_translation")]
    pub translation: String,
}

impl Default for BibleConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            edition: default_edition(),
            translation: default_translation(),
        }
    }
}

fn default_service_url() -> String {
    "https://www.bible.com/bible".to_string()
}

fn default_edition() -> u32 {
    3413
}

fn default_translation() -> String {
    "SRB16".to_string()
}

/// Order pricing (whole kronor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_unit_price")]
    pub unit_price: u64,

    #[serde(default = "default_shipping_fee")]
    pub shipping_fee: u64,

    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            unit_price: default_unit_price(),
            shipping_fee: default_shipping_fee(),
            currency: default_currency(),
        }
    }
}

fn default_unit_price() -> u64 {
    200
}

fn default_shipping_fee() -> u64 {
    49
}

fn default_currency() -> String {
    "kr".to_string()
}

/// Order form and session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfig {
    /// Prefix of generated order numbers
    #[serde(default = "default_order_prefix")]
    pub order_prefix: String,

    /// Number of steps in the checkout form
    #[serde(default = "default_max_step")]
    pub max_step: u8,

    /// Storage key prefix for persisted orders
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Storage key holding the most recent order number
    #[serde(default = "default_last_order_key")]
    pub last_order_key: String,

    /// Product name used in order emails
    #[serde(default = "default_product_name")]
    pub product_name: String,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            order_prefix: default_order_prefix(),
            max_step: default_max_step(),
            key_prefix: default_key_prefix(),
            last_order_key: default_last_order_key(),
            product_name: default_product_name(),
        }
    }
}

fn default_order_prefix() -> String {
    "SRB".to_string()
}

fn default_max_step() -> u8 {
    3
}

fn default_key_prefix() -> String {
    "order_".to_string()
}

fn default_last_order_key() -> String {
    "lastOrderNumber".to_string()
}

fn default_product_name() -> String {
    "Svenska Reformationsbibeln".to_string()
}

/// Variant browser settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantsConfig {
    /// Filter input debounce in milliseconds
    #[serde(default = "default_variants_debounce_ms")]
    pub debounce_ms: u64,

    /// Parallel translation id used by the comparison link
    #[serde(default = "default_parallel_edition")]
    pub parallel_edition: u32,
}

impl Default for VariantsConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_variants_debounce_ms(),
            parallel_edition: default_parallel_edition(),
        }
    }
}

fn default_variants_debounce_ms() -> u64 {
    300
}

fn default_parallel_edition() -> u32 {
    154
}
