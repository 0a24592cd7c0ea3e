//! Order number generation.
//!
//! Format: `{PREFIX}-{YYMMDD}-{HHMM}-{RANDOM}-{MILLIS}` where `RANDOM` is six
//! characters from `A-Z0-9` and `MILLIS` is the epoch milliseconds in
//! uppercase base 36, e.g. `SRB-250307-0905-K3Q9ZD-M7XK2P1C`. Numbers are
//! unique with high probability, not guaranteed.

use chrono::{DateTime, Local, TimeZone};
use rand::Rng;
use srb_core::config::OrderConfig;
use std::fmt::Display;

const RANDOM_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const RANDOM_LEN: usize = 6;

/// Generates order numbers from the local clock and a random segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderNumberGenerator {
    prefix: String,
}

impl OrderNumberGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn from_config(config: &OrderConfig) -> Self {
        Self::new(config.order_prefix.clone())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// New order number for the current local time.
    pub fn generate(&self) -> String {
        self.generate_at(&Local::now(), &mut rand::rng())
    }

    /// Order number for a given instant and random source.
    pub fn generate_at<Tz, R>(&self, now: &DateTime<Tz>, rng: &mut R) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
        R: Rng + ?Sized,
    {
        let random: String = (0..RANDOM_LEN)
            .map(|_| RANDOM_ALPHABET[rng.random_range(0..RANDOM_ALPHABET.len())] as char)
            .collect();
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);

        format!(
            "{}-{}-{}-{}-{}",
            self.prefix,
            now.format("%y%m%d"),
            now.format("%H%M"),
            random,
            to_base36(millis)
        )
    }
}

impl Default for OrderNumberGenerator {
    fn default() -> Self {
        Self::from_config(&OrderConfig::default())
    }
}

/// Uppercase base-36 rendering of `value`.
pub fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
