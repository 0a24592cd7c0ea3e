//! In-progress order and checkout step navigation.

use crate::error::{OrderError, Result};
use crate::order_number::OrderNumberGenerator;
use crate::pricing::Pricing;
use crate::validation::FormData;
use serde::{Deserialize, Serialize};
use srb_core::config::OrderConfig;

const FIRST_STEP: u8 = 1;

fn default_max_step() -> u8 {
    3
}

fn default_quantity() -> u32 {
    1
}

fn default_step() -> u8 {
    FIRST_STEP
}

/// State of one order as the checkout form fills it in.
///
/// `current_step` stays within `1..=max_step`. The step count is a form
/// setting and is not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderState {
    pub order_number: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default = "default_step")]
    pub current_step: u8,
    #[serde(default)]
    pub form_data: FormData,
    pub total_amount: Option<u64>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(skip, default = "default_max_step")]
    max_step: u8,
}

impl Default for OrderState {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderState {
    /// Fresh order: one copy, first step, nothing filled in.
    pub fn new() -> Self {
        Self {
            order_number: None,
            quantity: default_quantity(),
            current_step: FIRST_STEP,
            form_data: FormData::default(),
            total_amount: None,
            session_id: None,
            max_step: default_max_step(),
        }
    }

    /// Fresh order for a form configured by `config`.
    pub fn from_config(config: &OrderConfig) -> Self {
        Self::new().with_max_step(config.max_step)
    }

    /// Use a form with `max_step` steps (at least one).
    pub fn with_max_step(mut self, max_step: u8) -> Self {
        self.max_step = max_step.max(FIRST_STEP);
        self.current_step = self.current_step.clamp(FIRST_STEP, self.max_step);
        self
    }

    pub fn max_step(&self) -> u8 {
        self.max_step
    }

    /// Advance one step, staying on the last step.
    pub fn next_step(&mut self) -> u8 {
        self.current_step = (self.current_step.saturating_add(1)).min(self.max_step);
        self.current_step
    }

    /// Go back one step, staying on the first step.
    pub fn previous_step(&mut self) -> u8 {
        self.current_step = self.current_step.saturating_sub(1).max(FIRST_STEP);
        self.current_step
    }

    /// Jump to a step.
    pub fn set_step(&mut self, step: u8) -> Result<()> {
        if !(FIRST_STEP..=self.max_step).contains(&step) {
            return Err(OrderError::InvalidStep {
                step,
                max: self.max_step,
            });
        }
        self.current_step = step;
        Ok(())
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == self.max_step
    }

    /// Change the quantity and recompute the total.
    pub fn set_quantity(&mut self, quantity: u32, pricing: &Pricing) {
        self.quantity = quantity;
        self.total_amount = Some(pricing.total(quantity));
    }

    /// The order number, generating one first if the order has none.
    pub fn ensure_order_number(&mut self, generator: &OrderNumberGenerator) -> &str {
        self.order_number.get_or_insert_with(|| generator.generate())
    }
}
