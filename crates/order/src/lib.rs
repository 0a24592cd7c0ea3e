//! Order form logic for Svenska Reformationsbibeln.
//!
//! This crate provides:
//! - Pricing (`quantity * unit price + shipping`)
//! - Fail-fast validation of the contact and address form
//! - Order number generation
//! - Order sessions persisted in a key-value store
//! - Composition of the confirmation email
//!
//! # Example
//!
//! ```
//! use srb_order::{calculate_total, MemoryStore, OrderState, Pricing, SessionStore};
//!
//! assert_eq!(calculate_total(1), 249);
//!
//! let mut state = OrderState::new();
//! state.order_number = Some("SRB-TEST-001".to_string());
//! state.set_quantity(2, &Pricing::default());
//!
//! let mut sessions = SessionStore::new(MemoryStore::new());
//! sessions.save(&state).unwrap();
//! assert_eq!(sessions.load("SRB-TEST-001").unwrap().state.total_amount, Some(449));
//! ```

mod email;
mod error;
mod order_number;
mod pricing;
mod session;
mod state;
mod validation;

pub use email::{
    compose_order_email, Customer, Delivery, OrderConfirmation, OrderEmail, OrderItem, OrderPricing,
};
pub use error::{OrderError, Result};
pub use order_number::{to_base36, OrderNumberGenerator};
pub use pricing::{calculate_total, Pricing};
pub use session::{KeyValueStore, MemoryStore, OrderRecord, SessionStore};
pub use state::OrderState;
pub use validation::{validate_form_data, FormData, FormError};
