//! Core utilities for the srb-tools widgets
//!
//! This crate provides shared functionality used by the search, order and
//! variant crates:
//!
//! - **Error handling**: coded errors with context and recovery suggestions
//! - **Configuration**: TOML-based configuration with per-section defaults
//! - **Validation**: fluent, optionally fail-fast field validation
//! - **HTML**: escaping for rendered fragments
//! - **Debouncing**: cancel-then-reschedule delayed tasks (`debounce` feature)
//!
//! # Example
//!
//! ```rust,no_run
//! use srb_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! assert!(config.schema.search.max_results > 0);
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
#[cfg(feature = "debounce")]
pub mod debounce;
pub mod error;
pub mod html;
pub mod validation;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    #[cfg(feature = "debounce")]
    pub use crate::debounce::Debouncer;
    pub use crate::error::{Error, ErrorCode, Result, ResultExt};
    pub use crate::validation::{ValidationResult, Validator};
}
