//! Configuration loading and schema definitions
//!
//! Shared configuration types used by the search, order and variant crates.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
