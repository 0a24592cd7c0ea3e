//! Textual variant browser for Svenska Reformationsbibeln.
//!
//! Variants annotate where the Textus Receptus and the critical text
//! differ. This crate loads them, filters by category and search term,
//! builds reader links for their verses and renders the page fragments.
//!
//! # Example
//!
//! ```
//! use srb_variants::{verse_link, Category, CategoryFilter, VariantBrowser};
//!
//! let json = r#"[{"verse": "Joh 3:16", "tr_text": "sin enfödde Son",
//!                 "un_text": "den ende Sonen", "impact": "Kristologi", "category": "john"}]"#;
//! let mut browser = VariantBrowser::from_json(json, &Default::default()).unwrap();
//! browser.set_category(CategoryFilter::One(Category::John));
//! assert_eq!(browser.visible().len(), 1);
//!
//! assert_eq!(
//!     verse_link("Joh 3:16").as_deref(),
//!     Some("https://www.bible.com/bible/3413/jhn.3.16")
//! );
//! ```

mod browser;
mod category;
mod error;
mod filter;
mod links;
pub mod render;
mod variant;

pub use browser::VariantBrowser;
pub use category::Category;
pub use error::{Result, VariantError};
pub use filter::{group_by_category, CategoryFilter, CategoryGroup, VariantFilter};
pub use links::{verse_link, VerseLinker};
pub use variant::{load_variants, Variant};
