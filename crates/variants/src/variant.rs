//! Variant annotations and dataset loading.

use crate::category::Category;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One annotated difference between the Textus Receptus and the critical
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Reference such as `Joh 3:16` or `1 Kor 11:24-25`
    pub verse: String,
    /// Excerpt of the Textus Receptus reading
    pub tr_text: String,
    /// Reading of the critical (UN) text
    pub un_text: String,
    /// Theological impact of the difference
    pub impact: String,
    pub category: Category,
}

impl Variant {
    /// Whether any text field contains `term`.
    ///
    /// `term` must already be lowercase.
    pub fn contains_term(&self, term: &str) -> bool {
        [&self.verse, &self.tr_text, &self.un_text, &self.impact]
            .iter()
            .any(|field| field.to_lowercase().contains(term))
    }
}

/// Parse the variant dataset from a JSON array.
pub fn load_variants(json: &str) -> Result<Vec<Variant>> {
    let variants: Vec<Variant> = serde_json::from_str(json)?;
    debug!(count = variants.len(), "variants loaded");
    Ok(variants)
}
