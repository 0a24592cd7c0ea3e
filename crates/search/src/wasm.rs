//! WASM bindings for the site search.

use crate::{HitKind, SearchContext};
use srb_core::config::ConfigSchema;
use wasm_bindgen::prelude::*;

/// Search context owned by the page script.
#[wasm_bindgen]
pub struct WebsiteSearch {
    context: SearchContext,
}

#[wasm_bindgen]
impl WebsiteSearch {
    /// Build from a JSON array of page records.
    ///
    /// Falls back to the built-in records when the JSON is empty or invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(records_json: &str) -> WebsiteSearch {
        let schema = ConfigSchema::default();
        let context = if records_json.trim().is_empty() {
            SearchContext::with_fallback()
        } else {
            match SearchContext::from_json(&schema, records_json) {
                Ok(context) => context,
                Err(e) => {
                    tracing::warn!(error = %e, "search data rejected, using fallback records");
                    SearchContext::with_fallback()
                }
            }
        };
        WebsiteSearch { context }
    }

    /// Run a query and return the hits as a JSON array.
    pub fn search(&mut self, query: &str) -> String {
        let hits = self.context.search(query);
        serde_json::to_string(&hits).unwrap_or_else(|_| "[]".to_string())
    }

    /// Search counters as a JSON object.
    pub fn stats(&self) -> String {
        serde_json::to_string(&self.context.stats()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Input debounce in milliseconds.
    #[wasm_bindgen(js_name = debounceMs)]
    pub fn debounce_ms(&self) -> u32 {
        u32::try_from(self.context.debounce().as_millis()).unwrap_or(u32::MAX)
    }

    /// Drop cached results.
    #[wasm_bindgen(js_name = clearCache)]
    pub fn clear_cache(&mut self) {
        self.context.clear_cache();
    }
}

/// Parse a Bible reference; returns JSON or `null`.
#[wasm_bindgen]
pub fn parse_bible_reference(query: &str) -> String {
    crate::parse_bible_reference(query)
        .and_then(|reference| serde_json::to_string(&reference).ok())
        .unwrap_or_else(|| "null".to_string())
}

/// Normalize text the way records and queries are normalized.
#[wasm_bindgen]
pub fn normalize(text: &str) -> String {
    crate::normalize_text(text)
}

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Link label for a result url.
#[wasm_bindgen]
pub fn format_url(url: &str, is_bible: bool) -> String {
    let kind = if is_bible { HitKind::Bible } else { HitKind::Website };
    crate::display_url(url, kind)
}
