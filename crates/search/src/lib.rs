//! Site search for the Svenska Reformationsbibeln website.
//!
//! This crate provides:
//! - Accent-folding text normalization
//! - Keyword, title and fuzzy relevance scoring
//! - Bible reference lookup (`joh3:16`) with direct reader links
//! - A bounded FIFO result cache and an owned [`SearchContext`]
//! - Match highlighting and the keyboard model of the search overlay
//!
//! # Example
//!
//! ```
//! use srb_search::{HitKind, SearchContext};
//!
//! let mut search = SearchContext::with_fallback();
//! let hits = search.search("joh3:16");
//! assert_eq!(hits[0].kind, HitKind::Bible);
//! assert_eq!(hits[0].title, "Johannes 3:16");
//! ```

mod bible;
mod cache;
mod context;
mod error;
mod fuzzy;
mod highlight;
mod index;
mod normalize;
mod overlay;
mod relevance;

#[cfg(feature = "wasm")]
mod wasm;

pub use bible::{
    book_by_number, find_book, parse_bible_reference, BibleBook, BibleReference, BIBLE_BOOKS,
    BIBLE_REFERENCE_SCORE,
};
pub use cache::QueryCache;
pub use context::{SearchContext, SearchStats};
pub use error::{Result, SearchError};
pub use fuzzy::{count_fuzzy_matches, levenshtein_distance};
pub use highlight::{highlight_matches, Highlighter};
pub use index::{fallback_records, IndexedRecord, SearchIndex, SearchRecord};
pub use normalize::normalize_text;
pub use overlay::{
    display_url, Activation, Key, KeyEvent, Notice, NoticeKind, OverlayEvent, SearchOverlay,
    OPEN_FEATURES,
};
pub use relevance::{score_record, MatchDetails, ParsedQuery, Signal};

use serde::{Deserialize, Serialize};
use srb_core::config::BibleConfig;

/// Where a hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    /// A page or section of the site
    Website,
    /// A passage in the external Bible reader
    Bible,
}

/// A ranked search result ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub title: String,
    pub description: String,
    pub url: String,
    pub icon: String,
    /// Relevance score (higher is better)
    pub score: u32,
    pub kind: HitKind,
    pub details: MatchDetails,
    /// Title as HTML with query matches in `<mark>`
    pub highlighted_title: String,
    /// Description as HTML with query matches in `<mark>`
    pub highlighted_description: String,
}

impl SearchHit {
    /// Build a website hit, highlighting title and description.
    pub fn website(
        record: &SearchRecord,
        score: u32,
        details: MatchDetails,
        highlighter: &Highlighter,
    ) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            url: record.url.clone(),
            icon: record.icon.clone(),
            score,
            kind: HitKind::Website,
            details,
            highlighted_title: highlighter.highlight(&record.title),
            highlighted_description: highlighter.highlight(&record.description),
        }
    }

    /// Build the hit for a parsed Bible reference.
    pub fn bible(reference: &BibleReference, config: &BibleConfig) -> Self {
        let title = reference.display_name();
        let description = format!("Läs {} i Svenska Reformationsbibeln", title);

        Self {
            url: reference.url(config),
            icon: "fas fa-bible".to_string(),
            score: BIBLE_REFERENCE_SCORE,
            kind: HitKind::Bible,
            details: MatchDetails::default(),
            highlighted_title: srb_core::html::escape_html(&title),
            highlighted_description: srb_core::html::escape_html(&description),
            title,
            description,
        }
    }

    /// Whether activating this hit stays on the current page.
    pub fn is_anchor(&self) -> bool {
        self.url.starts_with('#')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bible_hit_fields() {
        let reference = parse_bible_reference("mat1:17-20").unwrap();
        let hit = SearchHit::bible(&reference, &BibleConfig::default());
        assert_eq!(hit.title, "Matteus 1:17-20");
        assert_eq!(hit.description, "Läs Matteus 1:17-20 i Svenska Reformationsbibeln");
        assert_eq!(hit.url, "https://www.bible.com/bible/3413/MAT.1.17.SRB16");
        assert_eq!(hit.icon, "fas fa-bible");
        assert_eq!(hit.score, 1000);
        assert!(!hit.is_anchor());
    }

    #[test]
    fn test_hit_serializes_camel_case() {
        let reference = parse_bible_reference("rom8").unwrap();
        let hit = SearchHit::bible(&reference, &BibleConfig::default());
        let json = serde_json::to_value(&hit).unwrap();
        assert_eq!(json["kind"], "bible");
        assert!(json.get("highlightedTitle").is_some());
        assert_eq!(json["details"]["exactMatches"], 0);
    }
}
