//! Owned search state: index, result cache and settings.

use crate::bible::parse_bible_reference;
use crate::cache::QueryCache;
use crate::error::Result;
use crate::index::{SearchIndex, SearchRecord};
use crate::relevance::ParsedQuery;
use crate::SearchHit;
use serde::Serialize;
use srb_core::config::{BibleConfig, ConfigSchema, SearchConfig};
use std::time::Duration;
use tracing::debug;

/// Counters exposed to the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    pub total_entries: usize,
    pub cache_size: usize,
    pub last_result_count: usize,
    pub bible_search_enabled: bool,
}

/// Site search over one dataset.
///
/// The caller owns the context; `search` takes `&mut self` because it fills
/// the result cache.
#[derive(Debug, Clone)]
pub struct SearchContext {
    index: SearchIndex,
    cache: QueryCache<Vec<SearchHit>>,
    config: SearchConfig,
    bible: BibleConfig,
    last_result_count: usize,
}

impl SearchContext {
    /// Create a context over an index.
    pub fn new(index: SearchIndex, config: SearchConfig, bible: BibleConfig) -> Self {
        Self {
            cache: QueryCache::new(config.cache_capacity),
            index,
            config,
            bible,
            last_result_count: 0,
        }
    }

    /// Create a context from configuration and records.
    pub fn from_config(schema: &ConfigSchema, records: Vec<SearchRecord>) -> Self {
        Self::new(
            SearchIndex::new(records),
            schema.search.clone(),
            schema.bible.clone(),
        )
    }

    /// Create a context from a JSON array of records.
    pub fn from_json(schema: &ConfigSchema, json: &str) -> Result<Self> {
        let index = SearchIndex::from_json(json)?;
        Ok(Self::new(index, schema.search.clone(), schema.bible.clone()))
    }

    /// Context over the built-in fallback records with default settings.
    pub fn with_fallback() -> Self {
        Self::new(
            SearchIndex::fallback(),
            SearchConfig::default(),
            BibleConfig::default(),
        )
    }

    /// Run a query.
    ///
    /// A blank query returns no hits. Otherwise a Bible reference hit, if the
    /// query parses as one, comes first, followed by the ranked website hits.
    /// Results are cached by the trimmed, lowercased query.
    pub fn search(&mut self, query: &str) -> Vec<SearchHit> {
        let query = query.trim();
        if query.is_empty() {
            self.last_result_count = 0;
            return Vec::new();
        }

        let key = query.to_lowercase();
        if let Some(hits) = self.cache.get(&key) {
            debug!(query = %key, results = hits.len(), "search cache hit");
            self.last_result_count = hits.len();
            return hits.clone();
        }

        let mut hits = Vec::new();

        if self.config.bible_lookup {
            if let Some(reference) = parse_bible_reference(query) {
                debug!(
                    book = reference.book.name,
                    chapter = reference.chapter,
                    "bible reference recognized"
                );
                hits.push(SearchHit::bible(&reference, &self.bible));
            }
        }

        let parsed = ParsedQuery::parse(query, self.config.min_term_len);
        hits.extend(self.index.search(&parsed, &self.config));

        debug!(query = %key, results = hits.len(), "search completed");

        for evicted in self.cache.insert(key, hits.clone()) {
            debug!(query = %evicted, "evicted cached search");
        }
        self.last_result_count = hits.len();

        hits
    }

    /// Current counters.
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            total_entries: self.index.len(),
            cache_size: self.cache.len(),
            last_result_count: self.last_result_count,
            bible_search_enabled: self.config.bible_lookup,
        }
    }

    /// Drop all cached results.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// The indexed dataset.
    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Quiet period the host waits after input before calling `search`.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.config.debounce_ms)
    }

    /// Active search settings.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::with_fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HitKind;

    #[test]
    fn test_blank_query_is_empty() {
        let mut ctx = SearchContext::with_fallback();
        assert!(ctx.search("").is_empty());
        assert!(ctx.search("   ").is_empty());
        assert_eq!(ctx.stats().cache_size, 0);
    }

    #[test]
    fn test_bible_hit_first() {
        let mut ctx = SearchContext::with_fallback();
        let hits = ctx.search("joh3:16");
        assert_eq!(hits[0].kind, HitKind::Bible);
        assert_eq!(hits[0].url, "https://www.bible.com/bible/3413/JHN.3.16.SRB16");
        assert_eq!(hits[0].score, 1000);
    }

    #[test]
    fn test_bible_lookup_disabled() {
        let mut schema = ConfigSchema::default();
        schema.search.bible_lookup = false;
        let mut ctx = SearchContext::from_config(&schema, crate::fallback_records());
        assert!(ctx.search("joh3:16").iter().all(|h| h.kind == HitKind::Website));
        assert!(!ctx.stats().bible_search_enabled);
    }

    #[test]
    fn test_cache_keyed_case_insensitively() {
        let mut ctx = SearchContext::with_fallback();
        let first = ctx.search("Bibel");
        let second = ctx.search("  bibel ");
        assert_eq!(first, second);
        assert_eq!(ctx.stats().cache_size, 1);
    }

    #[test]
    fn test_cache_capacity() {
        let mut schema = ConfigSchema::default();
        schema.search.cache_capacity = 2;
        let mut ctx = SearchContext::from_config(&schema, crate::fallback_records());
        ctx.search("hem");
        ctx.search("svar");
        ctx.search("bibel");
        assert_eq!(ctx.stats().cache_size, 2);

        ctx.clear_cache();
        assert_eq!(ctx.stats().cache_size, 0);
    }

    #[test]
    fn test_stats() {
        let mut ctx = SearchContext::with_fallback();
        let hits = ctx.search("reformationsbibeln");
        let stats = ctx.stats();
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.last_result_count, hits.len());
        assert!(stats.last_result_count > 0);
        assert!(stats.bible_search_enabled);
    }

    #[test]
    fn test_debounce_from_config() {
        assert_eq!(SearchContext::with_fallback().debounce(), Duration::from_millis(150));

        let mut schema = ConfigSchema::default();
        schema.search.debounce_ms = 400;
        let ctx = SearchContext::from_config(&schema, crate::fallback_records());
        assert_eq!(ctx.debounce(), Duration::from_millis(400));
    }

    #[test]
    fn test_from_json() {
        let json = r##"[{"title": "Kontakt", "description": "Skriv till oss",
                         "url": "#kontakt", "icon": "fas fa-envelope", "keywords": ["e-post"]}]"##;
        let mut ctx = SearchContext::from_json(&ConfigSchema::default(), json).unwrap();
        let hits = ctx.search("kontakt");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].highlighted_title, "<mark>Kontakt</mark>");
        assert!(hits[0].is_anchor());
    }

    #[test]
    fn test_unmatched_query() {
        let mut ctx = SearchContext::with_fallback();
        assert!(ctx.search("zzzz qqqq").is_empty());
        assert_eq!(ctx.stats().last_result_count, 0);
    }
}
