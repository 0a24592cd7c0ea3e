//! Searchable page descriptors and the in-memory index over them.

use crate::error::{Result, SearchError};
use crate::highlight::Highlighter;
use crate::normalize::normalize_text;
use crate::relevance::{score_record, MatchDetails, ParsedQuery};
use crate::SearchHit;
use serde::{Deserialize, Serialize};
use srb_core::config::SearchConfig;

/// A page or resource that can be found through site search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub title: String,
    pub description: String,
    /// In-page anchor (`#kontakt`) or absolute URL
    pub url: String,
    /// Icon class passed through to the renderer
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A record with its normalized search fields computed once at load time.
#[derive(Debug, Clone)]
pub struct IndexedRecord {
    /// The record as loaded
    pub record: SearchRecord,
    /// Normalized title
    pub title: String,
    /// Normalized description
    pub description: String,
    /// Normalized keywords, empty ones dropped
    pub keywords: Vec<String>,
    /// Title, description and keywords joined by spaces
    pub all: String,
    /// Position in the loaded list
    pub position: usize,
}

impl IndexedRecord {
    /// Normalize a record's searchable fields.
    pub fn new(record: SearchRecord, position: usize) -> Self {
        let title = normalize_text(&record.title);
        let description = normalize_text(&record.description);
        let keywords: Vec<String> = record
            .keywords
            .iter()
            .map(|keyword| normalize_text(keyword))
            .filter(|keyword| !keyword.is_empty())
            .collect();

        let mut parts = Vec::with_capacity(keywords.len() + 2);
        parts.push(title.as_str());
        parts.push(description.as_str());
        parts.extend(keywords.iter().map(String::as_str));
        let all = parts.join(" ");

        Self {
            record,
            title,
            description,
            keywords,
            all,
            position,
        }
    }
}

/// Immutable index over the site's page descriptors.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    records: Vec<IndexedRecord>,
}

impl SearchIndex {
    /// Index a list of records.
    pub fn new(records: Vec<SearchRecord>) -> Self {
        let records = records
            .into_iter()
            .enumerate()
            .map(|(position, record)| IndexedRecord::new(record, position))
            .collect();
        Self { records }
    }

    /// Parse a JSON array of records and index it.
    ///
    /// Every record needs a non-blank title and url.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<SearchRecord> = serde_json::from_str(json)?;

        for (index, record) in records.iter().enumerate() {
            if record.title.trim().is_empty() {
                return Err(SearchError::InvalidRecord {
                    index,
                    reason: "empty title".to_string(),
                });
            }
            if record.url.trim().is_empty() {
                return Err(SearchError::InvalidRecord {
                    index,
                    reason: "empty url".to_string(),
                });
            }
        }

        Ok(Self::new(records))
    }

    /// Index the built-in fallback records.
    pub fn fallback() -> Self {
        Self::new(fallback_records())
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Indexed records in load order.
    pub fn records(&self) -> &[IndexedRecord] {
        &self.records
    }

    /// Score every record and return the best website hits.
    ///
    /// Hits are ordered by score, then by exact-match count, both
    /// descending; ties keep load order. At most `config.max_results` hits
    /// are returned.
    pub fn search(&self, query: &ParsedQuery, config: &SearchConfig) -> Vec<SearchHit> {
        if query.is_empty() {
            return Vec::new();
        }

        let fuzzy_min = config.fuzzy_min_term_len;
        let score = |record: &IndexedRecord| -> Option<(usize, u32, MatchDetails)> {
            let (score, details) = score_record(record, query, fuzzy_min);
            (score > 0).then_some((record.position, score, details))
        };

        #[cfg(feature = "parallel")]
        let mut scored: Vec<(usize, u32, MatchDetails)> = {
            use rayon::prelude::*;
            self.records.par_iter().filter_map(score).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let mut scored: Vec<(usize, u32, MatchDetails)> =
            self.records.iter().filter_map(score).collect();

        scored.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then(b.2.exact_matches.cmp(&a.2.exact_matches))
        });
        scored.truncate(config.max_results);

        let highlighter = Highlighter::new(&query.terms);
        scored
            .into_iter()
            .map(|(position, score, details)| {
                SearchHit::website(&self.records[position].record, score, details, &highlighter)
            })
            .collect()
    }
}

/// Minimal dataset used when the host page provides none.
pub fn fallback_records() -> Vec<SearchRecord> {
    fn record(title: &str, description: &str, url: &str, icon: &str, keywords: &[&str]) -> SearchRecord {
        SearchRecord {
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    vec![
        record(
            "Svenska Reformationsbibeln - Hem",
            "En Bibel i Tiden. Reformationsbibeln är en modern svensk översättning av Karl XII:s Bibel från 1703.",
            "#hem",
            "fas fa-home",
            &["hem", "reformationsbibeln", "karl xii", "textus receptus", "bibel"],
        ),
        record(
            "Digital Bibelläsare",
            "Läs Svenska Reformationsbibeln online med sökfunktion.",
            "https://bibelonline.se/biblereader.php",
            "fas fa-book-open",
            &["läs", "online", "digital", "bibelläsare", "bibel"],
        ),
        record(
            "Frågor & Svar",
            "Vanliga frågor och svar om Reformationsbibeln.",
            "QnA.html",
            "fas fa-question-circle",
            &["frågor", "svar", "q&a", "grundtext"],
        ),
    ]
}
