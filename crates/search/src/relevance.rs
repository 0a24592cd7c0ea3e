//! Relevance scoring for website search results.

use crate::fuzzy::count_fuzzy_matches;
use crate::index::IndexedRecord;
use crate::normalize::normalize_text;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Points awarded per matching signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Signal {
    /// Near-miss token (one edit away)
    FuzzyToken = 1,
    /// Each occurrence in the description
    DescriptionOccurrence = 3,
    /// Per matching term when several terms match
    MultiTerm = 5,
    /// Each keyword containing, or contained in, the term
    PartialKeyword = 8,
    /// Title contains the term
    TitleContains = 15,
    /// A keyword equals the term
    ExactKeyword = 20,
    /// Title equals the term
    ExactTitle = 25,
    /// Whole query found verbatim
    Phrase = 30,
}

impl Signal {
    /// Point value of the signal
    pub fn points(self) -> u32 {
        self as u32
    }
}

/// Phrase bonus only applies to normalized queries longer than this.
const PHRASE_MIN_LEN: usize = 5;

/// Per-record breakdown of what matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    pub title_matches: u32,
    pub keyword_matches: u32,
    pub description_matches: u32,
    pub exact_matches: u32,
    pub partial_matches: u32,
}

/// A query prepared for scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Normalized query text
    pub normalized: String,
    /// Normalized terms long enough to score
    pub terms: Vec<String>,
}

impl ParsedQuery {
    /// Normalize `query` and keep the terms with at least `min_term_len`
    /// characters.
    pub fn parse(query: &str, min_term_len: usize) -> Self {
        let normalized = normalize_text(query);
        let terms = normalized
            .split_whitespace()
            .filter(|term| term.chars().count() >= min_term_len)
            .map(String::from)
            .collect();

        Self { normalized, terms }
    }

    /// True when no term survived filtering.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Score one record against a parsed query.
///
/// All signals are additive. Fuzzy matching only runs for terms of at least
/// `fuzzy_min_term_len` characters.
///
/// # Returns
/// Total score (0 means no match) and the match breakdown
pub fn score_record(
    record: &IndexedRecord,
    query: &ParsedQuery,
    fuzzy_min_term_len: usize,
) -> (u32, MatchDetails) {
    let mut score = 0u32;
    let mut details = MatchDetails::default();

    for term in &query.terms {
        let term = term.as_str();

        if record.title == term {
            score += Signal::ExactTitle.points();
            details.exact_matches += 1;
        } else if record.title.contains(term) {
            score += Signal::TitleContains.points();
            details.title_matches += 1;
        }

        if record.keywords.iter().any(|keyword| keyword == term) {
            score += Signal::ExactKeyword.points();
            details.exact_matches += 1;
        } else {
            let partial = record
                .keywords
                .iter()
                .filter(|keyword| keyword.contains(term) || term.contains(keyword.as_str()))
                .count() as u32;
            score += partial * Signal::PartialKeyword.points();
            details.keyword_matches += partial;
        }

        let occurrences = record.description.matches(term).count() as u32;
        score += occurrences * Signal::DescriptionOccurrence.points();
        details.description_matches += occurrences;

        if term.chars().count() >= fuzzy_min_term_len {
            let fuzzy = count_fuzzy_matches(term, &record.all) as u32;
            score += fuzzy * Signal::FuzzyToken.points();
            details.partial_matches += fuzzy;
        }
    }

    // repeated terms count once toward the cross-term bonus
    let matching_terms = query
        .terms
        .iter()
        .map(String::as_str)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .filter(|term| record.all.contains(term))
        .count() as u32;
    if matching_terms > 1 {
        score += matching_terms * Signal::MultiTerm.points();
    }

    if query.normalized.len() > PHRASE_MIN_LEN && record.all.contains(&query.normalized) {
        score += Signal::Phrase.points();
    }

    (score, details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{IndexedRecord, SearchRecord};

    fn record(title: &str, description: &str, keywords: &[&str]) -> IndexedRecord {
        IndexedRecord::new(
            SearchRecord {
                title: title.to_string(),
                description: description.to_string(),
                url: "#test".to_string(),
                icon: "fas fa-book".to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            },
            0,
        )
    }

    fn score(record: &IndexedRecord, query: &str) -> (u32, MatchDetails) {
        score_record(record, &ParsedQuery::parse(query, 2), 4)
    }

    #[test]
    fn test_parse_drops_short_terms() {
        let q = ParsedQuery::parse("a Bibel i tiden", 2);
        assert_eq!(q.terms, vec!["bibel", "tiden"]);
        assert_eq!(q.normalized, "a bibel i tiden");
        assert!(ParsedQuery::parse("x", 2).is_empty());
    }

    #[test]
    fn test_exact_title() {
        let r = record("Kontakt", "", &[]);
        let (s, d) = score(&r, "kontakt");
        // exact title 25 + fuzzy self-match 1 + phrase 30
        assert_eq!(s, 56);
        assert_eq!(d.exact_matches, 1);
        assert_eq!(d.partial_matches, 1);
    }

    #[test]
    fn test_title_contains() {
        let r = record("Om Oss", "", &[]);
        let (s, d) = score(&r, "om");
        assert_eq!(s, 15);
        assert_eq!(d.title_matches, 1);
    }

    #[test]
    fn test_exact_keyword_excludes_partial() {
        let r = record("X", "", &["hem", "hemsida"]);
        let (s, d) = score(&r, "hem");
        assert_eq!(s, 20);
        assert_eq!(d.exact_matches, 1);
        assert_eq!(d.keyword_matches, 0);
    }

    #[test]
    fn test_partial_keywords_both_directions() {
        let r = record("X", "", &["bibelsallskap", "bi"]);
        // "bibel" is contained in the first keyword and contains the second
        let (s, d) = score(&r, "bibel");
        assert_eq!(d.keyword_matches, 2);
        assert_eq!(s, 16);
    }

    #[test]
    fn test_description_occurrences() {
        let r = record("X", "Bibel och bibel och bibeln", &[]);
        let (_, d) = score(&r, "bibel");
        assert_eq!(d.description_matches, 3);
    }

    #[test]
    fn test_multi_term_and_phrase_bonus() {
        let r = record("Svenska Reformationsbibeln", "", &[]);
        let (s, _) = score(&r, "svenska reformationsbibeln");
        // title contains x2 = 30, fuzzy self-match x2 = 2, multi-term 2*5 = 10, phrase 30
        assert_eq!(s, 72);
    }

    #[test]
    fn test_repeated_term_gets_no_multi_term_bonus() {
        let r = record("X", "om bibel", &[]);
        let (once, _) = score(&r, "bibel");
        let (twice, d) = score(&r, "bibel bibel");
        // description 3 + fuzzy 1, counted per term, no cross-term bonus
        assert_eq!(once, 4);
        assert_eq!(twice, 2 * once);
        assert_eq!(d.description_matches, 2);
    }

    #[test]
    fn test_no_match_scores_zero() {
        let r = record("Kontakt", "Kontakta oss", &["mail"]);
        assert_eq!(score(&r, "psaltaren").0, 0);
    }

    #[test]
    fn test_title_beats_description() {
        let title = record("Resurser", "", &[]);
        let description = record("Material", "Alla resurser samlade", &[]);
        assert!(score(&title, "resurser").0 > score(&description, "resurser").0);
    }
}
