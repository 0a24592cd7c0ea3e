//! Reader links for variant verse references.

use once_cell::sync::Lazy;
use regex::Regex;
use srb_core::config::{BibleConfig, VariantsConfig};
use std::collections::HashMap;

/// Swedish book abbreviation to reading-service book code.
static BOOK_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Matt", "mat"),
        ("Mark", "mrk"),
        ("Luk", "luk"),
        ("Joh", "jhn"),
        ("Apg", "act"),
        ("Rom", "rom"),
        ("1 Kor", "1co"),
        ("2 Kor", "2co"),
        ("Gal", "gal"),
        ("Ef", "eph"),
        ("Fil", "php"),
        ("Kol", "col"),
        ("1 Thess", "1th"),
        ("2 Thess", "2th"),
        ("1 Tim", "1ti"),
        ("2 Tim", "2ti"),
        ("Tit", "tit"),
        ("Filem", "phm"),
        ("Hebr", "heb"),
        ("Jak", "jas"),
        ("1 Petr", "1pe"),
        ("2 Petr", "2pe"),
        ("1 Joh", "1jn"),
        ("2 Joh", "2jn"),
        ("3 Joh", "3jn"),
        ("Jud", "jud"),
        ("Upp", "rev"),
    ])
});

// `<book> <chapter>:<verse>[-<end>]`, book may contain spaces
static VERSE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\s+([0-9]+):([0-9]+)(?:-([0-9]+))?$").expect("verse pattern is valid")
});

/// Builds reader links for verse strings like `Joh 3:16`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseLinker {
    base: String,
    parallel_edition: u32,
}

impl Default for VerseLinker {
    fn default() -> Self {
        Self::new(&BibleConfig::default(), &VariantsConfig::default())
    }
}

impl VerseLinker {
    pub fn new(bible: &BibleConfig, variants: &VariantsConfig) -> Self {
        Self {
            base: format!("{}/{}", bible.service_url.trim_end_matches('/'), bible.edition),
            parallel_edition: variants.parallel_edition,
        }
    }

    /// Link to the first verse, or `None` when the book is unknown or the
    /// reference cannot be parsed.
    pub fn link(&self, verse: &str) -> Option<String> {
        let caps = VERSE_PATTERN.captures(verse.trim())?;
        let code = BOOK_CODES.get(&caps[1])?;
        Some(format!("{}/{}.{}.{}", self.base, code, &caps[2], &caps[3]))
    }

    /// Link opening the verse side by side with the parallel translation.
    pub fn parallel_link(&self, verse: &str) -> Option<String> {
        self.link(verse)
            .map(|url| format!("{}?parallel={}", url, self.parallel_edition))
    }
}

/// [`VerseLinker::link`] with default settings.
pub fn verse_link(verse: &str) -> Option<String> {
    VerseLinker::default().link(verse)
}
