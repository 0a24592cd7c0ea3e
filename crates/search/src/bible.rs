//! Bible reference lookup.
//!
//! Queries such as `joh3:16`, `Mat1:17-20` or `psalm23` are recognized as
//! references into the external Bible reader and turned into a direct link.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use srb_core::config::BibleConfig;
use std::collections::HashMap;

/// Fixed score of a Bible reference hit. It is a constant, not an upper
/// bound: website hits can score higher.
pub const BIBLE_REFERENCE_SCORE: u32 = 1000;

/// A book of the Bible known to the lookup table.
#[derive(Debug, Serialize)]
pub struct BibleBook {
    /// Canonical book number (Genesis = 1, Revelation = 66)
    pub number: u8,
    /// English name
    pub name: &'static str,
    /// Swedish name used in result titles
    pub swedish: &'static str,
    /// Accepted query spellings, lowercase
    pub abbreviations: &'static [&'static str],
    /// Book code used by the reading service
    pub code: &'static str,
}

macro_rules! book {
    ($number:expr, $name:expr, $swedish:expr, $code:expr, [$($abbrev:expr),+ $(,)?]) => {
        BibleBook {
            number: $number,
            name: $name,
            swedish: $swedish,
            abbreviations: &[$($abbrev),+],
            code: $code,
        }
    };
}

/// Books reachable from the search box.
pub static BIBLE_BOOKS: &[BibleBook] = &[
    book!(1, "Genesis", "Första Mosebok", "GEN", ["gen", "ge", "1mos", "1mo"]),
    book!(19, "Psalms", "Psaltaren", "PSA", ["psa", "ps", "psalm", "psalms", "psaltaren"]),
    book!(23, "Isaiah", "Jesaja", "ISA", ["isa", "isaiah", "jes", "jesaja"]),
    book!(40, "Matthew", "Matteus", "MAT", ["mat", "matt", "matthew"]),
    book!(41, "Mark", "Markus", "MRK", ["mrk", "mk", "mark", "mar", "markus"]),
    book!(42, "Luke", "Lukas", "LUK", ["luk", "lk", "luke", "lukas"]),
    book!(43, "John", "Johannes", "JHN", ["jhn", "jn", "john", "joh", "johannes"]),
    book!(44, "Acts", "Apostlagärningarna", "ACT", ["act", "acts", "apg", "apostla"]),
    book!(45, "Romans", "Romarbrevet", "ROM", ["rom", "romans", "romarbrevet"]),
    book!(46, "1 Corinthians", "Första Korinthierbrevet", "1CO", ["1co", "1cor", "1kor", "1korint"]),
    book!(47, "2 Corinthians", "Andra Korinthierbrevet", "2CO", ["2co", "2cor", "2kor", "2korint"]),
    book!(48, "Galatians", "Galaterbrevet", "GAL", ["gal", "galatians", "galaterbrevet"]),
    book!(49, "Ephesians", "Efesierbrevet", "EPH", ["eph", "ephesians", "ef", "efe"]),
    book!(50, "Philippians", "Filipperbrevet", "PHP", ["php", "phil", "fil", "filip"]),
    book!(51, "Colossians", "Kolosserbrevet", "COL", ["col", "colossians", "kol", "kolosser"]),
    book!(58, "Hebrews", "Hebreerbrevet", "HEB", ["heb", "hebrews", "hebr", "hebreerbrevet"]),
    book!(59, "James", "Jakobs brev", "JAS", ["jas", "jam", "james", "jak", "jakob"]),
    book!(60, "1 Peter", "Första Petrusbrevet", "1PE", ["1pe", "1pet", "1peter", "1petr"]),
    book!(61, "2 Peter", "Andra Petrusbrevet", "2PE", ["2pe", "2pet", "2peter", "2petr"]),
    book!(62, "1 John", "Första Johannesbrevet", "1JN", ["1jn", "1john", "1joh", "1johan"]),
    book!(63, "2 John", "Andra Johannesbrevet", "2JN", ["2jn", "2john", "2joh", "2johan"]),
    book!(64, "3 John", "Tredje Johannesbrevet", "3JN", ["3jn", "3john", "3joh", "3johan"]),
    book!(65, "Jude", "Judas brev", "JUD", ["jud", "jude", "judas"]),
    book!(66, "Revelation", "Uppenbarelseboken", "REV", ["rev", "revelation", "upp", "uppenb"]),
];

/// Book code used when a book has no code of its own.
const FALLBACK_CODE: &str = "MAT";

static BOOK_LOOKUP: Lazy<HashMap<&'static str, &'static BibleBook>> = Lazy::new(|| {
    BIBLE_BOOKS
        .iter()
        .flat_map(|book| book.abbreviations.iter().map(move |abbrev| (*abbrev, book)))
        .collect()
});

// Optional ordinal digit so numbered books (`1kor13`) are reachable.
static REFERENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([1-3]?[a-z]+)([0-9]+)(?::([0-9]+)(?:-([0-9]+))?)?$")
        .expect("reference pattern is valid")
});

/// Look up a book by one of its abbreviations (case-insensitive).
pub fn find_book(abbreviation: &str) -> Option<&'static BibleBook> {
    BOOK_LOOKUP.get(abbreviation.to_lowercase().as_str()).copied()
}

/// Look up a book by its canonical number.
pub fn book_by_number(number: u8) -> Option<&'static BibleBook> {
    BIBLE_BOOKS.iter().find(|book| book.number == number)
}

/// A parsed Bible reference.
///
/// The grammar requires a chapter, so only the verse and the end of a verse
/// range are optional.
#[derive(Debug, Clone, Serialize)]
pub struct BibleReference {
    /// The referenced book
    pub book: &'static BibleBook,
    /// Chapter number
    pub chapter: u32,
    /// First verse, if given
    pub verse: Option<u32>,
    /// Last verse of a range, if given
    pub end_verse: Option<u32>,
    /// The query as typed
    pub original_query: String,
}

impl BibleReference {
    /// Canonical book number of the referenced book.
    pub fn book_number(&self) -> u8 {
        self.book.number
    }

    /// Swedish display form, e.g. `Johannes 3:16` or `Matteus 1:17-20`.
    ///
    /// A zero chapter or verse ends the reference at that point.
    pub fn display_name(&self) -> String {
        let mut formatted = self.book.swedish.to_string();

        if self.chapter > 0 {
            formatted.push_str(&format!(" {}", self.chapter));
            if let Some(verse) = self.verse.filter(|v| *v > 0) {
                formatted.push_str(&format!(":{}", verse));
                if let Some(end) = self.end_verse.filter(|v| *v > 0) {
                    formatted.push_str(&format!("-{}", end));
                }
            }
        }

        formatted
    }

    /// Link into the reading service:
    /// `{service}/{edition}/{CODE}.{chapter}.{verse}.{translation}`.
    ///
    /// Verse ranges link to their first verse.
    pub fn url(&self, config: &BibleConfig) -> String {
        let code = if self.book.code.is_empty() { FALLBACK_CODE } else { self.book.code };
        let mut url = format!(
            "{}/{}/{}",
            config.service_url.trim_end_matches('/'),
            config.edition,
            code
        );

        if self.chapter > 0 {
            url.push_str(&format!(".{}", self.chapter));
            if let Some(verse) = self.verse.filter(|v| *v > 0) {
                url.push_str(&format!(".{}", verse));
            }
        }
        url.push('.');
        url.push_str(&config.translation);

        url
    }
}

/// Parse a query as a Bible reference.
///
/// Accepts `<book><chapter>[:<verse>[-<end-verse>]]` without spaces between
/// book and chapter, case-insensitive. Returns `None` when the pattern does
/// not match, the book abbreviation is unknown or a number does not fit.
///
/// # Example
/// ```
/// use srb_search::parse_bible_reference;
///
/// let reference = parse_bible_reference("joh3:16").unwrap();
/// assert_eq!(reference.book.name, "John");
/// assert_eq!(reference.chapter, 3);
/// assert_eq!(reference.verse, Some(16));
///
/// assert!(parse_bible_reference("xyz9").is_none());
/// ```
pub fn parse_bible_reference(query: &str) -> Option<BibleReference> {
    let clean = query.trim().to_lowercase();
    let caps = REFERENCE_PATTERN.captures(&clean)?;

    let book = BOOK_LOOKUP.get(&caps[1]).copied()?;
    let chapter = caps[2].parse().ok()?;
    let verse = match caps.get(3) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };
    let end_verse = match caps.get(4) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };

    Some(BibleReference {
        book,
        chapter,
        verse,
        end_verse,
        original_query: query.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chapter_and_verse() {
        let r = parse_bible_reference("joh3:16").unwrap();
        assert_eq!(r.book_number(), 43);
        assert_eq!(r.book.name, "John");
        assert_eq!(r.chapter, 3);
        assert_eq!(r.verse, Some(16));
        assert_eq!(r.end_verse, None);
    }

    #[test]
    fn test_parse_chapter_only() {
        let r = parse_bible_reference("mat1").unwrap();
        assert_eq!(r.book.name, "Matthew");
        assert_eq!(r.chapter, 1);
        assert_eq!(r.verse, None);
    }

    #[test]
    fn test_parse_verse_range_case_insensitive() {
        let r = parse_bible_reference("  Mat1:17-20 ").unwrap();
        assert_eq!(r.verse, Some(17));
        assert_eq!(r.end_verse, Some(20));
        assert_eq!(r.original_query, "  Mat1:17-20 ");
    }

    #[test]
    fn test_parse_numbered_book() {
        let r = parse_bible_reference("1kor13").unwrap();
        assert_eq!(r.book.name, "1 Corinthians");
        assert_eq!(r.chapter, 13);

        let r = parse_bible_reference("1joh4:8").unwrap();
        assert_eq!(r.book.number, 62);
    }

    #[test]
    fn test_parse_rejects() {
        assert!(parse_bible_reference("xyz9").is_none());
        assert!(parse_bible_reference("joh 3:16").is_none());
        assert!(parse_bible_reference("joh").is_none());
        assert!(parse_bible_reference("joh3:").is_none());
        assert!(parse_bible_reference("bibel").is_none());
        assert!(parse_bible_reference("joh99999999999").is_none());
    }

    #[test]
    fn test_every_abbreviation_resolves() {
        for book in BIBLE_BOOKS {
            for abbrev in book.abbreviations {
                let r = parse_bible_reference(&format!("{}1", abbrev))
                    .unwrap_or_else(|| panic!("{} should parse", abbrev));
                assert_eq!(r.book.number, book.number);
            }
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(parse_bible_reference("joh3:16").unwrap().display_name(), "Johannes 3:16");
        assert_eq!(parse_bible_reference("mat1:17-20").unwrap().display_name(), "Matteus 1:17-20");
        assert_eq!(parse_bible_reference("psalm23").unwrap().display_name(), "Psaltaren 23");
        assert_eq!(parse_bible_reference("mat1:0").unwrap().display_name(), "Matteus 1");
    }

    #[test]
    fn test_url() {
        let config = BibleConfig::default();
        assert_eq!(
            parse_bible_reference("joh3:16").unwrap().url(&config),
            "https://www.bible.com/bible/3413/JHN.3.16.SRB16"
        );
        assert_eq!(
            parse_bible_reference("rom8").unwrap().url(&config),
            "https://www.bible.com/bible/3413/ROM.8.SRB16"
        );
        assert_eq!(
            parse_bible_reference("mat1:17-20").unwrap().url(&config),
            "https://www.bible.com/bible/3413/MAT.1.17.SRB16"
        );
    }

    #[test]
    fn test_lookup_helpers() {
        assert_eq!(find_book("JOH").unwrap().number, 43);
        assert_eq!(book_by_number(66).unwrap().code, "REV");
        assert!(book_by_number(2).is_none());
    }
}
