//! Match highlighting for rendered result titles and descriptions.

use regex::{Regex, RegexBuilder};
use srb_core::html::escape_html;

/// Wraps query term matches in `<mark>` tags.
///
/// A match must start at an ASCII word boundary and is case-insensitive, so a
/// non-ASCII letter such as `Ö` counts as a separator. When two
/// matches overlap the one starting first wins, and among those the longer.
/// Text outside the marks is HTML-escaped.
#[derive(Debug, Clone)]
pub struct Highlighter {
    patterns: Vec<Regex>,
}

impl Highlighter {
    /// Build patterns for every term of at least two characters.
    pub fn new(terms: &[String]) -> Self {
        let mut terms: Vec<&str> = terms
            .iter()
            .map(String::as_str)
            .filter(|term| term.chars().count() >= 2)
            .collect();
        terms.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        terms.dedup();

        let patterns = terms
            .into_iter()
            .filter_map(|term| {
                RegexBuilder::new(&format!(r"(?-u:\b){}", regex::escape(term)))
                    .case_insensitive(true)
                    .build()
                    .ok()
            })
            .collect();

        Self { patterns }
    }

    /// Render `text` as HTML with matches marked.
    pub fn highlight(&self, text: &str) -> String {
        let mut spans: Vec<(usize, usize)> = self
            .patterns
            .iter()
            .flat_map(|re| re.find_iter(text).map(|m| (m.start(), m.end())))
            .collect();
        spans.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

        let mut out = String::with_capacity(text.len() + spans.len() * 13);
        let mut cursor = 0;
        for (start, end) in spans {
            if start < cursor {
                continue;
            }
            out.push_str(&escape_html(&text[cursor..start]));
            out.push_str("<mark>");
            out.push_str(&escape_html(&text[start..end]));
            out.push_str("</mark>");
            cursor = end;
        }
        out.push_str(&escape_html(&text[cursor..]));

        out
    }
}

/// One-shot form of [`Highlighter::highlight`].
pub fn highlight_matches(text: &str, terms: &[String]) -> String {
    Highlighter::new(terms).highlight(text)
}
