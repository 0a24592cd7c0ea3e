//! HTML fragments for the variant browser.
//!
//! Every dataset string is escaped before it is written.

use crate::category::Category;
use crate::filter::{group_by_category, CategoryFilter, CategoryGroup};
use crate::links::VerseLinker;
use crate::variant::Variant;
use srb_core::html::escape_html;
use std::fmt::Write as _;

/// Shown when no variant passes the filter.
pub const NO_RESULTS_HTML: &str = r#"<div class="no-results">Inga resultat hittades.</div>"#;

const TABLE_HEAD: &str = concat!(
    "<thead><tr>",
    r#"<th style="width: 15%">Vers &amp; Parallel jämförelse</th>"#,
    r#"<th style="width: 35%">Utdrag (Ej citat!)</th>"#,
    r#"<th style="width: 35%">UN-text</th>"#,
    r#"<th style="width: 15%">Påverkan</th>"#,
    "</tr></thead>",
);

const PARALLEL_ICON: &str = r#"<i class="fa-solid fa-book-bible" style="opacity: 0.8;"></i>"#;

/// Renders variants as table rows, mobile cards and category sections.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    linker: VerseLinker,
}

impl Renderer {
    pub fn new(linker: VerseLinker) -> Self {
        Self { linker }
    }

    /// Verse link plus parallel-translation link, or plain text when the
    /// verse cannot be linked.
    pub fn verse_links(&self, verse: &str) -> String {
        let text = escape_html(verse);
        match (self.linker.link(verse), self.linker.parallel_link(verse)) {
            (Some(url), Some(parallel)) => format!(
                concat!(
                    r#"<a href="{url}" target="_blank" class="verse-link" rel="noopener">{text}</a>"#,
                    r#"<a href="{parallel}" target="_blank" class="verse-link" rel="noopener">{icon}{icon}</a>"#,
                ),
                url = escape_html(&url),
                parallel = escape_html(&parallel),
                text = text,
                icon = PARALLEL_ICON,
            ),
            _ => format!(r#"<span class="verse-link">{}</span>"#, text),
        }
    }

    pub fn table_row(&self, variant: &Variant) -> String {
        format!(
            concat!(
                "<tr>",
                "<td>{}</td>",
                r#"<td><div class="tr-text">{}</div></td>"#,
                r#"<td><div class="un-text">{}</div></td>"#,
                r#"<td><div class="impact-text">{}</div></td>"#,
                "</tr>",
            ),
            self.verse_links(&variant.verse),
            escape_html(&variant.tr_text),
            escape_html(&variant.un_text),
            escape_html(&variant.impact),
        )
    }

    pub fn mobile_card(&self, variant: &Variant) -> String {
        let verse = escape_html(&variant.verse);
        let header = match self.linker.link(&variant.verse) {
            Some(url) => format!(
                r#"<a href="{}" target="_blank" class="card-youversion-link" rel="noopener">📖 {}</a>"#,
                escape_html(&url),
                verse
            ),
            None => format!(r#"<span class="card-youversion-link">📖 {}</span>"#, verse),
        };

        let mut html = String::new();
        html.push_str(r#"<div class="variant-card">"#);
        let _ = write!(html, r#"<div class="card-header">{}</div>"#, header);
        html.push_str(r#"<div class="card-content">"#);
        for (class, title, content) in [
            ("tr-section", "Utdrag", &variant.tr_text),
            ("un-section", "UN-text", &variant.un_text),
            ("impact-section", "Påverkan", &variant.impact),
        ] {
            let _ = write!(
                html,
                r#"<div class="card-section {}"><div class="card-section-title">{}</div><div class="card-section-content">{}</div></div>"#,
                class,
                title,
                escape_html(content)
            );
        }
        html.push_str("</div></div>");
        html
    }

    /// A category heading with its table and cards. Empty groups render
    /// nothing.
    pub fn category_section(&self, group: &CategoryGroup<'_>) -> String {
        if group.variants.is_empty() {
            return String::new();
        }

        let key = group.category.key();
        let rows: String = group.variants.iter().map(|v| self.table_row(v)).collect();
        let cards: String = group.variants.iter().map(|v| self.mobile_card(v)).collect();

        let mut html = String::new();
        let _ = write!(
            html,
            r#"<div class="category-section" id="{key}" data-category="{key}">"#,
            key = key
        );
        let _ = write!(
            html,
            r#"<h2 class="category-title">{}</h2>"#,
            escape_html(group.category.title())
        );
        let _ = write!(
            html,
            r#"<div class="category-info"><span>{} verser i denna kategori</span></div>"#,
            group.variants.len()
        );
        let _ = write!(
            html,
            r#"<table class="variant-table">{}<tbody>{}</tbody></table>"#,
            TABLE_HEAD, rows
        );
        let _ = write!(html, r#"<div class="mobile-card-container">{}</div>"#, cards);
        html.push_str("</div>");
        html
    }

    /// All non-empty category sections in catalog order, or the no-results
    /// placeholder.
    pub fn categories(&self, variants: &[&Variant]) -> String {
        let html: String = group_by_category(variants)
            .iter()
            .map(|group| self.category_section(group))
            .collect();

        if html.is_empty() {
            NO_RESULTS_HTML.to_string()
        } else {
            html
        }
    }
}

/// Options of the category dropdown with `active` marked.
pub fn filter_dropdown(active: CategoryFilter) -> String {
    let option = |key: &str, label: String| {
        let class = if active.key() == key {
            "filter-option active"
        } else {
            "filter-option"
        };
        format!(r#"<div class="{}" data-category="{}">{}</div>"#, class, key, label)
    };

    let mut html = option("all", "Alla kategorier".to_string());
    for category in Category::ALL {
        html.push_str(&option(
            category.key(),
            format!("{} {}", category.emoji(), escape_html(category.short_title())),
        ));
    }
    html
}
