//! Category and free-text filtering of variants.

use crate::category::Category;
use crate::error::VariantError;
use crate::variant::Variant;
use serde::Serialize;
use std::str::FromStr;

/// Which categories are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    One(Category),
}

impl CategoryFilter {
    /// `all` or a category key, as used by the dropdown.
    pub fn key(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::One(category) => category.key(),
        }
    }

    pub fn admits(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::One(selected) => selected == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::One)
        }
    }
}

/// Category selection plus search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantFilter {
    category: CategoryFilter,
    term: String,
}

impl VariantFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_term(mut self, term: &str) -> Self {
        self.set_term(term);
        self
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Store the term lowercased and trimmed.
    pub fn set_term(&mut self, term: &str) {
        self.term = term.trim().to_lowercase();
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Whether a variant passes both the category and the term filter.
    pub fn matches(&self, variant: &Variant) -> bool {
        self.category.admits(variant.category)
            && (self.term.is_empty() || variant.contains_term(&self.term))
    }

    /// Variants passing the filter, in input order.
    pub fn apply<'a>(&self, variants: &'a [Variant]) -> Vec<&'a Variant> {
        variants.iter().filter(|v| self.matches(v)).collect()
    }
}

/// Variants of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub variants: Vec<&'a Variant>,
}

/// Group variants by category in catalog order, leaving out empty groups.
pub fn group_by_category<'a>(variants: &[&'a Variant]) -> Vec<CategoryGroup<'a>> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let members: Vec<&'a Variant> = variants
                .iter()
                .copied()
                .filter(|v| v.category == category)
                .collect();
            (!members.is_empty()).then_some(CategoryGroup {
                category,
                variants: members,
            })
        })
        .collect()
}
