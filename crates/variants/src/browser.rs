//! Browser state: the loaded dataset and the active filter.

use crate::category::Category;
use crate::error::Result;
use crate::filter::{group_by_category, CategoryFilter, CategoryGroup, VariantFilter};
use crate::links::VerseLinker;
use crate::render::{filter_dropdown, Renderer};
use crate::variant::{load_variants, Variant};
use srb_core::config::ConfigSchema;
use std::time::Duration;

/// The variant page: dataset, filter and renderer.
///
/// The host debounces filter input by [`VariantBrowser::debounce`] before
/// calling [`VariantBrowser::set_term`].
#[derive(Debug, Clone)]
pub struct VariantBrowser {
    variants: Vec<Variant>,
    filter: VariantFilter,
    renderer: Renderer,
    debounce: Duration,
}

impl VariantBrowser {
    pub fn new(variants: Vec<Variant>) -> Self {
        Self::with_config(variants, &ConfigSchema::default())
    }

    pub fn with_config(variants: Vec<Variant>, schema: &ConfigSchema) -> Self {
        Self {
            variants,
            filter: VariantFilter::new(),
            renderer: Renderer::new(VerseLinker::new(&schema.bible, &schema.variants)),
            debounce: Duration::from_millis(schema.variants.debounce_ms),
        }
    }

    /// Load the dataset from JSON.
    pub fn from_json(json: &str, schema: &ConfigSchema) -> Result<Self> {
        Ok(Self::with_config(load_variants(json)?, schema))
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn filter(&self) -> &VariantFilter {
        &self.filter
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn set_term(&mut self, term: &str) {
        self.filter.set_term(term);
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.set_category(category);
    }

    /// Clear the search term, keeping the category.
    pub fn clear_term(&mut self) {
        self.filter.set_term("");
    }

    /// Variants passing the current filter.
    pub fn visible(&self) -> Vec<&Variant> {
        self.filter.apply(&self.variants)
    }

    /// Visible variants grouped in catalog order.
    pub fn groups(&self) -> Vec<CategoryGroup<'_>> {
        group_by_category(&self.visible())
    }

    /// Number of variants per category over the whole dataset.
    pub fn counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.variants.iter().filter(|v| v.category == c).count()))
            .collect()
    }

    /// Content area HTML for the current filter.
    pub fn render(&self) -> String {
        self.renderer.categories(&self.visible())
    }

    /// Dropdown HTML with the current category marked.
    pub fn render_dropdown(&self) -> String {
        filter_dropdown(self.filter.category())
    }
}
