//! # Catalog State
//!
//! The catalog a session browses and the category currently selected.

use metalbase_core::catalog::{self, derive_categories, filter_by_category};
use metalbase_core::{CategoryFilter, Product};

#[derive(Debug, Clone)]
pub struct CatalogState {
    products: &'static [Product],
    selected: CategoryFilter,
}

impl CatalogState {
    /// Browses the built-in catalog with no filter.
    pub fn new() -> Self {
        CatalogState::with_products(catalog::products())
    }

    pub fn with_products(products: &'static [Product]) -> Self {
        CatalogState {
            products,
            selected: CategoryFilter::All,
        }
    }

    pub fn products(&self) -> &'static [Product] {
        self.products
    }

    pub fn find(&self, id: u32) -> Option<&'static Product> {
        catalog::find_product(self.products, id)
    }

    pub fn categories(&self) -> Vec<CategoryFilter> {
        derive_categories(self.products)
    }

    pub fn selected(&self) -> &CategoryFilter {
        &self.selected
    }

    pub fn select(&mut self, filter: CategoryFilter) {
        self.selected = filter;
    }

    /// Products passing the current filter, recomputed on every call.
    pub fn visible(&self) -> Vec<&'static Product> {
        filter_by_category(self.products, &self.selected)
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}
