//! # Catalog Commands
//!
//! Category buttons and the product grid.

use metalbase_core::{CategoryFilter, Product};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::state::Session;

/// Catalog page contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    /// Button labels, `Все` first.
    pub categories: Vec<String>,
    /// Label of the highlighted button.
    pub selected: String,
    /// Cards to render, in catalog order.
    pub products: Vec<Product>,
}

impl From<&Session> for CatalogResponse {
    fn from(session: &Session) -> Self {
        CatalogResponse {
            categories: session
                .catalog
                .categories()
                .into_iter()
                .map(String::from)
                .collect(),
            selected: session.catalog.selected().label().to_string(),
            products: session.catalog.visible().into_iter().cloned().collect(),
        }
    }
}

/// Gets the catalog page as currently filtered.
pub fn get_catalog(session: &Session) -> CatalogResponse {
    debug!(selected = %session.catalog.selected(), "get_catalog command");
    CatalogResponse::from(session)
}

/// Selects a category button.
///
/// ## Behavior
/// - `Все`: every product is shown
/// - Any other label: only products of that category (possibly none)
pub fn select_category(session: &mut Session, label: String) -> CatalogResponse {
    debug!(label = %label, "select_category command");

    session.catalog.select(CategoryFilter::from_label(&label));
    CatalogResponse::from(&*session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_catalog_shows_everything() {
        let session = Session::default();
        let catalog = get_catalog(&session);

        assert_eq!(catalog.selected, "Все");
        assert_eq!(catalog.categories.len(), 7);
        assert_eq!(catalog.products.len(), 6);
    }

    #[test]
    fn test_select_category_filters() {
        let mut session = Session::default();
        let catalog = select_category(&mut session, "Арматура".to_string());

        assert_eq!(catalog.selected, "Арматура");
        assert_eq!(catalog.products.len(), 1);
        assert_eq!(catalog.products[0].id, 3);
        // Buttons do not depend on the selection
        assert_eq!(catalog.categories.len(), 7);
    }

    #[test]
    fn test_select_all_restores_catalog() {
        let mut session = Session::default();
        select_category(&mut session, "Балки".to_string());
        let catalog = select_category(&mut session, "Все".to_string());

        let ids: Vec<u32> = catalog.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_select_unknown_category_is_empty() {
        let mut session = Session::default();
        let catalog = select_category(&mut session, "Сетка".to_string());
        assert!(catalog.products.is_empty());
    }
}
