//! # Catalog
//!
//! The static product catalog and the views derived from it.
//!
//! ## Derived State
//! ```text
//! products() ──┬──► derive_categories() ──► [Все, Трубы, Листовой прокат, ...]
//!              │
//!              └──► filter_by_category(selected) ──► visible products
//! ```
//!
//! Category buttons and the visible product grid are recomputed from the
//! catalog on every read. Nothing derived is cached.

use once_cell::sync::Lazy;

use crate::money::Money;
use crate::types::{CategoryFilter, Product};

static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        product(
            1,
            "Труба стальная 57x3",
            "Трубы",
            450,
            "м",
            "Водогазопроводная труба из стали марки Ст3",
            &["Диаметр: 57мм", "Толщина стенки: 3мм", "ГОСТ 3262-75"],
        ),
        product(
            2,
            "Лист стальной 3мм",
            "Листовой прокат",
            85_000,
            "тонна",
            "Горячекатаный лист из стали 09Г2С",
            &["Толщина: 3мм", "Размер: 1500x6000мм", "ГОСТ 19903-74"],
        ),
        product(
            3,
            "Арматура А500С 12мм",
            "Арматура",
            55_000,
            "тонна",
            "Строительная арматура периодического профиля",
            &["Диаметр: 12мм", "Класс А500С", "ГОСТ 34028-2016"],
        ),
        product(
            4,
            "Уголок 50x50x5",
            "Уголки",
            58_000,
            "тонна",
            "Равнополочный стальной уголок",
            &["Ширина полки: 50мм", "Толщина: 5мм", "ГОСТ 8509-93"],
        ),
        product(
            5,
            "Балка двутавровая №20",
            "Балки",
            62_000,
            "тонна",
            "Двутавровая балка горячекатаная",
            &["Номер: 20", "Высота: 200мм", "ГОСТ 8239-89"],
        ),
        product(
            6,
            "Швеллер 10П",
            "Швеллеры",
            59_000,
            "тонна",
            "Швеллер гнутый равнополочный",
            &["Номер: 10П", "Высота: 100мм", "ГОСТ 8240-97"],
        ),
    ]
});

fn product(
    id: u32,
    name: &str,
    category: &str,
    price_rubles: i64,
    unit: &str,
    description: &str,
    specs: &[&str],
) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price: Money::from_rubles(price_rubles),
        unit: unit.to_string(),
        description: description.to_string(),
        specs: specs.iter().map(|s| s.to_string()).collect(),
    }
}

/// The full catalog, in display order.
///
/// Built on first access and read-only afterwards.
pub fn products() -> &'static [Product] {
    &CATALOG
}

/// Looks a product up by id.
pub fn find_product(catalog: &[Product], id: u32) -> Option<&Product> {
    catalog.iter().find(|p| p.id == id)
}

/// Category buttons: the `Все` sentinel followed by each distinct category
/// in the order it first appears in the catalog.
///
/// ## Example
/// ```rust
/// use metalbase_core::catalog::{derive_categories, products};
/// use metalbase_core::CategoryFilter;
///
/// let categories = derive_categories(products());
/// assert_eq!(categories[0], CategoryFilter::All);
/// assert_eq!(categories.len(), 7);
/// ```
pub fn derive_categories(catalog: &[Product]) -> Vec<CategoryFilter> {
    let mut categories = vec![CategoryFilter::All];
    for product in catalog {
        let filter = CategoryFilter::Only(product.category.clone());
        if !categories.contains(&filter) {
            categories.push(filter);
        }
    }
    categories
}

/// Products passing `selected`, in catalog order.
///
/// `All` returns the whole catalog. A category with no products yields an
/// empty list.
pub fn filter_by_category<'a>(catalog: &'a [Product], selected: &CategoryFilter) -> Vec<&'a Product> {
    catalog.iter().filter(|p| selected.matches(p)).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
