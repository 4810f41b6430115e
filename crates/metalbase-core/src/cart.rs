//! # Cart
//!
//! The shopping cart and its mutation rules.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Frontend Action          Engine Call              Cart Change          │
//! │  ───────────────          ───────────              ───────────          │
//! │                                                                         │
//! │  "В корзину" ────────────► add_product() ────────► qty += 1 or push     │
//! │                                                                         │
//! │  [+] / [-] ──────────────► update_quantity(n) ───► qty = n              │
//! │                                                    (n <= 0: remove)     │
//! │                                                                         │
//! │  "Оформить заказ" ───────► submit_order() ───────► drained              │
//! │                                                                         │
//! │  Header / summary ───────► total(), totals() ────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::notification::Notification;
use crate::types::Product;

// =============================================================================
// Cart Item
// =============================================================================

/// A product in the cart with how many units of it were ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,

    /// Always >= 1 while the item is in a cart.
    pub quantity: i64,
}

impl CartItem {
    fn new(product: &Product) -> Self {
        CartItem {
            product: product.clone(),
            quantity: 1,
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.product.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one item per product id (adding again bumps the quantity)
/// - Every quantity is >= 1 (setting it to zero or below removes the item)
/// - Items keep the position of their first add
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: u32) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity + 1, position unchanged
    /// - Product not in cart: appended with quantity 1
    ///
    /// ## Returns
    /// The `ItemAdded` notification for the toast.
    ///
    /// ## Example
    /// ```rust
    /// use metalbase_core::{catalog, Cart};
    ///
    /// let pipe = catalog::find_product(catalog::products(), 1).unwrap();
    /// let mut cart = Cart::new();
    /// cart.add_product(pipe);
    /// cart.add_product(pipe);
    /// assert_eq!(cart.get(1).unwrap().quantity, 2);
    /// ```
    pub fn add_product(&mut self, product: &Product) -> Notification {
        match self.items.iter_mut().find(|i| i.id() == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(CartItem::new(product)),
        }

        Notification::ItemAdded {
            name: product.name.clone(),
        }
    }

    /// Sets the quantity of an item.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: the item is removed
    /// - otherwise: the quantity becomes exactly `quantity`
    /// - id not in cart: nothing happens (only `add_product` creates items)
    pub fn update_quantity(&mut self, id: u32, quantity: i64) {
        if quantity <= 0 {
            self.items.retain(|i| i.id() != id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.id() == id) {
            item.quantity = quantity;
        }
    }

    /// Sends the order: empties the cart and hands back what was in it.
    ///
    /// There is no server to refuse, so this always succeeds. Refusing an
    /// empty cart is the caller's gate.
    pub fn submit_order(&mut self) -> (Vec<CartItem>, Notification) {
        let lines = std::mem::take(&mut self.items);
        (lines, Notification::OrderSubmitted)
    }

    /// Number of distinct products.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities, clamped at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Σ price × quantity. Zero for an empty cart.
    ///
    /// Quantities are not capped, so a line or the sum can exceed what
    /// `Money` holds; it then clamps at the maximum instead of overflowing.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart summary for the header badge and the order sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_product, products};

    fn test_product(id: u32, price_rubles: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            category: "Test".to_string(),
            price: Money::from_rubles(price_rubles),
            unit: "м".to_string(),
            description: String::new(),
            specs: Vec::new(),
        }
    }

    fn catalog_product(id: u32) -> &'static Product {
        find_product(products(), id).unwrap()
    }

    #[test]
    fn test_add_new_product() {
        let mut cart = Cart::new();
        let notification = cart.add_product(catalog_product(1));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.get(1).unwrap().quantity, 1);
        assert_eq!(
            notification,
            Notification::ItemAdded {
                name: "Труба стальная 57x3".to_string()
            }
        );
    }

    #[test]
    fn test_add_same_product_increases_quantity_in_place() {
        let mut cart = Cart::new();
        cart.add_product(catalog_product(1));
        cart.add_product(catalog_product(3));
        cart.add_product(catalog_product(1));

        let ids: Vec<u32> = cart.items().iter().map(CartItem::id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(cart.get(1).unwrap().quantity, 2);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_update_quantity_sets_exact_value() {
        let mut cart = Cart::new();
        cart.add_product(catalog_product(2));
        cart.update_quantity(2, 7);

        assert_eq!(cart.get(2).unwrap().quantity, 7);
        assert_eq!(cart.total(), Money::from_rubles(85_000 * 7));
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_product(catalog_product(1));
        cart.add_product(catalog_product(4));
        cart.update_quantity(1, 0);

        assert!(cart.get(1).is_none());
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut cart = Cart::new();
        cart.add_product(catalog_product(1));
        cart.update_quantity(1, -5);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_product(catalog_product(1));
        let before = cart.clone();

        cart.update_quantity(42, 3);
        assert_eq!(cart, before);

        cart.update_quantity(42, 0);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        assert!(Cart::new().total().is_zero());
    }

    #[test]
    fn test_submit_order_drains_cart() {
        let mut cart = Cart::new();
        cart.add_product(catalog_product(5));
        cart.add_product(catalog_product(6));

        let (lines, notification) = cart.submit_order();
        assert_eq!(lines.len(), 2);
        assert_eq!(notification, Notification::OrderSubmitted);
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let mut cart = Cart::new();
        let sheet = catalog_product(2); // 85 000 ₽ per tonne
        cart.add_product(sheet);

        // Largest quantity whose line total still fits is exact
        let max_exact = i64::MAX / sheet.price.kopecks();
        cart.update_quantity(2, max_exact);
        assert_eq!(cart.total().kopecks(), max_exact * sheet.price.kopecks());

        cart.update_quantity(2, 10_000_000_000_000);
        assert_eq!(cart.total(), Money::from_kopecks(i64::MAX));

        // A second line on top of a clamped one stays clamped
        cart.add_product(catalog_product(1));
        assert_eq!(cart.total(), Money::from_kopecks(i64::MAX));

        cart.update_quantity(1, i64::MAX);
        assert_eq!(cart.total_quantity(), i64::MAX);
        cart.add_product(catalog_product(1));
        assert_eq!(cart.get(1).unwrap().quantity, i64::MAX);
    }

    #[test]
    fn test_totals_summary() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(10, 100));
        cart.add_product(&test_product(10, 100));
        cart.add_product(&test_product(11, 250));

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.total, Money::from_rubles(450));
    }

    #[test]
    fn test_fractional_prices_are_exact() {
        let mut cart = Cart::new();
        let mut bolt = test_product(20, 0);
        bolt.price = Money::from_kopecks(1_010); // 10,10 ₽
        cart.add_product(&bolt);
        cart.update_quantity(20, 3);

        assert_eq!(cart.total().kopecks(), 3_030);
    }

    #[test]
    fn test_cart_item_serializes_flat() {
        let mut cart = Cart::new();
        cart.add_product(catalog_product(3));

        let json = serde_json::to_value(&cart.items()[0]).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["quantity"], 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_cart() -> impl Strategy<Value = Cart> {
            prop::collection::vec((1u32..=6, 1i64..50), 0..12).prop_map(|adds| {
                let mut cart = Cart::new();
                for (id, qty) in adds {
                    cart.add_product(catalog_product(id));
                    let current = cart.get(id).map(|i| i.quantity).unwrap_or(0);
                    cart.update_quantity(id, current + qty - 1);
                }
                cart
            })
        }

        proptest! {
            /// Property: adding a product twice to an empty cart gives one line of 2.
            #[test]
            fn add_twice_gives_quantity_two(id in 1u32..=6) {
                let mut cart = Cart::new();
                cart.add_product(catalog_product(id));
                cart.add_product(catalog_product(id));

                prop_assert_eq!(cart.item_count(), 1);
                prop_assert_eq!(cart.get(id).unwrap().quantity, 2);
            }

            /// Property: at most one line per product id, every quantity >= 1.
            #[test]
            fn cart_invariants_hold(cart in arb_cart()) {
                let mut seen = std::collections::HashSet::new();
                for item in cart.items() {
                    prop_assert!(seen.insert(item.id()));
                    prop_assert!(item.quantity >= 1);
                }
            }

            /// Property: removing a line drops the total by exactly its line total.
            #[test]
            fn removal_drops_total_by_line(cart in arb_cart(), id in 1u32..=6, qty in -10i64..=0) {
                let before = cart.total();
                let line = cart.get(id).map(CartItem::line_total).unwrap_or_default();

                let mut after = cart.clone();
                after.update_quantity(id, qty);

                prop_assert!(after.get(id).is_none());
                prop_assert_eq!(after.total(), before - line);
            }

            /// Property: negative quantities behave exactly like zero.
            #[test]
            fn negative_quantity_same_as_zero(cart in arb_cart(), id in 1u32..=6, qty in i64::MIN..0) {
                let mut zeroed = cart.clone();
                zeroed.update_quantity(id, 0);
                let mut negative = cart;
                negative.update_quantity(id, qty);

                prop_assert_eq!(zeroed, negative);
            }

            /// Property: the total does not depend on item order.
            #[test]
            fn total_is_order_independent(cart in arb_cart()) {
                let mut reversed = Cart::new();
                for item in cart.items().iter().rev() {
                    reversed.add_product(&item.product);
                    reversed.update_quantity(item.id(), item.quantity);
                }

                prop_assert_eq!(reversed.total(), cart.total());
            }
        }
    }
}
