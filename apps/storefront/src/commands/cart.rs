//! # Cart Commands
//!
//! Commands behind the "В корзину" buttons and the cart sheet.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│  Order   │────►│  Sent    │       │
//! │  │  Cart    │     │          │     │  Form    │     │          │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲                │                                  │             │
//! │       │           add_to_cart                       submit_order       │
//! │       │           update_quantity                   (order.rs)         │
//! │       │                                                   │             │
//! │       └───────────────────────────────────────────────────┘             │
//! │                        (back to empty)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use metalbase_core::{CartItem, CartTotals, CoreError, Notification};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiError;
use crate::state::Session;

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    /// `totals.total` with the store's currency sign.
    pub formatted_total: String,
}

impl From<&Session> for CartResponse {
    fn from(session: &Session) -> Self {
        let totals = CartTotals::from(&session.cart);
        CartResponse {
            items: session.cart.items().to_vec(),
            formatted_total: session.config.format_price(totals.total),
            totals,
        }
    }
}

/// Cart after an action the user should hear about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartActionResponse {
    pub cart: CartResponse,
    pub notification: Notification,
}

/// Gets the current cart contents.
pub fn get_cart(session: &Session) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(session)
}

/// Adds one unit of a catalog product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity + 1, same position
/// - Product not in cart: appended with quantity 1
///
/// ## Errors
/// `NOT_FOUND` when the id is not in the catalog.
pub fn add_to_cart(session: &mut Session, product_id: u32) -> Result<CartActionResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = session
        .catalog
        .find(product_id)
        .ok_or(CoreError::ProductNotFound(product_id))?;

    let notification = session.cart.add_product(product);
    Ok(CartActionResponse {
        cart: CartResponse::from(&*session),
        notification,
    })
}

/// Sets the quantity of a cart line (the [-] / [+] buttons).
///
/// ## Behavior
/// - Quantity 0 or below: the line is removed
/// - Product not in cart: nothing changes
pub fn update_quantity(session: &mut Session, product_id: u32, quantity: i64) -> CartResponse {
    debug!(product_id = %product_id, quantity = %quantity, "update_quantity command");

    session.cart.update_quantity(product_id, quantity);
    CartResponse::from(&*session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::ConfigState;
    use metalbase_core::Money;

    #[test]
    fn test_add_to_cart_returns_notification() {
        let mut session = Session::default();
        let res = add_to_cart(&mut session, 4).unwrap();

        assert_eq!(res.cart.totals.item_count, 1);
        assert_eq!(res.notification.title(), "Добавлено в корзину");
        assert_eq!(res.notification.description(), "Уголок 50x50x5");
    }

    #[test]
    fn test_add_unknown_product() {
        let mut session = Session::default();
        let err = add_to_cart(&mut session, 99).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(session.cart.is_empty());
    }

    #[test]
    fn test_quantity_buttons() {
        let mut session = Session::default();
        add_to_cart(&mut session, 1).unwrap();

        // [+]
        let res = update_quantity(&mut session, 1, 2);
        assert_eq!(res.items[0].quantity, 2);
        assert_eq!(res.totals.total, Money::from_rubles(900));

        // [-] twice
        update_quantity(&mut session, 1, 1);
        let res = update_quantity(&mut session, 1, 0);
        assert!(res.items.is_empty());
        assert!(res.totals.total.is_zero());
    }

    #[test]
    fn test_update_absent_item_changes_nothing() {
        let mut session = Session::default();
        add_to_cart(&mut session, 2).unwrap();

        let res = update_quantity(&mut session, 6, 5);
        assert_eq!(res.items.len(), 1);
        assert_eq!(res.items[0].product.id, 2);
    }

    #[test]
    fn test_get_cart_serializes_camel_case() {
        let mut session = Session::default();
        add_to_cart(&mut session, 3).unwrap();

        let json = serde_json::to_value(get_cart(&session)).unwrap();
        assert_eq!(json["totals"]["itemCount"], 1);
        assert_eq!(json["totals"]["total"], 5_500_000);
        assert_eq!(json["items"][0]["name"], "Арматура А500С 12мм");
        assert_eq!(json["formattedTotal"], "55\u{a0}000 ₽");
    }

    #[test]
    fn test_total_uses_configured_currency() {
        let config = ConfigState::from_json(r#"{ "currencySymbol": "$" }"#).unwrap();
        let mut session = Session::new(config);
        add_to_cart(&mut session, 1).unwrap();

        let res = update_quantity(&mut session, 1, 3);
        assert_eq!(res.formatted_total, "1\u{a0}350 $");
    }

    #[test]
    fn test_huge_quantity_clamps_total() {
        let mut session = Session::default();
        add_to_cart(&mut session, 2).unwrap();

        let res = update_quantity(&mut session, 2, 10_000_000_000_000);
        assert_eq!(res.items[0].quantity, 10_000_000_000_000);
        assert_eq!(res.totals.total, Money::from_kopecks(i64::MAX));
    }
}
