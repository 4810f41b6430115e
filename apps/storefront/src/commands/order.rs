//! # Order Commands
//!
//! The order form at the bottom of the cart sheet.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart sheet (only rendered when the cart has items)                     │
//! │                                                                         │
//! │  Итого: 55 900 ₽                                                        │
//! │  Имя / Телефон / Email / Комментарий                                    │
//! │  [Оформить заказ]                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  submit_order(contact) ← THIS MODULE                                   │
//! │         │                                                               │
//! │         ├── cart empty? → CART_ERROR (the sheet should not offer this) │
//! │         │                                                               │
//! │         └── receipt + "Заказ отправлен" toast, cart emptied            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no server: the order is considered sent the moment this returns.

use chrono::{DateTime, Utc};
use metalbase_core::{CartItem, ContactDetails, CoreError, Money, Notification};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::commands::cart::CartResponse;
use crate::error::ApiError;
use crate::state::Session;

/// What was ordered, frozen at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    #[ts(as = "String")]
    pub id: Uuid,
    #[ts(as = "String")]
    pub submitted_at: DateTime<Utc>,
    pub items: Vec<CartItem>,
    pub total: Money,
    pub contact: ContactDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub receipt: OrderReceipt,
    /// The (now empty) cart.
    pub cart: CartResponse,
    pub notification: Notification,
}

/// Submits the order form.
///
/// ## Errors
/// `CART_ERROR` when the cart is empty.
pub fn submit_order(session: &mut Session, contact: ContactDetails) -> Result<OrderResponse, ApiError> {
    debug!(items = session.cart.item_count(), "submit_order command");

    if session.cart.is_empty() {
        warn!("order submitted with an empty cart");
        return Err(CoreError::EmptyCart.into());
    }

    let total = session.cart.total();
    let (items, notification) = session.cart.submit_order();

    let receipt = OrderReceipt {
        id: Uuid::new_v4(),
        submitted_at: Utc::now(),
        items,
        total,
        contact,
    };
    info!(order_id = %receipt.id, lines = receipt.items.len(), total = %receipt.total, "order submitted");

    Ok(OrderResponse {
        receipt,
        cart: CartResponse::from(&*session),
        notification,
    })
}
