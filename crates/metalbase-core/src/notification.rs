//! # Notifications
//!
//! Events the engine hands back alongside the new state. The presentation
//! layer decides how to show them (toast, banner); the engine only describes
//! what happened.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{Money, DEFAULT_CURRENCY_SYMBOL};

/// Something the user should be told about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Notification {
    /// A product was put into the cart (new line or quantity bump).
    ItemAdded { name: String },
    /// The order form was sent and the cart cleared.
    OrderSubmitted,
    /// A laser-cutting request was sent with this estimate.
    LaserRequestSubmitted { price: Money },
}

impl Notification {
    /// Toast headline.
    pub fn title(&self) -> &'static str {
        match self {
            Notification::ItemAdded { .. } => "Добавлено в корзину",
            Notification::OrderSubmitted => "Заказ отправлен",
            Notification::LaserRequestSubmitted { .. } => "Заявка на лазерную резку отправлена",
        }
    }

    /// Toast body, prices in rubles.
    pub fn description(&self) -> String {
        self.description_with(DEFAULT_CURRENCY_SYMBOL)
    }

    /// Toast body with prices carrying the given currency sign.
    pub fn description_with(&self, currency_symbol: &str) -> String {
        match self {
            Notification::ItemAdded { name } => name.clone(),
            Notification::OrderSubmitted => "Мы свяжемся с вами в ближайшее время".to_string(),
            Notification::LaserRequestSubmitted { price } => {
                format!("Стоимость: {}", price.format_with(currency_symbol))
            }
        }
    }
}
