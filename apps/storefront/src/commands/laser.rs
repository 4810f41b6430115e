//! # Laser-Cutting Commands
//!
//! The calculator card and the request form on the laser-cutting tab.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Calculator                                                             │
//! │  [Сталь] [Нержавейка] [Алюминий]    ─┐                                  │
//! │  Толщина (мм) / Площадь (м²)         ├─► set_laser_params(raw)         │
//! │  [Простая] [Средняя] [Сложная]      ─┘          │                       │
//! │                                                 ▼                       │
//! │  Примерная стоимость: 2 000 ₽   ◄── quote (hidden while area is 0)     │
//! │                                                                         │
//! │  Request form                                                           │
//! │  Имя / Телефон / Email / Чертеж / Комментарий                           │
//! │  [Отправить заявку] ───────────► submit_laser_request(contact)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use metalbase_core::quote;
use metalbase_core::{ContactDetails, LaserParams, Money, Notification, RawLaserParams};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::Session;

/// Calculator state as the card renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LaserQuoteResponse {
    pub params: LaserParams,
    /// `None` while no area has been entered.
    pub price: Option<Money>,
    /// `price` with the store's currency sign.
    pub formatted_price: Option<String>,
}

impl From<&Session> for LaserQuoteResponse {
    fn from(session: &Session) -> Self {
        let params = session.laser_params;
        let price = params
            .quote_visible()
            .then(|| session.config.laser_tariff().price(&params));
        LaserQuoteResponse {
            params,
            price,
            formatted_price: price.map(|p| session.config.format_price(p)),
        }
    }
}

/// A sent laser-cutting request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LaserRequestReceipt {
    #[ts(as = "String")]
    pub id: Uuid,
    #[ts(as = "String")]
    pub submitted_at: DateTime<Utc>,
    pub params: LaserParams,
    pub price: Money,
    pub contact: ContactDetails,
    /// File name of the attached drawing (DXF, DWG or PDF), if any.
    pub drawing: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LaserRequestResponse {
    pub receipt: LaserRequestReceipt,
    pub notification: Notification,
    /// Toast body with the store's currency sign.
    pub message: String,
}

/// Gets the calculator state and, once an area is entered, the estimate.
pub fn get_laser_quote(session: &Session) -> LaserQuoteResponse {
    debug!("get_laser_quote command");
    LaserQuoteResponse::from(session)
}

/// Replaces the calculator inputs.
///
/// Thickness and area are taken as given; only the material and complexity
/// are checked.
///
/// ## Errors
/// `VALIDATION_ERROR` for an unknown material or complexity. The previous
/// inputs stay in place.
pub fn set_laser_params(session: &mut Session, raw: RawLaserParams) -> Result<LaserQuoteResponse, ApiError> {
    debug!(
        material = %raw.material,
        thickness = raw.thickness,
        area = raw.area,
        complexity = %raw.complexity,
        "set_laser_params command"
    );

    let params = LaserParams::try_from(&raw).map_err(|e| {
        warn!("laser params rejected: {}", e);
        ApiError::from(e)
    })?;

    session.laser_params = params;
    Ok(LaserQuoteResponse::from(&*session))
}

/// Sends the laser-cutting request form.
///
/// The request carries the estimate for the current inputs; nothing else in
/// the session changes.
pub fn submit_laser_request(
    session: &Session,
    contact: ContactDetails,
    drawing: Option<String>,
) -> LaserRequestResponse {
    debug!(drawing = ?drawing, "submit_laser_request command");

    let params = session.laser_params;
    let (price, notification) = quote::submit_laser_request(session.config.laser_tariff(), &params);

    let receipt = LaserRequestReceipt {
        id: Uuid::new_v4(),
        submitted_at: Utc::now(),
        params,
        price,
        contact,
        drawing,
    };
    info!(request_id = %receipt.id, price = %receipt.price, "laser request submitted");

    LaserRequestResponse {
        receipt,
        message: notification.description_with(&session.config.store().currency_symbol),
        notification,
    }
}
