//! # Store Configuration
//!
//! Settings a deployment may override. Every field has a default, so an
//! empty JSON object is a valid configuration.
//!
//! ## Example
//! ```rust
//! use metalbase_core::config::StoreConfig;
//!
//! let config = StoreConfig::from_json(r#"{ "laserTariff": { "steel": 180 } }"#).unwrap();
//! assert_eq!(config.laser_tariff.steel, 180.0);
//! assert_eq!(config.laser_tariff.stainless, 250.0);
//! ```
//!
//! This module only parses. Reading the JSON from disk or elsewhere is the
//! storefront layer's business.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::DEFAULT_CURRENCY_SYMBOL;
use crate::quote::LaserTariff;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// Shown in the header.
    pub store_name: String,

    /// Currency sign appended to prices in the UI.
    pub currency_symbol: String,

    /// Laser-cutting tariff used by the calculator.
    pub laser_tariff: LaserTariff,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: "МеталлБаза".to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            laser_tariff: LaserTariff::default(),
        }
    }
}

impl StoreConfig {
    /// Parses a JSON document, filling missing fields with defaults.
    ///
    /// ## Errors
    /// `InvalidConfig` when the document is not valid JSON or a field has
    /// the wrong type.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
