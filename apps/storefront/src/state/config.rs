//! # Configuration State
//!
//! Store configuration loaded once when the session starts.
//!
//! ## Configuration Sources (Priority Order)
//! 1. JSON document handed in by the host (`from_json`)
//! 2. JSON file on disk (`from_file`)
//! 3. Defaults (`StoreConfig::default`)
//!
//! Configuration is read-only after initialization.

use std::path::Path;

use metalbase_core::{LaserTariff, Money, StoreConfig};
use tracing::{debug, info};

use crate::error::ApiError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigState {
    store: StoreConfig,
}

impl ConfigState {
    pub fn new(store: StoreConfig) -> Self {
        ConfigState { store }
    }

    /// Parses a JSON document; missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        let store = StoreConfig::from_json(json)?;
        debug!(store_name = %store.store_name, "store configuration parsed");
        Ok(ConfigState { store })
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!(path = %path.display(), "cannot read store configuration: {}", e);
            ApiError::config(format!("Cannot read {}: {}", path.display(), e))
        })?;

        let state = ConfigState::from_json(&json)?;
        info!(path = %path.display(), "store configuration loaded");
        Ok(state)
    }

    pub fn store(&self) -> &StoreConfig {
        &self.store
    }

    pub fn laser_tariff(&self) -> &LaserTariff {
        &self.store.laser_tariff
    }

    /// Formats an amount with the configured currency sign.
    ///
    /// ## Example
    /// ```rust
    /// use metalbase_core::Money;
    /// use metalbase_storefront::ConfigState;
    ///
    /// let config = ConfigState::from_json(r#"{ "currencySymbol": "руб." }"#).unwrap();
    /// assert_eq!(config.format_price(Money::from_rubles(450)), "450 руб.");
    /// ```
    pub fn format_price(&self, amount: Money) -> String {
        amount.format_with(&self.store.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_default_tariff() {
        let config = ConfigState::default();
        assert_eq!(config.laser_tariff().steel, 150.0);
        assert_eq!(config.store().currency_symbol, "₽");
    }

    #[test]
    fn test_from_json() {
        let config = ConfigState::from_json(r#"{ "laserTariff": { "aluminum": 220 } }"#).unwrap();
        assert_eq!(config.laser_tariff().aluminum, 220.0);
    }

    #[test]
    fn test_format_price() {
        let config = ConfigState::default();
        assert_eq!(config.format_price(Money::from_rubles(55_900)), "55\u{a0}900 ₽");

        let config = ConfigState::from_json(r#"{ "currencySymbol": "$" }"#).unwrap();
        assert_eq!(config.format_price(Money::from_kopecks(1250)), "12,50 $");
        assert_eq!(config.format_price(Money::zero()), "0 $");
    }

    #[test]
    fn test_from_json_invalid() {
        let err = ConfigState::from_json("[1, 2").unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_from_missing_file() {
        let err = ConfigState::from_file("/nonexistent/metalbase/config.json").unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("metalbase-config-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, r#"{ "storeName": "Тест" }"#).unwrap();

        let config = ConfigState::from_file(&path).unwrap();
        assert_eq!(config.store().store_name, "Тест");

        std::fs::remove_file(&path).unwrap();
    }
}
