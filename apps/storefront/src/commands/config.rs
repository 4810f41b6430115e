//! # Config Commands
//!
//! Store settings the page needs before it renders anything.

use metalbase_core::StoreConfig;
use tracing::debug;

use crate::state::Session;

/// Gets the store configuration.
///
/// ## When Used
/// - Page load (store name in the header)
/// - Price formatting on the client (currency sign)
/// - Showing the tariff next to the calculator
///
/// ## Returns
/// A copy of the configuration; it is read-only for the session's lifetime.
pub fn get_store_config(session: &Session) -> StoreConfig {
    let store = session.config.store();
    debug!(store_name = %store.store_name, "get_store_config command");
    store.clone()
}
