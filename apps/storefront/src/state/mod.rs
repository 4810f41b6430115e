//! # State Module
//!
//! Session state for one visitor of the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session                                              │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │ CatalogState │  │     Cart     │  │ LaserParams  │  │ConfigState │  │
//! │  │              │  │              │  │              │  │            │  │
//! │  │  products    │  │  items       │  │  material    │  │  tariff    │  │
//! │  │  selected    │  │              │  │  thickness   │  │  store     │  │
//! │  │  category    │  │              │  │  area, ...   │  │  name      │  │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └────────────┘  │
//! │                                                                         │
//! │  OWNERSHIP: one session per visitor, driven by one user action at a    │
//! │  time. Commands take `&mut Session`; there is nothing to lock.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here outlives the session: the cart is gone when the page closes.

mod catalog;
mod config;

pub use catalog::CatalogState;
pub use config::ConfigState;

use metalbase_core::{Cart, LaserParams};

/// Everything one visitor's page holds.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub catalog: CatalogState,
    pub cart: Cart,
    pub laser_params: LaserParams,
    pub config: ConfigState,
}

impl Session {
    /// Fresh session: built-in catalog, empty cart, default calculator.
    pub fn new(config: ConfigState) -> Self {
        Session {
            config,
            ..Session::default()
        }
    }
}
