//! # metalbase-core: Pure Business Logic for the Metalbase Storefront
//!
//! This crate holds the rules of the storefront as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Metalbase Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web storefront (TypeScript)                  │   │
//! │  │    Catalog grid ──► Cart sheet ──► Order form ──► Laser form    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 metalbase-storefront (Session)                  │   │
//! │  │    add_to_cart, update_quantity, submit_order, laser_quote     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ metalbase-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │   quote   │  │   money   │  │   │
//! │  │   │ products  │  │   Cart    │  │  Tariff   │  │   Money   │  │   │
//! │  │   │ filtering │  │ CartItem  │  │  formula  │  │  kopecks  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, LaserParams, CategoryFilter, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - Static catalog, category derivation and filtering
//! - [`cart`] - Cart mutation rules and totals
//! - [`quote`] - Laser-cutting price formula
//! - [`notification`] - Events returned alongside state changes
//! - [`validation`] - Opt-in range clamps for calculator inputs
//! - [`config`] - Store configuration parsing
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use metalbase_core::{catalog, Cart, Money};
//!
//! let mut cart = Cart::new();
//! let pipe = catalog::find_product(catalog::products(), 1).unwrap();
//! let rebar = catalog::find_product(catalog::products(), 3).unwrap();
//!
//! cart.add_product(pipe);
//! cart.add_product(pipe);
//! cart.add_product(rebar);
//!
//! assert_eq!(cart.total(), Money::from_rubles(55_900));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod money;
pub mod notification;
pub mod quote;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartTotals};
pub use config::StoreConfig;
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use notification::Notification;
pub use quote::LaserTariff;
pub use types::*;
