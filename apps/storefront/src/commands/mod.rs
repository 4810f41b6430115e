//! # Commands Module
//!
//! Every action the web storefront can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Category buttons, product grid
//! ├── cart.rs     ◄─── Add to cart, quantity buttons, cart sheet
//! ├── order.rs    ◄─── Order form submission
//! ├── laser.rs    ◄─── Laser-cutting calculator and request form
//! └── config.rs   ◄─── Store name, currency sign, tariff
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  const res = addToCart(session, 3);                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust                                                                   │
//! │  ────                                                                   │
//! │  fn add_to_cart(                                                        │
//! │      session: &mut Session,   ◄── The visitor's state                  │
//! │      product_id: u32,         ◄── From the clicked card                │
//! │  ) -> Result<CartActionResponse, ApiError>                              │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend re-renders the cart and shows res.notification as a toast    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands that change state and have something to tell the user return the
//! notification next to the new state. Rendering it is the frontend's call.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod laser;
pub mod order;
