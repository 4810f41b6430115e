//! # Metalbase Storefront
//!
//! The session layer the web storefront talks to.
//!
//! ## Responsibilities
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Startup                                   │
//! │                                                                         │
//! │  1. init_tracing()                                                     │
//! │     • tracing-subscriber with env filter                               │
//! │                                                                         │
//! │  2. ConfigState::from_file() / ::default()                             │
//! │     • Store name, currency sign, laser tariff                          │
//! │                                                                         │
//! │  3. Session::new(config)                                               │
//! │     • Built-in catalog, empty cart, default calculator                 │
//! │                                                                         │
//! │  4. commands::*                                                        │
//! │     • One call per user action, JSON-serializable responses            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All business rules live in `metalbase-core`. This crate owns session
//! state, logging, receipt ids and timestamps.

pub mod commands;
pub mod error;
pub mod state;

pub use error::{ApiError, ErrorCode};
pub use state::{ConfigState, Session};

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info,metalbase=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=metalbase=trace` - Show trace for metalbase crates only
/// - Default: INFO, DEBUG for metalbase crates
///
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
