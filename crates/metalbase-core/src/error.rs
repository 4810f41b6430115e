//! # Error Types
//!
//! Domain-specific error types for metalbase-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  metalbase-core errors (this file)                                     │
//! │  └── CoreError        - Domain errors                                  │
//! │                                                                         │
//! │  storefront errors (apps/storefront)                                   │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: CoreError → ApiError → Frontend                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Most engine operations cannot fail. Updating an absent cart item and
//! filtering down to nothing are no-ops, not errors.

use thiserror::Error;

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Quote requested for a material outside steel / stainless / aluminum.
    ///
    /// ## User Workflow
    /// ```text
    /// set_laser_params({ material: "titanium", ... })
    ///      │
    ///      ▼
    /// InvalidMaterial("titanium")
    ///      │
    ///      ▼
    /// UI keeps the previous parameters, no quote is shown
    /// ```
    #[error("Unknown material: {0}")]
    InvalidMaterial(String),

    /// Quote requested for a contour complexity outside simple / medium / complex.
    #[error("Unknown complexity: {0}")]
    InvalidComplexity(String),

    /// Product id is not part of the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// Order submitted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Store configuration could not be parsed.
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidMaterial("titanium".to_string());
        assert_eq!(err.to_string(), "Unknown material: titanium");

        let err = CoreError::ProductNotFound(42);
        assert_eq!(err.to_string(), "Product not found: 42");

        assert_eq!(CoreError::EmptyCart.to_string(), "Cart is empty");
    }

    #[test]
    fn test_json_error_converts_to_core_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let core_err: CoreError = json_err.into();
        assert!(matches!(core_err, CoreError::InvalidConfig(_)));
    }
}
