//! # Laser-Cutting Quote
//!
//! Prices a laser-cutting job from the calculator inputs.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  base        = steel 150 │ stainless 250 │ aluminum 200   (₽ per m²)    │
//! │  complexity  = simple 1  │ medium 1.5    │ complex 2                    │
//! │  thickness   = 1 + thickness_mm / 10                                    │
//! │                                                                         │
//! │  price = round(base × area × complexity × thickness)   whole rubles    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rounding happens once, at the end, ties away from zero (see
//! [`Money::round_rubles`]). Out-of-range inputs are not rejected: a negative
//! area gives a negative price. Keeping inputs in range is the caller's job.
//!
//! For negative amounts this is not the browser's `Math.round`, which rounds
//! ties toward positive infinity: a raw price of `-2.5` quotes as `-3 ₽` here
//! and `-2 ₽` there. Only out-of-range inputs can get there; positive ties
//! round the same way in both.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::notification::Notification;
use crate::types::{Complexity, LaserParams, Material, RawLaserParams};

/// Base prices and multipliers used by the calculator.
///
/// The defaults are the published tariff. A store can override any of them
/// through [`crate::config::StoreConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct LaserTariff {
    /// Rubles per m² of steel.
    pub steel: f64,
    /// Rubles per m² of stainless steel.
    pub stainless: f64,
    /// Rubles per m² of aluminum.
    pub aluminum: f64,
    pub simple_multiplier: f64,
    pub medium_multiplier: f64,
    pub complex_multiplier: f64,
    /// Millimeters of thickness that add 100% to the price.
    pub thickness_step_mm: f64,
}

impl Default for LaserTariff {
    fn default() -> Self {
        LaserTariff {
            steel: 150.0,
            stainless: 250.0,
            aluminum: 200.0,
            simple_multiplier: 1.0,
            medium_multiplier: 1.5,
            complex_multiplier: 2.0,
            thickness_step_mm: 10.0,
        }
    }
}

impl LaserTariff {
    pub fn base_price(&self, material: Material) -> f64 {
        match material {
            Material::Steel => self.steel,
            Material::Stainless => self.stainless,
            Material::Aluminum => self.aluminum,
        }
    }

    pub fn complexity_multiplier(&self, complexity: Complexity) -> f64 {
        match complexity {
            Complexity::Simple => self.simple_multiplier,
            Complexity::Medium => self.medium_multiplier,
            Complexity::Complex => self.complex_multiplier,
        }
    }

    pub fn thickness_multiplier(&self, thickness_mm: f64) -> f64 {
        1.0 + thickness_mm / self.thickness_step_mm
    }

    /// Prices a job under this tariff.
    pub fn price(&self, params: &LaserParams) -> Money {
        let raw = self.base_price(params.material)
            * params.area
            * self.complexity_multiplier(params.complexity)
            * self.thickness_multiplier(params.thickness);
        Money::round_rubles(raw)
    }

    /// Parses untyped form input and prices it.
    ///
    /// ## Errors
    /// - `InvalidMaterial` for a material outside the known three
    /// - `InvalidComplexity` for an unknown contour complexity
    pub fn price_raw(&self, raw: &RawLaserParams) -> CoreResult<Money> {
        let params = LaserParams::try_from(raw)?;
        Ok(self.price(&params))
    }
}

/// Prices a job under the default tariff.
///
/// ## Example
/// ```rust
/// use metalbase_core::quote::calculate_laser_price;
/// use metalbase_core::{Complexity, LaserParams, Material};
///
/// let params = LaserParams {
///     material: Material::Stainless,
///     thickness: 10.0,
///     area: 2.0,
///     complexity: Complexity::Complex,
/// };
/// // 250 × 2 × 2 × (1 + 10/10)
/// assert_eq!(calculate_laser_price(&params).rubles(), 2000);
/// ```
pub fn calculate_laser_price(params: &LaserParams) -> Money {
    LaserTariff::default().price(params)
}

/// Default-tariff price for untyped form input.
pub fn calculate_laser_price_raw(raw: &RawLaserParams) -> CoreResult<Money> {
    LaserTariff::default().price_raw(raw)
}

/// Sends a laser-cutting request: prices it and describes the event.
///
/// Nothing is stored; there is no request list to append to.
pub fn submit_laser_request(tariff: &LaserTariff, params: &LaserParams) -> (Money, Notification) {
    let price = tariff.price(params);
    (price, Notification::LaserRequestSubmitted { price })
}

// =============================================================================
// Unit Tests
// =============================================================================
