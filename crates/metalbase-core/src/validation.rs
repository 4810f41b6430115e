//! # Range Clamps
//!
//! The calculator inputs carry min / max / step hints in the form. These
//! helpers apply the same hints in Rust for callers that want them.
//!
//! ## Where Clamping Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Form field (min/max/step)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  THIS MODULE (opt-in): clamp + snap to step                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  quote engine: prices whatever it is given                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The quote engine never calls these. Contact fields are not checked at all.

use crate::types::LaserParams;

/// Thinnest sheet the shop cuts, in millimeters.
pub const MIN_THICKNESS_MM: f64 = 0.5;

/// Thickest sheet the shop cuts, in millimeters.
pub const MAX_THICKNESS_MM: f64 = 20.0;

/// Thickness field step.
pub const THICKNESS_STEP_MM: f64 = 0.5;

/// Area field step.
pub const AREA_STEP_M2: f64 = 0.1;

/// Clamps a thickness to [0.5, 20] mm and snaps it to the 0.5 mm step.
///
/// Non-finite input becomes the minimum.
///
/// ## Example
/// ```rust
/// use metalbase_core::validation::clamp_thickness;
///
/// assert_eq!(clamp_thickness(3.3), 3.5);
/// assert_eq!(clamp_thickness(0.0), 0.5);
/// assert_eq!(clamp_thickness(45.0), 20.0);
/// ```
pub fn clamp_thickness(thickness_mm: f64) -> f64 {
    if !thickness_mm.is_finite() {
        return MIN_THICKNESS_MM;
    }
    snap(thickness_mm, THICKNESS_STEP_MM).clamp(MIN_THICKNESS_MM, MAX_THICKNESS_MM)
}

/// Clamps an area to >= 0 m² and snaps it to the 0.1 m² step.
///
/// Non-finite input becomes zero.
pub fn clamp_area(area_m2: f64) -> f64 {
    if !area_m2.is_finite() {
        return 0.0;
    }
    snap(area_m2, AREA_STEP_M2).max(0.0)
}

/// Rounds to the nearest multiple of `step`, dropping float noise from the
/// division (`0.3 / 0.1` is not exactly 3).
fn snap(value: f64, step: f64) -> f64 {
    let steps = (value / step).round();
    let snapped = steps * step;
    // Keep ten decimal places at most so 0.1 * 3 reads as 0.3
    (snapped * 1e10).round() / 1e10
}

impl LaserParams {
    /// Returns a copy with thickness and area clamped into the form's ranges.
    pub fn clamped(&self) -> LaserParams {
        LaserParams {
            thickness: clamp_thickness(self.thickness),
            area: clamp_area(self.area),
            ..*self
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
