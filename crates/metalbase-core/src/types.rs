//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  LaserParams    │   │ CategoryFilter  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  material       │   │  All ("Все")    │       │
//! │  │  name, category │   │  thickness (mm) │   │  Only(category) │       │
//! │  │  price (Money)  │   │  area (m²)      │   └─────────────────┘       │
//! │  │  unit, specs    │   │  complexity     │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Material     │   │   Complexity    │   │ ContactDetails  │       │
//! │  │  Steel          │   │  Simple         │   │  name, phone    │       │
//! │  │  Stainless      │   │  Medium         │   │  email, comment │       │
//! │  │  Aluminum       │   │  Complex        │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique positive identifier.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Category label used for filtering.
    pub category: String,

    /// Price per `unit`.
    pub price: Money,

    /// Unit of sale (`м`, `тонна`). Display only.
    pub unit: String,

    /// Short description shown on the product card.
    pub description: String,

    /// Free-text specification lines, in display order.
    pub specs: Vec<String>,
}

// =============================================================================
// Category Filter
// =============================================================================

/// Label of the "no filter" category button.
pub const ALL_CATEGORIES_LABEL: &str = "Все";

/// The category the catalog is currently narrowed to.
///
/// Serialized as its label, so the frontend only ever deals with strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CategoryFilter {
    /// Sentinel: show every product.
    #[default]
    All,
    /// Show only products whose category equals this label.
    Only(String),
}

impl CategoryFilter {
    /// Maps a button label back to a filter. `Все` is the sentinel.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES_LABEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_LABEL,
            CategoryFilter::Only(category) => category,
        }
    }

    /// Whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(label: String) -> Self {
        CategoryFilter::from_label(&label)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.label().to_string()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Laser Cutting Parameters
// =============================================================================

/// Sheet material for laser cutting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Steel,
    Stainless,
    Aluminum,
}

impl Material {
    pub const ALL: [Material; 3] = [Material::Steel, Material::Stainless, Material::Aluminum];

    /// Wire name (`steel`, `stainless`, `aluminum`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Material::Steel => "steel",
            Material::Stainless => "stainless",
            Material::Aluminum => "aluminum",
        }
    }

    /// Button label shown in the calculator.
    pub const fn label(&self) -> &'static str {
        match self {
            Material::Steel => "Сталь",
            Material::Stainless => "Нержавейка",
            Material::Aluminum => "Алюминий",
        }
    }
}

impl FromStr for Material {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Material::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CoreError::InvalidMaterial(s.to_string()))
    }
}

/// Contour complexity of the cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    #[default]
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [Complexity::Simple, Complexity::Medium, Complexity::Complex];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Complexity::Simple => "Простая",
            Complexity::Medium => "Средняя",
            Complexity::Complex => "Сложная",
        }
    }
}

impl FromStr for Complexity {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Complexity::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::InvalidComplexity(s.to_string()))
    }
}

/// Inputs of the laser-cutting calculator.
///
/// No range is enforced here. The intended domain is thickness in
/// [0.5, 20] mm and area >= 0 m²; see [`crate::validation`] for the clamps
/// the presentation layer applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LaserParams {
    pub material: Material,
    /// Sheet thickness in millimeters.
    pub thickness: f64,
    /// Cut area in square meters.
    pub area: f64,
    pub complexity: Complexity,
}

impl LaserParams {
    /// Whether the calculator should show an estimate yet.
    ///
    /// An area of zero is the "nothing entered" state, not an error.
    pub fn quote_visible(&self) -> bool {
        self.area > 0.0
    }
}

impl Default for LaserParams {
    /// Steel, 3 mm, no area, simple contour.
    fn default() -> Self {
        LaserParams {
            material: Material::Steel,
            thickness: 3.0,
            area: 0.0,
            complexity: Complexity::Simple,
        }
    }
}

/// Calculator inputs as the form submits them, before the material and
/// complexity are checked against the known sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawLaserParams {
    pub material: String,
    pub thickness: f64,
    pub area: f64,
    pub complexity: String,
}

impl TryFrom<RawLaserParams> for LaserParams {
    type Error = CoreError;

    fn try_from(raw: RawLaserParams) -> CoreResult<Self> {
        LaserParams::try_from(&raw)
    }
}

impl TryFrom<&RawLaserParams> for LaserParams {
    type Error = CoreError;

    fn try_from(raw: &RawLaserParams) -> CoreResult<Self> {
        Ok(LaserParams {
            material: raw.material.parse()?,
            thickness: raw.thickness,
            area: raw.area,
            complexity: raw.complexity.parse()?,
        })
    }
}

impl From<LaserParams> for RawLaserParams {
    fn from(params: LaserParams) -> Self {
        RawLaserParams {
            material: params.material.as_str().to_string(),
            thickness: params.thickness,
            area: params.area,
            complexity: params.complexity.as_str().to_string(),
        }
    }
}

// =============================================================================
// Contact Details
// =============================================================================

/// Who to call back about an order or a laser-cutting request.
///
/// Carried through to the receipt as entered; the form marks the fields as
/// required, the engine does not check them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub comment: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
