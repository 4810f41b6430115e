//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Kopecks                                          │
//! │    Catalog prices are whole rubles, stored as kopecks (×100).          │
//! │    Cart totals are exact sums of integers.                             │
//! │    Only the laser quote goes through floats, and it is rounded to      │
//! │    whole rubles exactly once, at the end.                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use metalbase_core::money::Money;
//!
//! let price = Money::from_rubles(450);
//! let line = price * 2;
//! assert_eq!(line.rubles(), 900);
//! assert_eq!(line.to_string(), "900 ₽");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

/// Kopecks per ruble.
const MINOR_PER_MAJOR: i64 = 100;

/// Thousands separator used by the Russian locale (no-break space).
const GROUP_SEPARATOR: char = '\u{a0}';

/// Currency sign used by `Display`.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₽";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in kopecks (the smallest ruble unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: the quote engine trusts its caller, so a negative
///   thickness or area produces a negative quote rather than an error
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Saturating arithmetic**: quantities are unbounded, so products and
///   sums clamp at `i64::MIN` / `i64::MAX` instead of overflowing
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartItem.line_total ──► Cart.total ──► OrderReceipt
///
/// LaserParams ──► LaserTariff::price ──► LaserRequestReceipt
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from kopecks.
    #[inline]
    pub const fn from_kopecks(kopecks: i64) -> Self {
        Money(kopecks)
    }

    /// Creates a Money value from whole rubles.
    ///
    /// ## Example
    /// ```rust
    /// use metalbase_core::money::Money;
    ///
    /// let price = Money::from_rubles(55_000);
    /// assert_eq!(price.kopecks(), 5_500_000);
    /// ```
    #[inline]
    pub const fn from_rubles(rubles: i64) -> Self {
        Money(rubles.saturating_mul(MINOR_PER_MAJOR))
    }

    /// Rounds a ruble amount to the nearest whole ruble.
    ///
    /// Ties round away from zero (`2.5 → 3`, `-2.5 → -3`). A non-finite input
    /// (NaN from an empty numeric field, or infinity) yields zero; values
    /// beyond the i64 range saturate.
    ///
    /// ## Example
    /// ```rust
    /// use metalbase_core::money::Money;
    ///
    /// assert_eq!(Money::round_rubles(149.5).rubles(), 150);
    /// assert_eq!(Money::round_rubles(f64::NAN), Money::zero());
    /// ```
    pub fn round_rubles(rubles: f64) -> Self {
        if !rubles.is_finite() {
            return Money::zero();
        }
        let whole = rubles.round() as i64;
        Money(whole.saturating_mul(MINOR_PER_MAJOR))
    }

    /// Returns the value in kopecks.
    #[inline]
    pub const fn kopecks(&self) -> i64 {
        self.0
    }

    /// Returns the whole-ruble portion (truncated toward zero).
    #[inline]
    pub const fn rubles(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the kopeck portion (always 0-99).
    #[inline]
    pub const fn kopecks_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use metalbase_core::money::Money;
    ///
    /// let per_tonne = Money::from_rubles(55_000);
    /// assert_eq!(per_tonne.multiply_quantity(3).rubles(), 165_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Formats with the given currency sign: `55 900 $`, `12,50 €`.
    ///
    /// Groups of three digits are separated by a no-break space and kopecks
    /// are only printed when non-zero.
    ///
    /// ## Example
    /// ```rust
    /// use metalbase_core::money::Money;
    ///
    /// assert_eq!(Money::from_rubles(450).format_with("$"), "450 $");
    /// ```
    pub fn format_with(&self, currency_symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.rubles().unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(GROUP_SEPARATOR);
            }
            grouped.push(ch);
        }

        if self.kopecks_part() == 0 {
            format!("{}{} {}", sign, grouped, currency_symbol)
        } else {
            format!("{}{},{:02} {}", sign, grouped, self.kopecks_part(), currency_symbol)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Russian-locale display with the ruble sign: `55 900 ₽`, `12,50 ₽`, `-550 ₽`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
