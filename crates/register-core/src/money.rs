//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A 35% markdown on a 1.50 banana in floating point:                     │
//! │    1.50 * 0.35 = 0.5249999999999999  ❌ rounds the wrong way            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Basis Points                             │
//! │    (150 * 3500 + 5000) / 10000 = 53 cents                               │
//! │    Exact, and rounding is explicit (half up)                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use register_core::money::Money;
//!
//! let price = Money::from_cents(150);
//!
//! // 65% of the unit price, rounded half up
//! assert_eq!(price.percent_of(6500).cents(), 98);
//!
//! // Line totals
//! assert_eq!(price.multiply_quantity(3).cents(), 450);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// One hundred percent, expressed in basis points.
pub const FULL_BPS: u32 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Differences between prices may be negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Transparent serde**: Serialized as the bare number of cents
///
/// ## Where Money is Used
/// ```text
/// Product.price_cents ──► SalesRecord.unit_price ──► markdown ──► sales_price
///                                                                     │
///                                     ReceiptLine ◄───────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use register_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Returns `bps` basis points of this amount, rounded half up.
    ///
    /// `bps` is capped at `FULL_BPS`: a markdown never raises the amount.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use register_core::money::Money;
    ///
    /// let banana = Money::from_cents(150);
    /// assert_eq!(banana.percent_of(3500).cents(), 53); // 52.5 → 53
    /// assert_eq!(banana.percent_of(10_000).cents(), 150);
    /// assert_eq!(banana.percent_of(0).cents(), 0);
    /// assert_eq!(banana.percent_of(20_000).cents(), 150);
    /// ```
    pub fn percent_of(&self, bps: u32) -> Money {
        let bps = i128::from(bps.min(FULL_BPS));
        // i128 so large prices cannot overflow the intermediate product
        let scaled = (i128::from(self.0) * bps + 5000).div_euclid(i128::from(FULL_BPS));
        let cents = i64::try_from(scaled)
            .unwrap_or(if scaled < 0 { i64::MIN } else { i64::MAX });
        Money::from_cents(cents)
    }

    /// Multiplies money by a quantity.
    ///
    /// ```rust
    /// use register_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Human-readable amount for the customer display, e.g. `$8.00`.
///
/// Receipts print the raw number of cents instead; see `receipt`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
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
