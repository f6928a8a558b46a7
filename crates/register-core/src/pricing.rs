//! # Perishable Markdown
//!
//! Price reductions for perishable goods close to their best-before date.
//!
//! ## Markdown Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  days = best_before - today        sales price                          │
//! │  ───────────────────────────       ──────────────────────────────       │
//! │  days >= 2                         unit price (no markdown)             │
//! │  days == 1                         one_day_bps  of unit price (65%)     │
//! │  days == 0                         same_day_bps of unit price (35%)     │
//! │  days <  0                         expired_bps  of unit price (0%)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Percentages are basis points and applied with `Money::percent_of`, so
//! half cents round up.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::{Money, FULL_BPS};
use crate::validation::{validate_bps, ValidationResult};

/// Whole days from `today` until `best_before`. Negative once expired.
///
/// ```rust
/// use chrono::NaiveDate;
/// use register_core::pricing::days_until;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// let best_before = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(days_until(today, best_before), 30);
/// assert_eq!(days_until(best_before, today), -30);
/// ```
pub fn days_until(today: NaiveDate, best_before: NaiveDate) -> i64 {
    best_before.signed_duration_since(today).num_days()
}

// =============================================================================
// Markdown Tier
// =============================================================================

/// Which row of the markdown table a perishable product falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markdown {
    /// Two or more days left.
    FullPrice,
    /// Best before tomorrow.
    OneDayLeft,
    /// Best before today.
    BestBeforeToday,
    /// Past the best-before date.
    Expired,
}

impl Markdown {
    /// Classifies the number of days left until best-before.
    pub fn for_days(days: i64) -> Self {
        match days {
            d if d >= 2 => Markdown::FullPrice,
            1 => Markdown::OneDayLeft,
            0 => Markdown::BestBeforeToday,
            _ => Markdown::Expired,
        }
    }
}

// =============================================================================
// Markdown Policy
// =============================================================================

/// Percentages charged per markdown tier.
///
/// ## Config File Format
/// ```toml
/// [register.markdown]
/// one_day_bps = 6500
/// same_day_bps = 3500
/// expired_bps = 0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownPolicy {
    /// Share of the unit price charged one day before best-before.
    pub one_day_bps: u32,

    /// Share of the unit price charged on the best-before date.
    pub same_day_bps: u32,

    /// Share of the unit price charged after the best-before date.
    pub expired_bps: u32,
}

impl Default for MarkdownPolicy {
    fn default() -> Self {
        MarkdownPolicy {
            one_day_bps: 6_500,
            same_day_bps: 3_500,
            expired_bps: 0,
        }
    }
}

impl MarkdownPolicy {
    /// Basis points of the unit price charged for a tier.
    pub fn bps_for(&self, tier: Markdown) -> u32 {
        match tier {
            Markdown::FullPrice => FULL_BPS,
            Markdown::OneDayLeft => self.one_day_bps,
            Markdown::BestBeforeToday => self.same_day_bps,
            Markdown::Expired => self.expired_bps,
        }
    }

    /// Sales price for a unit price and the days left until best-before.
    ///
    /// ```rust
    /// use register_core::money::Money;
    /// use register_core::pricing::MarkdownPolicy;
    ///
    /// let policy = MarkdownPolicy::default();
    /// let cheese = Money::from_cents(800);
    /// assert_eq!(policy.sales_price(cheese, 10).cents(), 800);
    /// assert_eq!(policy.sales_price(cheese, 1).cents(), 520);
    /// assert_eq!(policy.sales_price(cheese, 0).cents(), 280);
    /// assert_eq!(policy.sales_price(cheese, -1).cents(), 0);
    /// ```
    pub fn sales_price(&self, unit_price: Money, days: i64) -> Money {
        match Markdown::for_days(days) {
            Markdown::FullPrice => unit_price,
            tier => unit_price.percent_of(self.bps_for(tier)),
        }
    }

    pub fn validate(&self) -> ValidationResult<()> {
        validate_bps("markdown.one_day_bps", self.one_day_bps)?;
        validate_bps("markdown.same_day_bps", self.same_day_bps)?;
        validate_bps("markdown.expired_bps", self.expired_bps)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
