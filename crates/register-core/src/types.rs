//! # Domain Types
//!
//! Core domain types of the checkout register.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌──────────────────────┐                    │
//! │  │    Product      │        │     SalesRecord      │                    │
//! │  │  ─────────────  │ scan   │  ──────────────────  │                    │
//! │  │  barcode        │ ─────► │  barcode             │                    │
//! │  │  short_name     │        │  sale_date           │                    │
//! │  │  description    │        │  unit_price_cents    │                    │
//! │  │  price_cents    │        │  quantity            │                    │
//! │  │  perishable     │        │  sales_price_cents   │ ◄── markdown       │
//! │  └─────────────────┘        │  best_before         │                    │
//! │   immutable, from catalog   └──────────────────────┘                    │
//! │                              one per product per transaction            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::money::Money;

// =============================================================================
// Barcode
// =============================================================================

/// Numeric barcode as delivered by the scanner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Barcode(u32);

impl Barcode {
    #[inline]
    pub const fn new(code: u32) -> Self {
        Barcode(code)
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Barcode {
    fn from(code: u32) -> Self {
        Barcode(code)
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Barcode {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Barcode)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product as known to the sales catalog.
///
/// Immutable once looked up. Equality and hashing cover every field, so two
/// lookups of the same barcode land on the same transaction cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Barcode printed on the package.
    pub barcode: Barcode,

    /// Short internal name, e.g. `"banana"`.
    pub short_name: String,

    /// Display name shown to the cashier and on the receipt.
    pub description: String,

    /// Unit price in cents.
    pub price_cents: i64,

    /// Perishable goods get a best-before markdown.
    pub perishable: bool,
}

impl Product {
    /// Creates a product.
    pub fn new(
        short_name: impl Into<String>,
        description: impl Into<String>,
        price_cents: i64,
        barcode: impl Into<Barcode>,
        perishable: bool,
    ) -> Self {
        Product {
            barcode: barcode.into(),
            short_name: short_name.into(),
            description: description.into(),
            price_cents,
            perishable,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Sales Record
// =============================================================================

/// One line item of the open transaction.
///
/// Uses the snapshot pattern: the unit price is frozen at scan time, the
/// sales price starts equal to it and may be marked down afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub barcode: Barcode,
    pub sale_date: NaiveDate,
    /// Catalog price at time of scan (frozen).
    pub unit_price_cents: i64,
    /// Number of times the product was scanned.
    pub quantity: i64,
    /// Price charged per piece after markdown.
    pub sales_price_cents: i64,
    pub best_before: Option<NaiveDate>,
}

impl SalesRecord {
    /// Creates a record for a single piece sold at the unit price.
    pub fn new(barcode: Barcode, sale_date: NaiveDate, unit_price: Money) -> Self {
        SalesRecord {
            barcode,
            sale_date,
            unit_price_cents: unit_price.cents(),
            quantity: 1,
            sales_price_cents: unit_price.cents(),
            best_before: None,
        }
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    #[inline]
    pub fn sales_price(&self) -> Money {
        Money::from_cents(self.sales_price_cents)
    }

    pub fn set_sales_price(&mut self, price: Money) {
        self.sales_price_cents = price.cents();
    }

    pub fn set_best_before(&mut self, date: NaiveDate) {
        self.best_before = Some(date);
    }

    pub fn increase_quantity(&mut self, by: i64) {
        self.quantity += by;
    }

    /// Sales price × quantity.
    pub fn line_total(&self) -> Money {
        self.sales_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
