//! # Collaborator Ports
//!
//! Traits for everything the register talks to but does not own.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         CashRegister                                    │
//! │                                                                         │
//! │   SalesService ◄── lookup_product / sold        (catalog + back office) │
//! │   Ui           ◄── display_product / _calendar / _error_message         │
//! │   Printer      ◄── println                      (receipt printer)       │
//! │   Clock        ◄── today                        (fixed in tests)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All calls are synchronous and expected to return immediately.

use chrono::{Local, NaiveDate};

use crate::error::RegisterResult;
use crate::types::{Barcode, Product, SalesRecord};

/// Product catalog and sales back office.
pub trait SalesService {
    /// Looks up a product, failing with `RegisterError::UnknownProduct`.
    fn lookup_product(&self, barcode: Barcode) -> RegisterResult<Product>;

    /// Records one finalized line item.
    fn sold(&mut self, record: SalesRecord);
}

/// Cashier / customer display.
pub trait Ui {
    fn display_product(&mut self, product: &Product);

    /// Asks the cashier to pick the best-before date of a perishable product.
    fn display_calendar(&mut self);

    fn display_error_message(&mut self, message: &str);
}

/// Receipt printer, one call per receipt line.
pub trait Printer {
    fn println(&mut self, line: &str);
}

/// Buffers printed lines, handy for previews and tests.
impl Printer for Vec<String> {
    fn println(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

/// Source of the current calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
