//! # Receipt Lines
//!
//! Turns the transaction cache into printable lines.
//!
//! ## Ordering
//! ```text
//! scanned:  cheese (P)   lamp   banana (P)
//!              │           │        │
//!              ▼           │        ▼
//! printed:  cheese ──► banana ──► lamp
//!           └── perishables ──┘   └─ the rest
//! ```
//! A stable two-bucket partition: scan order is kept inside each bucket.

use std::fmt;

use crate::cache::TransactionCache;
use crate::money::Money;

/// One printed receipt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub description: String,
    pub sales_price: Money,
    pub quantity: i64,
    pub perishable: bool,
}

/// `Product: <description>, priced at <cents>, with quantity = <qty>`
impl fmt::Display for ReceiptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product: {}, priced at {}, with quantity = {}",
            self.description,
            self.sales_price.cents(),
            self.quantity
        )
    }
}

/// Receipt lines for the open transaction, perishables first.
pub fn receipt_lines(cache: &TransactionCache) -> Vec<ReceiptLine> {
    let lines = cache.iter().map(|(product, record)| ReceiptLine {
        description: product.description.clone(),
        sales_price: record.sales_price(),
        quantity: record.quantity,
        perishable: product.perishable,
    });

    let (mut perishables, rest): (Vec<_>, Vec<_>) = lines.partition(|line| line.perishable);
    perishables.extend(rest);
    perishables
}
