//! # Transaction Cache
//!
//! Line items of the open transaction, keyed by product.
//!
//! ## Invariants
//! - At most one `SalesRecord` per `Product`
//! - Iteration order is first-scan order (drives the receipt)
//! - Re-scanning a product keeps its position and bumps its quantity

use indexmap::IndexMap;

use crate::money::Money;
use crate::types::{Product, SalesRecord};

/// Insertion-ordered mapping `Product → SalesRecord` for one transaction.
#[derive(Debug, Clone, Default)]
pub struct TransactionCache {
    entries: IndexMap<Product, SalesRecord>,
}

impl TransactionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a freshly scanned record for `product`.
    ///
    /// When the product is already cached, the new record replaces the old
    /// one in place and carries the previous quantity plus one. Returns the
    /// quantity now recorded for the product.
    pub fn record_scan(&mut self, product: Product, mut record: SalesRecord) -> i64 {
        if let Some(existing) = self.entries.get(&product) {
            record.quantity = existing.quantity;
            record.increase_quantity(1);
        }

        let quantity = record.quantity;
        self.entries.insert(product, record);
        quantity
    }

    pub fn get(&self, product: &Product) -> Option<&SalesRecord> {
        self.entries.get(product)
    }

    pub fn get_mut(&mut self, product: &Product) -> Option<&mut SalesRecord> {
        self.entries.get_mut(product)
    }

    /// Number of distinct products in the transaction.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (&Product, &SalesRecord)> {
        self.entries.iter()
    }

    /// Removes all entries, yielding them in scan order.
    pub fn drain(&mut self) -> impl Iterator<Item = (Product, SalesRecord)> + '_ {
        self.entries.drain(..)
    }

    /// Sum of all line totals at current sales prices.
    pub fn total(&self) -> Money {
        self.entries.values().map(SalesRecord::line_total).sum()
    }
}
