//! # In-Memory Sales Service
//!
//! A `SalesService` backed by a barcode map. Sold records are kept in a
//! journal in submission order, so the terminal app and the tests can
//! inspect what a finalized transaction produced.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{RegisterError, RegisterResult, ValidationError};
use crate::ports::SalesService;
use crate::types::{Barcode, Product, SalesRecord};
use crate::validation::validate_product;

#[derive(Debug, Clone, Default)]
pub struct InMemorySalesService {
    products: HashMap<Barcode, Product>,
    sold: Vec<SalesRecord>,
}

impl InMemorySalesService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog, rejecting invalid entries and duplicate barcodes.
    pub fn with_products<I>(products: I) -> RegisterResult<Self>
    where
        I: IntoIterator<Item = Product>,
    {
        let mut service = Self::new();
        for product in products {
            service.insert(product)?;
        }
        Ok(service)
    }

    /// Adds a product to the catalog.
    pub fn insert(&mut self, product: Product) -> RegisterResult<()> {
        validate_product(&product)?;

        if self.products.contains_key(&product.barcode) {
            return Err(ValidationError::Duplicate {
                field: "barcode".to_string(),
                value: product.barcode.to_string(),
            }
            .into());
        }

        debug!(barcode = %product.barcode, name = %product.short_name, "Catalog entry added");
        self.products.insert(product.barcode, product);
        Ok(())
    }

    /// Number of products in the catalog.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Records submitted through `sold`, oldest first.
    pub fn sold_records(&self) -> &[SalesRecord] {
        &self.sold
    }
}

impl SalesService for InMemorySalesService {
    fn lookup_product(&self, barcode: Barcode) -> RegisterResult<Product> {
        self.products
            .get(&barcode)
            .cloned()
            .ok_or(RegisterError::UnknownProduct(barcode))
    }

    fn sold(&mut self, record: SalesRecord) {
        self.sold.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use chrono::NaiveDate;

    fn catalog() -> InMemorySalesService {
        InMemorySalesService::with_products([
            Product::new("led lamp", "Led Lamp", 250, 1_234, false),
            Product::new("banana", "Bananas Fyffes", 150, 9_234, true),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        let service = catalog();
        assert_eq!(service.product_count(), 2);

        let lamp = service.lookup_product(Barcode::new(1_234)).unwrap();
        assert_eq!(lamp.description, "Led Lamp");

        let err = service.lookup_product(Barcode::new(0)).unwrap_err();
        assert!(matches!(err, RegisterError::UnknownProduct(b) if b.value() == 0));
    }

    #[test]
    fn test_duplicate_barcode_rejected() {
        let mut service = catalog();
        let err = service
            .insert(Product::new("lamp2", "Other Lamp", 300, 1_234, false))
            .unwrap_err();
        assert!(matches!(
            err,
            RegisterError::Validation(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_invalid_product_rejected() {
        let result =
            InMemorySalesService::with_products([Product::new("x", "", 100, 1, false)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sold_journal() {
        let mut service = catalog();
        let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        service.sold(SalesRecord::new(Barcode::new(1_234), date, Money::from_cents(250)));

        assert_eq!(service.sold_records().len(), 1);
        assert_eq!(service.sold_records()[0].unit_price_cents, 250);
    }
}
