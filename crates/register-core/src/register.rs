//! # Cash Register
//!
//! The transaction state of one checkout lane.
//!
//! ## Transaction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  scan(barcode) ──► lookup_product ──┬── Err ──► display_error_message   │
//! │                                     │                                   │
//! │                                     └── Ok ───► cache.record_scan       │
//! │                                                 perishable?             │
//! │                                                   └► display_calendar   │
//! │                                                 display_product         │
//! │                                                                         │
//! │  correct_sales_price(best_before) ──► markdown on last perishable       │
//! │                                                                         │
//! │  print_receipt() ──► println × entries (perishables first, no drain)    │
//! │                                                                         │
//! │  finalize_sales_transaction() ──► sold × entries, cache cleared         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::cache::TransactionCache;
use crate::config::RegisterConfig;
use crate::error::{RegisterError, RegisterResult};
use crate::money::Money;
use crate::ports::{Clock, Printer, SalesService, Ui};
use crate::pricing::days_until;
use crate::receipt::{receipt_lines, ReceiptLine};
use crate::types::{Barcode, Product, SalesRecord};

/// One cash register serving one cashier, one transaction at a time.
///
/// The register owns its collaborators; use the accessors to reach them
/// (e.g. to read a printer buffer after `print_receipt`).
#[derive(Debug)]
pub struct CashRegister<C, P, U, S> {
    clock: C,
    printer: P,
    ui: U,
    sales_service: S,
    config: RegisterConfig,
    cache: TransactionCache,
    /// Key of the most recently scanned perishable product.
    last_scanned: Option<Product>,
}

impl<C, P, U, S> CashRegister<C, P, U, S>
where
    C: Clock,
    P: Printer,
    U: Ui,
    S: SalesService,
{
    /// Creates a register with the default configuration.
    pub fn new(clock: C, printer: P, ui: U, sales_service: S) -> Self {
        Self::assemble(clock, printer, ui, sales_service, RegisterConfig::default())
    }

    /// Creates a register with custom settings.
    ///
    /// ## Errors
    /// `Validation` when a markdown rate exceeds 100% or the unknown-product
    /// message is empty.
    pub fn with_config(
        clock: C,
        printer: P,
        ui: U,
        sales_service: S,
        config: RegisterConfig,
    ) -> RegisterResult<Self> {
        config.validate()?;
        Ok(Self::assemble(clock, printer, ui, sales_service, config))
    }

    fn assemble(clock: C, printer: P, ui: U, sales_service: S, config: RegisterConfig) -> Self {
        CashRegister {
            clock,
            printer,
            ui,
            sales_service,
            config,
            cache: TransactionCache::new(),
            last_scanned: None,
        }
    }

    /// Handles one barcode from the scanner.
    ///
    /// Unknown barcodes end up as an error message on the display and leave
    /// the transaction untouched; they are never returned to the caller.
    pub fn scan(&mut self, barcode: impl Into<Barcode>) {
        let barcode = barcode.into();

        match self.sales_service.lookup_product(barcode) {
            Ok(product) => self.add_product(barcode, product),
            Err(err) => {
                warn!(%barcode, error = %err, "Scan rejected");
                self.ui
                    .display_error_message(&self.config.unknown_product_message);
            }
        }
    }

    fn add_product(&mut self, barcode: Barcode, product: Product) {
        let record = SalesRecord::new(barcode, self.clock.today(), product.price());
        let quantity = self.cache.record_scan(product.clone(), record);
        debug!(%barcode, name = %product.short_name, quantity, "Product scanned");

        if product.perishable {
            self.last_scanned = Some(product.clone());
            self.ui.display_calendar();
        }

        self.ui.display_product(&product);
    }

    /// Applies the best-before markdown to the last scanned perishable
    /// product and returns its new sales price.
    ///
    /// ## Errors
    /// - `UnknownBestBefore` when no date is given
    /// - `NoPerishableScanned` when the open transaction holds no perishable
    ///   product to correct
    ///
    /// The transaction is unchanged on error.
    pub fn correct_sales_price(&mut self, best_before: Option<NaiveDate>) -> RegisterResult<Money> {
        let best_before = best_before.ok_or(RegisterError::UnknownBestBefore)?;
        let days = days_until(self.clock.today(), best_before);

        let product = self
            .last_scanned
            .as_ref()
            .ok_or(RegisterError::NoPerishableScanned)?;
        let record = self
            .cache
            .get_mut(product)
            .ok_or(RegisterError::NoPerishableScanned)?;

        let price = self.config.markdown.sales_price(product.price(), days);
        record.set_sales_price(price);
        record.set_best_before(best_before);

        debug!(
            barcode = %product.barcode,
            %best_before,
            days,
            sales_price = price.cents(),
            "Sales price corrected"
        );
        Ok(price)
    }

    /// Submits every line item to the sales service in scan order and
    /// starts a fresh transaction. Returns the number of records submitted.
    pub fn finalize_sales_transaction(&mut self) -> usize {
        let total = self.cache.total();
        let mut submitted = 0;

        for (_, record) in self.cache.drain() {
            self.sales_service.sold(record);
            submitted += 1;
        }
        self.last_scanned = None;

        info!(records = submitted, total_cents = total.cents(), "Sales transaction finalized");
        submitted
    }

    /// Prints one line per line item, perishables first. The transaction
    /// stays open.
    pub fn print_receipt(&mut self) {
        for line in receipt_lines(&self.cache) {
            self.printer.println(&line.to_string());
        }
    }

    /// The lines `print_receipt` would print.
    pub fn receipt_lines(&self) -> Vec<ReceiptLine> {
        receipt_lines(&self.cache)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn cache(&self) -> &TransactionCache {
        &self.cache
    }

    /// The product a best-before correction would apply to.
    pub fn last_scanned(&self) -> Option<&Product> {
        self.last_scanned.as_ref()
    }

    /// True when no transaction is open.
    pub fn is_idle(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn config(&self) -> &RegisterConfig {
        &self.config
    }

    pub fn printer(&self) -> &P {
        &self.printer
    }

    pub fn printer_mut(&mut self) -> &mut P {
        &mut self.printer
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    pub fn sales_service(&self) -> &S {
        &self.sales_service
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemorySalesService;
    use crate::error::ValidationError;
    use crate::ports::FixedClock;
    use crate::pricing::MarkdownPolicy;
    use chrono::Duration;
    use std::cell::Cell;

    // -------------------------------------------------------------------------
    // Test doubles
    // -------------------------------------------------------------------------

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Shown {
        Product(Product),
        Calendar,
        Error(String),
    }

    #[derive(Debug, Default)]
    struct RecordingUi {
        shown: Vec<Shown>,
    }

    impl RecordingUi {
        fn products(&self) -> Vec<&Product> {
            self.shown
                .iter()
                .filter_map(|s| match s {
                    Shown::Product(p) => Some(p),
                    _ => None,
                })
                .collect()
        }

        fn calendars(&self) -> usize {
            self.shown.iter().filter(|s| **s == Shown::Calendar).count()
        }

        fn errors(&self) -> Vec<&str> {
            self.shown
                .iter()
                .filter_map(|s| match s {
                    Shown::Error(m) => Some(m.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Ui for RecordingUi {
        fn display_product(&mut self, product: &Product) {
            self.shown.push(Shown::Product(product.clone()));
        }

        fn display_calendar(&mut self) {
            self.shown.push(Shown::Calendar);
        }

        fn display_error_message(&mut self, message: &str) {
            self.shown.push(Shown::Error(message.to_string()));
        }
    }

    /// Catalog that counts lookups.
    #[derive(Debug)]
    struct CountingService {
        inner: InMemorySalesService,
        lookups: Cell<usize>,
    }

    impl SalesService for CountingService {
        fn lookup_product(&self, barcode: Barcode) -> RegisterResult<Product> {
            self.lookups.set(self.lookups.get() + 1);
            self.inner.lookup_product(barcode)
        }

        fn sold(&mut self, record: SalesRecord) {
            self.inner.sold(record);
        }
    }

    impl CountingService {
        fn sold_records(&self) -> &[SalesRecord] {
            self.inner.sold_records()
        }
    }

    type TestRegister = CashRegister<FixedClock, Vec<String>, RecordingUi, CountingService>;

    fn lamp() -> Product {
        Product::new("led lamp", "Led Lamp", 250, 1_234, false)
    }

    fn banana() -> Product {
        Product::new("banana", "Bananas Fyffes", 150, 9_234, true)
    }

    fn cheese() -> Product {
        Product::new("cheese", "Gouda 48+", 800, 7_687, true)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    fn register() -> TestRegister {
        register_with(RegisterConfig::default())
    }

    fn register_with(config: RegisterConfig) -> TestRegister {
        let catalog = InMemorySalesService::with_products([lamp(), banana(), cheese()]).unwrap();
        let service = CountingService {
            inner: catalog,
            lookups: Cell::new(0),
        };
        CashRegister::with_config(
            FixedClock(today()),
            Vec::new(),
            RecordingUi::default(),
            service,
            config,
        )
        .unwrap()
    }

    // -------------------------------------------------------------------------
    // scan
    // -------------------------------------------------------------------------

    #[test]
    fn test_lookup_and_display_non_perishable_product() {
        let mut register = register();
        register.scan(lamp().barcode);

        assert_eq!(register.sales_service().lookups.get(), 1);
        assert_eq!(register.ui().products(), [&lamp()]);
        assert_eq!(register.ui().calendars(), 0);
        assert!(register.last_scanned().is_none());
    }

    #[test]
    fn test_lookup_and_display_perishable_product() {
        let mut register = register();
        register.scan(banana().barcode);

        assert_eq!(register.sales_service().lookups.get(), 1);
        assert_eq!(register.ui().products(), [&banana()]);
        assert_eq!(register.ui().calendars(), 1);
        assert_eq!(register.last_scanned(), Some(&banana()));
    }

    #[test]
    fn test_calendar_is_prompted_before_product_display() {
        let mut register = register();
        register.scan(cheese().barcode);

        assert_eq!(
            register.ui().shown,
            [Shown::Calendar, Shown::Product(cheese())]
        );
    }

    #[test]
    fn test_unknown_product_shows_error_message() {
        let mut register = register();
        register.scan(0u32);

        assert_eq!(register.ui().errors(), ["This product is unknown"]);
        assert!(register.ui().products().is_empty());
        assert!(register.is_idle());
    }

    #[test]
    fn test_unknown_product_message_is_configurable() {
        let mut register = register_with(RegisterConfig {
            unknown_product_message: "Onbekend product".to_string(),
            ..RegisterConfig::default()
        });
        register.scan(4_242u32);

        assert_eq!(register.ui().errors(), ["Onbekend product"]);
    }

    #[test]
    fn test_scan_product_twice_increases_quantity() {
        let mut register = register();
        register.scan(lamp().barcode);
        register.scan(lamp().barcode);

        assert_eq!(register.cache().len(), 1);
        assert_eq!(register.finalize_sales_transaction(), 1);

        let sold = register.sales_service().sold_records();
        assert_eq!(sold.len(), 1);
        assert_eq!(sold[0].quantity, 2);
    }

    #[test]
    fn test_quantity_keeps_counting_past_two() {
        let mut register = register();
        for _ in 0..3 {
            register.scan(lamp().barcode);
        }
        register.print_receipt();

        assert_eq!(
            register.printer(),
            &["Product: Led Lamp, priced at 250, with quantity = 3"]
        );
    }

    // -------------------------------------------------------------------------
    // finalize
    // -------------------------------------------------------------------------

    #[test]
    fn test_finalize_submits_sales_record() {
        let mut register = register();
        register.scan(lamp().barcode);
        register.finalize_sales_transaction();

        let expected = SalesRecord::new(lamp().barcode, today(), lamp().price());
        assert_eq!(register.sales_service().sold_records(), [expected]);
    }

    #[test]
    fn test_receipt_after_finalize_is_empty() {
        let mut register = register();
        register.scan(lamp().barcode);
        register.scan(cheese().barcode);
        register.finalize_sales_transaction();
        register.print_receipt();

        assert!(register.printer().is_empty());
        assert!(register.is_idle());
        assert!(register.last_scanned().is_none());
    }

    #[test]
    fn test_finalize_submits_in_scan_order_and_only_once() {
        let mut register = register();
        register.scan(cheese().barcode);
        register.scan(lamp().barcode);
        register.scan(banana().barcode);

        assert_eq!(register.finalize_sales_transaction(), 3);
        assert_eq!(register.finalize_sales_transaction(), 0);

        let barcodes: Vec<u32> = register
            .sales_service()
            .sold_records()
            .iter()
            .map(|r| r.barcode.value())
            .collect();
        assert_eq!(barcodes, [7_687, 1_234, 9_234]);
    }

    // -------------------------------------------------------------------------
    // correct_sales_price
    // -------------------------------------------------------------------------

    fn sold_price_for(product: Product, days: i64) -> i64 {
        let mut register = register();
        register.scan(product.barcode);
        register
            .correct_sales_price(Some(today() + Duration::days(days)))
            .unwrap();
        register.finalize_sales_transaction();
        register.sales_service().sold_records()[0].sales_price_cents
    }

    #[test]
    fn test_price_reduction_near_best_before() {
        // (days to best-before, expected price) for cheese at 800
        let cases = [(10, 800), (2, 800), (1, 520), (0, 280), (-1, 0)];
        for (days, expected) in cases {
            assert_eq!(sold_price_for(cheese(), days), expected, "days = {days}");
        }
    }

    #[test]
    fn test_price_reduction_rounds_half_cents_up() {
        // banana at 150: 97.5 → 98, 52.5 → 53
        assert_eq!(sold_price_for(banana(), 2), 150);
        assert_eq!(sold_price_for(banana(), 1), 98);
        assert_eq!(sold_price_for(banana(), 0), 53);
        assert_eq!(sold_price_for(banana(), -1), 0);
    }

    #[test]
    fn test_correction_sets_best_before_on_record() {
        let mut register = register();
        let best_before = today() + Duration::days(1);
        register.scan(banana().barcode);

        let price = register.correct_sales_price(Some(best_before)).unwrap();
        assert_eq!(price.cents(), 98);

        let record = register.cache().get(&banana()).unwrap();
        assert_eq!(record.best_before, Some(best_before));
        assert_eq!(record.unit_price_cents, 150);
    }

    #[test]
    fn test_correction_targets_last_perishable_only() {
        let mut register = register();
        register.scan(cheese().barcode);
        register.scan(banana().barcode);
        register.scan(lamp().barcode);
        register.correct_sales_price(Some(today())).unwrap();

        assert_eq!(register.cache().get(&banana()).unwrap().sales_price_cents, 53);
        assert_eq!(register.cache().get(&cheese()).unwrap().sales_price_cents, 800);
        assert_eq!(register.cache().get(&lamp()).unwrap().sales_price_cents, 250);
    }

    #[test]
    fn test_correct_sales_price_without_date_fails() {
        let mut register = register();
        register.scan(banana().barcode);

        let err = register.correct_sales_price(None).unwrap_err();
        assert!(matches!(err, RegisterError::UnknownBestBefore));

        let record = register.cache().get(&banana()).unwrap();
        assert_eq!(record.sales_price_cents, 150);
        assert_eq!(record.best_before, None);
    }

    #[test]
    fn test_correct_sales_price_without_perishable_fails() {
        let mut register = register();
        register.scan(lamp().barcode);

        let err = register.correct_sales_price(Some(today())).unwrap_err();
        assert!(matches!(err, RegisterError::NoPerishableScanned));
        assert_eq!(register.cache().get(&lamp()).unwrap().sales_price_cents, 250);
    }

    #[test]
    fn test_correct_sales_price_after_finalize_fails() {
        let mut register = register();
        register.scan(banana().barcode);
        register.finalize_sales_transaction();

        let err = register.correct_sales_price(Some(today())).unwrap_err();
        assert!(matches!(err, RegisterError::NoPerishableScanned));
    }

    #[test]
    fn test_custom_markdown_policy() {
        let mut register = register_with(RegisterConfig {
            markdown: MarkdownPolicy {
                one_day_bps: 5_000,
                ..MarkdownPolicy::default()
            },
            ..RegisterConfig::default()
        });
        register.scan(cheese().barcode);

        let price = register
            .correct_sales_price(Some(today() + Duration::days(1)))
            .unwrap();
        assert_eq!(price.cents(), 400);
    }

    #[test]
    fn test_markdown_above_full_price_is_rejected() {
        let config = RegisterConfig {
            markdown: MarkdownPolicy {
                one_day_bps: 20_000,
                ..MarkdownPolicy::default()
            },
            ..RegisterConfig::default()
        };
        let catalog = InMemorySalesService::with_products([cheese()]).unwrap();

        let result = CashRegister::with_config(
            FixedClock(today()),
            Vec::<String>::new(),
            RecordingUi::default(),
            catalog,
            config,
        );

        assert!(matches!(
            result,
            Err(RegisterError::Validation(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_empty_unknown_product_message_is_rejected() {
        let config = RegisterConfig {
            unknown_product_message: String::new(),
            ..RegisterConfig::default()
        };
        let catalog = InMemorySalesService::with_products([cheese()]).unwrap();

        let result = CashRegister::with_config(
            FixedClock(today()),
            Vec::<String>::new(),
            RecordingUi::default(),
            catalog,
            config,
        );

        assert!(matches!(result, Err(RegisterError::Validation(_))));
    }

    // -------------------------------------------------------------------------
    // print_receipt
    // -------------------------------------------------------------------------

    #[test]
    fn test_print_in_proper_order() {
        let mut register = register();
        register.scan(cheese().barcode);
        register.scan(lamp().barcode);
        register.scan(banana().barcode);
        register.print_receipt();

        assert_eq!(
            register.printer(),
            &[
                "Product: Gouda 48+, priced at 800, with quantity = 1",
                "Product: Bananas Fyffes, priced at 150, with quantity = 1",
                "Product: Led Lamp, priced at 250, with quantity = 1",
            ]
        );

        // printing does not close the transaction
        assert_eq!(register.finalize_sales_transaction(), 3);
    }

    #[test]
    fn test_receipt_shows_marked_down_price() {
        let mut register = register();
        register.scan(lamp().barcode);
        register.scan(cheese().barcode);
        register.correct_sales_price(Some(today() - Duration::days(1))).unwrap();

        let lines = register.receipt_lines();
        assert_eq!(lines[0].description, "Gouda 48+");
        assert!(lines[0].sales_price.is_zero());
        assert_eq!(lines[1].sales_price.cents(), 250);
    }
}
