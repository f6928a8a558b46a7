//! # Terminal Devices
//!
//! Console stand-ins for the register hardware and back office.
//!
//! ```text
//! ┌──────────────────┬──────────────────────────┬─────────────────────────┐
//! │ port             │ implementation           │ writes to (production)  │
//! ├──────────────────┼──────────────────────────┼─────────────────────────┤
//! │ Printer          │ LinePrinter              │ stdout                  │
//! │ Ui               │ ConsoleUi                │ stderr                  │
//! │ SalesService     │ JournalSalesService      │ stderr (JSON lines)     │
//! └──────────────────┴──────────────────────────┴─────────────────────────┘
//! ```
//!
//! The ports return nothing, so write failures are logged and swallowed.

use std::io::Write;

use register_core::{
    Barcode, InMemorySalesService, Printer, Product, RegisterResult, SalesRecord, SalesService,
    Ui,
};
use tracing::warn;

use crate::error::AppResult;

fn write_line<W: Write>(out: &mut W, device: &str, line: &str) {
    if let Err(err) = writeln!(out, "{line}").and_then(|_| out.flush()) {
        warn!(device, error = %err, "Device write failed");
    }
}

// =============================================================================
// Printer
// =============================================================================

/// Receipt printer writing plain text lines.
#[derive(Debug)]
pub struct LinePrinter<W> {
    out: W,
}

impl<W: Write> LinePrinter<W> {
    pub fn new(out: W) -> Self {
        LinePrinter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Printer for LinePrinter<W> {
    fn println(&mut self, line: &str) {
        write_line(&mut self.out, "printer", line);
    }
}

// =============================================================================
// Display
// =============================================================================

/// Cashier display on a text console.
#[derive(Debug)]
pub struct ConsoleUi<W> {
    out: W,
}

impl<W: Write> ConsoleUi<W> {
    pub fn new(out: W) -> Self {
        ConsoleUi { out }
    }

    /// Free-form status line (banner, help, totals).
    pub fn notice(&mut self, text: &str) {
        write_line(&mut self.out, "display", text);
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Ui for ConsoleUi<W> {
    fn display_product(&mut self, product: &Product) {
        let price = product.price().to_string();
        let line = format!("{:<32} {:>10}", product.description, price);
        write_line(&mut self.out, "display", &line);
    }

    fn display_calendar(&mut self) {
        write_line(&mut self.out, "display", "Best-before date? (bb YYYY-MM-DD)");
    }

    fn display_error_message(&mut self, message: &str) {
        write_line(&mut self.out, "display", &format!("! {message}"));
    }
}

// =============================================================================
// Sales Service
// =============================================================================

/// In-memory catalog that also emits every sold record as a JSON line.
#[derive(Debug)]
pub struct JournalSalesService<W> {
    catalog: InMemorySalesService,
    journal: W,
}

impl<W: Write> JournalSalesService<W> {
    pub fn new(catalog: InMemorySalesService, journal: W) -> Self {
        JournalSalesService { catalog, journal }
    }

    pub fn catalog(&self) -> &InMemorySalesService {
        &self.catalog
    }

    pub fn into_inner(self) -> W {
        self.journal
    }

    fn write_entry(&mut self, record: &SalesRecord) -> AppResult<()> {
        let entry = serde_json::to_string(record)?;
        writeln!(self.journal, "{entry}")?;
        Ok(())
    }
}

impl<W: Write> SalesService for JournalSalesService<W> {
    fn lookup_product(&self, barcode: Barcode) -> RegisterResult<Product> {
        self.catalog.lookup_product(barcode)
    }

    fn sold(&mut self, record: SalesRecord) {
        if let Err(err) = self.write_entry(&record) {
            warn!(barcode = %record.barcode, error = %err, "Journal write failed");
        }
        self.catalog.sold(record);
    }
}
