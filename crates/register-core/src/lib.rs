//! # register-core: Pure Business Logic for the Checkout Register
//!
//! This crate is the **heart** of the checkout register. It holds the
//! transaction state of a cash register and every pricing rule, with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Register Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              register-terminal (stdin / stdout)                 │   │
//! │  │   barcode input ──► CashRegister ──► console UI, printer        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ports (traits)                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ register-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │ register  │  │   cache   │  │  pricing  │  │  receipt  │   │   │
//! │  │   │CashRegist.│  │Transaction│  │ Markdown  │  │ReceiptLine│   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │   ports   │  │  catalog  │   │   │
//! │  │   │ Product   │  │   Money   │  │ Ui,Printer│  │ InMemory  │   │   │
//! │  │   │SalesRecord│  │           │  │Clock,Sales│  │SalesServ. │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`register`] - `CashRegister`: scan, correct price, finalize, print
//! - [`cache`] - Insertion-ordered transaction cache
//! - [`pricing`] - Perishable markdown near the best-before date
//! - [`receipt`] - Receipt lines, perishables first
//! - [`ports`] - Collaborator traits (sales service, UI, printer, clock)
//! - [`catalog`] - In-memory sales service
//! - [`types`] - Barcode, Product, SalesRecord
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`config`] - Register configuration
//! - [`error`] / [`validation`] - Domain errors and input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use register_core::{CashRegister, FixedClock, InMemorySalesService, Product, Ui};
//!
//! struct Display;
//! impl Ui for Display {
//!     fn display_product(&mut self, _: &Product) {}
//!     fn display_calendar(&mut self) {}
//!     fn display_error_message(&mut self, _: &str) {}
//! }
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
//! let catalog = InMemorySalesService::with_products([
//!     Product::new("cheese", "Gouda 48+", 800, 7_687, true),
//! ])?;
//!
//! let printer: Vec<String> = Vec::new();
//! let mut register = CashRegister::new(FixedClock(today), printer, Display, catalog);
//! register.scan(7_687u32);
//! register.correct_sales_price(today.succ_opt())?; // best before tomorrow: 65%
//! register.print_receipt();
//!
//! assert_eq!(register.printer()[0], "Product: Gouda 48+, priced at 520, with quantity = 1");
//! # Ok::<(), register_core::RegisterError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod money;
pub mod ports;
pub mod pricing;
pub mod receipt;
pub mod register;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cache::TransactionCache;
pub use catalog::InMemorySalesService;
pub use config::RegisterConfig;
pub use error::{RegisterError, RegisterResult, ValidationError};
pub use money::Money;
pub use ports::{Clock, FixedClock, Printer, SalesService, SystemClock, Ui};
pub use pricing::{Markdown, MarkdownPolicy};
pub use receipt::ReceiptLine;
pub use register::CashRegister;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Display message for a barcode the catalog does not know.
pub const UNKNOWN_PRODUCT_MESSAGE: &str = "This product is unknown";

/// Maximum product description length.
///
/// ## Business Reason
/// Receipt lines must fit a 48 column thermal printer together with the
/// price and quantity.
pub const MAX_DESCRIPTION_LEN: usize = 48;
