//! # Error Types
//!
//! Domain-specific error types for register-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  register-core errors (this file)                                       │
//! │  ├── RegisterError    - Scan / pricing workflow failures                │
//! │  └── ValidationError  - Catalog and config validation failures          │
//! │                                                                         │
//! │  register-terminal errors (app)                                         │
//! │  └── AppError         - Config file, console I/O, input parsing         │
//! │                                                                         │
//! │  Flow: ValidationError → RegisterError → AppError → stderr              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Where Each Error Ends Up
//! - `UnknownProduct` never leaves `CashRegister::scan`; it becomes a message
//!   on the customer display.
//! - `UnknownBestBefore` and `NoPerishableScanned` are returned to the caller
//!   of `CashRegister::correct_sales_price`.

use thiserror::Error;

use crate::types::Barcode;

// =============================================================================
// Register Error
// =============================================================================

/// Register workflow errors.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// The sales service has no product for this barcode.
    #[error("Unknown product: {0}")]
    UnknownProduct(Barcode),

    /// A best-before correction was requested without a date.
    ///
    /// ## When This Occurs
    /// - The cashier closed the calendar prompt without picking a date
    #[error("Best-before date is required")]
    UnknownBestBefore,

    /// A best-before correction was requested but no perishable product is
    /// part of the open transaction.
    #[error("No perishable product scanned in this transaction")]
    NoPerishableScanned,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for catalog entries and configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Duplicate value (e.g., two catalog entries with one barcode).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with RegisterError.
pub type RegisterResult<T> = Result<T, RegisterError>;

// =============================================================================
// Unit Tests
// =============================================================================
