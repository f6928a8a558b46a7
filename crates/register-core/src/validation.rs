//! # Validation Module
//!
//! Input validation for catalog entries and register configuration.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Config file loaded (terminal app)                                      │
//! │  ├── RegisterConfig::validate → validate_bps, validate_message          │
//! │  └── catalog entries ───────────► validate_product                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  InMemorySalesService::insert                                           │
//! │  └── validate_product + duplicate barcode check                         │
//! │                                                                         │
//! │  Scanning never validates: products come from a trusted catalog         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use register_core::validation::{validate_bps, validate_description};
//!
//! assert!(validate_description("Gouda 48+").is_ok());
//! assert!(validate_bps("markdown.same_day_bps", 3500).is_ok());
//! assert!(validate_bps("markdown.same_day_bps", 12_000).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::FULL_BPS;
use crate::types::Product;
use crate::MAX_DESCRIPTION_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product description.
///
/// ## Rules
/// - Must not be empty
/// - At most `MAX_DESCRIPTION_LEN` characters (receipt paper is narrow)
pub fn validate_description(description: &str) -> ValidationResult<()> {
    let description = description.trim();

    if description.is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates a message shown on the customer display.
pub fn validate_message(field: &str, message: &str) -> ValidationResult<()> {
    if message.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use register_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(250).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a percentage in basis points (0% to 100%).
pub fn validate_bps(field: &str, bps: u32) -> ValidationResult<()> {
    if bps > FULL_BPS {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: FULL_BPS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates a catalog product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.short_name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "short_name".to_string(),
        });
    }

    validate_description(&product.description)?;
    validate_price_cents(product.price_cents)
}

// =============================================================================
// Unit Tests
// =============================================================================
