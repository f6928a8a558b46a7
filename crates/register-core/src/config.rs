//! # Register Configuration
//!
//! Tunables of the register core. Loaded by the application (from a TOML
//! file, see `register-terminal`) and handed to `CashRegister::with_config`.
//!
//! ## Config File Format
//! ```toml
//! [register]
//! unknown_product_message = "This product is unknown"
//!
//! [register.markdown]
//! one_day_bps = 6500
//! same_day_bps = 3500
//! expired_bps = 0
//! ```

use serde::{Deserialize, Serialize};

use crate::pricing::MarkdownPolicy;
use crate::validation::{validate_message, ValidationResult};
use crate::UNKNOWN_PRODUCT_MESSAGE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterConfig {
    /// Perishable markdown percentages.
    pub markdown: MarkdownPolicy,

    /// Shown on the display when a barcode is not in the catalog.
    pub unknown_product_message: String,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        RegisterConfig {
            markdown: MarkdownPolicy::default(),
            unknown_product_message: UNKNOWN_PRODUCT_MESSAGE.to_string(),
        }
    }
}

impl RegisterConfig {
    pub fn validate(&self) -> ValidationResult<()> {
        self.markdown.validate()?;
        validate_message("unknown_product_message", &self.unknown_product_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RegisterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.unknown_product_message, "This product is unknown");
        assert_eq!(config.markdown.one_day_bps, 6_500);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: RegisterConfig = toml::from_str(
            r#"
            [markdown]
            same_day_bps = 2000
            "#,
        )
        .unwrap();

        assert_eq!(config.markdown.same_day_bps, 2_000);
        assert_eq!(config.markdown.one_day_bps, 6_500);
        assert_eq!(config.unknown_product_message, UNKNOWN_PRODUCT_MESSAGE);
    }

    #[test]
    fn test_empty_message_rejected() {
        let config = RegisterConfig {
            unknown_product_message: String::new(),
            ..RegisterConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
