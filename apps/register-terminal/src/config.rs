//! # Terminal Configuration
//!
//! Store details, register tunables and the product catalog.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     REGISTER_STORE_NAME="Corner Shop"                                  │
//! │     REGISTER_UNKNOWN_PRODUCT_MESSAGE="Scan again"                      │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path> or REGISTER_CONFIG=<path>                          │
//! │     ~/.config/checkout-register/register.toml (Linux)                  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     demo catalog, 65% / 35% / 0% markdown                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Corner Shop"
//!
//! [register]
//! unknown_product_message = "This product is unknown"
//!
//! [register.markdown]
//! one_day_bps = 6500
//! same_day_bps = 3500
//! expired_bps = 0
//!
//! [[catalog]]
//! barcode = 9234
//! short_name = "banana"
//! description = "Bananas Fyffes"
//! price_cents = 150
//! perishable = true
//! ```

use register_core::{InMemorySalesService, Product, RegisterConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::AppResult;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "REGISTER_CONFIG";

// =============================================================================
// Store Config
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Printed as the receipt header.
    #[serde(default = "default_store_name")]
    pub name: String,
}

fn default_store_name() -> String {
    "Checkout Register".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            name: default_store_name(),
        }
    }
}

// =============================================================================
// Terminal Config
// =============================================================================

/// Complete terminal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub register: RegisterConfig,

    /// Products known to the sales service.
    #[serde(default = "default_catalog")]
    pub catalog: Vec<Product>,
}

/// Demo catalog.
fn default_catalog() -> Vec<Product> {
    vec![
        Product::new("led lamp", "Led Lamp", 250, 1_234, false),
        Product::new("banana", "Bananas Fyffes", 150, 9_234, true),
        Product::new("cheese", "Gouda 48+", 800, 7_687, true),
        Product::new("milk", "Whole Milk 1L", 119, 5_501, true),
        Product::new("bread", "Sourdough Loaf", 349, 5_502, true),
        Product::new("batteries", "AA Batteries 4-pack", 599, 3_003, false),
    ]
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            store: StoreConfig::default(),
            register: RegisterConfig::default(),
            catalog: default_catalog(),
        }
    }
}

impl TerminalConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path, `REGISTER_CONFIG`, or platform default)
    /// 3. Environment variables
    ///
    /// A missing file is not an error; an unreadable or invalid one is.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading register config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Writes configuration to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;

        info!(?path, "Register config saved");
        Ok(())
    }

    /// Validates register settings and the catalog.
    pub fn validate(&self) -> AppResult<()> {
        self.register.validate()?;
        self.sales_service()?;
        Ok(())
    }

    /// Builds the in-memory sales service from the catalog.
    pub fn sales_service(&self) -> AppResult<InMemorySalesService> {
        Ok(InMemorySalesService::with_products(self.catalog.iter().cloned())?)
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from a key lookup (the process environment in
    /// production).
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("REGISTER_STORE_NAME") {
            debug!(store = %name, "Overriding store name from environment");
            self.store.name = name;
        }

        if let Some(message) = lookup("REGISTER_UNKNOWN_PRODUCT_MESSAGE") {
            self.register.unknown_product_message = message;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "checkout", "register")
            .map(|dirs| dirs.config_dir().join("register.toml"))
    }
}
