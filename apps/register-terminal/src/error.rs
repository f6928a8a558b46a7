//! # Application Errors
//!
//! Everything that can stop the terminal register.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Startup                                                                │
//! │  ├── config file unreadable / invalid TOML ──► AppError ──► exit(1)     │
//! │  └── invalid catalog or register settings ──► AppError ──► exit(1)      │
//! │                                                                         │
//! │  Session                                                                │
//! │  ├── unparseable command ──► AppError::InvalidCommand ──► shown, go on  │
//! │  ├── rejected correction ──► AppError::Register ──────► shown, go on    │
//! │  └── stdin / stdout failure ──► AppError::Io ──────────► exit(1)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use register_core::{RegisterError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A register operation failed.
    #[error(transparent)]
    Register(#[from] RegisterError),

    /// Configuration values are invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    /// Config file could not be parsed.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be written out.
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Sales journal line could not be encoded.
    #[error("Failed to encode journal entry: {0}")]
    Journal(#[from] serde_json::Error),

    /// Cashier input that is not a command.
    #[error("Unknown command '{0}' (type 'help')")]
    InvalidCommand(String),

    /// Console or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True for errors the session reports and then carries on from.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::InvalidCommand(_) | AppError::Register(_))
    }
}

/// Result alias for the terminal app.
pub type AppResult<T> = Result<T, AppError>;
