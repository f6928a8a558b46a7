//! # Register Terminal Entry Point
//!
//! ```text
//! stdin  ──► cashier commands (barcodes, bb <date>, receipt, done)
//! stdout ◄── receipt printer
//! stderr ◄── display prompts, sales journal, logs
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match register_terminal::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("register-terminal: {err}");
            ExitCode::FAILURE
        }
    }
}
