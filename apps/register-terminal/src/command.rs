//! # Cashier Commands
//!
//! One line of cashier input becomes one `Command`.
//!
//! | input              | command                                   |
//! |--------------------|-------------------------------------------|
//! | `9234`             | scan barcode 9234                         |
//! | `bb 2024-03-15`    | best-before date for the last perishable  |
//! | `bb`               | calendar closed without a date            |
//! | `receipt`, `r`     | print the receipt                         |
//! | `done`, `d`        | finalize the sales transaction            |
//! | `help`, `?`        | list commands                             |
//! | `quit`, `q`        | leave the session                         |

use chrono::NaiveDate;
use register_core::Barcode;

use crate::error::{AppError, AppResult};

/// Date format accepted after `bb`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const HELP: &str = "\
<barcode>        scan a product
bb [YYYY-MM-DD]  best-before date of the last perishable product
receipt | r      print the receipt
done | d         finalize the sales transaction
help | ?         show this help
quit | q         leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Scan(Barcode),
    BestBefore(Option<NaiveDate>),
    Receipt,
    Finalize,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> AppResult<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();

        if words.next().is_some() {
            return Err(AppError::InvalidCommand(line.trim().to_string()));
        }

        let command = match (head.to_ascii_lowercase().as_str(), arg) {
            ("bb", None) => Command::BestBefore(None),
            ("bb", Some(date)) => NaiveDate::parse_from_str(date, DATE_FORMAT)
                .map(|d| Command::BestBefore(Some(d)))
                .map_err(|_| AppError::InvalidCommand(line.trim().to_string()))?,
            ("receipt" | "r", None) => Command::Receipt,
            ("done" | "d", None) => Command::Finalize,
            ("help" | "?", None) => Command::Help,
            ("quit" | "q" | "exit", None) => Command::Quit,
            (code, None) if code.chars().all(|c| c.is_ascii_digit()) => code
                .parse::<Barcode>()
                .map(Command::Scan)
                .map_err(|_| AppError::InvalidCommand(line.trim().to_string()))?,
            _ => return Err(AppError::InvalidCommand(line.trim().to_string())),
        };

        Ok(Some(command))
    }
}
