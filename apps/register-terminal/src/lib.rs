//! # Register Terminal Library
//!
//! Runs a checkout register on a text console.
//!
//! ## Module Organization
//! ```text
//! register_terminal/
//! ├── lib.rs          ◄─── You are here (startup & session loop)
//! ├── config.rs       ◄─── TOML + environment configuration
//! ├── command.rs      ◄─── Cashier input parsing
//! ├── devices.rs      ◄─── Console printer, display, sales journal
//! └── error.rs        ◄─── AppError
//! ```
//!
//! ## Session Example
//! ```text
//! $ register-terminal
//! Checkout Register - type 'help' for commands
//! 7687
//! Best-before date? (bb YYYY-MM-DD)
//! Gouda 48+                             $8.00
//! bb 2024-03-15
//! Sales price now $5.20
//! r
//! == Checkout Register ==
//! Product: Gouda 48+, priced at 520, with quantity = 1
//! Total: 520
//! done
//! {"barcode":7687,"sale_date":"2024-03-14",...}
//! Transaction closed: 1 line(s)
//! ```

pub mod command;
pub mod config;
pub mod devices;
pub mod error;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use register_core::{CashRegister, Clock, Printer, SalesService, SystemClock, Ui};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use command::{Command, HELP};
use config::TerminalConfig;
use devices::{ConsoleUi, JournalSalesService, LinePrinter};
use error::{AppError, AppResult};

/// Totals of one cashier session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Finalized transactions with at least one line item.
    pub transactions: usize,
    /// Sales records submitted over all transactions.
    pub records_sold: usize,
}

// =============================================================================
// Command Line
// =============================================================================

/// Command line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    /// `--config <path>`
    pub config: Option<PathBuf>,
    /// `--write-config <path>`: write the effective config and exit.
    pub write_config: Option<PathBuf>,
    /// `--help`
    pub help: bool,
}

pub const USAGE: &str = "\
usage: register-terminal [--config <path>] [--write-config <path>]

  --config <path>         read configuration from <path>
  --write-config <path>   write the effective configuration to <path> and exit";

impl Args {
    /// Parses arguments (without the program name).
    pub fn parse<I>(args: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => parsed.config = Some(Self::value(&arg, args.next())?),
                "--write-config" => parsed.write_config = Some(Self::value(&arg, args.next())?),
                "--help" | "-h" => parsed.help = true,
                _ => return Err(AppError::InvalidCommand(arg)),
            }
        }

        Ok(parsed)
    }

    fn value(flag: &str, value: Option<String>) -> AppResult<PathBuf> {
        value
            .map(PathBuf::from)
            .ok_or_else(|| AppError::InvalidCommand(format!("{flag} needs a path")))
    }
}

// =============================================================================
// Startup
// =============================================================================

/// Runs the terminal register.
///
/// ## Startup Sequence
/// 1. Initialize tracing (stderr, `RUST_LOG` aware)
/// 2. Parse arguments and load configuration
/// 3. Build the sales service from the catalog
/// 4. Wire printer (stdout), display (stderr) and system clock
/// 5. Run the session on stdin until `quit` or end of input
pub fn run() -> AppResult<()> {
    init_tracing();

    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = TerminalConfig::load(args.config)?;
    if let Some(path) = args.write_config {
        return config.save(&path);
    }

    let sales_service = JournalSalesService::new(config.sales_service()?, io::stderr());
    info!(
        store = %config.store.name,
        products = sales_service.catalog().product_count(),
        "Starting register terminal"
    );

    let mut register = CashRegister::with_config(
        SystemClock,
        LinePrinter::new(io::stdout()),
        ConsoleUi::new(io::stderr()),
        sales_service,
        config.register.clone(),
    )?;

    let summary = run_session(&mut register, io::stdin().lock(), &config.store.name)?;

    if !register.is_idle() {
        warn!(
            lines = register.cache().len(),
            "Session ended with an open transaction; it was not submitted"
        );
    }
    info!(
        transactions = summary.transactions,
        records = summary.records_sold,
        "Register terminal stopped"
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=register_core=trace` - Trace the register core only
/// - Default: INFO, DEBUG for the register crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,register_core=debug,register_terminal=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// =============================================================================
// Session
// =============================================================================

/// Feeds cashier input lines to the register until `quit` or end of input.
///
/// Bad input and rejected corrections are shown on the display and the
/// session continues; I/O failures end it.
pub fn run_session<C, P, W, S, R>(
    register: &mut CashRegister<C, P, ConsoleUi<W>, S>,
    input: R,
    store_name: &str,
) -> AppResult<SessionSummary>
where
    C: Clock,
    P: Printer,
    W: Write,
    S: SalesService,
    R: BufRead,
{
    let mut summary = SessionSummary::default();
    register
        .ui_mut()
        .notice(&format!("{store_name} - type 'help' for commands"));

    for line in input.lines() {
        let line = line?;

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) if err.is_recoverable() => {
                debug!(input = %line.trim(), "Rejected cashier input");
                register.ui_mut().display_error_message(&err.to_string());
                continue;
            }
            Err(err) => return Err(err),
        };

        match command {
            Command::Scan(barcode) => register.scan(barcode),
            Command::BestBefore(date) => match register.correct_sales_price(date) {
                Ok(price) => register
                    .ui_mut()
                    .notice(&format!("Sales price now {price}")),
                Err(err) => register.ui_mut().display_error_message(&err.to_string()),
            },
            Command::Receipt => print_receipt(register, store_name),
            Command::Finalize => {
                let submitted = register.finalize_sales_transaction();
                if submitted > 0 {
                    summary.transactions += 1;
                    summary.records_sold += submitted;
                }
                register
                    .ui_mut()
                    .notice(&format!("Transaction closed: {submitted} line(s)"));
            }
            Command::Help => register.ui_mut().notice(HELP),
            Command::Quit => break,
        }
    }

    Ok(summary)
}

/// Header, the register's receipt lines, and a total. Every amount on the
/// receipt is in cents.
fn print_receipt<C, P, U, S>(register: &mut CashRegister<C, P, U, S>, store_name: &str)
where
    C: Clock,
    P: Printer,
    U: Ui,
    S: SalesService,
{
    let total = register.cache().total();

    register.printer_mut().println(&format!("== {store_name} =="));
    register.print_receipt();
    register
        .printer_mut()
        .println(&format!("Total: {}", total.cents()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use register_core::{FixedClock, InMemorySalesService, Product};

    type TestRegister =
        CashRegister<FixedClock, Vec<String>, ConsoleUi<Vec<u8>>, InMemorySalesService>;

    fn register() -> TestRegister {
        let catalog = InMemorySalesService::with_products([
            Product::new("led lamp", "Led Lamp", 250, 1_234, false),
            Product::new("banana", "Bananas Fyffes", 150, 9_234, true),
            Product::new("cheese", "Gouda 48+", 800, 7_687, true),
        ])
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();

        CashRegister::new(
            FixedClock(today),
            Vec::new(),
            ConsoleUi::new(Vec::new()),
            catalog,
        )
    }

    fn display(register: &TestRegister) -> String {
        String::from_utf8(register.ui().get_ref().clone()).unwrap()
    }

    #[test]
    fn test_session_prints_receipt_and_finalizes() {
        let mut register = register();
        let input = "7687\n1234\nbb 2024-03-15\n9234\nr\ndone\nq\n";

        let summary = run_session(&mut register, input.as_bytes(), "Corner Shop").unwrap();

        assert_eq!(
            summary,
            SessionSummary {
                transactions: 1,
                records_sold: 3
            }
        );
        // cheese was the last perishable when the date was entered
        assert_eq!(
            register.printer(),
            &[
                "== Corner Shop ==",
                "Product: Gouda 48+, priced at 520, with quantity = 1",
                "Product: Bananas Fyffes, priced at 150, with quantity = 1",
                "Product: Led Lamp, priced at 250, with quantity = 1",
                "Total: 920",
            ]
        );
        assert!(register.is_idle());
        assert_eq!(register.sales_service().sold_records().len(), 3);
    }

    #[test]
    fn test_session_applies_markdown_to_last_perishable() {
        let mut register = register();
        let input = "7687\nbb 2024-03-15\nr\n";

        run_session(&mut register, input.as_bytes(), "Shop").unwrap();

        assert_eq!(
            register.printer()[1],
            "Product: Gouda 48+, priced at 520, with quantity = 1"
        );
        // no `done`: transaction stays open
        assert!(!register.is_idle());
    }

    #[test]
    fn test_session_reports_errors_and_continues() {
        let mut register = register();
        let input = "42\nbb\nhello\n1234\nq\n1234\n";

        let summary = run_session(&mut register, input.as_bytes(), "Shop").unwrap();
        assert_eq!(summary, SessionSummary::default());

        // lines after `q` are not read
        assert_eq!(register.cache().len(), 1);
        assert_eq!(register.cache().iter().next().unwrap().1.quantity, 1);

        let shown = display(&register);
        assert!(shown.contains("! This product is unknown"));
        assert!(shown.contains("! Best-before date is required"));
        assert!(shown.contains("! Unknown command 'hello'"));
    }

    #[test]
    fn test_empty_finalize_is_not_counted() {
        let mut register = register();
        let summary = run_session(&mut register, "done\n".as_bytes(), "Shop").unwrap();
        assert_eq!(summary.transactions, 0);
    }

    #[test]
    fn test_args() {
        let args = Args::parse(["--config".to_string(), "/tmp/r.toml".to_string()]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/r.toml")));
        assert!(!args.help);

        assert!(Args::parse(["--help".to_string()]).unwrap().help);
        assert!(Args::parse(["--config".to_string()]).is_err());
        assert!(Args::parse(["--bogus".to_string()]).is_err());
    }
}
