//! # FarmTech CLI Library
//!
//! Interactive menu for registering, listing, updating and deleting
//! cultivation records. All business logic lives in `farmtech-core`.
//!
//! ## Module Organization
//! ```text
//! farmtech_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── Command-line flags
//! ├── console.rs      ◄─── Prompts, numeric input loop, screen control
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration + number formatting
//! │   └── session.rs  ◄─── Session (store + config + console), main loop
//! ├── commands/
//! │   ├── mod.rs      ◄─── Shared prompts
//! │   ├── entry.rs    ◄─── Data entry
//! │   ├── report.rs   ◄─── Report + statistics
//! │   ├── update.rs   ◄─── Positional update
//! │   └── delete.rs   ◄─── Confirmed positional delete
//! └── error.rs        ◄─── AppError
//! ```

pub mod cli;
pub mod commands;
pub mod console;
pub mod error;
pub mod state;

use std::io;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::{AppError, AppResult};
use state::{ConfigState, Session};

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Parse flags ──────────────────────────────────────────────────────► │
/// │  2. Initialize Logging (stderr, RUST_LOG or default filter) ──────────► │
/// │  3. Load ConfigState (env), apply flags ──────────────────────────────► │
/// │  4. Create Session with an empty RecordStore ─────────────────────────► │
/// │  5. Run the main menu until "Exit" or end of input ───────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    info!("Starting FarmTech");

    let mut config = ConfigState::from_env();
    cli.apply(&mut config);
    debug!(
        config = %serde_json::to_string(&config).unwrap_or_default(),
        "Configuration loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, stdin.lock(), stdout.lock());

    match session.run() {
        Ok(()) => {
            info!(records = session.store().len(), "Session finished");
            Ok(())
        }
        Err(AppError::InputClosed) => {
            info!(records = session.store().len(), "Input closed, exiting");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=farmtech=trace` - Show trace for farmtech crates only
/// - Default: WARN, INFO for farmtech crates (DEBUG with `--verbose`)
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "debug"
    } else {
        "warn,farmtech_cli=info,farmtech_core=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
