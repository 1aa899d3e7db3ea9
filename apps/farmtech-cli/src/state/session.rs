//! # Session State
//!
//! One running menu session: the record store, the configuration and the
//! console, owned together for the lifetime of the process.
//!
//! ## Main Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  clear → main menu → read option                                        │
//! │     │                                                                   │
//! │     ├── 1 ─► commands::entry   ─┐                                       │
//! │     ├── 2 ─► commands::report  ─┤                                       │
//! │     ├── 3 ─► commands::update  ─┼─► CoreError? show + warn!             │
//! │     ├── 4 ─► commands::delete  ─┘        │                              │
//! │     │                                    ▼                              │
//! │     │                                  pause ──► back to the menu       │
//! │     └── 5 ─► farewell, return                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single-threaded: no locks, the session is the only owner of the store.

use std::io::{BufRead, Write};

use farmtech_core::RecordStore;
use tracing::{debug, warn};

use crate::commands;
use crate::console::Console;
use crate::error::AppResult;
use crate::state::ConfigState;

/// A menu session.
#[derive(Debug)]
pub struct Session<R, W> {
    pub(crate) store: RecordStore,
    pub(crate) config: ConfigState,
    pub(crate) console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty store.
    pub fn new(config: ConfigState, input: R, output: W) -> Self {
        let console = Console::new(input, output, config.clear_screen, config.pause_after_action);
        Session {
            store: RecordStore::new(),
            config,
            console,
        }
    }

    /// Read access to the store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Runs the main menu until the operator exits.
    ///
    /// ## Errors
    /// Only non-recoverable errors end the loop: terminal I/O failures and
    /// `InputClosed`. Rejected store operations are shown and the menu resumes.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            self.console.clear()?;
            self.main_menu()?;

            let option = self.console.line("\nChoose an option (1-5): ")?;
            debug!(option = %option.trim(), "Main menu selection");

            let result = match option.trim() {
                "1" => commands::entry::run(self),
                "2" => commands::report::run(self),
                "3" => commands::update::run(self),
                "4" => commands::delete::run(self),
                "5" => return self.farewell(),
                _ => self
                    .console
                    .say("\n❌ Invalid option! Enter a number from 1 to 5."),
            };

            match result {
                Ok(()) => {}
                Err(err) if err.is_recoverable() => {
                    warn!(error = %err, "Operation rejected");
                    self.console.say(format!("\n❌ {err}"))?;
                }
                Err(err) => return Err(err),
            }

            self.console.pause()?;
        }
    }

    fn main_menu(&mut self) -> AppResult<()> {
        self.console.banner("🌱 FARMTECH SOLUTIONS 🌱")?;
        self.console.say("       Digital Agriculture System")?;
        self.console.say("\n📋 MAIN MENU:\n")?;
        self.console.say("1 - Data Entry")?;
        self.console.say("2 - Data Report")?;
        self.console.say("3 - Update Data")?;
        self.console.say("4 - Delete Data")?;
        self.console.say("5 - Exit")
    }

    fn farewell(&mut self) -> AppResult<()> {
        self.console.clear()?;
        self.console.banner("👋 Thank you for using FarmTech Solutions!")?;
        self.console.say("\nShutting down...")
    }
}
