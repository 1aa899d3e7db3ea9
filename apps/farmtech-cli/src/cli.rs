//! CLI argument definitions using clap.

use clap::Parser;

use crate::state::ConfigState;

/// FarmTech: cultivation record manager for coffee and corn plots
#[derive(Debug, Parser)]
#[command(name = "farmtech")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Do not clear the screen between menus
    #[arg(long)]
    pub no_clear: bool,

    /// Do not wait for ENTER after each action
    #[arg(long)]
    pub no_pause: bool,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Flags win over environment variables.
    pub fn apply(&self, config: &mut ConfigState) {
        if self.no_clear {
            config.clear_screen = false;
        }
        if self.no_pause {
            config.pause_after_action = false;
        }
    }
}
