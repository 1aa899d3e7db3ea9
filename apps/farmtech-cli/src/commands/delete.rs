//! # Delete Data Command
//!
//! Removes one record after an explicit confirmation.

use std::io::{BufRead, Write};

use farmtech_core::DeleteOutcome;
use tracing::info;

use super::read_position;
use crate::error::AppResult;
use crate::state::Session;

/// Runs the delete screen.
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<()> {
    session.console.clear()?;
    session.console.banner("DELETE DATA - FARMTECH")?;

    if session.store.is_empty() {
        return session.console.say("\n⚠️  No data to delete!");
    }

    let position = read_position(session, "delete")?;

    let Session {
        store,
        config,
        console,
    } = session;
    let record = store.get(position)?;

    console.say(format!("\n⚠️  Confirm deletion of record #{position}?"))?;
    console.say(format!("   Crop: {}", record.crop()))?;
    console.say(format!("   Area: {}", config.format_area(record.area_m2())))?;

    let answer = console.line(&format!(
        "\nType {} to confirm or anything else to cancel: ",
        config.confirm_token
    ))?;

    match store.delete(position, config.is_confirmation(&answer))? {
        DeleteOutcome::Deleted(record) => {
            info!(position, crop = %record.crop(), area_m2 = record.area_m2(), "Record deleted");
            console.say("\n✅ Record deleted successfully!")
        }
        DeleteOutcome::Cancelled => {
            info!(position, "Deletion cancelled");
            console.say("\n❌ Deletion cancelled!")
        }
    }
}
