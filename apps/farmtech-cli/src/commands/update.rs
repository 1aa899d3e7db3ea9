//! # Update Data Command
//!
//! Changes the area, input type, quantity, or all three of one record.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  list records ──► position ──► 1 area / 2 input / 3 quantity / 4 all    │
//! │                                          │                              │
//! │                       prompts for the record's own crop                 │
//! │                                          │                              │
//! │                          store.update(position, patch)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An unknown product code keeps the record's current product.

use std::io::{BufRead, Write};

use farmtech_core::{InputProduct, RecordPatch};
use tracing::info;

use super::{print_catalog, read_dosage, read_geometry, read_position};
use crate::error::AppResult;
use crate::state::Session;

/// Runs the update screen.
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<()> {
    session.console.clear()?;
    session.console.banner("UPDATE DATA - FARMTECH")?;

    if session.store.is_empty() {
        return session.console.say("\n⚠️  No data to update!");
    }

    let position = read_position(session, "update")?;

    let Session { store, console, .. } = session;
    let record = store.get(position)?;
    let crop = record.crop();
    let current_product = record.input();

    console.say(format!("\n📝 Updating record #{position}"))?;
    console.say("What do you want to update?")?;
    console.say("1 - Planted area")?;
    console.say("2 - Input type")?;
    console.say("3 - Input quantity")?;
    console.say("4 - All data")?;
    let option = console.choice("\nChoose an option: ", &["1", "2", "3", "4"])?;

    let mut patch = RecordPatch::new();

    if option == "1" || option == "4" {
        patch = patch.area(read_geometry(console, crop)?);
    }

    if option == "2" || option == "4" {
        console.say("\n💧 New input:")?;
        print_catalog(console, crop)?;
        let answer = console.line("Choose: ")?;
        let product = answer
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(|code| InputProduct::lookup(crop, code))
            .unwrap_or(current_product);
        patch = patch.product(product);
    }

    if option == "3" || option == "4" {
        console.say("\n💧 New input quantity:")?;
        patch = patch.dosage(read_dosage(console, crop)?);
    }

    let updated = store.update(position, &patch)?;
    info!(
        position,
        crop = %updated.crop(),
        area_m2 = updated.area_m2(),
        input = %updated.input(),
        input_quantity = updated.input_quantity(),
        "Record updated"
    );

    console.say("\n✅ Data updated successfully!")
}
