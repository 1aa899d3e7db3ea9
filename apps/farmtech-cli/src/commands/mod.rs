//! # Menu Commands
//!
//! One module per main-menu option, plus the prompts they share.
//!
//! ```text
//! commands/
//! ├── mod.rs      ◄─── Shared prompts (dimensions, dosage, catalog, position)
//! ├── entry.rs    ◄─── 1 - Data Entry
//! ├── report.rs   ◄─── 2 - Data Report
//! ├── update.rs   ◄─── 3 - Update Data
//! └── delete.rs   ◄─── 4 - Delete Data
//! ```
//!
//! Every command takes the whole [`Session`] and returns `AppResult<()>`.
//! Rejected store operations bubble up as `AppError::Core` and are shown by
//! the main loop.

pub mod delete;
pub mod entry;
pub mod report;
pub mod update;

use std::io::{BufRead, Write};

use farmtech_core::{CropKind, Dosage, Geometry, RecordStore};

use crate::console::Console;
use crate::error::AppResult;
use crate::state::{ConfigState, Session};

/// Reads plot dimensions for the crop's area shape.
pub(crate) fn read_geometry<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    crop: CropKind,
) -> AppResult<Geometry> {
    console.say(format!("\n📐 AREA ({})", crop.area_shape().label()))?;
    let geometry = match crop {
        CropKind::RowCrop => {
            let length_m = console.number("Plot length (meters): ", "length", 0.0)?;
            let width_m = console.number("Plot width (meters): ", "width", 0.0)?;
            Geometry::Rectangle { length_m, width_m }
        }
        CropKind::PivotCrop => {
            let radius_m = console.number("Pivot radius (meters): ", "radius", 0.0)?;
            Geometry::Circle { radius_m }
        }
    };
    Ok(geometry)
}

/// Reads dosage parameters for the crop's dosage basis.
pub(crate) fn read_dosage<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    crop: CropKind,
) -> AppResult<Dosage> {
    let dosage = match crop {
        CropKind::RowCrop => {
            let ml_per_meter =
                console.number("Quantity in mL per linear meter: ", "mL per meter", 0.0)?;
            let row_count = console.number("Number of rows in the field: ", "rows", 0u32)?;
            let row_length_m =
                console.number("Average length of each row (meters): ", "row length", 0.0)?;
            Dosage::PerRowMeter {
                row_count,
                row_length_m,
                ml_per_meter,
            }
        }
        CropKind::PivotCrop => {
            let kg_per_hectare =
                console.number("Quantity in kg per hectare: ", "kg per hectare", 0.0)?;
            Dosage::PerHectare { kg_per_hectare }
        }
    };
    Ok(dosage)
}

/// Prints the crop's input catalog as `code - name` lines.
pub(crate) fn print_catalog<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    crop: CropKind,
) -> AppResult<()> {
    for (index, product) in crop.catalog().iter().enumerate() {
        console.say(format!("{} - {}", index + 1, product))?;
    }
    Ok(())
}

/// Prints one summary line per record.
pub(crate) fn print_summaries<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &RecordStore,
    config: &ConfigState,
) -> AppResult<()> {
    console.say("\n📋 CURRENT RECORDS:")?;
    for (position, record) in store.list_all() {
        console.say(format!(
            "{}. {} - Area: {} - Input: {} ({} {})",
            position,
            record.crop(),
            config.format_area(record.area_m2()),
            record.input_name(),
            config.format_number(record.input_quantity()),
            record.unit()
        ))?;
    }
    Ok(())
}

/// Lists the records and asks for a position. Range checks happen in the store.
pub(crate) fn read_position<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    action: &str,
) -> AppResult<usize> {
    let Session {
        store,
        config,
        console,
    } = session;

    print_summaries(console, store, config)?;
    console.number(
        &format!("\nWhich record do you want to {action} (1 to {})? ", store.len()),
        "position",
        0usize,
    )
}
