//! # Data Entry Command
//!
//! Registers a new cultivation record.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Crop type ──────► 1 Coffee (rectangle) / 2 Corn (pivot)             │
//! │  2. Dimensions ─────► area in m² and hectares                           │
//! │  3. Product ────────► catalog code (unknown code → entry 1)             │
//! │  4. Dosage ─────────► quantity in liters / kg                           │
//! │  5. store.append() ─► "Data saved"                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use farmtech_core::{CropKind, InputProduct, Record};
use tracing::info;

use super::{print_catalog, read_dosage, read_geometry};
use crate::error::AppResult;
use crate::state::Session;

/// Runs the data entry screen.
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<()> {
    let Session {
        store,
        config,
        console,
    } = session;

    console.clear()?;
    console.banner("DATA ENTRY - FARMTECH")?;

    console.say("\n📌 CROP TYPE:")?;
    for (index, crop) in CropKind::ALL.iter().enumerate() {
        console.say(format!("{} - {}", index + 1, crop))?;
    }
    let crop = match console.choice("\nChoose the crop (1 or 2): ", &["1", "2"])?.as_str() {
        "1" => CropKind::RowCrop,
        _ => CropKind::PivotCrop,
    };

    console.say(format!("\nCROP: {}", crop.display_name().to_uppercase()))?;
    console.separator()?;

    let geometry = read_geometry(console, crop)?;
    let area_m2 = geometry.area_m2();
    console.say(format!("\n✅ Calculated area: {}", config.format_area(area_m2)))?;
    console.say(format!("   Equivalent to: {}", config.format_hectares(area_m2)))?;

    console.say("\n💧 INPUT CALCULATION")?;
    console.say("Available products:")?;
    print_catalog(console, crop)?;
    let answer = console.line("Choose the product (1, 2 or 3): ")?;
    let product = InputProduct::select_str(crop, &answer);
    console.say(format!("\nSelected product: {product}"))?;

    let dosage = read_dosage(console, crop)?;
    let record = Record::compute(geometry, product, dosage)?;
    console.say(format!(
        "\n✅ Required quantity: {}",
        config.format_quantity(record.input_quantity(), record.unit())
    ))?;

    let crop = record.crop();
    let input_quantity = record.input_quantity();
    let position = store.append(record);
    info!(
        position,
        crop = %crop,
        area_m2,
        input = %product,
        input_quantity,
        "Record added"
    );

    console.say("\n✅ Data saved successfully!")
}
