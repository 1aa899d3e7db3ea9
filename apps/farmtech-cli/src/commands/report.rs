//! # Data Report Command
//!
//! Lists every record and the aggregate statistics.

use std::io::{BufRead, Write};

use chrono::Local;
use farmtech_core::{CoreError, CropKind, QuantityUnit};
use tracing::debug;

use crate::error::AppResult;
use crate::state::Session;

/// Timestamp layout on the report.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Runs the report screen.
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<()> {
    let Session {
        store,
        config,
        console,
    } = session;

    console.clear()?;
    console.banner("DATA REPORT - FARMTECH")?;

    let stats = match store.stats() {
        Ok(stats) => stats,
        Err(CoreError::EmptyStore) => {
            return console.say("\n⚠️  No data registered in the system!");
        }
        Err(err) => return Err(err.into()),
    };
    debug!(count = stats.count, "Rendering report");

    console.say(format!("\n📊 Total records: {}", stats.count))?;
    console.separator()?;

    for (position, record) in store.list_all() {
        let recorded_at = record.recorded_at().with_timezone(&Local);
        console.say(format!("\n📌 RECORD #{position}"))?;
        console.say(format!("   Date/Time: {}", recorded_at.format(TIMESTAMP_FORMAT)))?;
        console.say(format!("   Crop: {}", record.crop()))?;
        console.say(format!(
            "   Planted area: {} ({} ha)",
            config.format_area(record.area_m2()),
            config.format_number(record.area_hectares())
        ))?;
        console.say(format!("   Input: {}", record.input_name()))?;
        console.say(format!(
            "   Quantity: {}",
            config.format_quantity(record.input_quantity(), record.unit())
        ))?;
        console.separator()?;
    }

    console.say("\n📈 GENERAL STATISTICS:")?;
    console.say(format!("   Total cultivated area: {}", config.format_area(stats.total_area_m2)))?;
    console.say(format!("   Mean area per record: {}", config.format_area(stats.mean_area_m2)))?;
    for crop in CropKind::ALL {
        console.say(format!("   {} records: {}", crop, stats.count_by_crop.get(crop)))?;
    }
    console.say(format!(
        "   Total liquid inputs: {}",
        config.format_quantity(stats.total_liters, QuantityUnit::Liters)
    ))?;
    console.say(format!(
        "   Total solid inputs: {}",
        config.format_quantity(stats.total_kilograms, QuantityUnit::Kilograms)
    ))
}
