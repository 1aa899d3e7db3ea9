//! Scripted end-to-end sessions: menu input in, screen text and store out.

use std::io::Cursor;

use farmtech_cli::error::{AppError, AppResult};
use farmtech_cli::state::{ConfigState, Session};
use farmtech_core::{CropKind, InputProduct, RecordStore};

fn quiet_config() -> ConfigState {
    ConfigState {
        clear_screen: false,
        pause_after_action: false,
        ..ConfigState::default()
    }
}

fn run_script(script: &str) -> (RecordStore, String, AppResult<()>) {
    run_bytes(script.as_bytes())
}

fn run_bytes(script: &[u8]) -> (RecordStore, String, AppResult<()>) {
    let mut output = Vec::new();
    let (store, result) = {
        let mut session = Session::new(quiet_config(), Cursor::new(script), &mut output);
        let result = session.run();
        (session.store().clone(), result)
    };
    (store, String::from_utf8(output).unwrap(), result)
}

/// Menu answers for a coffee entry: 100 x 50 plot, 10 rows of 100 m at 2 mL/m.
const COFFEE_ENTRY: &str = "1\n1\n100\n50\n1\n2\n10\n100\n";

/// Menu answers for a corn entry: radius 50, unknown product code, 300 kg/ha.
const CORN_ENTRY: &str = "1\n2\n50\n9\n300\n";

#[test]
fn test_entry_and_report_scenario() {
    let script = format!("{COFFEE_ENTRY}{CORN_ENTRY}2\n5\n");
    let (store, out, result) = run_script(&script);

    assert!(result.is_ok());
    assert_eq!(store.len(), 2);

    // Entry screens
    assert!(out.contains("Calculated area: 5,000.00 m²"));
    assert!(out.contains("Equivalent to: 0.50 ha"));
    assert!(out.contains("Required quantity: 2.00 liters"));
    assert!(out.contains("Calculated area: 7,853.98 m²"));
    assert!(out.contains("Selected product: Nitrogen"));
    assert!(out.contains("Required quantity: 235.62 kg"));

    // Report screen
    assert!(out.contains("Total records: 2"));
    assert!(out.contains("RECORD #1"));
    assert!(out.contains("RECORD #2"));
    assert!(out.contains("Planted area: 5,000.00 m² (0.50 ha)"));
    assert!(out.contains("Total cultivated area: 12,853.98 m²"));
    assert!(out.contains("Mean area per record: 6,426.99 m²"));
    assert!(out.contains("Coffee records: 1"));
    assert!(out.contains("Corn records: 1"));
    assert!(out.contains("Thank you for using FarmTech"));

    let stats = store.stats().unwrap();
    assert_eq!(stats.count_by_crop.get(CropKind::RowCrop), 1);
    assert_eq!(stats.count_by_crop.get(CropKind::PivotCrop), 1);
}

#[test]
fn test_delete_cancel_then_confirm() {
    let script = format!("{COFFEE_ENTRY}{CORN_ENTRY}4\n1\nn\n4\n1\ny\n5\n");
    let (store, out, result) = run_script(&script);

    assert!(result.is_ok());
    assert!(out.contains("1. Coffee - Area: 5,000.00 m² - Input: Phosphate (2.00 L)"));
    assert!(out.contains("📐 AREA (Rectangular plot)"));
    assert!(out.contains("Deletion cancelled!"));
    assert!(out.contains("Record deleted successfully!"));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(1).unwrap().crop(), CropKind::PivotCrop);
}

#[test]
fn test_update_out_of_range_then_all_fields() {
    // One corn record; position 5 is rejected, then everything is updated.
    let script = format!("{CORN_ENTRY}3\n5\n3\n1\n4\n100\n3\n100\n5\n");
    let (store, out, result) = run_script(&script);

    assert!(result.is_ok());
    assert!(out.contains("Position 5 is out of range (valid: 1 to 1)"));
    assert!(out.contains("Data updated successfully!"));

    let record = store.get(1).unwrap();
    assert_eq!(record.input(), InputProduct::Potassium);
    assert!((record.area_m2() - std::f64::consts::PI * 10_000.0).abs() < 1e-6);
    assert!((record.input_quantity() - std::f64::consts::PI * 100.0).abs() < 1e-6);
}

#[test]
fn test_update_unknown_product_code_keeps_current() {
    // Coffee entry with product 2 (Fungicide), then update input type with code 7.
    let script = "1\n1\n100\n50\n2\n2\n10\n100\n3\n1\n2\n7\n5\n";
    let (store, _, result) = run_script(script);

    assert!(result.is_ok());
    assert_eq!(store.get(1).unwrap().input(), InputProduct::Fungicide);
}

#[test]
fn test_invalid_numbers_are_asked_again() {
    let script = "1\n2\nabc\n0\n-5\n50\n1\n300\n5\n";
    let (store, out, result) = run_script(script);

    assert!(result.is_ok());
    assert_eq!(store.len(), 1);
    assert!(out.contains("radius: enter a valid number"));
    assert_eq!(out.matches("radius must be greater than 0").count(), 2);
}

#[test]
fn test_empty_store_screens_and_invalid_option() {
    let script = "2\n3\n4\n9\n5\n";
    let (store, out, result) = run_script(script);

    assert!(result.is_ok());
    assert!(store.is_empty());
    assert!(out.contains("No data registered in the system!"));
    assert!(out.contains("No data to update!"));
    assert!(out.contains("No data to delete!"));
    assert!(out.contains("Invalid option! Enter a number from 1 to 5."));
}

#[test]
fn test_non_utf8_answer_keeps_session_alive() {
    // Latin-1 "ão" typed at the main menu after one record was saved.
    let mut script = COFFEE_ENTRY.as_bytes().to_vec();
    script.extend_from_slice(b"\xe3o\n2\n5\n");
    let (store, out, result) = run_bytes(&script);

    assert!(result.is_ok());
    assert_eq!(store.len(), 1);
    assert!(out.contains("Invalid option! Enter a number from 1 to 5."));
    assert!(out.contains("Total records: 1"));
}

#[test]
fn test_end_of_input_stops_session() {
    // Input ends in the middle of an entry.
    let (store, _, result) = run_script("1\n1\n100\n");

    assert!(matches!(result, Err(AppError::InputClosed)));
    assert!(store.is_empty());
}
