//! # Record Store
//!
//! The ordered, in-memory collection of cultivation records.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Record Store Operations                              │
//! │                                                                         │
//! │  Menu Action          Store Operation            State Change           │
//! │  ───────────          ───────────────            ────────────           │
//! │                                                                         │
//! │  Entry ─────────────► append(record) ──────────► records.push(r)       │
//! │                                                                         │
//! │  Report ────────────► list_all() / stats() ────► (read only)           │
//! │                                                                         │
//! │  Update ────────────► update(pos, patch) ──────► records[pos-1] = r'   │
//! │                                                                         │
//! │  Delete ────────────► delete(pos, confirmed) ──► records.remove(pos-1) │
//! │                                                                         │
//! │  NOTE: Positions are 1-based on every public operation.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Machine
//! Empty ⇄ NonEmpty. Every operation either completes fully or returns an
//! error with the store untouched.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::record::{Record, RecordPatch};
use crate::types::CropKind;
use crate::validation::validate_position;

// =============================================================================
// Outcomes
// =============================================================================

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The record was removed; later positions shifted down by one.
    Deleted(Record),
    /// The operator declined; nothing changed.
    Cancelled,
}

/// Number of records per crop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CropCounts {
    pub row_crop: usize,
    pub pivot_crop: usize,
}

impl CropCounts {
    pub fn get(&self, crop: CropKind) -> usize {
        match crop {
            CropKind::RowCrop => self.row_crop,
            CropKind::PivotCrop => self.pivot_crop,
        }
    }

    fn increment(&mut self, crop: CropKind) {
        match crop {
            CropKind::RowCrop => self.row_crop += 1,
            CropKind::PivotCrop => self.pivot_crop += 1,
        }
    }
}

/// Aggregate statistics over a non-empty store.
///
/// Quantities are summed per unit; liters and kilograms are never added together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreStats {
    pub count: usize,
    pub total_area_m2: f64,
    pub mean_area_m2: f64,
    pub count_by_crop: CropCounts,
    /// Sum of RowCrop quantities.
    pub total_liters: f64,
    /// Sum of PivotCrop quantities.
    pub total_kilograms: f64,
}

// =============================================================================
// Record Store
// =============================================================================

/// The record store.
///
/// ## Invariants
/// - One `Record` per position; all of a record's fields move together
/// - Positions are `1..=len()` in insertion order
/// - Internal indices never leave this type
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        RecordStore {
            records: Vec::new(),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record and returns its 1-based position.
    pub fn append(&mut self, record: Record) -> usize {
        self.records.push(record);
        self.records.len()
    }

    /// Iterates `(position, record)` pairs in storage order, positions from 1.
    ///
    /// Call again to restart; the store is not modified.
    pub fn list_all(&self) -> impl ExactSizeIterator<Item = (usize, &Record)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| (index + 1, record))
    }

    /// Returns the record at a 1-based position.
    pub fn get(&self, position: usize) -> CoreResult<&Record> {
        let index = validate_position(position, self.len())?;
        Ok(&self.records[index])
    }

    /// Updates the record at a 1-based position.
    ///
    /// ## Behavior
    /// - Area and quantity are recomputed by the Calculation Engine variant
    ///   matching the record's crop; the crop itself never changes
    /// - `recorded_at` is refreshed
    ///
    /// ## Errors
    /// - `OutOfRange` if the position is not in `1..=len()`
    /// - `EmptyPatch` if the patch selects nothing
    /// - `CropMismatch` if a patch field belongs to the other crop
    pub fn update(&mut self, position: usize, patch: &RecordPatch) -> CoreResult<&Record> {
        let index = validate_position(position, self.len())?;
        let next = self.records[index].patched(patch)?;

        // Swap in only after the whole new state was built.
        self.records[index] = next;
        Ok(&self.records[index])
    }

    /// Deletes the record at a 1-based position if `confirmed`.
    ///
    /// ## Behavior
    /// - The range is checked first, even when not confirmed
    /// - Not confirmed: returns `Cancelled`, store unchanged
    /// - Confirmed: removes the record and shifts later positions down
    pub fn delete(&mut self, position: usize, confirmed: bool) -> CoreResult<DeleteOutcome> {
        let index = validate_position(position, self.len())?;

        if !confirmed {
            return Ok(DeleteOutcome::Cancelled);
        }

        Ok(DeleteOutcome::Deleted(self.records.remove(index)))
    }

    /// Computes aggregate statistics.
    ///
    /// ## Errors
    /// - `EmptyStore` when there are no records (mean area is undefined)
    pub fn stats(&self) -> CoreResult<StoreStats> {
        if self.records.is_empty() {
            return Err(CoreError::EmptyStore);
        }

        let mut count_by_crop = CropCounts::default();
        let mut total_area_m2 = 0.0;
        let mut total_liters = 0.0;
        let mut total_kilograms = 0.0;

        for record in &self.records {
            count_by_crop.increment(record.crop());
            total_area_m2 += record.area_m2();
            match record.crop() {
                CropKind::RowCrop => total_liters += record.input_quantity(),
                CropKind::PivotCrop => total_kilograms += record.input_quantity(),
            }
        }

        let count = self.records.len();
        Ok(StoreStats {
            count,
            total_area_m2,
            mean_area_m2: total_area_m2 / count as f64,
            count_by_crop,
            total_liters,
            total_kilograms,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{Dosage, Geometry};
    use crate::types::InputProduct;

    fn row_record(area: f64) -> Record {
        Record::new(CropKind::RowCrop, area, InputProduct::Phosphate, 1.5).unwrap()
    }

    fn pivot_record(area: f64) -> Record {
        Record::new(CropKind::PivotCrop, area, InputProduct::Nitrogen, 40.0).unwrap()
    }

    #[test]
    fn test_append_returns_positions() {
        let mut store = RecordStore::new();
        assert_eq!(store.append(row_record(10.0)), 1);
        assert_eq!(store.append(pivot_record(20.0)), 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_all_is_one_based_and_restartable() {
        let mut store = RecordStore::new();
        store.append(row_record(10.0));
        store.append(pivot_record(20.0));

        let first: Vec<(usize, f64)> = store.list_all().map(|(p, r)| (p, r.area_m2())).collect();
        let second: Vec<(usize, f64)> = store.list_all().map(|(p, r)| (p, r.area_m2())).collect();

        assert_eq!(first, vec![(1, 10.0), (2, 20.0)]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_get_out_of_range() {
        let mut store = RecordStore::new();
        store.append(row_record(10.0));

        assert!(store.get(1).is_ok());
        assert_eq!(
            store.get(2).unwrap_err(),
            CoreError::OutOfRange {
                position: 2,
                count: 1
            }
        );
    }

    #[test]
    fn test_update_product_only() {
        let mut store = RecordStore::new();
        store.append(row_record(10.0));

        let updated = store
            .update(1, &RecordPatch::new().product(InputProduct::Herbicide))
            .unwrap();
        assert_eq!(updated.input_name(), "Herbicide");
        assert_eq!(updated.area_m2(), 10.0);
        assert_eq!(updated.input_quantity(), 1.5);
    }

    #[test]
    fn test_update_failure_leaves_store_unchanged() {
        let mut store = RecordStore::new();
        store.append(pivot_record(20.0));
        let before = store.clone();

        let patch = RecordPatch::new()
            .area(Geometry::Circle { radius_m: 5.0 })
            .dosage(Dosage::PerRowMeter {
                row_count: 1,
                row_length_m: 1.0,
                ml_per_meter: 1.0,
            });
        assert!(matches!(
            store.update(1, &patch),
            Err(CoreError::CropMismatch { .. })
        ));
        assert_eq!(store, before);

        assert!(matches!(
            store.update(0, &patch),
            Err(CoreError::OutOfRange { .. })
        ));
        let area_only = RecordPatch::new().area(Geometry::Circle { radius_m: 5.0 });
        assert_eq!(
            store.update(2, &area_only),
            Err(CoreError::OutOfRange {
                position: 2,
                count: 1
            })
        );
        assert_eq!(store.update(1, &RecordPatch::new()), Err(CoreError::EmptyPatch));
        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_cancelled_and_confirmed() {
        let mut store = RecordStore::new();
        store.append(row_record(10.0));
        store.append(pivot_record(20.0));
        let before = store.clone();

        assert_eq!(store.delete(1, false).unwrap(), DeleteOutcome::Cancelled);
        assert_eq!(store, before);

        match store.delete(1, true).unwrap() {
            DeleteOutcome::Deleted(record) => assert_eq!(record.area_m2(), 10.0),
            DeleteOutcome::Cancelled => panic!("expected deletion"),
        }
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().area_m2(), 20.0);
    }

    #[test]
    fn test_delete_checks_range_before_confirmation() {
        let mut store = RecordStore::new();
        store.append(row_record(10.0));

        assert!(matches!(
            store.delete(5, false),
            Err(CoreError::OutOfRange { .. })
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_stats_empty() {
        let store = RecordStore::new();
        assert_eq!(store.stats().unwrap_err(), CoreError::EmptyStore);
    }

    #[test]
    fn test_stats_single_record() {
        let mut store = RecordStore::new();
        store.append(row_record(500.0));

        let stats = store.stats().unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.total_area_m2, 500.0);
        assert_eq!(stats.mean_area_m2, 500.0);
        assert_eq!(stats.count_by_crop.get(CropKind::RowCrop), 1);
        assert_eq!(stats.count_by_crop.get(CropKind::PivotCrop), 0);
    }

    #[test]
    fn test_stats_keeps_units_apart() {
        let mut store = RecordStore::new();
        store.append(row_record(100.0));
        store.append(row_record(100.0));
        store.append(pivot_record(300.0));

        let stats = store.stats().unwrap();
        assert_eq!(stats.total_liters, 3.0);
        assert_eq!(stats.total_kilograms, 40.0);
        assert!((stats.mean_area_m2 - 500.0 / 3.0).abs() < 1e-9);
    }
}
