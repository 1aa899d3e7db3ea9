//! # Cultivation Record
//!
//! One entry in the [`RecordStore`](crate::store::RecordStore): crop, computed
//! area, input product, input quantity and timestamp, kept together in a
//! single aggregate.
//!
//! ## Invariants
//! - `area_m2 > 0`
//! - `input_quantity >= 0`, unit fixed by `crop`
//! - `input.crop() == crop`
//!
//! Fields are private so these hold for every `Record` in existence.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::calc::{self, Dosage, Geometry};
use crate::error::{CoreError, CoreResult};
use crate::types::{CropKind, InputProduct, QuantityUnit};
use crate::validation::{validate_non_negative_quantity, validate_positive_area};

// =============================================================================
// Record
// =============================================================================

/// A cultivation record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    crop: CropKind,
    area_m2: f64,
    input: InputProduct,
    input_quantity: f64,
    recorded_at: DateTime<Utc>,
}

impl Record {
    /// Builds a record from already computed values.
    ///
    /// ## Errors
    /// - `CropMismatch` if `input` is not in `crop`'s catalog
    /// - `Validation` if the area is not positive or the quantity is negative
    pub fn new(
        crop: CropKind,
        area_m2: f64,
        input: InputProduct,
        input_quantity: f64,
    ) -> CoreResult<Self> {
        ensure_crop(crop, input.crop())?;
        let area_m2 = validate_positive_area(area_m2)?;
        let input_quantity = validate_non_negative_quantity(input_quantity)?;

        Ok(Record {
            crop,
            area_m2,
            input,
            input_quantity,
            recorded_at: Utc::now(),
        })
    }

    /// Computes a record from raw operator input.
    ///
    /// The crop is implied by the geometry; the dosage basis and the product
    /// must belong to the same crop.
    ///
    /// ## Example
    /// ```rust
    /// use farmtech_core::{Dosage, Geometry, InputProduct, Record};
    ///
    /// let record = Record::compute(
    ///     Geometry::Rectangle { length_m: 100.0, width_m: 50.0 },
    ///     InputProduct::Phosphate,
    ///     Dosage::PerRowMeter { row_count: 10, row_length_m: 100.0, ml_per_meter: 2.0 },
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(record.area_m2(), 5000.0);
    /// assert_eq!(record.input_quantity(), 2.0);
    /// ```
    pub fn compute(geometry: Geometry, input: InputProduct, dosage: Dosage) -> CoreResult<Self> {
        let crop = geometry.crop();
        ensure_crop(crop, dosage.crop())?;

        let area_m2 = geometry.area_m2();
        let quantity = dosage.quantity(area_m2);
        Record::new(crop, area_m2, input, quantity)
    }

    #[inline]
    pub fn crop(&self) -> CropKind {
        self.crop
    }

    /// Planted area in m².
    #[inline]
    pub fn area_m2(&self) -> f64 {
        self.area_m2
    }

    /// Planted area in hectares.
    #[inline]
    pub fn area_hectares(&self) -> f64 {
        calc::m2_to_hectares(self.area_m2)
    }

    #[inline]
    pub fn input(&self) -> InputProduct {
        self.input
    }

    #[inline]
    pub fn input_name(&self) -> &'static str {
        self.input.name()
    }

    /// Input quantity, in [`Record::unit`].
    #[inline]
    pub fn input_quantity(&self) -> f64 {
        self.input_quantity
    }

    #[inline]
    pub fn unit(&self) -> QuantityUnit {
        self.crop.input_unit()
    }

    /// Creation time, or time of the last update.
    #[inline]
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Builds the updated version of this record without touching `self`.
    ///
    /// ## Apply Order
    /// area → product → quantity. A per-hectare quantity therefore uses the
    /// area from the same patch.
    pub(crate) fn patched(&self, patch: &RecordPatch) -> CoreResult<Self> {
        if patch.is_empty() {
            return Err(CoreError::EmptyPatch);
        }

        let mut next = self.clone();

        if let Some(geometry) = patch.geometry {
            ensure_crop(self.crop, geometry.crop())?;
            next.area_m2 = validate_positive_area(geometry.area_m2())?;
        }

        if let Some(product) = patch.product {
            ensure_crop(self.crop, product.crop())?;
            next.input = product;
        }

        if let Some(dosage) = patch.dosage {
            ensure_crop(self.crop, dosage.crop())?;
            next.input_quantity = validate_non_negative_quantity(dosage.quantity(next.area_m2))?;
        }

        next.recorded_at = Utc::now();
        Ok(next)
    }
}

fn ensure_crop(expected: CropKind, found: CropKind) -> CoreResult<()> {
    if expected != found {
        return Err(CoreError::CropMismatch { expected, found });
    }
    Ok(())
}

// =============================================================================
// Record Patch
// =============================================================================

/// Fields to change in an update. Any non-empty combination is allowed.
///
/// ## Example
/// ```rust
/// use farmtech_core::{Dosage, Geometry, RecordPatch};
///
/// let patch = RecordPatch::new()
///     .area(Geometry::Circle { radius_m: 60.0 })
///     .dosage(Dosage::PerHectare { kg_per_hectare: 250.0 });
/// assert!(!patch.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecordPatch {
    /// New plot dimensions; the area is recomputed from them.
    pub geometry: Option<Geometry>,
    /// New input product.
    pub product: Option<InputProduct>,
    /// New dosage; the quantity is recomputed from it.
    pub dosage: Option<Dosage>,
}

impl RecordPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn product(mut self, product: InputProduct) -> Self {
        self.product = Some(product);
        self
    }

    pub fn dosage(mut self, dosage: Dosage) -> Self {
        self.dosage = Some(dosage);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.geometry.is_none() && self.product.is_none() && self.dosage.is_none()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn coffee() -> Record {
        Record::compute(
            Geometry::Rectangle {
                length_m: 100.0,
                width_m: 50.0,
            },
            InputProduct::Fungicide,
            Dosage::PerRowMeter {
                row_count: 10,
                row_length_m: 100.0,
                ml_per_meter: 2.0,
            },
        )
        .unwrap()
    }

    fn corn() -> Record {
        Record::compute(
            Geometry::Circle { radius_m: 100.0 },
            InputProduct::Nitrogen,
            Dosage::PerHectare {
                kg_per_hectare: 100.0,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_compute_row_crop() {
        let record = coffee();
        assert_eq!(record.crop(), CropKind::RowCrop);
        assert_eq!(record.area_m2(), 5000.0);
        assert_eq!(record.area_hectares(), 0.5);
        assert_eq!(record.input_name(), "Fungicide");
        assert!((record.input_quantity() - 2.0).abs() < 1e-9);
        assert_eq!(record.unit(), QuantityUnit::Liters);
    }

    #[test]
    fn test_compute_rejects_mixed_crop_parameters() {
        let err = Record::compute(
            Geometry::Circle { radius_m: 10.0 },
            InputProduct::Nitrogen,
            Dosage::PerRowMeter {
                row_count: 1,
                row_length_m: 1.0,
                ml_per_meter: 1.0,
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            CoreError::CropMismatch {
                expected: CropKind::PivotCrop,
                found: CropKind::RowCrop
            }
        );

        let err = Record::new(CropKind::RowCrop, 10.0, InputProduct::Potassium, 1.0).unwrap_err();
        assert!(matches!(err, CoreError::CropMismatch { .. }));
    }

    #[test]
    fn test_new_enforces_invariants() {
        let err = Record::new(CropKind::RowCrop, 0.0, InputProduct::Phosphate, 1.0).unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation(ValidationError::MustBePositive {
                field: "area".to_string()
            })
        );

        let err = Record::new(CropKind::RowCrop, 1.0, InputProduct::Phosphate, -1.0).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBeNonNegative { .. })
        ));

        assert!(Record::new(CropKind::PivotCrop, 1.0, InputProduct::Nitrogen, 0.0).is_ok());
    }

    #[test]
    fn test_patched_area_only_keeps_quantity() {
        let record = coffee();
        let next = record
            .patched(&RecordPatch::new().area(Geometry::Rectangle {
                length_m: 10.0,
                width_m: 10.0,
            }))
            .unwrap();

        assert_eq!(next.area_m2(), 100.0);
        assert_eq!(next.input_quantity(), record.input_quantity());
        assert_eq!(next.input(), record.input());
        assert!(next.recorded_at() >= record.recorded_at());
    }

    #[test]
    fn test_patched_pivot_quantity_uses_new_area() {
        let record = corn();
        let next = record
            .patched(
                &RecordPatch::new()
                    .area(Geometry::Circle { radius_m: 50.0 })
                    .dosage(Dosage::PerHectare {
                        kg_per_hectare: 300.0,
                    }),
            )
            .unwrap();

        let expected = calc::quantity_pivot_crop(calc::area_circular(50.0), 300.0);
        assert!((next.input_quantity() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_patched_rejects_wrong_crop_and_empty_patch() {
        let record = coffee();
        assert_eq!(
            record.patched(&RecordPatch::new()).unwrap_err(),
            CoreError::EmptyPatch
        );

        let err = record
            .patched(&RecordPatch::new().product(InputProduct::Potassium))
            .unwrap_err();
        assert!(matches!(err, CoreError::CropMismatch { .. }));
    }
}
