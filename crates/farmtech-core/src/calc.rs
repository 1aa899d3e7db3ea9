//! # Calculation Engine
//!
//! Pure area and dosage formulas.
//!
//! ## Formulas
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AREA (m²)                                                              │
//! │    RowCrop   rectangle    length × width                                │
//! │    PivotCrop circle       π × radius²                                   │
//! │                                                                         │
//! │  INPUT QUANTITY                                                         │
//! │    RowCrop   liters       rows × row_length × mL_per_meter / 1000       │
//! │    PivotCrop kilograms    (area_m2 / 10 000) × kg_per_hectare           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here validates its inputs. Callers run values through
//! [`crate::validation`] first; the engine only does arithmetic.
//!
//! ## Usage
//! ```rust
//! use farmtech_core::calc::{area_rectangular, quantity_row_crop};
//!
//! let area = area_rectangular(100.0, 50.0);
//! assert_eq!(area, 5000.0);
//!
//! // 10 rows of 100 m at 2 mL/m
//! assert_eq!(quantity_row_crop(area, 10, 100.0, 2.0), 2.0);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::types::CropKind;

/// Square meters in one hectare.
pub const M2_PER_HECTARE: f64 = 10_000.0;

/// Milliliters in one liter.
pub const ML_PER_LITER: f64 = 1_000.0;

// =============================================================================
// Area
// =============================================================================

/// Area of a rectangular plot in m².
#[inline]
pub fn area_rectangular(length_m: f64, width_m: f64) -> f64 {
    length_m * width_m
}

/// Area of a circular (center pivot) plot in m².
#[inline]
pub fn area_circular(radius_m: f64) -> f64 {
    PI * radius_m.powi(2)
}

/// Converts m² to hectares.
#[inline]
pub fn m2_to_hectares(area_m2: f64) -> f64 {
    area_m2 / M2_PER_HECTARE
}

// =============================================================================
// Input Quantity
// =============================================================================

/// Liters of product for a row crop.
///
/// Product is applied along the planting rows, so the quantity depends only
/// on the total linear meters. `_area_m2` is accepted so both crop formulas
/// share a call shape; it is currently inert.
#[inline]
pub fn quantity_row_crop(
    _area_m2: f64,
    row_count: u32,
    row_length_m: f64,
    ml_per_meter: f64,
) -> f64 {
    let linear_meters = f64::from(row_count) * row_length_m;
    linear_meters * ml_per_meter / ML_PER_LITER
}

/// Kilograms of product for a pivot crop.
#[inline]
pub fn quantity_pivot_crop(area_m2: f64, kg_per_hectare: f64) -> f64 {
    m2_to_hectares(area_m2) * kg_per_hectare
}

// =============================================================================
// Parameter Sets
// =============================================================================

/// Plot dimensions as typed by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Geometry {
    Rectangle { length_m: f64, width_m: f64 },
    Circle { radius_m: f64 },
}

impl Geometry {
    /// Area in m² via the matching formula.
    pub fn area_m2(&self) -> f64 {
        match *self {
            Geometry::Rectangle { length_m, width_m } => area_rectangular(length_m, width_m),
            Geometry::Circle { radius_m } => area_circular(radius_m),
        }
    }

    /// The crop whose plots have this shape.
    pub fn crop(&self) -> CropKind {
        match self {
            Geometry::Rectangle { .. } => CropKind::RowCrop,
            Geometry::Circle { .. } => CropKind::PivotCrop,
        }
    }
}

/// Dosage parameters as typed by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum Dosage {
    /// mL of product per linear meter of row.
    PerRowMeter {
        row_count: u32,
        row_length_m: f64,
        ml_per_meter: f64,
    },
    /// kg of product per hectare.
    PerHectare { kg_per_hectare: f64 },
}

impl Dosage {
    /// Quantity in the crop's unit (liters or kilograms).
    pub fn quantity(&self, area_m2: f64) -> f64 {
        match *self {
            Dosage::PerRowMeter {
                row_count,
                row_length_m,
                ml_per_meter,
            } => quantity_row_crop(area_m2, row_count, row_length_m, ml_per_meter),
            Dosage::PerHectare { kg_per_hectare } => quantity_pivot_crop(area_m2, kg_per_hectare),
        }
    }

    /// The crop this dosage basis applies to.
    pub fn crop(&self) -> CropKind {
        match self {
            Dosage::PerRowMeter { .. } => CropKind::RowCrop,
            Dosage::PerHectare { .. } => CropKind::PivotCrop,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
