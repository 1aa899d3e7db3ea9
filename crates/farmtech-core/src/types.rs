//! # Domain Types
//!
//! Core domain types used throughout FarmTech.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    CropKind     │   │   AreaShape     │   │  QuantityUnit   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  RowCrop   ─────┼──►│  Rectangular    │   │  Liters         │       │
//! │  │  PivotCrop ─────┼──►│  Circular       │   │  Kilograms      │       │
//! │  └────────┬────────┘   └─────────────────┘   └─────────────────┘       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  ┌──────────────────────────────────────────┐                          │
//! │  │  InputProduct (catalog per crop)         │                          │
//! │  │  RowCrop:   1 Phosphate 2 Fungicide      │                          │
//! │  │             3 Herbicide                  │                          │
//! │  │  PivotCrop: 1 Nitrogen  2 Phosphorus     │                          │
//! │  │             3 Potassium                  │                          │
//! │  └──────────────────────────────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything else about a crop (area formula, dosage formula, unit) is
//! derived from [`CropKind`], so a record can never mix units.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Crop Kind
// =============================================================================

/// The two supported crop families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropKind {
    /// Planted in rows on a rectangular plot; dosed per linear meter (coffee).
    RowCrop,
    /// Planted under a central pivot on a circular plot; dosed per hectare (corn).
    PivotCrop,
}

impl CropKind {
    /// All crop kinds, in menu order.
    pub const ALL: [CropKind; 2] = [CropKind::RowCrop, CropKind::PivotCrop];

    /// Shape of the planted area.
    #[inline]
    pub const fn area_shape(&self) -> AreaShape {
        match self {
            CropKind::RowCrop => AreaShape::Rectangular,
            CropKind::PivotCrop => AreaShape::Circular,
        }
    }

    /// Unit of the input quantity.
    #[inline]
    pub const fn input_unit(&self) -> QuantityUnit {
        match self {
            CropKind::RowCrop => QuantityUnit::Liters,
            CropKind::PivotCrop => QuantityUnit::Kilograms,
        }
    }

    /// Name shown to the operator.
    pub const fn display_name(&self) -> &'static str {
        match self {
            CropKind::RowCrop => "Coffee",
            CropKind::PivotCrop => "Corn",
        }
    }

    /// The input catalog for this crop, in selection-code order.
    pub fn catalog(&self) -> &'static [InputProduct; 3] {
        match self {
            CropKind::RowCrop => &ROW_CROP_CATALOG,
            CropKind::PivotCrop => &PIVOT_CROP_CATALOG,
        }
    }
}

impl fmt::Display for CropKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// =============================================================================
// Area Shape / Quantity Unit
// =============================================================================

/// Geometric shape used to compute a plot's area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaShape {
    Rectangular,
    Circular,
}

/// Unit of an input quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityUnit {
    Liters,
    Kilograms,
}

impl QuantityUnit {
    /// Short unit symbol ("L", "kg").
    pub const fn symbol(&self) -> &'static str {
        match self {
            QuantityUnit::Liters => "L",
            QuantityUnit::Kilograms => "kg",
        }
    }

    /// Long unit name ("liters", "kg").
    pub const fn label(&self) -> &'static str {
        match self {
            QuantityUnit::Liters => "liters",
            QuantityUnit::Kilograms => "kg",
        }
    }
}

impl AreaShape {
    /// Heading for the dimensions prompt.
    pub const fn label(&self) -> &'static str {
        match self {
            AreaShape::Rectangular => "Rectangular plot",
            AreaShape::Circular => "Circular center pivot",
        }
    }
}

impl fmt::Display for QuantityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// =============================================================================
// Input Catalog
// =============================================================================

/// An input product that can be applied to a crop.
///
/// Each product belongs to exactly one crop's catalog; see [`InputProduct::crop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputProduct {
    // RowCrop catalog (liquid, liters)
    Phosphate,
    Fungicide,
    Herbicide,
    // PivotCrop catalog (granular, kilograms)
    Nitrogen,
    Phosphorus,
    Potassium,
}

const ROW_CROP_CATALOG: [InputProduct; 3] = [
    InputProduct::Phosphate,
    InputProduct::Fungicide,
    InputProduct::Herbicide,
];

const PIVOT_CROP_CATALOG: [InputProduct; 3] = [
    InputProduct::Nitrogen,
    InputProduct::Phosphorus,
    InputProduct::Potassium,
];

impl InputProduct {
    /// The crop whose catalog lists this product.
    pub const fn crop(&self) -> CropKind {
        match self {
            InputProduct::Phosphate | InputProduct::Fungicide | InputProduct::Herbicide => {
                CropKind::RowCrop
            }
            InputProduct::Nitrogen | InputProduct::Phosphorus | InputProduct::Potassium => {
                CropKind::PivotCrop
            }
        }
    }

    /// Product name as stored on a record.
    pub const fn name(&self) -> &'static str {
        match self {
            InputProduct::Phosphate => "Phosphate",
            InputProduct::Fungicide => "Fungicide",
            InputProduct::Herbicide => "Herbicide",
            InputProduct::Nitrogen => "Nitrogen",
            InputProduct::Phosphorus => "Phosphorus",
            InputProduct::Potassium => "Potassium",
        }
    }

    /// Looks up a selection code (1-based) in the crop's catalog.
    ///
    /// ## Example
    /// ```rust
    /// use farmtech_core::{CropKind, InputProduct};
    ///
    /// assert_eq!(InputProduct::lookup(CropKind::PivotCrop, 3), Some(InputProduct::Potassium));
    /// assert_eq!(InputProduct::lookup(CropKind::PivotCrop, 9), None);
    /// ```
    pub fn lookup(crop: CropKind, code: u32) -> Option<InputProduct> {
        let index = usize::try_from(code).ok()?.checked_sub(1)?;
        crop.catalog().get(index).copied()
    }

    /// Like [`lookup`](Self::lookup), but unknown codes fall back to entry 1.
    pub fn select(crop: CropKind, code: u32) -> InputProduct {
        Self::lookup(crop, code).unwrap_or(crop.catalog()[0])
    }

    /// Resolves a raw menu answer. Anything that is not a known code selects entry 1.
    pub fn select_str(crop: CropKind, raw: &str) -> InputProduct {
        match raw.trim().parse::<u32>() {
            Ok(code) => Self::select(crop, code),
            Err(_) => crop.catalog()[0],
        }
    }
}

impl fmt::Display for InputProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
