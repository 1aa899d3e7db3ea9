//! # Validation Module
//!
//! Input validation utilities for FarmTech.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Menu prompt (farmtech-cli)                                   │
//! │  ├── parse_greater_than() on every typed number                        │
//! │  └── Loops until the value parses and is > minimum                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Calculation Engine                                           │
//! │  └── Trusts its inputs, pure arithmetic                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Record / RecordStore                                         │
//! │  ├── validate_positive_area / validate_non_negative_quantity           │
//! │  └── validate_position (1-based → internal index)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use farmtech_core::validation::parse_greater_than;
//!
//! let radius: f64 = parse_greater_than("radius", "50", 0.0).unwrap();
//! assert_eq!(radius, 50.0);
//!
//! assert!(parse_greater_than::<f64>("radius", "0", 0.0).is_err());
//! assert!(parse_greater_than::<f64>("radius", "fifty", 0.0).is_err());
//! ```

use std::fmt::Display;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult, ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Input
// =============================================================================

/// A number the operator can type at a prompt.
pub trait InputNumber: FromStr + PartialOrd + Display + Copy {
    /// `false` for values that parse but are not usable (`inf`, `NaN`).
    fn is_finite(&self) -> bool;
}

impl InputNumber for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl InputNumber for u32 {
    fn is_finite(&self) -> bool {
        true
    }
}

impl InputNumber for usize {
    fn is_finite(&self) -> bool {
        true
    }
}

/// Checks that `value` is strictly greater than `min`.
///
/// ## Example
/// ```rust
/// use farmtech_core::validation::validate_greater_than;
///
/// assert!(validate_greater_than("rows", 3u32, 0).is_ok());
/// assert!(validate_greater_than("rows", 0u32, 0).is_err());
/// ```
pub fn validate_greater_than<T: InputNumber>(field: &str, value: T, min: T) -> ValidationResult<T> {
    // Written as a negated `>` so NaN is rejected too.
    if !(value > min) || !value.is_finite() {
        return Err(ValidationError::MustBeGreaterThan {
            field: field.to_string(),
            min: min.to_string(),
        });
    }

    Ok(value)
}

/// Parses a raw answer and checks it with [`validate_greater_than`].
///
/// ## Rules
/// - Leading/trailing whitespace is ignored
/// - Unparseable text → `NotANumber`
/// - `inf`/`NaN` and values `<= min` → `MustBeGreaterThan`
pub fn parse_greater_than<T: InputNumber>(field: &str, raw: &str, min: T) -> ValidationResult<T> {
    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|_| ValidationError::NotANumber {
            field: field.to_string(),
        })?;

    validate_greater_than(field, value, min)
}

// =============================================================================
// Record Invariants
// =============================================================================

/// Area must be strictly positive.
pub fn validate_positive_area(area_m2: f64) -> ValidationResult<f64> {
    if !(area_m2 > 0.0) || !area_m2.is_finite() {
        return Err(ValidationError::MustBePositive {
            field: "area".to_string(),
        });
    }

    Ok(area_m2)
}

/// Quantity must be zero or more.
pub fn validate_non_negative_quantity(quantity: f64) -> ValidationResult<f64> {
    if !(quantity >= 0.0) || !quantity.is_finite() {
        return Err(ValidationError::MustBeNonNegative {
            field: "input quantity".to_string(),
        });
    }

    Ok(quantity)
}

// =============================================================================
// Positions
// =============================================================================

/// Translates a 1-based position into an internal index.
///
/// ## Rules
/// - `1 <= position <= count`, otherwise `OutOfRange`
///
/// ## Example
/// ```rust
/// use farmtech_core::validation::validate_position;
///
/// assert_eq!(validate_position(1, 3).unwrap(), 0);
/// assert_eq!(validate_position(3, 3).unwrap(), 2);
/// assert!(validate_position(0, 3).is_err());
/// assert!(validate_position(4, 3).is_err());
/// ```
pub fn validate_position(position: usize, count: usize) -> CoreResult<usize> {
    if position == 0 || position > count {
        return Err(CoreError::OutOfRange { position, count });
    }

    Ok(position - 1)
}

// =============================================================================
// Unit Tests
// =============================================================================
