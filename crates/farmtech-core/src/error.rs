//! # Error Types
//!
//! Domain-specific error types for farmtech-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  farmtech-core errors (this file)                                      │
//! │  ├── CoreError        - Record store failures                          │
//! │  └── ValidationError  - Numeric input rule violations                  │
//! │                                                                         │
//! │  farmtech-cli errors (app crate)                                       │
//! │  └── AppError         - Terminal I/O + wrapped CoreError               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → message on screen      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT An Error
//! A delete the operator declines is a normal outcome and is reported as
//! [`DeleteOutcome::Cancelled`](crate::store::DeleteOutcome::Cancelled).

use thiserror::Error;

use crate::types::CropKind;

// =============================================================================
// Core Error
// =============================================================================

/// Record store errors.
///
/// Every variant is recoverable: the caller can pick another position or
/// retry with different input. None of them leave the store modified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Position is outside `1..=count`.
    ///
    /// ## When This Occurs
    /// - Position 0 (positions are 1-based)
    /// - Position past the last record
    /// - Any position while the store is empty
    #[error("Position {position} is out of range (valid: 1 to {count})")]
    OutOfRange { position: usize, count: usize },

    /// Statistics requested with zero records (mean area is undefined).
    #[error("No records registered")]
    EmptyStore,

    /// Update called without selecting any field.
    #[error("Update must change at least one field")]
    EmptyPatch,

    /// Update parameters belong to a different crop than the record.
    ///
    /// ## When This Occurs
    /// - Circle dimensions sent for a RowCrop record
    /// - Per-hectare dosage sent for a RowCrop record
    /// - A pivot fertilizer chosen for a RowCrop record (and vice versa)
    #[error("Record is {expected}, but the update targets {found}")]
    CropMismatch { expected: CropKind, found: CropKind },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The menu layer uses these to reject a typed value and ask again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value could not be parsed as a number.
    #[error("{field}: enter a valid number")]
    NotANumber { field: String },

    /// Value is not strictly greater than the required minimum.
    #[error("{field} must be greater than {min}")]
    MustBeGreaterThan { field: String, min: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or more.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
