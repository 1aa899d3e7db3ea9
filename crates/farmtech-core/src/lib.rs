//! # farmtech-core: Pure Business Logic for FarmTech
//!
//! This crate is the **heart** of FarmTech. It holds the record store and the
//! area/dosage formulas as plain functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        FarmTech Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    farmtech-cli (menu loop)                     │   │
//! │  │    Entry ──► Report ──► Update ──► Delete ──► Exit              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ validated numbers                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ farmtech-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   calc    │  │   store   │  │ validation│  │   │
//! │  │   │ CropKind  │  │  areas    │  │ Record    │  │  > min    │  │   │
//! │  │   │ Catalog   │  │  dosages  │  │ Store     │  │ positions │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Crop kinds, units and the input catalog
//! - [`calc`] - Calculation Engine (area and input quantity)
//! - [`record`] - The `Record` aggregate and update patches
//! - [`store`] - `RecordStore` with 1-based positional operations
//! - [`validation`] - Numeric input rules and position translation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use farmtech_core::{Dosage, Geometry, InputProduct, Record, RecordStore};
//!
//! let mut store = RecordStore::new();
//!
//! let record = Record::compute(
//!     Geometry::Circle { radius_m: 50.0 },
//!     InputProduct::Nitrogen,
//!     Dosage::PerHectare { kg_per_hectare: 300.0 },
//! )?;
//! let position = store.append(record);
//! assert_eq!(position, 1);
//!
//! let stats = store.stats()?;
//! assert!((stats.total_area_m2 - 7853.98).abs() < 0.01);
//! # Ok::<(), farmtech_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calc;
pub mod error;
pub mod record;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calc::{Dosage, Geometry};
pub use error::{CoreError, CoreResult, ValidationError};
pub use record::{Record, RecordPatch};
pub use store::{CropCounts, DeleteOutcome, RecordStore, StoreStats};
pub use types::*;
