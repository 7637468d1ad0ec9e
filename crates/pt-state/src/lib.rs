//! pt-state: state classification and interpolation for phasetab.
//!
//! Provides:
//! - Nearest-row saturation lookup
//! - Phase-state classification against a saturation row
//! - Two-stage bilinear interpolation over superheated-vapor grids
//!
//! # Architecture
//!
//! The three operations compose into one pipeline: a saturation table and a
//! first property locate a row, the row and a second property decide the
//! phase state, and superheated states delegate to grid interpolation. All
//! three are pure functions over immutable tables; no state is carried
//! between queries.
//!
//! # Example
//!
//! ```
//! use pt_state::{classify, find_row, StateResult};
//! use pt_tables::{PropertyKind, SaturationAxis, SaturationRow, SaturationTable};
//!
//! let table = SaturationTable::new(
//!     SaturationAxis::Temperature,
//!     vec![SaturationRow {
//!         temperature_c: 20.0,
//!         pressure_bar: 0.0234,
//!         vf: 0.001002,
//!         vg: 57.79,
//!         uf: 83.9,
//!         ug: 2402.3,
//!         hf: 83.9,
//!         hg: 2538.1,
//!         sf: 0.2965,
//!         sg: 8.6661,
//!     }],
//! );
//!
//! let row = find_row(&table, SaturationAxis::Temperature, 20.0).unwrap();
//! let result = classify(row, PropertyKind::Enthalpy, 500.0, None).unwrap();
//! assert!(matches!(result, StateResult::Mixture { .. }));
//! ```

pub mod classify;
pub mod error;
pub mod interp;
pub mod lookup;

// Re-exports for ergonomics
pub use classify::{SATURATION_EPS, StateResult, classify};
pub use error::StateError;
pub use interp::interpolate;
pub use lookup::find_row;
