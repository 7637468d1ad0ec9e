//! pt-tables: in-memory property tables for phasetab.
//!
//! Provides:
//! - Strongly-typed property identifiers (no string-keyed column lookup)
//! - Columnar saturation tables keyed by temperature or pressure
//! - Superheated-vapor grids partitioned into pressure sections
//! - A `Catalog` owning every loaded table for the process lifetime
//! - A serde schema for normalized catalog files, validated at load
//!
//! Tables are built once from external data and are read-only afterwards,
//! so a `Catalog` can be shared freely across threads.

pub mod catalog;
pub mod error;
pub mod property;
pub mod saturation;
pub mod schema;
pub mod superheated;

// Re-exports for ergonomics
pub use catalog::{Catalog, saturation_table_name, superheated_table_name};
pub use error::{TableError, TableResult};
pub use property::{PairedProperty, PhaseProperties, PropertyKind, SaturationAxis};
pub use saturation::{SaturationRow, SaturationTable};
pub use schema::{
    CatalogDef, PressureSectionDef, SaturationTableDef, SubstanceDef, SuperheatedTableDef,
};
pub use superheated::{PressureSection, SuperheatedTable};
