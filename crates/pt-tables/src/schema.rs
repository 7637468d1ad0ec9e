//! Catalog file schema definitions.
//!
//! Normalized, columnar representation of already-parsed property tables.
//! Columns are optional at the serde level so that an absent column is
//! reported as a `MissingColumn` error with the table and column named,
//! instead of a bare deserialization failure. Superheated cells use
//! `Option<f64>`: `null` marks a (T, P) combination outside the physical
//! superheated region.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogDef {
    #[serde(default)]
    pub substances: Vec<SubstanceDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubstanceDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_table: Option<SaturationTableDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_table: Option<SaturationTableDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superheated_table: Option<SuperheatedTableDef>,
}

/// Columnar saturation table data.
///
/// All ten columns are required and must share one length.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SaturationTableDef {
    #[serde(default)]
    pub temperature: Option<Vec<f64>>,
    #[serde(default)]
    pub pressure: Option<Vec<f64>>,
    #[serde(default)]
    pub specific_volume_f: Option<Vec<f64>>,
    #[serde(default)]
    pub specific_volume_g: Option<Vec<f64>>,
    #[serde(default)]
    pub internal_energy_f: Option<Vec<f64>>,
    #[serde(default)]
    pub internal_energy_g: Option<Vec<f64>>,
    #[serde(default)]
    pub enthalpy_f: Option<Vec<f64>>,
    #[serde(default)]
    pub enthalpy_g: Option<Vec<f64>>,
    #[serde(default)]
    pub entropy_f: Option<Vec<f64>>,
    #[serde(default)]
    pub entropy_g: Option<Vec<f64>>,
}

/// Superheated-vapor grid: one shared temperature column plus pressure
/// sections, each carrying four property columns of the same length.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SuperheatedTableDef {
    #[serde(default)]
    pub temperature: Option<Vec<f64>>,
    #[serde(default)]
    pub sections: Vec<PressureSectionDef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PressureSectionDef {
    /// Nominal section pressure [bar].
    pub pressure: f64,
    #[serde(default)]
    pub specific_volume: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub internal_energy: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub enthalpy: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub entropy: Option<Vec<Option<f64>>>,
}
