//! The table catalog: one explicitly-constructed owner for every loaded
//! table, passed where needed instead of living in ambient global state.

use crate::error::{TableError, TableResult};
use crate::property::SaturationAxis;
use crate::saturation::SaturationTable;
use crate::schema::CatalogDef;
use crate::superheated::SuperheatedTable;
use std::collections::HashMap;

/// Canonical name of a saturation table, e.g. `water_temperature_table`.
pub fn saturation_table_name(substance: &str, axis: SaturationAxis) -> String {
    format!("{}_{}_table", normalize(substance), axis.key())
}

/// Canonical name of a superheated-vapor table, e.g. `water_shv_table`.
pub fn superheated_table_name(substance: &str) -> String {
    format!("{}_shv_table", normalize(substance))
}

fn normalize(substance: &str) -> String {
    substance.trim().to_ascii_lowercase()
}

/// All tables for the process lifetime. Read-only after construction, so it
/// can be shared across threads by reference.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    saturation: HashMap<(String, SaturationAxis), SaturationTable>,
    superheated: HashMap<String, SuperheatedTable>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a parsed definition, validating every table.
    pub fn from_def(def: &CatalogDef) -> TableResult<Self> {
        let mut catalog = Self::new();

        for substance in &def.substances {
            if let Some(table_def) = &substance.temperature_table {
                let name = saturation_table_name(&substance.name, SaturationAxis::Temperature);
                let table =
                    SaturationTable::from_def(&name, SaturationAxis::Temperature, table_def)?;
                catalog.insert_saturation(&substance.name, table);
            }
            if let Some(table_def) = &substance.pressure_table {
                let name = saturation_table_name(&substance.name, SaturationAxis::Pressure);
                let table = SaturationTable::from_def(&name, SaturationAxis::Pressure, table_def)?;
                catalog.insert_saturation(&substance.name, table);
            }
            if let Some(table_def) = &substance.superheated_table {
                let name = superheated_table_name(&substance.name);
                let table = SuperheatedTable::from_def(&name, table_def)?;
                catalog.insert_superheated(&substance.name, table);
            }
        }

        Ok(catalog)
    }

    pub fn insert_saturation(&mut self, substance: &str, table: SaturationTable) {
        self.saturation
            .insert((normalize(substance), table.axis()), table);
    }

    pub fn insert_superheated(&mut self, substance: &str, table: SuperheatedTable) {
        self.superheated.insert(normalize(substance), table);
    }

    /// The saturation table registered for a substance on a lookup axis.
    pub fn saturation(
        &self,
        substance: &str,
        axis: SaturationAxis,
    ) -> TableResult<&SaturationTable> {
        self.saturation
            .get(&(normalize(substance), axis))
            .ok_or_else(|| TableError::TableNotFound {
                name: saturation_table_name(substance, axis),
            })
    }

    /// The superheated-vapor table for a substance, if one was loaded.
    pub fn superheated(&self, substance: &str) -> Option<&SuperheatedTable> {
        self.superheated.get(&normalize(substance))
    }

    /// Sorted list of substances with at least one table loaded.
    pub fn substances(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .saturation
            .keys()
            .map(|(s, _)| s.clone())
            .chain(self.superheated.keys().cloned())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Sorted canonical names of every loaded table.
    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .saturation
            .keys()
            .map(|(s, axis)| saturation_table_name(s, *axis))
            .chain(self.superheated.keys().map(|s| superheated_table_name(s)))
            .collect();
        names.sort();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.saturation.is_empty() && self.superheated.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::saturation::SaturationRow;

    fn single_row_table(axis: SaturationAxis) -> SaturationTable {
        SaturationTable::new(
            axis,
            vec![SaturationRow {
                temperature_c: 20.0,
                pressure_bar: 0.0234,
                vf: 0.001002,
                vg: 57.79,
                uf: 83.9,
                ug: 2402.3,
                hf: 83.9,
                hg: 2538.1,
                sf: 0.2965,
                sg: 8.6661,
            }],
        )
    }

    #[test]
    fn table_names_follow_the_convention() {
        assert_eq!(
            saturation_table_name(" Water ", SaturationAxis::Temperature),
            "water_temperature_table"
        );
        assert_eq!(
            saturation_table_name("R-134a", SaturationAxis::Pressure),
            "r-134a_pressure_table"
        );
        assert_eq!(superheated_table_name("Ammonia"), "ammonia_shv_table");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut catalog = Catalog::new();
        catalog.insert_saturation("Water", single_row_table(SaturationAxis::Temperature));

        assert!(catalog
            .saturation("WATER", SaturationAxis::Temperature)
            .is_ok());
        assert!(catalog.superheated("water").is_none());
    }

    #[test]
    fn missing_table_error_names_the_table() {
        let catalog = Catalog::new();
        let err = catalog
            .saturation("water", SaturationAxis::Pressure)
            .unwrap_err();
        assert_eq!(
            err,
            TableError::TableNotFound {
                name: "water_pressure_table".into(),
            }
        );
    }

    #[test]
    fn tables_are_keyed_per_axis() {
        let mut catalog = Catalog::new();
        catalog.insert_saturation("water", single_row_table(SaturationAxis::Temperature));
        catalog.insert_saturation("water", single_row_table(SaturationAxis::Pressure));

        assert_eq!(
            catalog.table_names(),
            vec![
                "water_pressure_table".to_string(),
                "water_temperature_table".to_string(),
            ]
        );
        assert_eq!(catalog.substances(), vec!["water".to_string()]);
    }
}
