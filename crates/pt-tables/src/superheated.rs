//! Superheated-vapor grids.
//!
//! The raw spreadsheets encode these irregularly: the section pressure lives
//! in a column header string, sections span different temperature ranges, and
//! cells outside the physical superheated region are blank. Loading
//! normalizes all of that into the structures here; missing cells become NaN
//! so the interpolator can skip them without guessing.

use crate::error::{TableError, TableResult};
use crate::property::PairedProperty;
use crate::schema::{PressureSectionDef, SuperheatedTableDef};

/// Property columns at one nominal pressure.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureSection {
    pressure_bar: f64,
    specific_volume: Vec<f64>,
    internal_energy: Vec<f64>,
    enthalpy: Vec<f64>,
    entropy: Vec<f64>,
}

impl PressureSection {
    pub fn pressure_bar(&self) -> f64 {
        self.pressure_bar
    }

    pub fn column(&self, property: PairedProperty) -> &[f64] {
        match property {
            PairedProperty::SpecificVolume => &self.specific_volume,
            PairedProperty::InternalEnergy => &self.internal_energy,
            PairedProperty::Enthalpy => &self.enthalpy,
            PairedProperty::Entropy => &self.entropy,
        }
    }

    pub fn value(&self, property: PairedProperty, row: usize) -> f64 {
        self.column(property)[row]
    }

    /// Whether this temperature row is an actual data point in this section
    /// (all four property cells present).
    pub fn row_is_valid(&self, row: usize) -> bool {
        PairedProperty::ALL
            .into_iter()
            .all(|p| self.column(p)[row].is_finite())
    }
}

/// Shared temperature column plus pressure sections sorted ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct SuperheatedTable {
    temperatures_c: Vec<f64>,
    sections: Vec<PressureSection>,
}

impl SuperheatedTable {
    /// Build from a definition, validating the shared temperature column,
    /// per-section column presence and lengths, and section ordering.
    pub fn from_def(name: &str, def: &SuperheatedTableDef) -> TableResult<Self> {
        let temperatures_c = def
            .temperature
            .clone()
            .ok_or_else(|| TableError::MissingColumn {
                table: name.to_string(),
                column: "temperature",
            })?;

        if temperatures_c.iter().any(|t| !t.is_finite()) {
            return Err(TableError::NonFiniteColumn {
                table: name.to_string(),
                column: "temperature",
            });
        }
        if temperatures_c.windows(2).any(|w| w[0] >= w[1]) {
            return Err(TableError::UnsortedTemperatures {
                table: name.to_string(),
            });
        }

        let expected = temperatures_c.len();
        let sections: Vec<PressureSection> = def
            .sections
            .iter()
            .map(|s| build_section(name, s, expected))
            .collect::<TableResult<_>>()?;

        if sections
            .windows(2)
            .any(|w| w[0].pressure_bar >= w[1].pressure_bar)
        {
            return Err(TableError::UnsortedSections {
                table: name.to_string(),
            });
        }

        Ok(Self {
            temperatures_c,
            sections,
        })
    }

    pub fn temperatures_c(&self) -> &[f64] {
        &self.temperatures_c
    }

    pub fn sections(&self) -> &[PressureSection] {
        &self.sections
    }
}

fn build_section(
    table: &str,
    def: &PressureSectionDef,
    expected: usize,
) -> TableResult<PressureSection> {
    if !def.pressure.is_finite() {
        return Err(TableError::NonFiniteColumn {
            table: table.to_string(),
            column: "pressure",
        });
    }

    Ok(PressureSection {
        pressure_bar: def.pressure,
        specific_volume: cells(table, "specific_volume", &def.specific_volume, expected)?,
        internal_energy: cells(table, "internal_energy", &def.internal_energy, expected)?,
        enthalpy: cells(table, "enthalpy", &def.enthalpy, expected)?,
        entropy: cells(table, "entropy", &def.entropy, expected)?,
    })
}

fn cells(
    table: &str,
    column: &'static str,
    values: &Option<Vec<Option<f64>>>,
    expected: usize,
) -> TableResult<Vec<f64>> {
    let values = values.as_deref().ok_or_else(|| TableError::MissingColumn {
        table: table.to_string(),
        column,
    })?;
    if values.len() != expected {
        return Err(TableError::ColumnLength {
            table: table.to_string(),
            column,
            expected,
            got: values.len(),
        });
    }
    Ok(values.iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_column(values: &[f64]) -> Option<Vec<Option<f64>>> {
        Some(values.iter().copied().map(Some).collect())
    }

    fn two_section_def() -> SuperheatedTableDef {
        SuperheatedTableDef {
            temperature: Some(vec![100.0, 150.0, 200.0]),
            sections: vec![
                PressureSectionDef {
                    pressure: 0.5,
                    specific_volume: full_column(&[3.418, 3.889, 4.356]),
                    internal_energy: full_column(&[2511.6, 2585.6, 2659.9]),
                    enthalpy: full_column(&[2682.5, 2780.1, 2877.7]),
                    entropy: full_column(&[7.6947, 7.9401, 8.1580]),
                },
                PressureSectionDef {
                    pressure: 1.0,
                    specific_volume: Some(vec![None, Some(1.9364), Some(2.172)]),
                    internal_energy: Some(vec![None, Some(2582.8), Some(2658.1)]),
                    enthalpy: Some(vec![None, Some(2776.4), Some(2875.3)]),
                    entropy: Some(vec![None, Some(7.6134), Some(7.8343)]),
                },
            ],
        }
    }

    #[test]
    fn builds_sections_with_nan_gaps() {
        let table = SuperheatedTable::from_def("water_shv_table", &two_section_def()).unwrap();
        assert_eq!(table.sections().len(), 2);

        let low = &table.sections()[0];
        let high = &table.sections()[1];
        assert!(low.row_is_valid(0));
        assert!(!high.row_is_valid(0));
        assert!(high.row_is_valid(1));
        assert!(high.value(PairedProperty::Enthalpy, 0).is_nan());
        assert_eq!(high.value(PairedProperty::Enthalpy, 1), 2776.4);
    }

    #[test]
    fn unsorted_sections_are_rejected() {
        let mut def = two_section_def();
        def.sections.swap(0, 1);
        let err = SuperheatedTable::from_def("water_shv_table", &def).unwrap_err();
        assert_eq!(
            err,
            TableError::UnsortedSections {
                table: "water_shv_table".into(),
            }
        );
    }

    #[test]
    fn unsorted_temperatures_are_rejected() {
        let mut def = two_section_def();
        def.temperature = Some(vec![100.0, 90.0, 200.0]);
        let err = SuperheatedTable::from_def("water_shv_table", &def).unwrap_err();
        assert_eq!(
            err,
            TableError::UnsortedTemperatures {
                table: "water_shv_table".into(),
            }
        );
    }

    #[test]
    fn short_section_column_is_rejected() {
        let mut def = two_section_def();
        def.sections[0].entropy = full_column(&[7.6947, 7.9401]);
        let err = SuperheatedTable::from_def("water_shv_table", &def).unwrap_err();
        assert!(matches!(
            err,
            TableError::ColumnLength {
                column: "entropy",
                expected: 3,
                got: 2,
                ..
            }
        ));
    }
}
