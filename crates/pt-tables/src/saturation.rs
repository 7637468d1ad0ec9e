//! Saturation tables: tabulated liquid/vapor equilibrium states.

use crate::error::{TableError, TableResult};
use crate::property::{PairedProperty, PhaseProperties, SaturationAxis};
use crate::schema::SaturationTableDef;
use pt_core::units::{Pressure, Temperature, bar, degc};

/// One tabulated saturation state.
///
/// Temperature is in °C and pressure in bar; the six paired columns are the
/// saturated-liquid (f) and saturated-vapor (g) values of specific volume,
/// internal energy, enthalpy, and entropy in table units. Physically valid
/// data has f ≤ g in every pair; this is assumed, not enforced at load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationRow {
    pub temperature_c: f64,
    pub pressure_bar: f64,
    pub vf: f64,
    pub vg: f64,
    pub uf: f64,
    pub ug: f64,
    pub hf: f64,
    pub hg: f64,
    pub sf: f64,
    pub sg: f64,
}

impl SaturationRow {
    /// Saturation temperature as a typed quantity.
    pub fn temperature(&self) -> Temperature {
        degc(self.temperature_c)
    }

    /// Saturation pressure as a typed quantity.
    pub fn pressure(&self) -> Pressure {
        bar(self.pressure_bar)
    }

    pub fn axis_value(&self, axis: SaturationAxis) -> f64 {
        match axis {
            SaturationAxis::Temperature => self.temperature_c,
            SaturationAxis::Pressure => self.pressure_bar,
        }
    }

    /// The (f, g) pair for a property at this saturation state.
    pub fn pair(&self, property: PairedProperty) -> (f64, f64) {
        match property {
            PairedProperty::SpecificVolume => (self.vf, self.vg),
            PairedProperty::InternalEnergy => (self.uf, self.ug),
            PairedProperty::Enthalpy => (self.hf, self.hg),
            PairedProperty::Entropy => (self.sf, self.sg),
        }
    }

    /// Full saturated-liquid property tuple.
    pub fn liquid_properties(&self) -> PhaseProperties {
        PhaseProperties {
            specific_volume: self.vf,
            internal_energy: self.uf,
            enthalpy: self.hf,
            entropy: self.sf,
        }
    }

    /// Full saturated-vapor property tuple.
    pub fn vapor_properties(&self) -> PhaseProperties {
        PhaseProperties {
            specific_volume: self.vg,
            internal_energy: self.ug,
            enthalpy: self.hg,
            entropy: self.sg,
        }
    }
}

/// Ordered sequence of saturation rows for one substance, keyed by one axis.
///
/// Separate tables exist per lookup axis even though both describe the same
/// physical curve; row ordering along the axis is assumed but not enforced,
/// since lookup is a full scan.
#[derive(Debug, Clone, PartialEq)]
pub struct SaturationTable {
    axis: SaturationAxis,
    rows: Vec<SaturationRow>,
}

impl SaturationTable {
    pub fn new(axis: SaturationAxis, rows: Vec<SaturationRow>) -> Self {
        Self { axis, rows }
    }

    /// Build from a columnar definition, validating column presence and
    /// shared length. `name` is used only for error reporting.
    pub fn from_def(name: &str, axis: SaturationAxis, def: &SaturationTableDef) -> TableResult<Self> {
        let temperature = require(name, "temperature", &def.temperature)?;
        let expected = temperature.len();

        let pressure = column(name, "pressure", &def.pressure, expected)?;
        let vf = column(name, "specific_volume_f", &def.specific_volume_f, expected)?;
        let vg = column(name, "specific_volume_g", &def.specific_volume_g, expected)?;
        let uf = column(name, "internal_energy_f", &def.internal_energy_f, expected)?;
        let ug = column(name, "internal_energy_g", &def.internal_energy_g, expected)?;
        let hf = column(name, "enthalpy_f", &def.enthalpy_f, expected)?;
        let hg = column(name, "enthalpy_g", &def.enthalpy_g, expected)?;
        let sf = column(name, "entropy_f", &def.entropy_f, expected)?;
        let sg = column(name, "entropy_g", &def.entropy_g, expected)?;

        for (column, values) in [("temperature", temperature), ("pressure", pressure)] {
            if values.iter().any(|v| !v.is_finite()) {
                return Err(TableError::NonFiniteColumn {
                    table: name.to_string(),
                    column,
                });
            }
        }

        let rows = (0..expected)
            .map(|i| SaturationRow {
                temperature_c: temperature[i],
                pressure_bar: pressure[i],
                vf: vf[i],
                vg: vg[i],
                uf: uf[i],
                ug: ug[i],
                hf: hf[i],
                hg: hg[i],
                sf: sf[i],
                sg: sg[i],
            })
            .collect();

        Ok(Self { axis, rows })
    }

    pub fn axis(&self) -> SaturationAxis {
        self.axis
    }

    pub fn rows(&self) -> &[SaturationRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn require<'a>(
    table: &str,
    column: &'static str,
    values: &'a Option<Vec<f64>>,
) -> TableResult<&'a [f64]> {
    values
        .as_deref()
        .ok_or_else(|| TableError::MissingColumn {
            table: table.to_string(),
            column,
        })
}

fn column<'a>(
    table: &str,
    name: &'static str,
    values: &'a Option<Vec<f64>>,
    expected: usize,
) -> TableResult<&'a [f64]> {
    let values = require(table, name, values)?;
    if values.len() != expected {
        return Err(TableError::ColumnLength {
            table: table.to_string(),
            column: name,
            expected,
            got: values.len(),
        });
    }
    Ok(values)
}
