//! Strongly-typed property identifiers.
//!
//! The source spreadsheets index columns by presentation-formatted headers
//! ("Enthalpy    (hf, kJ/kg)" and the like). Everything downstream of the
//! loader works with these enums instead.

use crate::error::TableError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Saturation-table lookup axis: the property the caller already knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaturationAxis {
    Temperature,
    Pressure,
}

impl SaturationAxis {
    /// Stable identifier used in table names and config files.
    pub fn key(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Pressure => "pressure",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature [°C]",
            Self::Pressure => "Pressure [bar]",
        }
    }
}

impl fmt::Display for SaturationAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SaturationAxis {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "temperature" | "temp" | "t" => Ok(Self::Temperature),
            "pressure" | "p" => Ok(Self::Pressure),
            _ => Err(TableError::UnknownAxis { input: s.into() }),
        }
    }
}

/// Any property a query can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Temperature,
    Pressure,
    SpecificVolume,
    InternalEnergy,
    Enthalpy,
    Entropy,
}

impl PropertyKind {
    pub fn key(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Pressure => "pressure",
            Self::SpecificVolume => "specific_volume",
            Self::InternalEnergy => "internal_energy",
            Self::Enthalpy => "enthalpy",
            Self::Entropy => "entropy",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature [°C]",
            Self::Pressure => "Pressure [bar]",
            Self::SpecificVolume => "Specific Volume [m³/kg]",
            Self::InternalEnergy => "Internal Energy [kJ/kg]",
            Self::Enthalpy => "Enthalpy [kJ/kg]",
            Self::Entropy => "Entropy [kJ/(kg·K)]",
        }
    }

    /// The saturated liquid/vapor pair this property carries, if any.
    ///
    /// Temperature and pressure index the saturation curve directly and
    /// have no f/g pair.
    pub fn as_paired(self) -> Option<PairedProperty> {
        match self {
            Self::SpecificVolume => Some(PairedProperty::SpecificVolume),
            Self::InternalEnergy => Some(PairedProperty::InternalEnergy),
            Self::Enthalpy => Some(PairedProperty::Enthalpy),
            Self::Entropy => Some(PairedProperty::Entropy),
            Self::Temperature | Self::Pressure => None,
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PropertyKind {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "temperature" | "temp" | "t" => Ok(Self::Temperature),
            "pressure" | "p" => Ok(Self::Pressure),
            "specific_volume" | "volume" | "v" => Ok(Self::SpecificVolume),
            "internal_energy" | "u" => Ok(Self::InternalEnergy),
            "enthalpy" | "h" => Ok(Self::Enthalpy),
            "entropy" | "s" => Ok(Self::Entropy),
            _ => Err(TableError::UnknownProperty { input: s.into() }),
        }
    }
}

/// The four properties tabulated as saturated-liquid (f) / saturated-vapor (g)
/// pairs along the saturation curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairedProperty {
    SpecificVolume,
    InternalEnergy,
    Enthalpy,
    Entropy,
}

impl PairedProperty {
    pub const ALL: [PairedProperty; 4] = [
        Self::SpecificVolume,
        Self::InternalEnergy,
        Self::Enthalpy,
        Self::Entropy,
    ];

    pub fn key(self) -> &'static str {
        PropertyKind::from(self).key()
    }

    pub fn label(self) -> &'static str {
        PropertyKind::from(self).label()
    }
}

impl From<PairedProperty> for PropertyKind {
    fn from(p: PairedProperty) -> Self {
        match p {
            PairedProperty::SpecificVolume => Self::SpecificVolume,
            PairedProperty::InternalEnergy => Self::InternalEnergy,
            PairedProperty::Enthalpy => Self::Enthalpy,
            PairedProperty::Entropy => Self::Entropy,
        }
    }
}

impl fmt::Display for PairedProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A complete set of the four tabulated properties at one state.
///
/// Units follow the tables: m³/kg, kJ/kg, kJ/kg, kJ/(kg·K).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseProperties {
    pub specific_volume: f64,
    pub internal_energy: f64,
    pub enthalpy: f64,
    pub entropy: f64,
}

impl PhaseProperties {
    pub fn get(&self, property: PairedProperty) -> f64 {
        match property {
            PairedProperty::SpecificVolume => self.specific_volume,
            PairedProperty::InternalEnergy => self.internal_energy,
            PairedProperty::Enthalpy => self.enthalpy,
            PairedProperty::Entropy => self.entropy,
        }
    }

    /// Iterate over (property, value) pairs in tabulation order.
    pub fn iter(&self) -> impl Iterator<Item = (PairedProperty, f64)> + '_ {
        PairedProperty::ALL.into_iter().map(|p| (p, self.get(p)))
    }
}
