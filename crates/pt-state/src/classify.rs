//! Phase-state classification against a saturation row.

use crate::error::StateError;
use crate::interp::interpolate;
use pt_core::numeric::ensure_finite;
use pt_tables::{
    PairedProperty, PhaseProperties, PropertyKind, SaturationRow, SuperheatedTable,
};

/// Absolute tolerance, in table units, for treating the second value as
/// sitting exactly on a saturation bound.
pub const SATURATION_EPS: f64 = 1e-6;

/// Outcome of a classification.
///
/// Compressed-liquid results carry a descriptive message instead of
/// properties: computing compressed-liquid properties requires tables this
/// system does not load.
#[derive(Debug, Clone, PartialEq)]
pub enum StateResult {
    CompressedLiquid { detail: String },
    SaturatedLiquid { properties: PhaseProperties },
    SaturatedVapor { properties: PhaseProperties },
    /// Exactly on the saturation line (temperature query equal to the row's
    /// saturation temperature): quality is indeterminate, so both bounding
    /// property sets are reported.
    Saturated {
        liquid: PhaseProperties,
        vapor: PhaseProperties,
    },
    Mixture {
        quality: f64,
        properties: PhaseProperties,
    },
    SuperheatedVapor { properties: PhaseProperties },
}

impl StateResult {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CompressedLiquid { .. } => "Compressed Liquid",
            Self::SaturatedLiquid { .. } => "Saturated Liquid",
            Self::SaturatedVapor { .. } => "Saturated Vapor",
            Self::Saturated { .. } => "Saturated",
            Self::Mixture { .. } => "Saturated Liquid-Vapor Mixture",
            Self::SuperheatedVapor { .. } => "Superheated Vapor",
        }
    }

    /// The single property set this state determines, if it determines one.
    pub fn properties(&self) -> Option<&PhaseProperties> {
        match self {
            Self::SaturatedLiquid { properties }
            | Self::SaturatedVapor { properties }
            | Self::Mixture { properties, .. }
            | Self::SuperheatedVapor { properties } => Some(properties),
            Self::CompressedLiquid { .. } | Self::Saturated { .. } => None,
        }
    }

    pub fn quality(&self) -> Option<f64> {
        match self {
            Self::Mixture { quality, .. } => Some(*quality),
            _ => None,
        }
    }
}

/// Decide the phase state from a saturation row and a second property value.
///
/// Temperature compares directly against the row's saturation temperature;
/// the four tabulated properties compare against their liquid/vapor pair.
/// Pressure is rejected: it indexes the saturation curve and carries no
/// quality axis.
///
/// Known quirk, kept so existing results stay reproducible: when the second
/// value exceeds the vapor bound, properties are interpolated at the matched
/// row's own saturation temperature and pressure, so the reported values sit
/// on the saturation curve rather than at a state consistent with the
/// queried value. See `superheated_by_property_reads_the_saturation_point`.
pub fn classify(
    row: &SaturationRow,
    second_property: PropertyKind,
    second_value: f64,
    superheated: Option<&SuperheatedTable>,
) -> Result<StateResult, StateError> {
    ensure_finite(second_value, "second property value")?;

    match second_property {
        PropertyKind::Temperature => classify_by_temperature(row, second_value, superheated),
        PropertyKind::Pressure => Err(StateError::UnsupportedProperty {
            property: PropertyKind::Pressure,
        }),
        other => {
            // The remaining kinds all carry an f/g pair.
            let paired = other.as_paired().ok_or(StateError::UnsupportedProperty {
                property: other,
            })?;
            classify_by_pair(row, paired, second_value, superheated)
        }
    }
}

fn classify_by_temperature(
    row: &SaturationRow,
    temperature_c: f64,
    superheated: Option<&SuperheatedTable>,
) -> Result<StateResult, StateError> {
    if temperature_c > row.temperature_c {
        let table = superheated.ok_or(StateError::SuperheatedTableMissing)?;
        let properties = interpolate(table, temperature_c, row.pressure_bar)?;
        Ok(StateResult::SuperheatedVapor { properties })
    } else if temperature_c < row.temperature_c {
        Ok(StateResult::CompressedLiquid {
            detail: format!(
                "{:.2} °C is below the saturation temperature {:.2} °C at {:.4} bar; \
                 compressed-liquid tables are not available",
                temperature_c, row.temperature_c, row.pressure_bar
            ),
        })
    } else {
        Ok(StateResult::Saturated {
            liquid: row.liquid_properties(),
            vapor: row.vapor_properties(),
        })
    }
}

fn classify_by_pair(
    row: &SaturationRow,
    property: PairedProperty,
    value: f64,
    superheated: Option<&SuperheatedTable>,
) -> Result<StateResult, StateError> {
    let (f, g) = row.pair(property);

    if value < f {
        return Ok(StateResult::CompressedLiquid {
            detail: format!(
                "{} = {} is below the saturated-liquid value {} at {:.2} °C; \
                 compressed-liquid tables are not available",
                property.label(),
                value,
                f,
                row.temperature_c
            ),
        });
    }
    if value > g {
        let table = superheated.ok_or(StateError::SuperheatedTableMissing)?;
        let properties = interpolate(table, row.temperature_c, row.pressure_bar)?;
        return Ok(StateResult::SuperheatedVapor { properties });
    }

    // From here f ≤ value ≤ g; a zero-width interval has no quality axis.
    if g <= f {
        return Err(StateError::DegenerateRow { property });
    }

    if (value - f).abs() < SATURATION_EPS {
        return Ok(StateResult::SaturatedLiquid {
            properties: row.liquid_properties(),
        });
    }
    if (value - g).abs() < SATURATION_EPS {
        return Ok(StateResult::SaturatedVapor {
            properties: row.vapor_properties(),
        });
    }

    let quality = (value - f) / (g - f);
    let properties = quality_blend(quality, row.liquid_properties(), row.vapor_properties());
    Ok(StateResult::Mixture {
        quality,
        properties,
    })
}

/// Quality-weighted average along the liquid-vapor tie line.
///
/// Quality is a single scalar describing phase composition, so one value of
/// it fixes every property: `x·g + (1−x)·f` uniformly.
fn quality_blend(x: f64, liquid: PhaseProperties, vapor: PhaseProperties) -> PhaseProperties {
    let blend = |f: f64, g: f64| x * g + (1.0 - x) * f;
    PhaseProperties {
        specific_volume: blend(liquid.specific_volume, vapor.specific_volume),
        internal_energy: blend(liquid.internal_energy, vapor.internal_energy),
        enthalpy: blend(liquid.enthalpy, vapor.enthalpy),
        entropy: blend(liquid.entropy, vapor.entropy),
    }
}
