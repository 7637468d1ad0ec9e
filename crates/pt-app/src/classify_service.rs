//! The classification request surface.

use crate::error::AppResult;
use pt_state::{StateResult, classify, find_row};
use pt_tables::{Catalog, PropertyKind, SaturationAxis, SaturationRow};

/// One classification query: a substance plus two independent
/// (property, value) pairs, the first of which indexes the saturation curve.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifyRequest {
    pub substance: String,
    /// Property the saturation lookup runs along (°C or bar).
    pub first_property: SaturationAxis,
    pub first_value: f64,
    pub second_property: PropertyKind,
    pub second_value: f64,
}

/// A classification outcome together with the saturation row it was decided
/// against, for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub substance: String,
    pub row: SaturationRow,
    pub result: StateResult,
}

/// Classify the thermodynamic state for a request: locate the nearest
/// saturation row along the first property, then classify against the
/// second.
pub fn classify_state(catalog: &Catalog, request: &ClassifyRequest) -> AppResult<Classification> {
    let table = catalog.saturation(&request.substance, request.first_property)?;
    let row = find_row(table, request.first_property, request.first_value)?;
    tracing::debug!(
        t_c = row.temperature_c,
        p_bar = row.pressure_bar,
        "matched saturation row"
    );

    let superheated = catalog.superheated(&request.substance);
    let result = classify(
        row,
        request.second_property,
        request.second_value,
        superheated,
    )?;
    tracing::debug!(state = result.label(), "state classified");

    Ok(Classification {
        substance: request.substance.clone(),
        row: *row,
        result,
    })
}
