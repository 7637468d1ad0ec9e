//! Nearest-row saturation lookup.

use crate::error::StateError;
use pt_core::numeric::ensure_finite;
use pt_tables::{SaturationAxis, SaturationRow, SaturationTable};

/// Find the saturation row whose axis value is nearest the requested value.
///
/// This deliberately snaps to the nearest tabulated point instead of
/// interpolating between rows: typical saturation tables are dense enough
/// along the curve that the nearest row is an acceptable approximation.
/// Ties are broken by first occurrence in table order.
pub fn find_row<'a>(
    table: &'a SaturationTable,
    axis: SaturationAxis,
    value: f64,
) -> Result<&'a SaturationRow, StateError> {
    ensure_finite(value, "lookup value")?;

    let mut best: Option<(&SaturationRow, f64)> = None;
    for row in table.rows() {
        let distance = (row.axis_value(axis) - value).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((row, distance)),
        }
    }

    best.map(|(row, _)| row)
        .ok_or(StateError::EmptyTable { axis })
}
