//! Two-stage bilinear interpolation over superheated-vapor grids.

use crate::error::StateError;
use pt_core::numeric::{ensure_finite, lerp};
use pt_tables::{PairedProperty, PhaseProperties, PressureSection, SuperheatedTable};

/// Interpolate the four properties at an arbitrary (T, P) point.
///
/// Stage one bounds the pressure between consecutive sections; stage two
/// bounds the temperature between rows that carry data in both bounding
/// sections; then each property is interpolated along temperature at both
/// pressures and the two results are interpolated along pressure.
///
/// Pressure is never extrapolated. Temperature below the first valid row is
/// extrapolated from the first two valid rows, a long-standing boundary
/// behavior kept so existing results stay reproducible. Temperature above
/// the last valid row is an error.
pub fn interpolate(
    table: &SuperheatedTable,
    temperature_c: f64,
    pressure_bar: f64,
) -> Result<PhaseProperties, StateError> {
    ensure_finite(temperature_c, "interpolation temperature")?;
    ensure_finite(pressure_bar, "interpolation pressure")?;

    let (low, high) = bound_pressure(table.sections(), pressure_bar)?;

    // Rows usable for bilinear interpolation: data present in both sections.
    let temperatures = table.temperatures_c();
    let valid: Vec<usize> = (0..temperatures.len())
        .filter(|&i| low.row_is_valid(i) && high.row_is_valid(i))
        .collect();

    let (i1, i2) = bound_temperature(temperatures, &valid, temperature_c)?;
    let (t1, t2) = (temperatures[i1], temperatures[i2]);
    let (p1, p2) = (low.pressure_bar(), high.pressure_bar());

    let at = |property: PairedProperty| {
        let along_t_low = lerp(
            temperature_c,
            t1,
            t2,
            low.value(property, i1),
            low.value(property, i2),
        );
        let along_t_high = lerp(
            temperature_c,
            t1,
            t2,
            high.value(property, i1),
            high.value(property, i2),
        );
        lerp(pressure_bar, p1, p2, along_t_low, along_t_high)
    };

    Ok(PhaseProperties {
        specific_volume: at(PairedProperty::SpecificVolume),
        internal_energy: at(PairedProperty::InternalEnergy),
        enthalpy: at(PairedProperty::Enthalpy),
        entropy: at(PairedProperty::Entropy),
    })
}

/// Consecutive sections with `p1 ≤ pressure ≤ p2`. A single-section table
/// serves exactly its own pressure as a degenerate interval.
fn bound_pressure(
    sections: &[PressureSection],
    pressure_bar: f64,
) -> Result<(&PressureSection, &PressureSection), StateError> {
    let out_of_range = StateError::OutOfRange {
        what: "pressure",
        value: pressure_bar,
    };

    let (Some(first), Some(last)) = (sections.first(), sections.last()) else {
        return Err(out_of_range);
    };
    if pressure_bar < first.pressure_bar() || pressure_bar > last.pressure_bar() {
        return Err(out_of_range);
    }
    if sections.len() == 1 {
        return Ok((first, first));
    }

    for pair in sections.windows(2) {
        if pair[0].pressure_bar() <= pressure_bar && pressure_bar <= pair[1].pressure_bar() {
            return Ok((&pair[0], &pair[1]));
        }
    }
    Err(out_of_range)
}

/// Consecutive valid row indices bracketing the temperature.
///
/// Below the first valid entry, the first two valid rows are used
/// (low-end extrapolation).
fn bound_temperature(
    temperatures: &[f64],
    valid: &[usize],
    temperature_c: f64,
) -> Result<(usize, usize), StateError> {
    let out_of_range = StateError::OutOfRange {
        what: "temperature",
        value: temperature_c,
    };

    match valid {
        [] => Err(out_of_range),
        [only] => {
            if temperatures[*only] == temperature_c {
                Ok((*only, *only))
            } else {
                Err(out_of_range)
            }
        }
        _ => {
            if temperature_c < temperatures[valid[0]] {
                return Ok((valid[0], valid[1]));
            }
            for pair in valid.windows(2) {
                let (i1, i2) = (pair[0], pair[1]);
                if temperatures[i1] <= temperature_c && temperature_c <= temperatures[i2] {
                    return Ok((i1, i2));
                }
            }
            Err(out_of_range)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pt_tables::{PressureSectionDef, SuperheatedTableDef};

    fn full_column(values: &[f64]) -> Option<Vec<Option<f64>>> {
        Some(values.iter().copied().map(Some).collect())
    }

    /// Two sections at 0.5 and 1.0 bar over 100/150/200 °C. The 1.0 bar
    /// section has no data at 100 °C.
    fn grid() -> SuperheatedTable {
        let def = SuperheatedTableDef {
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
        };
        SuperheatedTable::from_def("water_shv_table", &def).unwrap()
    }

    #[test]
    fn idempotent_at_grid_points() {
        let table = grid();
        let props = interpolate(&table, 150.0, 0.5).unwrap();
        assert!((props.enthalpy - 2780.1).abs() < 1e-9);
        assert!((props.entropy - 7.9401).abs() < 1e-9);

        let props = interpolate(&table, 200.0, 1.0).unwrap();
        assert!((props.specific_volume - 2.172).abs() < 1e-9);
        assert!((props.internal_energy - 2658.1).abs() < 1e-9);
    }

    #[test]
    fn midpoint_is_the_four_cell_average() {
        let table = grid();
        let props = interpolate(&table, 175.0, 0.75).unwrap();
        let expected = (2780.1 + 2877.7 + 2776.4 + 2875.3) / 4.0;
        assert!((props.enthalpy - expected).abs() < 1e-9);
    }

    #[test]
    fn pressure_outside_sections_is_rejected() {
        let table = grid();
        let err = interpolate(&table, 150.0, 0.4).unwrap_err();
        assert!(matches!(
            err,
            StateError::OutOfRange {
                what: "pressure",
                ..
            }
        ));

        let err = interpolate(&table, 150.0, 1.5).unwrap_err();
        assert!(matches!(
            err,
            StateError::OutOfRange {
                what: "pressure",
                ..
            }
        ));
    }

    #[test]
    fn rows_missing_in_one_section_are_skipped() {
        // At 1.0 bar the 100 °C row is a gap, so queries between 100 and
        // 150 °C that span both sections extrapolate from the 150/200 pair.
        let table = grid();
        let props = interpolate(&table, 120.0, 1.0).unwrap();
        let expected = lerp(120.0, 150.0, 200.0, 2776.4, 2875.3);
        assert!((props.enthalpy - expected).abs() < 1e-9);
    }

    #[test]
    fn below_first_valid_row_extrapolates_from_first_two() {
        let def = SuperheatedTableDef {
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
                    specific_volume: full_column(&[1.6958, 1.9364, 2.172]),
                    internal_energy: full_column(&[2506.7, 2582.8, 2658.1]),
                    enthalpy: full_column(&[2676.2, 2776.4, 2875.3]),
                    entropy: full_column(&[7.3614, 7.6134, 7.8343]),
                },
            ],
        };
        let table = SuperheatedTable::from_def("water_shv_table", &def).unwrap();

        let props = interpolate(&table, 50.0, 0.5).unwrap();
        let expected = lerp(50.0, 100.0, 150.0, 2682.5, 2780.1);
        assert!((props.enthalpy - expected).abs() < 1e-9);
    }

    #[test]
    fn gap_in_one_section_shifts_the_extrapolation_base() {
        // The 1.0 bar section has no 100 °C data, so the first row valid in
        // both bounding sections is 150 °C even when querying at 0.5 bar.
        let table = grid();
        let props = interpolate(&table, 50.0, 0.5).unwrap();
        let expected = lerp(50.0, 150.0, 200.0, 2780.1, 2877.7);
        assert!((props.enthalpy - expected).abs() < 1e-9);
    }

    #[test]
    fn above_last_valid_row_is_rejected() {
        let table = grid();
        let err = interpolate(&table, 250.0, 0.5).unwrap_err();
        assert!(matches!(
            err,
            StateError::OutOfRange {
                what: "temperature",
                ..
            }
        ));
    }

    #[test]
    fn single_section_serves_its_own_pressure() {
        let def = SuperheatedTableDef {
            temperature: Some(vec![100.0, 150.0]),
            sections: vec![PressureSectionDef {
                pressure: 0.5,
                specific_volume: full_column(&[3.418, 3.889]),
                internal_energy: full_column(&[2511.6, 2585.6]),
                enthalpy: full_column(&[2682.5, 2780.1]),
                entropy: full_column(&[7.6947, 7.9401]),
            }],
        };
        let table = SuperheatedTable::from_def("water_shv_table", &def).unwrap();

        let props = interpolate(&table, 125.0, 0.5).unwrap();
        assert!((props.enthalpy - (2682.5 + 2780.1) / 2.0).abs() < 1e-9);

        let err = interpolate(&table, 125.0, 0.6).unwrap_err();
        assert!(matches!(err, StateError::OutOfRange { .. }));
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let table = grid();
        let err = interpolate(&table, f64::NAN, 0.5).unwrap_err();
        assert!(matches!(err, StateError::Core(_)));
        assert!(err.to_string().contains("interpolation temperature"));

        let err = interpolate(&table, 150.0, f64::INFINITY).unwrap_err();
        assert!(matches!(err, StateError::Core(_)));
        assert!(err.to_string().contains("interpolation pressure"));
    }
}
