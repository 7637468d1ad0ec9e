//! Classification and interpolation errors.

use pt_core::PtError;
use pt_tables::{PairedProperty, PropertyKind, SaturationAxis, TableError};
use thiserror::Error;

/// Errors that can occur while classifying a state or interpolating.
///
/// All are local, recoverable conditions; the caller decides how to surface
/// them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// The saturation table has no rows to match against.
    #[error("No rows available for {axis} lookup")]
    EmptyTable { axis: SaturationAxis },

    /// Pressure or temperature outside the interpolation bounds.
    #[error("Value out of range for interpolation: {what} = {value}")]
    OutOfRange { what: &'static str, value: f64 },

    /// Zero-width liquid/vapor interval (e.g. near the critical point);
    /// quality is undefined.
    #[error("Degenerate saturation row: {property} liquid and vapor bounds coincide")]
    DegenerateRow { property: PairedProperty },

    /// The property cannot serve as the second classification input.
    #[error("Property cannot be classified against a saturation row: {property}")]
    UnsupportedProperty { property: PropertyKind },

    /// A superheated state was detected but no superheated table is loaded.
    #[error("No superheated-vapor table available for this substance")]
    SuperheatedTableMissing,

    /// A query value that must be a real number is NaN/infinite.
    #[error(transparent)]
    Core(#[from] PtError),

    /// Underlying table error.
    #[error(transparent)]
    Table(#[from] TableError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StateError::DegenerateRow {
            property: PairedProperty::Enthalpy,
        };
        assert!(err.to_string().contains("enthalpy"));

        let err = StateError::OutOfRange {
            what: "pressure",
            value: 99.0,
        };
        assert!(err.to_string().contains("pressure"));
    }

    #[test]
    fn core_errors_convert() {
        let core_err = PtError::NonFinite {
            what: "interpolation pressure",
            value: f64::NAN,
        };
        let err: StateError = core_err.into();
        assert!(err.to_string().contains("interpolation pressure"));
    }

    #[test]
    fn table_errors_convert() {
        let table_err = TableError::TableNotFound {
            name: "water_shv_table".into(),
        };
        let err: StateError = table_err.into();
        assert!(matches!(err, StateError::Table(_)));
    }
}
