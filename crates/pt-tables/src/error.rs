//! Table construction and lookup errors.

use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised while building or querying property tables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// No table registered under the requested name.
    #[error("Table not found: {name}")]
    TableNotFound { name: String },

    /// A required column is absent from the table definition.
    #[error("Missing column '{column}' in table {table}")]
    MissingColumn { table: String, column: &'static str },

    /// A column's length disagrees with the table's row count.
    #[error("Column '{column}' in table {table} has {got} entries, expected {expected}")]
    ColumnLength {
        table: String,
        column: &'static str,
        expected: usize,
        got: usize,
    },

    /// Pressure sections must be sorted by strictly ascending pressure.
    #[error("Pressure sections in table {table} are not sorted ascending")]
    UnsortedSections { table: String },

    /// The shared temperature column must be sorted ascending.
    #[error("Temperature column in table {table} is not sorted ascending")]
    UnsortedTemperatures { table: String },

    /// An axis or pressure value that must be a real number is NaN/infinite.
    #[error("Non-finite value in column '{column}' of table {table}")]
    NonFiniteColumn { table: String, column: &'static str },

    /// Unrecognized property name (CLI/config parsing).
    #[error("Unknown property: {input}")]
    UnknownProperty { input: String },

    /// Unrecognized saturation lookup axis (CLI/config parsing).
    #[error("Unknown lookup axis: {input} (expected 'temperature' or 'pressure')")]
    UnknownAxis { input: String },
}
