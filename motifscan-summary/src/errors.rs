use thiserror::Error;

use crate::table::ColumnKind;

/// The invariant a hit table failed to meet.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaViolation {
    #[error("Hit table has {found} columns, expected {expected} (q-value requested: {qvalue})")]
    ColumnCount {
        expected: usize,
        found: usize,
        qvalue: bool,
    },

    #[error("Hit table is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Column '{column}' holds {found} values, expected {expected}")]
    ColumnType {
        column: String,
        expected: ColumnKind,
        found: ColumnKind,
    },

    #[error("Column '{column}' has {found} entries but the table has {expected} rows")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },
}

pub type SummaryResult<T> = std::result::Result<T, SchemaViolation>;
