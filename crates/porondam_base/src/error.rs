//! Error types for catalog lookups and compatibility tables.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the reference catalog and compatibility matrices.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    /// An id (nakshatra, rashi, pada) lies outside its valid range.
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    /// A matrix has no entry for a class pair the catalog can produce.
    IncompleteMatrix {
        matrix: &'static str,
        row: &'static str,
        column: &'static str,
    },
}

impl CatalogError {
    /// `value` fell outside `[min, max]`.
    pub fn out_of_range(field: &'static str, value: impl Into<i64>, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            field,
            value: value.into(),
            min,
            max,
        }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} {value} out of range [{min}, {max}]"),
            Self::IncompleteMatrix {
                matrix,
                row,
                column,
            } => write!(f, "incomplete {matrix} matrix: no entry for ({row}, {column})"),
        }
    }
}

impl Error for CatalogError {}
