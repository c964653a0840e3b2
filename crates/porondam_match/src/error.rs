//! Error types for match computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use porondam_base::CatalogError;

use crate::chart::{ChartField, ChartSlot};

/// Errors from compatibility scoring.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MatchError {
    /// A chart carries an id outside its valid range.
    InvalidChart {
        chart: ChartSlot,
        field: ChartField,
        source: CatalogError,
    },
    /// A chart longitude is NaN or infinite.
    NonFiniteLongitude { chart: ChartSlot, value: f64 },
    /// The catalog and its compatibility matrices disagree.
    Catalog(CatalogError),
    /// A scoring date string is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate(String),
}

impl Display for MatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidChart {
                chart,
                field,
                source,
            } => write!(f, "{} chart, {}: {source}", chart.name(), field.name()),
            Self::NonFiniteLongitude { chart, value } => {
                write!(f, "{} chart: longitude {value} is not finite", chart.name())
            }
            Self::Catalog(e) => write!(f, "catalog error: {e}"),
            Self::InvalidDate(s) => write!(f, "invalid scoring date: {s:?}"),
        }
    }
}

impl Error for MatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidChart { source, .. } => Some(source),
            Self::Catalog(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CatalogError> for MatchError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}
