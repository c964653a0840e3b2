//! Caller-supplied chart attributes and their validation.

use porondam_base::{
    CatalogError, NAKSHATRA_COUNT, Nakshatra, RASHI_COUNT, Rashi, nakshatra_from_longitude,
    rashi_from_longitude, validate_pada,
};
use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// Binary gender as used by the traditional system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub const fn sinhala_name(self) -> &'static str {
        match self {
            Self::Male => "පුරුෂ",
            Self::Female => "ස්ත්‍රී",
        }
    }
}

/// Which of the two supplied charts an error or summary refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartSlot {
    First,
    Second,
}

impl ChartSlot {
    pub const fn name(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
        }
    }
}

/// Validated field of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartField {
    Nakshatra,
    Rashi,
    Pada,
}

impl ChartField {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nakshatra => "nakshatra",
            Self::Rashi => "rashi",
            Self::Pada => "pada",
        }
    }
}

/// Where a chart's moon sits: pre-identified ids, or a sidereal longitude
/// from which the ids are derived.
///
/// Ids are carried as `i64` so any integer a caller sends, negative or
/// large, is rejected by [`ChartAttributes::resolve`] with the chart and
/// field named.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartPosition {
    Indices {
        /// Nakshatra id, 1-27.
        nakshatra: i64,
        /// Rashi id, 1-12.
        rashi: i64,
        /// Pada, 1-4, when known.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pada: Option<i64>,
    },
    /// Sidereal lunar longitude in degrees; any finite value.
    Longitude(f64),
}

/// One person's chart as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartAttributes {
    pub position: ChartPosition,
    pub gender: Gender,
}

impl ChartAttributes {
    /// Chart from nakshatra id (1-27) and rashi id (1-12).
    pub const fn new(nakshatra: u8, rashi: u8, gender: Gender) -> Self {
        Self {
            position: ChartPosition::Indices {
                nakshatra: nakshatra as i64,
                rashi: rashi as i64,
                pada: None,
            },
            gender,
        }
    }

    /// Chart from a sidereal lunar longitude in degrees.
    pub const fn from_longitude(longitude_deg: f64, gender: Gender) -> Self {
        Self {
            position: ChartPosition::Longitude(longitude_deg),
            gender,
        }
    }

    /// Attach a pada (1-4) to an id-based chart. No effect on a
    /// longitude-based chart, whose pada is derived.
    pub fn with_pada(mut self, pada: u8) -> Self {
        if let ChartPosition::Indices { pada: p, .. } = &mut self.position {
            *p = Some(pada as i64);
        }
        self
    }

    /// Validate ids (or convert the longitude) into catalog values.
    pub fn resolve(&self, slot: ChartSlot) -> Result<ResolvedChart, MatchError> {
        let invalid = |field: ChartField| {
            move |source: CatalogError| MatchError::InvalidChart {
                chart: slot,
                field,
                source,
            }
        };

        match self.position {
            ChartPosition::Indices {
                nakshatra,
                rashi,
                pada,
            } => {
                let nakshatra = narrow(nakshatra, "nakshatra id", NAKSHATRA_COUNT)
                    .and_then(Nakshatra::from_id)
                    .map_err(invalid(ChartField::Nakshatra))?;
                let rashi = narrow(rashi, "rashi id", RASHI_COUNT)
                    .and_then(Rashi::from_id)
                    .map_err(invalid(ChartField::Rashi))?;
                let pada = pada
                    .map(|p| narrow(p, "pada", 4).and_then(validate_pada))
                    .transpose()
                    .map_err(invalid(ChartField::Pada))?;
                Ok(ResolvedChart {
                    nakshatra,
                    rashi,
                    pada,
                    gender: self.gender,
                })
            }
            ChartPosition::Longitude(value) => {
                if !value.is_finite() {
                    return Err(MatchError::NonFiniteLongitude { chart: slot, value });
                }
                let nak = nakshatra_from_longitude(value);
                let rashi = rashi_from_longitude(value);
                tracing::trace!(
                    chart = slot.name(),
                    longitude = value,
                    nakshatra = nak.nakshatra.id(),
                    pada = nak.pada,
                    rashi = rashi.rashi.id(),
                    "chart resolved from longitude"
                );
                Ok(ResolvedChart {
                    nakshatra: nak.nakshatra,
                    rashi: rashi.rashi,
                    pada: Some(nak.pada),
                    gender: self.gender,
                })
            }
        }
    }
}

/// Fit a caller id into `u8`; ids outside it are out of `[1, max]` too.
fn narrow(value: i64, field: &'static str, max: u8) -> Result<u8, CatalogError> {
    u8::try_from(value).map_err(|_| CatalogError::out_of_range(field, value, 1, i64::from(max)))
}

/// A chart whose ids have been validated against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedChart {
    pub nakshatra: Nakshatra,
    pub rashi: Rashi,
    pub pada: Option<u8>,
    pub gender: Gender,
}

impl ResolvedChart {
    pub const fn new(nakshatra: Nakshatra, rashi: Rashi, gender: Gender) -> Self {
        Self {
            nakshatra,
            rashi,
            pada: None,
            gender,
        }
    }
}
