//! Match configuration.

use serde::{Deserialize, Serialize};

use crate::chart::{ChartSlot, Gender};
use crate::date::ScoringDate;

/// How the directional bride and groom roles are assigned to the charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RolePolicy {
    /// Bride is the first chart if it is female, else the second; groom
    /// is the first chart if it is male, else the second. Two charts of
    /// the same gender therefore land in opposite roles.
    #[default]
    ByGender,
    /// First chart is the bride, second the groom, regardless of gender.
    AsGiven,
}

impl RolePolicy {
    /// Which chart plays the bride role.
    pub const fn bride_slot(self, first: Gender) -> ChartSlot {
        match (self, first) {
            (Self::ByGender, Gender::Male) => ChartSlot::Second,
            (Self::ByGender, Gender::Female) | (Self::AsGiven, _) => ChartSlot::First,
        }
    }
}

/// Configuration for a match computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchConfig {
    pub roles: RolePolicy,
    /// Date label copied into the report. Never read from the clock.
    pub scored_on: Option<ScoringDate>,
}

impl MatchConfig {
    pub fn with_date(mut self, date: ScoringDate) -> Self {
        self.scored_on = Some(date);
        self
    }
}
