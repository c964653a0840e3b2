//! The match report handed back to callers.

use serde::Serialize;

use crate::advisor::{CompatibilityTier, Recommendation};
use crate::aspect::{ASPECT_COUNT, Aspect, AspectScore};
use crate::chart::{ChartSlot, Gender, ResolvedChart};
use crate::date::ScoringDate;

/// Directional role a chart played in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Bride,
    Groom,
}

/// Display summary of one resolved chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSummary {
    pub slot: ChartSlot,
    pub role: Role,
    pub nakshatra_id: u8,
    pub nakshatra: &'static str,
    pub nakshatra_sinhala: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pada: Option<u8>,
    pub rashi_id: u8,
    pub rashi: &'static str,
    pub rashi_sinhala: &'static str,
    pub gender: Gender,
}

impl ChartSummary {
    pub fn new(slot: ChartSlot, role: Role, chart: &ResolvedChart) -> Self {
        Self {
            slot,
            role,
            nakshatra_id: chart.nakshatra.id(),
            nakshatra: chart.nakshatra.name(),
            nakshatra_sinhala: chart.nakshatra.sinhala_name(),
            pada: chart.pada,
            rashi_id: chart.rashi.id(),
            rashi: chart.rashi.name(),
            rashi_sinhala: chart.rashi.sinhala_name(),
            gender: chart.gender,
        }
    }
}

/// Complete outcome of one match computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    /// Chart supplied first.
    pub first: ChartSummary,
    /// Chart supplied second.
    pub second: ChartSummary,
    /// All twenty aspects in reporting order.
    pub scores: [AspectScore; ASPECT_COUNT],
    /// Rounded percentage, 0-100.
    pub overall_score: u8,
    /// Favorable aspects out of [`MatchReport::total_aspects`].
    pub matched_count: u8,
    pub total_aspects: u8,
    pub compatibility: CompatibilityTier,
    pub recommendation: Recommendation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scored_on: Option<ScoringDate>,
}

impl MatchReport {
    /// The scored entry for `aspect`.
    pub fn score(&self, aspect: Aspect) -> &AspectScore {
        &self.scores[aspect.index() as usize]
    }

    /// Sum of awarded points.
    pub fn awarded_points(&self) -> u16 {
        self.scores.iter().map(|s| s.score as u16).sum()
    }

    /// Aspects that came out unfavorable, in reporting order.
    pub fn unfavorable(&self) -> impl Iterator<Item = &AspectScore> {
        self.scores.iter().filter(|s| !s.favorable)
    }
}
