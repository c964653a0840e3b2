//! Entry points: validate, assign roles, score, aggregate.

use porondam_base::ensure_catalog;

use crate::advisor::{CompatibilityTier, matched_count, overall_score, recommend};
use crate::aspect::ASPECT_COUNT;
use crate::chart::{ChartAttributes, ChartSlot};
use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::report::{ChartSummary, MatchReport, Role};
use crate::scorers::score_aspects;

/// Score two charts with the default configuration.
pub fn compute_match(
    first: &ChartAttributes,
    second: &ChartAttributes,
) -> Result<MatchReport, MatchError> {
    compute_match_with(first, second, &MatchConfig::default())
}

/// Score two charts.
///
/// Either every aspect is scored and a full report returned, or the first
/// validation failure is returned and nothing else.
pub fn compute_match_with(
    first: &ChartAttributes,
    second: &ChartAttributes,
    config: &MatchConfig,
) -> Result<MatchReport, MatchError> {
    ensure_catalog()?;

    let a = first.resolve(ChartSlot::First)?;
    let b = second.resolve(ChartSlot::Second)?;

    let bride_slot = config.roles.bride_slot(a.gender);
    let (bride, groom, first_role, second_role) = match bride_slot {
        ChartSlot::First => (&a, &b, Role::Bride, Role::Groom),
        ChartSlot::Second => (&b, &a, Role::Groom, Role::Bride),
    };
    tracing::debug!(
        policy = ?config.roles,
        bride = bride_slot.name(),
        bride_nakshatra = bride.nakshatra.id(),
        groom_nakshatra = groom.nakshatra.id(),
        "roles assigned"
    );

    let scores = score_aspects(bride, groom)?;
    let overall = overall_score(&scores);
    let matched = matched_count(&scores);
    let recommendation = recommend(&scores, overall);

    tracing::debug!(overall, matched, "match scored");

    Ok(MatchReport {
        first: ChartSummary::new(ChartSlot::First, first_role, &a),
        second: ChartSummary::new(ChartSlot::Second, second_role, &b),
        scores,
        overall_score: overall,
        matched_count: matched,
        total_aspects: ASPECT_COUNT as u8,
        compatibility: CompatibilityTier::from_score(overall),
        recommendation,
        scored_on: config.scored_on,
    })
}
