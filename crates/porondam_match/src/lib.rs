//! Porondam compatibility scoring between two birth charts.
//!
//! Twenty independent aspect scorers are combined into a percentage of a
//! fixed 54-point total, a favorable count, a tier and bilingual advice.
//! Directional aspects read the bride's chart first; see [`RolePolicy`].

pub mod advisor;
pub mod aspect;
pub mod chart;
pub mod config;
pub mod date;
pub mod error;
pub mod matcher;
pub mod report;
pub mod scorers;

pub use advisor::{CompatibilityTier, Recommendation, matched_count, overall_score, recommend};
pub use aspect::{
    ALL_ASPECTS, ASPECT_COUNT, Aspect, AspectScore, Bilingual, BinaryTexts, TOTAL_MAX_POINTS,
};
pub use chart::{ChartAttributes, ChartField, ChartPosition, ChartSlot, Gender, ResolvedChart};
pub use config::{MatchConfig, RolePolicy};
pub use date::ScoringDate;
pub use error::MatchError;
pub use matcher::{compute_match, compute_match_with};
pub use report::{ChartSummary, MatchReport, Role};
pub use scorers::score_aspects;
