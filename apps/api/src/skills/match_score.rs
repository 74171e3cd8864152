//! Percentage of a role's required skills the user already has.

use serde::{Deserialize, Serialize};

use crate::skills::catalog::RoleRequirements;
use crate::skills::normalizer::SkillSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    /// 0.0 – 100.0, one decimal place.
    pub percentage: f64,
    pub matching_count: usize,
    pub total_required: usize,
    pub gap_count: usize,
}

/// Scores `current` against the required skills of `requirements`.
///
/// An empty required set scores 0 rather than dividing by zero.
pub fn score(current: &SkillSet, requirements: &RoleRequirements) -> MatchScore {
    let required = &requirements.required;
    let matching_count = current.intersection(required).len();
    let total_required = required.len();

    let percentage = if total_required == 0 {
        0.0
    } else {
        round_one_decimal(matching_count as f64 / total_required as f64 * 100.0)
    };

    MatchScore {
        percentage,
        matching_count,
        total_required,
        gap_count: required.difference(current).len(),
    }
}

/// Exact halves go to the even neighbour: 31.25 becomes 31.2.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
