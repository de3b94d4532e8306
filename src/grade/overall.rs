//! Overall-tier aggregation
//!
//! Collapses up to four per-category grades into a single overall tier:
//! the mean of the recognized ranks, snapped to the nearest grade on the
//! scale. A character with no recognized grades at all is Unranked.

use crate::grade::scale::Grade;
use serde::{Serialize, Serializer};

/// Display label for characters without an overall tier
pub const UNRANKED_LABEL: &str = "Unranked";

/// Overall tier derived from a character's category grades.
///
/// This is a computed value with no independent lifecycle: it is never
/// stored and is recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverallTier {
    Ranked(Grade),
    Unranked,
}

impl OverallTier {
    /// Integer rank of the tier, or `None` when unranked
    pub fn rank(self) -> Option<u8> {
        match self {
            OverallTier::Ranked(grade) => Some(grade.rank()),
            OverallTier::Unranked => None,
        }
    }

    /// Display label: the grade letter, or "Unranked"
    pub fn label(self) -> &'static str {
        match self {
            OverallTier::Ranked(grade) => grade.letter(),
            OverallTier::Unranked => UNRANKED_LABEL,
        }
    }
}

impl std::fmt::Display for OverallTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for OverallTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Compute the overall tier from the four raw category grades.
///
/// Absent or unrecognized grades are excluded from the mean rather than
/// treated as errors. The mean is snapped to the nearest rank by scanning
/// the scale in ascending order and keeping the first strictly-closer
/// rank, so a midpoint tie resolves to the lower grade.
pub fn overall_tier(
    weapon: Option<&str>,
    skill: Option<&str>,
    passive: Option<&str>,
    ultimate: Option<&str>,
) -> OverallTier {
    let ranks: Vec<u8> = [weapon, skill, passive, ultimate]
        .into_iter()
        .flatten()
        .filter_map(Grade::parse)
        .map(Grade::rank)
        .collect();

    if ranks.is_empty() {
        return OverallTier::Unranked;
    }

    let sum: u32 = ranks.iter().map(|&r| u32::from(r)).sum();
    let mean = f64::from(sum) / ranks.len() as f64;

    let mut nearest = Grade::D;
    let mut nearest_distance = f64::INFINITY;
    for grade in Grade::ALL {
        let distance = (f64::from(grade.rank()) - mean).abs();
        if distance < nearest_distance {
            nearest = grade;
            nearest_distance = distance;
        }
    }

    OverallTier::Ranked(nearest)
}
