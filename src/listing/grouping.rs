//! Tier grouping for the public tier-list view
//!
//! Buckets characters into the eight display groups by overall tier.
//! The bucket order is fixed and all eight buckets are always present,
//! even when empty, so the rendering layer can iterate without special
//! cases.

use crate::grade::{Grade, OverallTier};
use crate::types::Character;
use serde::Serialize;

/// Fixed display order of the tier buckets, strongest first
pub const TIER_BUCKET_ORDER: [OverallTier; 8] = [
    OverallTier::Ranked(Grade::SSS),
    OverallTier::Ranked(Grade::SS),
    OverallTier::Ranked(Grade::S),
    OverallTier::Ranked(Grade::A),
    OverallTier::Ranked(Grade::B),
    OverallTier::Ranked(Grade::C),
    OverallTier::Ranked(Grade::D),
    OverallTier::Unranked,
];

/// One display bucket: a tier plus its characters, sorted by name
#[derive(Debug, Clone, Serialize)]
pub struct TierGroup<'a> {
    pub tier: OverallTier,
    pub characters: Vec<&'a Character>,
}

/// The complete grouped tier list, always eight buckets in display order
#[derive(Debug, Clone, Serialize)]
pub struct TierGroups<'a> {
    groups: Vec<TierGroup<'a>>,
}

impl<'a> TierGroups<'a> {
    /// All buckets in display order
    pub fn groups(&self) -> &[TierGroup<'a>] {
        &self.groups
    }

    /// Characters in a specific bucket
    pub fn characters_in(&self, tier: OverallTier) -> &[&'a Character] {
        &self.groups[bucket_index(tier)].characters
    }

    /// Total characters across all buckets
    pub fn total_count(&self) -> usize {
        self.groups.iter().map(|g| g.characters.len()).sum()
    }
}

impl<'a, 'b> IntoIterator for &'b TierGroups<'a> {
    type Item = &'b TierGroup<'a>;
    type IntoIter = std::slice::Iter<'b, TierGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

fn bucket_index(tier: OverallTier) -> usize {
    match tier {
        // SSS (rank 7) is bucket 0, D (rank 1) is bucket 6
        OverallTier::Ranked(grade) => (Grade::MAX_RANK - grade.rank()) as usize,
        OverallTier::Unranked => 7,
    }
}

/// Group characters into the eight tier buckets.
///
/// Every character lands in exactly one bucket: the one matching its
/// overall tier, or Unranked when it has none. Within each bucket
/// characters are sorted by name, case-sensitive lexicographic; the
/// sort is stable so repeated calls over the same input are
/// reproducible.
pub fn group_by_tier(characters: &[Character]) -> TierGroups<'_> {
    group_filtered(characters.iter().collect())
}

/// Group an already-filtered character sequence, as produced by
/// [`crate::filter::resolve_filters`].
pub fn group_filtered(characters: Vec<&Character>) -> TierGroups<'_> {
    let mut groups: Vec<TierGroup<'_>> = TIER_BUCKET_ORDER
        .iter()
        .map(|&tier| TierGroup {
            tier,
            characters: Vec::new(),
        })
        .collect();

    for ch in characters {
        groups[bucket_index(ch.overall_tier())].characters.push(ch);
    }

    for group in &mut groups {
        group.characters.sort_by(|a, b| a.name.cmp(&b.name));
    }

    TierGroups { groups }
}
