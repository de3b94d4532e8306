//! Column sort for the admin listing
//!
//! Sorts the full character collection by an allow-listed column. The
//! parameters arrive as raw query strings; anything unrecognized falls
//! back to the documented default instead of failing. The secondary key
//! is always `id` ascending so the resulting order is total and
//! repeatable even with duplicate or absent primary values.

use crate::types::Character;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Sortable columns of the admin listing.
///
/// `OverallTier` is synthetic: it is computed per character from the
/// four category grades rather than read from a stored field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortColumn {
    Id,
    Name,
    ClassName,
    Faction,
    OverallTier,
}

impl SortColumn {
    /// Default column when the requested one is unrecognized
    pub const DEFAULT: SortColumn = SortColumn::Name;

    /// Parse a raw column parameter against the allow-list
    pub fn parse(raw: &str) -> Option<SortColumn> {
        match raw.trim() {
            "id" => Some(SortColumn::Id),
            "name" => Some(SortColumn::Name),
            "class_name" => Some(SortColumn::ClassName),
            "faction" => Some(SortColumn::Faction),
            "overall_tier" => Some(SortColumn::OverallTier),
            _ => None,
        }
    }

    /// Parse with fallback to [`SortColumn::DEFAULT`]
    pub fn from_param(raw: Option<&str>) -> SortColumn {
        match raw {
            None => SortColumn::DEFAULT,
            Some(raw) => SortColumn::parse(raw).unwrap_or_else(|| {
                debug!(column = raw, "unknown sort column, falling back to name");
                SortColumn::DEFAULT
            }),
        }
    }

    /// Query-parameter form of the column
    pub const fn as_str(self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::Name => "name",
            SortColumn::ClassName => "class_name",
            SortColumn::Faction => "faction",
            SortColumn::OverallTier => "overall_tier",
        }
    }
}

/// Sort direction, ascending unless explicitly requested otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Parse a raw direction parameter
    pub fn parse(raw: &str) -> Option<SortDirection> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _ => None,
        }
    }

    /// Parse with fallback to ascending
    pub fn from_param(raw: Option<&str>) -> SortDirection {
        match raw {
            None => SortDirection::default(),
            Some(raw) => SortDirection::parse(raw).unwrap_or_else(|| {
                debug!(direction = raw, "unknown sort direction, falling back to ascending");
                SortDirection::default()
            }),
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// A validated sort request: column plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            column: SortColumn::DEFAULT,
            direction: SortDirection::default(),
        }
    }
}

impl SortSpec {
    /// Build a sort spec from raw query parameters, falling back to the
    /// defaults for anything unrecognized
    pub fn from_params(column: Option<&str>, direction: Option<&str>) -> Self {
        Self {
            column: SortColumn::from_param(column),
            direction: SortDirection::from_param(direction),
        }
    }
}

/// Sort the character collection per the given spec.
///
/// Ordinary columns compare their (possibly absent) stored values, with
/// absent values ordering low on ascending. The synthetic overall-tier
/// column compares computed ranks, and unranked characters sort strictly
/// after every ranked one in BOTH directions. The secondary key is `id`
/// ascending regardless of the requested direction.
pub fn sort_characters(characters: &[Character], spec: SortSpec) -> Vec<&Character> {
    let mut sorted: Vec<&Character> = characters.iter().collect();

    sorted.sort_by(|a, b| {
        let primary = match spec.column {
            SortColumn::Id => spec.direction.apply(a.id.cmp(&b.id)),
            SortColumn::Name => spec.direction.apply(a.name.cmp(&b.name)),
            SortColumn::ClassName => spec.direction.apply(a.class_name.cmp(&b.class_name)),
            SortColumn::Faction => spec.direction.apply(a.faction.cmp(&b.faction)),
            SortColumn::OverallTier => tier_ordering(a, b, spec.direction),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    });

    sorted
}

/// Compare by computed tier rank. Unranked goes last regardless of
/// direction, so the direction applies only between two ranked
/// characters.
fn tier_ordering(a: &Character, b: &Character, direction: SortDirection) -> Ordering {
    match (a.overall_tier().rank(), b.overall_tier().rank()) {
        (Some(ra), Some(rb)) => direction.apply(ra.cmp(&rb)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
