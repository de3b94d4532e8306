//! Filter resolution over a character collection
//!
//! Turns raw, unsanitized query parameters into a predicate set and
//! applies it conjunctively. Ordering is deliberately left alone here;
//! grouping and sorting are the listing engine's job.

use crate::filter::difficulty::DifficultyAliases;
use crate::types::Character;
use crate::utils::{normalize_param, normalize_search};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Normalized filter parameters for the character listing.
///
/// `None` in any field means the corresponding predicate is skipped
/// entirely, never matched against absent character fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterFilter {
    pub class_name: Option<String>,
    pub faction: Option<String>,
    pub difficulty: Option<String>,
    pub search: Option<String>,
}

impl CharacterFilter {
    /// Build a filter from raw query parameters.
    ///
    /// Class, faction and difficulty treat the empty string, `*` and
    /// `any` as "no filter"; search only collapses on emptiness, since
    /// any other text is a legitimate substring to look for.
    pub fn from_params(
        class_name: Option<&str>,
        faction: Option<&str>,
        difficulty: Option<&str>,
        search: Option<&str>,
    ) -> Self {
        Self {
            class_name: normalize_param(class_name).map(str::to_string),
            faction: normalize_param(faction).map(str::to_string),
            difficulty: normalize_param(difficulty).map(str::to_string),
            search: normalize_search(search).map(str::to_string),
        }
    }

    /// True when no predicate is active
    pub fn is_empty(&self) -> bool {
        self.class_name.is_none()
            && self.faction.is_none()
            && self.difficulty.is_none()
            && self.search.is_none()
    }
}

/// Apply a filter to a character collection, AND-ing all active
/// predicates. Input order is preserved.
///
/// The difficulty predicate canonicalizes the filter value, then matches
/// each character's raw stored difficulty against the full set of
/// spellings for that canonical label. Stored rows may still carry
/// legacy spellings, so canonicalizing the stored side instead would be
/// wrong only in the other direction: this way both spellings match.
pub fn resolve_filters<'a>(
    filter: &CharacterFilter,
    aliases: &DifficultyAliases,
    characters: &'a [Character],
) -> Vec<&'a Character> {
    let difficulty_spellings = filter
        .difficulty
        .as_deref()
        .and_then(|raw| aliases.canonicalize(raw))
        .map(|canonical| aliases.expand(canonical));

    let search_lower = filter.search.as_deref().map(str::to_lowercase);

    let filtered: Vec<&Character> = characters
        .iter()
        .filter(|ch| {
            if let Some(class_name) = filter.class_name.as_deref() {
                if ch.class_name.as_deref() != Some(class_name) {
                    return false;
                }
            }
            if let Some(faction) = filter.faction.as_deref() {
                if ch.faction.as_deref() != Some(faction) {
                    return false;
                }
            }
            if let Some(spellings) = &difficulty_spellings {
                match ch.difficulty.as_deref() {
                    Some(stored) if spellings.contains(stored) => {}
                    _ => return false,
                }
            }
            if let Some(needle) = &search_lower {
                if !ch.name.to_lowercase().contains(needle.as_str()) {
                    return false;
                }
            }
            true
        })
        .collect();

    debug!(
        total = characters.len(),
        matched = filtered.len(),
        active = !filter.is_empty(),
        "resolved character filters"
    );

    filtered
}
