//! Option lists for the filter controls and skill grouping for the
//! character detail view

use crate::filter::difficulty::DifficultyAliases;
use crate::types::{Character, Skill};
use std::collections::BTreeSet;

/// Bucket label for skills without a type
pub const SKILL_TYPE_OTHER: &str = "Other";

/// Distinct class names present in the collection, sorted ascending.
/// Characters without a class contribute nothing.
pub fn class_options(characters: &[Character]) -> Vec<String> {
    distinct(characters.iter().filter_map(|ch| ch.class_name.as_deref()))
}

/// Distinct factions present in the collection, sorted ascending
pub fn faction_options(characters: &[Character]) -> Vec<String> {
    distinct(characters.iter().filter_map(|ch| ch.faction.as_deref()))
}

/// Distinct canonical difficulty labels present in the collection,
/// sorted ascending. Each stored value is canonicalized first, so a
/// legacy spelling and its canonical label produce one option.
pub fn difficulty_options(characters: &[Character], aliases: &DifficultyAliases) -> Vec<String> {
    distinct(
        characters
            .iter()
            .filter_map(|ch| ch.difficulty.as_deref())
            .filter_map(|raw| aliases.canonicalize(raw)),
    )
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let set: BTreeSet<&str> = values.collect();
    set.into_iter().map(str::to_string).collect()
}

/// Group a character's skills by type for the detail view.
///
/// Groups appear in first-seen order; skills without a type are
/// bucketed under [`SKILL_TYPE_OTHER`].
pub fn skills_by_type(character: &Character) -> Vec<(String, Vec<&Skill>)> {
    let mut groups: Vec<(String, Vec<&Skill>)> = Vec::new();
    for skill in &character.skills {
        let key = skill.skill_type.as_deref().unwrap_or(SKILL_TYPE_OTHER);
        match groups.iter_mut().find(|(name, _)| name == key) {
            Some((_, skills)) => skills.push(skill),
            None => groups.push((key.to_string(), vec![skill])),
        }
    }
    groups
}
