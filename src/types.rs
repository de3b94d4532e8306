//! Core data types shared across the tier list engine

use crate::grade::{overall_tier, OverallTier};
use serde::{Deserialize, Serialize};

/// Unique identifier for characters, assigned by the backing store
pub type CharacterId = i64;

/// Unique identifier for skills
pub type SkillId = i64;

/// A playable character as exposed by the backing store.
///
/// The engine treats characters as read-only: it derives groupings and
/// orderings from them but never mutates them. Grade and difficulty
/// fields hold the raw stored strings, since stored data may contain
/// legacy spellings or values the current scale does not recognize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub slug: String,
    pub class_name: Option<String>,
    pub faction: Option<String>,
    pub balance_status: Option<String>,
    /// Per-category letter grades; unrecognized values are excluded from
    /// aggregation rather than rejected
    pub tier_weapon: Option<String>,
    pub tier_skill: Option<String>,
    pub tier_passive: Option<String>,
    pub tier_ultimate: Option<String>,
    /// Free-form difficulty label; may still hold a legacy alias spelling
    pub difficulty: Option<String>,
    pub short_summary: Option<String>,
    pub review: Option<String>,
    pub image_name: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Character {
    /// Overall tier derived from the four category grades.
    ///
    /// Recomputed on every call; never stored.
    pub fn overall_tier(&self) -> OverallTier {
        overall_tier(
            self.tier_weapon.as_deref(),
            self.tier_skill.as_deref(),
            self.tier_passive.as_deref(),
            self.tier_ultimate.as_deref(),
        )
    }
}

/// A character skill; opaque to the engine apart from type-based grouping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default)]
    pub id: SkillId,
    pub name: String,
    #[serde(rename = "type")]
    pub skill_type: Option<String>,
    pub description: Option<String>,
    pub valid_hits: Option<String>,
    pub cooldown: Option<String>,
    pub level_info: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grade::Grade;

    fn bare_character() -> Character {
        Character {
            id: 1,
            name: "Anya".to_string(),
            slug: "anya".to_string(),
            class_name: None,
            faction: None,
            balance_status: None,
            tier_weapon: None,
            tier_skill: None,
            tier_passive: None,
            tier_ultimate: None,
            difficulty: None,
            short_summary: None,
            review: None,
            image_name: None,
            skills: vec![],
        }
    }

    #[test]
    fn test_character_without_grades_is_unranked() {
        assert_eq!(bare_character().overall_tier(), OverallTier::Unranked);
    }

    #[test]
    fn test_character_overall_tier_uses_all_four_categories() {
        let mut ch = bare_character();
        ch.tier_weapon = Some("S".to_string());
        ch.tier_skill = Some("S".to_string());
        ch.tier_passive = Some("A".to_string());
        ch.tier_ultimate = Some("A".to_string());
        // mean 4.5 snaps down to A on the midpoint
        assert_eq!(ch.overall_tier(), OverallTier::Ranked(Grade::A));
    }

    #[test]
    fn test_character_deserializes_with_missing_optionals() {
        let ch: Character = serde_json::from_str(
            r#"{"id": 7, "name": "Boris", "slug": "boris"}"#,
        )
        .unwrap();
        assert_eq!(ch.id, 7);
        assert_eq!(ch.class_name, None);
        assert!(ch.skills.is_empty());
    }

    #[test]
    fn test_skill_type_field_uses_legacy_json_name() {
        let skill: Skill =
            serde_json::from_str(r#"{"name": "Fireball", "type": "Active"}"#).unwrap();
        assert_eq!(skill.skill_type.as_deref(), Some("Active"));
    }
}
