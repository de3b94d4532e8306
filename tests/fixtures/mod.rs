//! Shared fixtures for integration tests

use tier_board::{Character, Skill};

/// A bare character with the given id and name; everything else absent
pub fn character(id: i64, name: &str) -> Character {
    Character {
        id,
        name: name.to_string(),
        slug: format!("{}-{}", name.to_lowercase().replace(' ', "-"), id),
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

pub fn with_grades(
    mut ch: Character,
    weapon: Option<&str>,
    skill: Option<&str>,
    passive: Option<&str>,
    ultimate: Option<&str>,
) -> Character {
    ch.tier_weapon = weapon.map(str::to_string);
    ch.tier_skill = skill.map(str::to_string);
    ch.tier_passive = passive.map(str::to_string);
    ch.tier_ultimate = ultimate.map(str::to_string);
    ch
}

pub fn with_profile(
    mut ch: Character,
    class_name: &str,
    faction: &str,
    difficulty: &str,
) -> Character {
    ch.class_name = Some(class_name.to_string());
    ch.faction = Some(faction.to_string());
    ch.difficulty = Some(difficulty.to_string());
    ch
}

pub fn skill(name: &str, skill_type: Option<&str>) -> Skill {
    Skill {
        id: 0,
        name: name.to_string(),
        skill_type: skill_type.map(str::to_string),
        description: None,
        valid_hits: None,
        cooldown: None,
        level_info: None,
    }
}

/// A small roster resembling production data: mixed classes, factions,
/// a legacy difficulty spelling and one fully ungraded character
pub fn sample_roster() -> Vec<Character> {
    vec![
        with_profile(
            with_grades(character(1, "Anya"), Some("S"), Some("S"), Some("A"), Some("A")),
            "Mage",
            "North",
            "Лёгкий",
        ),
        with_profile(
            with_grades(character(2, "Boris"), Some("SSS"), Some("SSS"), Some("SS"), Some("SSS")),
            "Warrior",
            "North",
            "Сложный",
        ),
        with_profile(
            with_grades(character(3, "Ivan"), Some("D"), Some("C"), None, None),
            "Mage",
            "South",
            "Для новичков",
        ),
        with_profile(
            with_grades(character(4, "Marfa"), Some("B"), Some("B"), Some("B"), Some("B")),
            "Support",
            "South",
            "Средний",
        ),
        character(5, "Svetlana"),
    ]
}
