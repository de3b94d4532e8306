//! Property tests for the tier list engine invariants

use proptest::prelude::*;
use tier_board::{
    group_by_tier, overall_tier, resolve_filters, sort_characters, Character, CharacterFilter,
    DifficultyAliases, Grade, OverallTier, SortColumn, SortDirection, SortSpec,
};

const GRADE_POOL: [&str; 9] = ["D", "C", "B", "A", "S", "SS", "SSS", "F", "junk"];

fn grade_value() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(proptest::sample::select(GRADE_POOL.to_vec()).prop_map(String::from))
}

fn character_strategy() -> impl Strategy<Value = Character> {
    (
        "[A-Za-z]{1,8}",
        grade_value(),
        grade_value(),
        grade_value(),
        grade_value(),
        proptest::option::of(
            proptest::sample::select(vec!["Mage", "Warrior", "Support"]).prop_map(String::from),
        ),
        proptest::option::of(
            proptest::sample::select(vec!["North", "South"]).prop_map(String::from),
        ),
        proptest::option::of(
            proptest::sample::select(vec!["Лёгкий", "Для новичков", "Сложный"])
                .prop_map(String::from),
        ),
    )
        .prop_map(
            |(name, weapon, skill, passive, ultimate, class_name, faction, difficulty)| Character {
                id: 0,
                name,
                slug: String::new(),
                class_name,
                faction,
                balance_status: None,
                tier_weapon: weapon,
                tier_skill: skill,
                tier_passive: passive,
                tier_ultimate: ultimate,
                difficulty,
                short_summary: None,
                review: None,
                image_name: None,
                skills: vec![],
            },
        )
}

fn roster_strategy() -> impl Strategy<Value = Vec<Character>> {
    proptest::collection::vec(character_strategy(), 0..32).prop_map(|mut roster| {
        // Ids are unique in the backing store
        for (index, ch) in roster.iter_mut().enumerate() {
            ch.id = index as i64;
        }
        roster
    })
}

proptest! {
    #[test]
    fn overall_tier_is_total(
        weapon in grade_value(),
        skill in grade_value(),
        passive in grade_value(),
        ultimate in grade_value(),
    ) {
        let tier = overall_tier(
            weapon.as_deref(),
            skill.as_deref(),
            passive.as_deref(),
            ultimate.as_deref(),
        );
        match tier {
            OverallTier::Ranked(grade) => prop_assert!((1..=7).contains(&grade.rank())),
            OverallTier::Unranked => {
                // Only when no input parsed to a grade
                let parsed = [&weapon, &skill, &passive, &ultimate]
                    .iter()
                    .filter_map(|v| v.as_deref())
                    .filter_map(Grade::parse)
                    .count();
                prop_assert_eq!(parsed, 0);
            }
        }
    }

    #[test]
    fn four_equal_grades_aggregate_to_that_grade(grade in proptest::sample::select(Grade::ALL.to_vec())) {
        let letter = grade.letter();
        prop_assert_eq!(
            overall_tier(Some(letter), Some(letter), Some(letter), Some(letter)),
            OverallTier::Ranked(grade)
        );
    }

    #[test]
    fn canonicalize_is_idempotent(raw in ".{0,24}") {
        let aliases = DifficultyAliases::default();
        match aliases.canonicalize(&raw) {
            None => {
                let trimmed = raw.trim();
                prop_assert!(trimmed.is_empty() || trimmed == "*");
            }
            Some(canonical) => {
                let canonical = canonical.to_string();
                prop_assert_eq!(aliases.canonicalize(&canonical), Some(canonical.as_str()));
            }
        }
    }

    #[test]
    fn grouping_partitions_the_input(roster in roster_strategy()) {
        let groups = group_by_tier(&roster);
        prop_assert_eq!(groups.groups().len(), 8);
        prop_assert_eq!(groups.total_count(), roster.len());

        let mut seen: Vec<i64> = groups
            .groups()
            .iter()
            .flat_map(|g| g.characters.iter().map(|c| c.id))
            .collect();
        seen.sort_unstable();
        let expected: Vec<i64> = (0..roster.len() as i64).collect();
        prop_assert_eq!(seen, expected);

        for group in groups.groups() {
            for pair in group.characters.windows(2) {
                prop_assert!(pair[0].name <= pair[1].name);
            }
        }
    }

    #[test]
    fn column_sort_is_a_deterministic_permutation(
        roster in roster_strategy(),
        column in proptest::sample::select(vec!["id", "name", "class_name", "faction", "overall_tier", "bogus"]),
        direction in proptest::sample::select(vec!["asc", "desc", "bogus"]),
    ) {
        let spec = SortSpec::from_params(Some(column), Some(direction));

        let first: Vec<i64> = sort_characters(&roster, spec).iter().map(|c| c.id).collect();
        let second: Vec<i64> = sort_characters(&roster, spec).iter().map(|c| c.id).collect();
        prop_assert_eq!(&first, &second);

        let mut ids = first.clone();
        ids.sort_unstable();
        let expected: Vec<i64> = (0..roster.len() as i64).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn equal_name_keys_order_by_id_ascending(roster in roster_strategy()) {
        let spec = SortSpec {
            column: SortColumn::Name,
            direction: SortDirection::Ascending,
        };
        let sorted = sort_characters(&roster, spec);
        for pair in sorted.windows(2) {
            if pair[0].name == pair[1].name {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn unranked_sort_last_in_both_directions(
        roster in roster_strategy(),
        direction in proptest::sample::select(vec!["asc", "desc"]),
    ) {
        let spec = SortSpec::from_params(Some("overall_tier"), Some(direction));
        let sorted = sort_characters(&roster, spec);
        let mut seen_unranked = false;
        for ch in sorted {
            match ch.overall_tier() {
                OverallTier::Unranked => seen_unranked = true,
                OverallTier::Ranked(_) => prop_assert!(!seen_unranked),
            }
        }
    }

    #[test]
    fn filtering_is_conjunctive_and_shrinking(roster in roster_strategy()) {
        let aliases = DifficultyAliases::default();

        let class_only = CharacterFilter::from_params(Some("Mage"), None, None, None);
        let class_matches = resolve_filters(&class_only, &aliases, &roster);
        prop_assert!(class_matches
            .iter()
            .all(|c| c.class_name.as_deref() == Some("Mage")));

        let class_and_search = CharacterFilter::from_params(Some("Mage"), None, None, Some("a"));
        let both_matches = resolve_filters(&class_and_search, &aliases, &roster);
        prop_assert!(both_matches.len() <= class_matches.len());
        prop_assert!(both_matches
            .iter()
            .all(|c| c.name.to_lowercase().contains('a')));

        let class_ids: Vec<i64> = class_matches.iter().map(|c| c.id).collect();
        prop_assert!(both_matches.iter().all(|c| class_ids.contains(&c.id)));
    }

    #[test]
    fn difficulty_filter_matches_all_spellings(roster in roster_strategy()) {
        let aliases = DifficultyAliases::default();
        let filter = CharacterFilter::from_params(None, None, Some("Лёгкий"), None);
        let matches = resolve_filters(&filter, &aliases, &roster);

        let expected = roster
            .iter()
            .filter(|c| {
                matches!(c.difficulty.as_deref(), Some("Лёгкий") | Some("Для новичков"))
            })
            .count();
        prop_assert_eq!(matches.len(), expected);
    }
}
