//! Listing engine: tier grouping, column sort and option lists

pub mod grouping;
pub mod options;
pub mod sort;

pub use grouping::{group_by_tier, group_filtered, TierGroup, TierGroups, TIER_BUCKET_ORDER};
pub use options::{class_options, difficulty_options, faction_options, skills_by_type};
pub use sort::{sort_characters, SortColumn, SortDirection, SortSpec};
