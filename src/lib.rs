//! Tier Board - tier aggregation and filtering engine for game tier lists
//!
//! This crate provides the computational core of a character tier-list
//! application: overall-tier aggregation from per-category grades,
//! difficulty alias canonicalization, conjunctive filter resolution, and
//! tier grouping plus admin column sort.

pub mod config;
pub mod error;
pub mod filter;
pub mod grade;
pub mod listing;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Result, TierBoardError};
pub use types::*;

// Re-export key components
pub use filter::{resolve_filters, CharacterFilter, DifficultyAliases};
pub use grade::{overall_tier, Grade, OverallTier};
pub use listing::{
    group_by_tier, group_filtered, sort_characters, SortColumn, SortDirection, SortSpec,
    TierGroup, TierGroups,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
