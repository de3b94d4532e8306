//! Filter resolution: difficulty alias handling and predicate evaluation

pub mod difficulty;
pub mod resolver;

pub use difficulty::DifficultyAliases;
pub use resolver::{resolve_filters, CharacterFilter};
