//! Grade scale and overall-tier aggregation

pub mod overall;
pub mod scale;

pub use overall::{overall_tier, OverallTier};
pub use scale::Grade;
