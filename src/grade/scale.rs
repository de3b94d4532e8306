//! The ordinal grade scale
//!
//! Seven letter grades mapped to consecutive integer ranks 1..=7. The
//! mapping is a fixed bijection; anything outside the seven letters has
//! no rank at all (never zero).

use serde::{Deserialize, Serialize};

/// A letter grade on the ordinal scale, from weakest (D) to strongest (SSS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    D,
    C,
    B,
    A,
    S,
    SS,
    SSS,
}

impl Grade {
    /// All grades in ascending rank order
    pub const ALL: [Grade; 7] = [
        Grade::D,
        Grade::C,
        Grade::B,
        Grade::A,
        Grade::S,
        Grade::SS,
        Grade::SSS,
    ];

    /// Lowest rank on the scale
    pub const MIN_RANK: u8 = 1;
    /// Highest rank on the scale
    pub const MAX_RANK: u8 = 7;

    /// Integer rank of this grade, in 1..=7
    pub const fn rank(self) -> u8 {
        match self {
            Grade::D => 1,
            Grade::C => 2,
            Grade::B => 3,
            Grade::A => 4,
            Grade::S => 5,
            Grade::SS => 6,
            Grade::SSS => 7,
        }
    }

    /// Grade for an integer rank; defined for 1..=7 only
    pub const fn from_rank(rank: u8) -> Option<Grade> {
        match rank {
            1 => Some(Grade::D),
            2 => Some(Grade::C),
            3 => Some(Grade::B),
            4 => Some(Grade::A),
            5 => Some(Grade::S),
            6 => Some(Grade::SS),
            7 => Some(Grade::SSS),
            _ => None,
        }
    }

    /// Parse a raw stored grade value. Unknown values yield `None` and
    /// are simply excluded from aggregation.
    pub fn parse(raw: &str) -> Option<Grade> {
        match raw.trim() {
            "D" => Some(Grade::D),
            "C" => Some(Grade::C),
            "B" => Some(Grade::B),
            "A" => Some(Grade::A),
            "S" => Some(Grade::S),
            "SS" => Some(Grade::SS),
            "SSS" => Some(Grade::SSS),
            _ => None,
        }
    }

    /// Letter form of this grade
    pub const fn letter(self) -> &'static str {
        match self {
            Grade::D => "D",
            Grade::C => "C",
            Grade::B => "B",
            Grade::A => "A",
            Grade::S => "S",
            Grade::SS => "SS",
            Grade::SSS => "SSS",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.letter())
    }
}
