//! Difficulty label canonicalization
//!
//! Stored difficulty values accumulated legacy spellings over time. The
//! alias table maps each surface spelling to its canonical label, so
//! that filtering by the canonical label still matches rows stored with
//! the old spelling. The table is immutable configuration: built once at
//! startup, validated, and passed by reference from then on.

use crate::error::TierBoardError;
use crate::utils::WILDCARD;
use std::collections::{HashMap, HashSet};

/// Immutable mapping from surface difficulty spellings to canonical labels
#[derive(Debug, Clone)]
pub struct DifficultyAliases {
    aliases: HashMap<String, String>,
}

impl Default for DifficultyAliases {
    fn default() -> Self {
        // The one known legacy spelling in production data
        let aliases =
            HashMap::from([("Для новичков".to_string(), "Лёгкий".to_string())]);
        Self { aliases }
    }
}

impl DifficultyAliases {
    /// Build an alias table from configuration.
    ///
    /// Rejects tables that would break canonicalization idempotence: a
    /// canonical label must never itself appear as an alias key, and
    /// keys/values must be real labels (non-empty, not the wildcard).
    pub fn new(aliases: HashMap<String, String>) -> Result<Self, TierBoardError> {
        let mut trimmed = HashMap::with_capacity(aliases.len());
        for (key, value) in &aliases {
            let key = key.trim();
            let value = value.trim();
            if key.is_empty() || key == WILDCARD || value.is_empty() || value == WILDCARD {
                return Err(TierBoardError::InvalidAliasTable {
                    reason: format!("empty or wildcard entry: {key:?} -> {value:?}"),
                });
            }
            trimmed.insert(key.to_string(), value.to_string());
        }
        for value in trimmed.values() {
            if trimmed.contains_key(value.as_str()) {
                return Err(TierBoardError::InvalidAliasTable {
                    reason: format!("canonical label {value:?} is also an alias key"),
                });
            }
        }
        Ok(Self { aliases: trimmed })
    }

    /// Canonicalize a raw difficulty label.
    ///
    /// Empty (after trimming) and the `*` wildcard mean "no filter" and
    /// return `None`. A label without an alias entry is treated as
    /// already canonical and returned trimmed, so labels the table has
    /// never seen keep working.
    pub fn canonicalize<'a>(&'a self, raw: &'a str) -> Option<&'a str> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == WILDCARD {
            return None;
        }
        match self.aliases.get(trimmed) {
            Some(canonical) => Some(canonical.as_str()),
            None => Some(trimmed),
        }
    }

    /// All surface spellings that canonicalize to the given label:
    /// the label itself plus every alias key mapping to it.
    ///
    /// Stored rows may still carry legacy spellings, so difficulty
    /// matching compares the raw stored value against this set rather
    /// than canonicalizing every row.
    pub fn expand<'a>(&'a self, canonical: &'a str) -> HashSet<&'a str> {
        let mut spellings: HashSet<&str> = HashSet::from([canonical]);
        for (key, value) in &self.aliases {
            if value == canonical {
                spellings.insert(key.as_str());
            }
        }
        spellings
    }
}
