//! Utility functions for raw query/form parameter handling

/// Sentinel meaning "no filter" in query parameters
pub const WILDCARD: &str = "*";

/// Normalize a raw filter parameter: trim whitespace and collapse the
/// empty string, `*` and `any` (case-insensitive) to `None`.
pub fn normalize_param(raw: Option<&str>) -> Option<&str> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() || trimmed == WILDCARD || trimmed.eq_ignore_ascii_case("any") {
        None
    } else {
        Some(trimmed)
    }
}

/// Normalize a raw search parameter: trim whitespace, empty means "no search"
pub fn normalize_search(raw: Option<&str>) -> Option<&str> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
