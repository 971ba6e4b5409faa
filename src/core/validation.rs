//! Input validation for archive keys.
//!
//! Dates and names are opaque tokens: anything made of ASCII letters, digits,
//! `_` or `-` is accepted. No calendar check is done on dates.

use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)] // Literal pattern, checked by the tests below
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("token pattern is a valid regex"));

/// Returns true if `value` is a non-empty archive token.
#[must_use]
pub fn is_valid_token(value: &str) -> bool {
    TOKEN_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_token_characters() {
        assert!(is_valid_token("2025-01-01"));
        assert!(is_valid_token("Alice"));
        assert!(is_valid_token("patrol_log-7"));
        // Not a calendar date, still a valid token
        assert!(is_valid_token("2025-13-45"));
        assert!(is_valid_token("yesterday"));
    }

    #[test]
    fn test_rejects_other_characters() {
        for bad in [
            "",
            " ",
            "2025/01/01",
            "Alice Smith",
            "name;DROP",
            "émile",
            "tab\tname",
            "line\n",
            "a.b",
        ] {
            assert!(!is_valid_token(bad), "{bad:?} should be rejected");
        }
    }
}
