//! Profile slug validation (PRD-07).
//!
//! A slug is the public path of a profile page, claimed once during
//! onboarding. The same rules run in the editor as the user types; this is
//! the authoritative server-side check.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Minimum slug length in characters.
pub const MIN_SLUG_LENGTH: usize = 3;

/// Maximum slug length in characters.
pub const MAX_SLUG_LENGTH: usize = 32;

const SLUG_PATTERN: &str = "^[a-z0-9-]+$";

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SLUG_PATTERN).expect("valid regex"));

/// Validate a profile slug: 3-32 characters, lowercase letters, digits and
/// hyphens only, no leading or trailing hyphen.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.len() < MIN_SLUG_LENGTH {
        return Err(CoreError::Validation(format!(
            "The link must be at least {MIN_SLUG_LENGTH} characters long"
        )));
    }
    if slug.len() > MAX_SLUG_LENGTH {
        return Err(CoreError::Validation(format!(
            "The link must be at most {MAX_SLUG_LENGTH} characters long"
        )));
    }
    if !SLUG_RE.is_match(slug) {
        return Err(CoreError::Validation(
            "Only lowercase letters, numbers, and hyphens are allowed".to_string(),
        ));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(CoreError::Validation(
            "Link cannot start or end with a hyphen".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_slugs_accepted() {
        assert!(validate_slug("abc").is_ok());
        assert!(validate_slug("jane-doe").is_ok());
        assert!(validate_slug("user42").is_ok());
        assert!(validate_slug("4815162342").is_ok());
    }

    #[test]
    fn boundary_lengths_accepted() {
        assert!(validate_slug(&"a".repeat(MIN_SLUG_LENGTH)).is_ok());
        assert!(validate_slug(&"a".repeat(MAX_SLUG_LENGTH)).is_ok());
    }

    #[test]
    fn empty_slug_rejected() {
        assert!(validate_slug("").is_err());
    }

    #[test]
    fn short_slug_rejected() {
        let result = validate_slug("ab");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("at least"));
    }

    #[test]
    fn long_slug_rejected() {
        let result = validate_slug(&"a".repeat(MAX_SLUG_LENGTH + 1));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("at most"));
    }

    #[test]
    fn uppercase_rejected() {
        assert!(validate_slug("Jane").is_err());
    }

    #[test]
    fn disallowed_characters_rejected() {
        assert!(validate_slug("jane_doe").is_err());
        assert!(validate_slug("jane doe").is_err());
        assert!(validate_slug("jane.doe").is_err());
        assert!(validate_slug("jané").is_err());
    }

    #[test]
    fn edge_hyphens_rejected() {
        assert!(validate_slug("-jane").is_err());
        assert!(validate_slug("jane-").is_err());
    }

    #[test]
    fn inner_hyphens_allowed() {
        assert!(validate_slug("jane-doe-dev").is_ok());
    }
}
