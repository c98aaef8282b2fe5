//! Shared validation rules for user input.
//!
//! Every entry point (CLI flags, TUI forms) runs input through these before
//! anything is sent to the backend, so the same rules apply everywhere.

use std::sync::LazyLock;

use jiff::civil::Date;
use regex::Regex;

use crate::error::{LostFoundError, Result};
use crate::types::{NewItem, WatchKeyword};

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for watch keywords (in characters).
pub const MIN_KEYWORD_LENGTH: usize = 2;

/// Maximum length for watch keywords (in characters).
pub const MAX_KEYWORD_LENGTH: usize = 20;

/// Maximum length for item names (in characters).
pub const MAX_ITEM_NAME_LENGTH: usize = 50;

/// Maximum length for item descriptions and claim messages (in characters).
pub const MAX_TEXT_LENGTH: usize = 500;

/// Minimum password length on sign-up.
pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should be valid")
});

// ============================================================================
// Watch keywords
// ============================================================================

/// Validates a new watch keyword against the user's current keywords.
///
/// Rules:
/// - Trimmed before checking
/// - Between MIN_KEYWORD_LENGTH and MAX_KEYWORD_LENGTH characters
/// - No control characters
/// - Not a case-insensitive duplicate of an active keyword
///
/// Returns the trimmed keyword.
pub fn validate_keyword(keyword: &str, existing: &[WatchKeyword]) -> Result<String> {
    let trimmed = keyword.trim();
    let len = trimmed.chars().count();

    if len < MIN_KEYWORD_LENGTH {
        return Err(LostFoundError::validation(
            "keyword",
            format!("must be at least {MIN_KEYWORD_LENGTH} characters"),
        ));
    }
    if len > MAX_KEYWORD_LENGTH {
        return Err(LostFoundError::validation(
            "keyword",
            format!("must be at most {MAX_KEYWORD_LENGTH} characters (got {len})"),
        ));
    }
    reject_control_chars("keyword", trimmed)?;

    let lowered = trimmed.to_lowercase();
    if existing
        .iter()
        .any(|k| k.active && k.keyword.trim().to_lowercase() == lowered)
    {
        return Err(LostFoundError::validation(
            "keyword",
            format!("'{trimmed}' is already being watched"),
        ));
    }

    Ok(trimmed.to_string())
}

// ============================================================================
// Items
// ============================================================================

/// Validates an item registration form.
///
/// Rules:
/// - Name: 1..=MAX_ITEM_NAME_LENGTH characters, no control characters
/// - Location: required
/// - Description: at most MAX_TEXT_LENGTH characters
/// - Found date: not after `today`
pub fn validate_new_item(item: &NewItem, today: Date) -> Result<()> {
    let name = item.name.trim();
    if name.is_empty() {
        return Err(LostFoundError::validation("name", "cannot be empty"));
    }
    let name_len = name.chars().count();
    if name_len > MAX_ITEM_NAME_LENGTH {
        return Err(LostFoundError::validation(
            "name",
            format!("must be at most {MAX_ITEM_NAME_LENGTH} characters (got {name_len})"),
        ));
    }
    reject_control_chars("name", name)?;

    if item.location.trim().is_empty() {
        return Err(LostFoundError::validation("location", "is required"));
    }

    let description_len = item.description.chars().count();
    if description_len > MAX_TEXT_LENGTH {
        return Err(LostFoundError::validation(
            "description",
            format!("must be at most {MAX_TEXT_LENGTH} characters (got {description_len})"),
        ));
    }

    if item.found_date > today {
        return Err(LostFoundError::validation(
            "found_date",
            format!("{} is in the future", item.found_date),
        ));
    }

    Ok(())
}

// ============================================================================
// Claims
// ============================================================================

/// Validates a claim message. Returns it trimmed.
pub fn validate_claim_message(message: &str) -> Result<String> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(LostFoundError::validation("message", "cannot be empty"));
    }
    let len = trimmed.chars().count();
    if len > MAX_TEXT_LENGTH {
        return Err(LostFoundError::validation(
            "message",
            format!("must be at most {MAX_TEXT_LENGTH} characters (got {len})"),
        ));
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// Accounts
// ============================================================================

pub fn validate_email(email: &str) -> Result<()> {
    if EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        Err(LostFoundError::validation(
            "email",
            format!("'{email}' is not an email address"),
        ))
    }
}

pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(LostFoundError::validation(
            "password",
            format!("must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }
    Ok(())
}

fn reject_control_chars(field: &str, value: &str) -> Result<()> {
    if value.chars().any(|c| c.is_control()) {
        return Err(LostFoundError::validation(
            field,
            "contains invalid control characters",
        ));
    }
    Ok(())
}
