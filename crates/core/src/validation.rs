//! Field validation for catalog forms.
//!
//! Runs at the request boundary before anything reaches the repository;
//! the repository persists whatever it is handed. Text fields are checked
//! after trimming, and lengths count characters rather than bytes.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const MAX_CHANNEL_NAME_LEN: usize = 100;
pub const MAX_CHANNEL_DESCRIPTION_LEN: usize = 500;

pub const MAX_SHOW_TITLE_LEN: usize = 200;
pub const MAX_SHOW_DESCRIPTION_LEN: usize = 1000;

/// Earliest release year accepted for a show.
pub const MIN_SHOW_YEAR: i32 = 1900;
/// Latest release year accepted for a show.
pub const MAX_SHOW_YEAR: i32 = 2030;

pub const MAX_CHARACTER_NAME_LEN: usize = 100;
pub const MAX_CHARACTER_ROLE_LEN: usize = 100;
pub const MAX_CHARACTER_DESCRIPTION_LEN: usize = 500;

// ---------------------------------------------------------------------------
// Field checks
// ---------------------------------------------------------------------------

/// Validate a required text field and return its trimmed value.
///
/// Blank values are rejected, as are values longer than `max_len`
/// characters once trimmed.
pub fn validate_required_text(field: &str, value: &str, max_len: usize) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    let len = trimmed.chars().count();
    if len > max_len {
        return Err(CoreError::Validation(format!(
            "{field} must be {max_len} characters or less, got {len}"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate that a show's year falls inside [`MIN_SHOW_YEAR`]..=[`MAX_SHOW_YEAR`].
pub fn validate_year(year: i32) -> Result<i32, CoreError> {
    if !(MIN_SHOW_YEAR..=MAX_SHOW_YEAR).contains(&year) {
        return Err(CoreError::Validation(format!(
            "year must be between {MIN_SHOW_YEAR} and {MAX_SHOW_YEAR}, got {year}"
        )));
    }
    Ok(year)
}

/// Parse a year submitted as text, then range-check it.
pub fn parse_year(value: &str) -> Result<i32, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("year is required".to_string()));
    }
    let year: i32 = trimmed
        .parse()
        .map_err(|_| CoreError::Validation(format!("year must be a valid number, got '{trimmed}'")))?;
    validate_year(year)
}

// ---------------------------------------------------------------------------
// Per-entity forms
// ---------------------------------------------------------------------------

/// Validated, trimmed channel fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelFields {
    pub name: String,
    pub description: String,
}

pub fn validate_channel(name: &str, description: &str) -> Result<ChannelFields, CoreError> {
    Ok(ChannelFields {
        name: validate_required_text("name", name, MAX_CHANNEL_NAME_LEN)?,
        description: validate_required_text(
            "description",
            description,
            MAX_CHANNEL_DESCRIPTION_LEN,
        )?,
    })
}

/// Validated, trimmed show fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowFields {
    pub title: String,
    pub description: String,
    pub year: i32,
}

pub fn validate_show(title: &str, description: &str, year: &str) -> Result<ShowFields, CoreError> {
    Ok(ShowFields {
        title: validate_required_text("title", title, MAX_SHOW_TITLE_LEN)?,
        description: validate_required_text("description", description, MAX_SHOW_DESCRIPTION_LEN)?,
        year: parse_year(year)?,
    })
}

/// Validated, trimmed character fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterFields {
    pub name: String,
    pub role: String,
    pub description: String,
}

pub fn validate_character(
    name: &str,
    role: &str,
    description: &str,
) -> Result<CharacterFields, CoreError> {
    Ok(CharacterFields {
        name: validate_required_text("name", name, MAX_CHARACTER_NAME_LEN)?,
        role: validate_required_text("role", role, MAX_CHARACTER_ROLE_LEN)?,
        description: validate_required_text(
            "description",
            description,
            MAX_CHARACTER_DESCRIPTION_LEN,
        )?,
    })
}
