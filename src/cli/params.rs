//! Parsing of user-entered action parameters.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::NoteId;

/// Errors for malformed numbers or dates typed at a prompt.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("invalid note number '{0}': expected a whole number")]
    InvalidId(String),

    #[error("invalid date '{0}' (expected DD.MM.YYYY or YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Parses a note number.
pub fn parse_id_param(s: &str) -> Result<NoteId, ParamError> {
    s.parse()
        .map_err(|_| ParamError::InvalidId(s.trim().to_string()))
}

/// Parses a calendar day.
///
/// Accepts:
/// - Day first: "05.01.2024" (DD.MM.YYYY)
/// - ISO: "2024-01-05" (YYYY-MM-DD)
pub fn parse_date_param(s: &str) -> Result<NaiveDate, ParamError> {
    let s = s.trim();

    NaiveDate::parse_from_str(s, "%d.%m.%Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| ParamError::InvalidDate(s.to_string()))
}

/// Splits a keyword line on whitespace.
pub fn parse_keywords_param(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}
