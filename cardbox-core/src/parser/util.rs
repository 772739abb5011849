use std::collections::BTreeSet;

use crate::errors::ParseError;
use crate::index::Index;
use crate::models::{self, Difficulty};

/// Parses a 1-based index literal. Any unsigned integer is accepted here;
/// range (including 0) is checked against the displayed list at execution.
pub(super) fn parse_index(s: &str, usage: &'static str) -> Result<Index, ParseError> {
    s.trim()
        .parse::<u32>()
        .map(Index::from_one_based)
        .map_err(|_| ParseError::InvalidArguments { usage })
}

pub(super) fn parse_question(s: &str) -> Result<String, ParseError> {
    models::validate_question(s)?;
    Ok(s.to_string())
}

pub(super) fn parse_answer(s: &str) -> Result<String, ParseError> {
    models::validate_answer(s)?;
    Ok(s.to_string())
}

pub(super) fn parse_hint(s: &str) -> Result<String, ParseError> {
    models::validate_hint(s)?;
    Ok(s.to_string())
}

pub(super) fn parse_tag(s: &str) -> Result<String, ParseError> {
    models::validate_tag(s)?;
    Ok(s.to_string())
}

pub(super) fn parse_tags<'a>(
    values: impl IntoIterator<Item = &'a str>,
) -> Result<BTreeSet<String>, ParseError> {
    values.into_iter().map(parse_tag).collect()
}

pub(super) fn parse_difficulty(s: &str) -> Result<Difficulty, ParseError> {
    s.parse::<Difficulty>().map_err(ParseError::from)
}
