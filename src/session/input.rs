//! Validation of the timestamp typed at the prompt.

use crate::session::error::QueryError;

/// Words that end the session, compared case-insensitively.
pub const EXIT_KEYWORDS: [&str; 3] = ["q", "quit", "exit"];

/// Hours that fall on the 6-hour observation cadence.
pub const CADENCE_HOURS: [&str; 4] = ["00", "06", "12", "18"];

const TIMESTAMP_LEN: usize = 12;

/// A line of user input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    Exit,
    Lookup(String),
}

/// Classifies one raw input line.
///
/// Surrounding whitespace is ignored. Valid timestamps are exactly twelve ASCII
/// digits whose hour (characters 8..10) is one of [`CADENCE_HOURS`]. Minutes
/// and calendar validity are not checked.
pub fn parse_input(raw: &str) -> Result<SessionInput, QueryError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(QueryError::EmptyInput);
    }
    if EXIT_KEYWORDS
        .iter()
        .any(|keyword| input.eq_ignore_ascii_case(keyword))
    {
        return Ok(SessionInput::Exit);
    }
    if input.len() != TIMESTAMP_LEN || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QueryError::InvalidFormat(input.to_string()));
    }

    let hour = &input[8..10];
    if !CADENCE_HOURS.contains(&hour) {
        return Err(QueryError::OffCadence {
            input: input.to_string(),
            hour: hour.to_string(),
        });
    }
    Ok(SessionInput::Lookup(input.to_string()))
}
