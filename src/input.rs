use crate::error::{Error, Result};
use std::io::{BufRead, Write};

/// Question asked before reading the number of days
pub const PROMPT: &str = "Days until harvest: ";

/// Parse a number of days, rejecting anything that is not an integer of at
/// least 1
///
/// Integers of any size are recognized as such, even when they are too large
/// or too small to be counted up to.
pub fn parse_days(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidInput {
            input: trimmed.to_owned(),
        });
    }
    let input = || trimmed.to_owned();
    if negative {
        return Err(Error::NotPositive { input: input() });
    }
    match digits.parse::<u64>() {
        Ok(0) => Err(Error::NotPositive { input: input() }),
        Ok(days) => Ok(days),
        // Only digits remain, so overflow is the only way to fail
        Err(_) => Err(Error::OutOfRange { input: input() }),
    }
}

// ANCHOR: prompt_days
/// Ask for the number of days on `out` and read the answer from `input`
///
/// Only one line is read. Hitting end of input before any line counts as an
/// empty, hence invalid, answer.
pub fn prompt_days(mut input: impl BufRead, mut out: impl Write) -> Result<u64> {
    out.write_all(PROMPT.as_bytes())?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let days = parse_days(&line)?;
    tracing::debug!(days, "read number of days");
    Ok(days)
}
// ANCHOR_END: prompt_days
