pub mod counter;
pub mod error;
pub mod input;
pub mod logging;

pub use counter::{count_days, Counter, Step};
pub use error::{Error, Result};
pub use input::{parse_days, prompt_days};

use std::io::{BufRead, Write};

// ANCHOR: run
/// Obtain the number of days, prompting on `out` unless `days` is already
/// known, then print the countdown to `out`
///
/// Nothing but the prompt reaches `out` when the answer is rejected.
pub fn run(days: Option<u64>, input: impl BufRead, mut out: impl Write) -> Result<u64> {
    let total = match days {
        Some(days) => days,
        None => prompt_days(input, &mut out)?,
    };
    tracing::debug!(total, "starting countdown");
    Ok(count_days(total, out)?)
}
// ANCHOR_END: run
