use std::{fmt, io::Write, iter::FusedIterator};

/// One line of the harvest countdown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// A day went by
    Day(u64),

    /// The final day was reached
    Harvest,
}
//
impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(day) => write!(f, "Day {day}"),
            Self::Harvest => f.write_str("Harvest time!"),
        }
    }
}

// ANCHOR: Counter
/// Day counter that walks from a starting day up to `total`
///
/// Yields `Step::Day(day)` for every day up to and including `total`, then a
/// single `Step::Harvest`, then nothing. A counter that starts past its total
/// yields nothing at all, so iteration always terminates.
#[derive(Clone, Debug)]
pub struct Counter {
    /// Next day to be yielded, `None` once the last day went by
    pending: Option<u64>,

    /// Last day, fixed at construction
    total: u64,

    /// Truth that the harvest line was emitted or can never be reached
    harvested: bool,
}
//
impl Counter {
    /// Count from day 1 to `total`
    pub fn new(total: u64) -> Self {
        Self::starting_at(1, total)
    }

    /// Count from day `current` to `total`
    pub fn starting_at(current: u64, total: u64) -> Self {
        Self {
            pending: Some(current),
            total,
            harvested: current > total,
        }
    }
}
//
impl Iterator for Counter {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.harvested {
            return None;
        }
        match self.pending {
            Some(day) => {
                self.pending = (day < self.total).then(|| day + 1);
                Some(Step::Day(day))
            }
            None => {
                self.harvested = true;
                Some(Step::Harvest)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match (self.harvested, self.pending) {
            (true, _) => Some(0),
            (false, None) => Some(1),
            // Days left, plus the harvest line
            (false, Some(day)) => (self.total - day).checked_add(2),
        };
        match remaining.and_then(|r| usize::try_from(r).ok()) {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}
//
impl FusedIterator for Counter {}
// ANCHOR_END: Counter

// ANCHOR: count_days
/// Print the countdown from day 1 to `total` into `out`, one flushed line per
/// step, and return the number of days that were printed
pub fn count_days(total: u64, mut out: impl Write) -> std::io::Result<u64> {
    let mut days = 0;
    for step in Counter::new(total) {
        tracing::trace!(%step, "counting");
        writeln!(out, "{step}")?;
        out.flush()?;
        if let Step::Day(_) = step {
            days += 1;
        }
    }
    tracing::debug!(days, "harvest reached");
    Ok(days)
}
// ANCHOR_END: count_days
