//! Half-open minute intervals within a single bounded day.
//!
//! All times are integer minutes since midnight. An [`Interval`] is a value:
//! once constructed it is immutable, and two intervals with the same bounds
//! are the same interval.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Number of minutes in the scheduling day. Every interval lives inside
/// `[0, DAY_MINUTES)`.
pub const DAY_MINUTES: i64 = 24 * 60;

/// A half-open interval `[start, end)` of minutes within one day.
///
/// The invariant `0 <= start <= end <= DAY_MINUTES` holds for every value the
/// constructors hand out, on the wire included: deserialization goes through
/// the same validation as [`Interval::from_start_end`].
///
/// The derived ordering sorts by `start` ascending, ties broken by `end`
/// ascending — the order the merge sweep relies on. Use
/// [`Interval::order_by_end`] for the end-major ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    start: i64,
    end: i64,
}

/// Unvalidated mirror of [`Interval`] used as the deserialization target.
#[derive(Deserialize)]
struct RawInterval {
    start: i64,
    end: i64,
}

impl TryFrom<RawInterval> for Interval {
    type Error = ScheduleError;

    fn try_from(raw: RawInterval) -> Result<Self> {
        Interval::from_start_end(raw.start, raw.end)
    }
}

impl Interval {
    /// The full scheduling day, `[0, DAY_MINUTES)`.
    pub const WHOLE_DAY: Interval = Interval {
        start: 0,
        end: DAY_MINUTES,
    };

    /// Construct an interval from its two bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidInterval`] when `start < 0`,
    /// `end > DAY_MINUTES`, or `start > end`.
    pub fn from_start_end(start: i64, end: i64) -> Result<Interval> {
        if start < 0 {
            return Err(ScheduleError::InvalidInterval(format!(
                "start {start} is before midnight"
            )));
        }
        if end > DAY_MINUTES {
            return Err(ScheduleError::InvalidInterval(format!(
                "end {end} is past the end of the day ({DAY_MINUTES})"
            )));
        }
        if start > end {
            return Err(ScheduleError::InvalidInterval(format!(
                "start {start} is after end {end}"
            )));
        }
        Ok(Interval { start, end })
    }

    /// Construct an interval from its start and a length in minutes.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidInterval`] when the duration is
    /// negative, the addition overflows, or the resulting bounds fall outside
    /// the day.
    pub fn from_start_duration(start: i64, duration: i64) -> Result<Interval> {
        if duration < 0 {
            return Err(ScheduleError::InvalidInterval(format!(
                "duration {duration} is negative"
            )));
        }
        let end = start.checked_add(duration).ok_or_else(|| {
            ScheduleError::InvalidInterval(format!(
                "start {start} plus duration {duration} overflows"
            ))
        })?;
        Self::from_start_end(start, end)
    }

    /// Build without validation. Callers must uphold
    /// `0 <= start <= end <= DAY_MINUTES`.
    pub(crate) const fn new_unchecked(start: i64, end: i64) -> Interval {
        Interval { start, end }
    }

    /// First minute of the interval (inclusive).
    pub fn start(&self) -> i64 {
        self.start
    }

    /// End bound of the interval (exclusive).
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Length of the interval in minutes.
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Half-open overlap test: `self.start < other.end && other.start < self.end`.
    ///
    /// An interval ending exactly where another starts does NOT overlap it.
    #[inline]
    pub fn overlaps(&self, other: Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True when `other` lies entirely within `self`. Every interval contains
    /// itself.
    #[inline]
    pub fn contains(&self, other: Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Ordering by `end` ascending, ties broken by `start` ascending.
    ///
    /// Companion to the derived start-major `Ord`; pass to `sort_by` when
    /// scanning intervals by finish time.
    pub fn order_by_end(a: &Interval, b: &Interval) -> Ordering {
        a.end.cmp(&b.end).then_with(|| a.start.cmp(&b.start))
    }
}
