//! Free/busy computation over one scheduling day.
//!
//! Collects the busy intervals of the attendees under consideration, merges
//! overlapping or touching intervals with a single sorted sweep, then emits
//! the gaps long enough for the requested duration.

use std::collections::HashSet;

use crate::event::Event;
use crate::interval::{Interval, DAY_MINUTES};

/// Collect the busy interval of every event involving at least one of
/// `attendees`.
///
/// Duplicate and overlapping intervals come back as-is; [`merge_intervals`]
/// tolerates both.
pub fn busy_intervals_for(events: &[Event], attendees: &HashSet<String>) -> Vec<Interval> {
    events
        .iter()
        .filter(|event| event.involves_any(attendees))
        .map(|event| event.when)
        .collect()
}

/// Merge overlapping or touching intervals into a minimal sorted cover.
///
/// Sorts by start (ties by end) and sweeps once: whenever the next interval
/// starts at or before the accumulated end, the accumulator extends to cover
/// it; otherwise the accumulator is closed and a new one starts. Nested and
/// nested-overlapping inputs need no special handling under this sweep.
pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort();

    let mut merged: Vec<Interval> = Vec::new();
    for interval in sorted {
        if let Some(last) = merged.last_mut() {
            if interval.start() <= last.end() {
                // Touching or overlapping — extend the current interval.
                *last = Interval::new_unchecked(last.start(), last.end().max(interval.end()));
                continue;
            }
        }
        merged.push(interval);
    }

    merged
}

/// Compute the free gaps of at least `min_duration` minutes left by `busy`.
///
/// Walks a cursor across the day, emitting the gap before each merged busy
/// interval and the trailing gap to the end of the day. The result is sorted
/// by start and pairwise non-overlapping by construction; zero-length gaps
/// are never emitted. With no busy intervals the whole day is the single
/// candidate.
pub fn free_intervals(busy: &[Interval], min_duration: i64) -> Vec<Interval> {
    let merged = merge_intervals(busy);

    let mut free = Vec::new();
    let mut cursor = 0;

    for block in &merged {
        if cursor < block.start() {
            free.push(Interval::new_unchecked(cursor, block.start()));
        }
        cursor = cursor.max(block.end());
    }

    // Trailing gap after the last busy interval.
    if cursor < DAY_MINUTES {
        free.push(Interval::new_unchecked(cursor, DAY_MINUTES));
    }

    free.retain(|gap| gap.duration() >= min_duration);
    free
}
