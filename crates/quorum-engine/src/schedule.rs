//! Whole-day busy/free overview for a group of attendees.
//!
//! Merges the group's events into unified busy blocks, counts how many of the
//! requested attendees each block ties up, and lists the free gaps between
//! blocks. This is the "who is busy when" view a caller renders next to the
//! resolver's answer.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::freebusy::{busy_intervals_for, free_intervals, merge_intervals};
use crate::interval::Interval;

/// A merged busy stretch of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyBlock {
    /// The merged interval.
    pub interval: Interval,
    /// Number of distinct requested attendees with at least one event
    /// overlapping this block.
    pub attendee_count: usize,
}

/// Busy/free breakdown of one day for an attendee group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Merged busy blocks, sorted by start, non-overlapping.
    pub busy: Vec<BusyBlock>,
    /// Free gaps between busy blocks, whatever their length.
    pub free: Vec<Interval>,
}

/// Build the merged busy/free view of the day for `attendees`.
///
/// Events involving none of `attendees` are invisible to the view. With no
/// relevant events the whole day comes back as a single free gap.
pub fn day_schedule(events: &[Event], attendees: &HashSet<String>) -> DaySchedule {
    let raw = busy_intervals_for(events, attendees);
    let merged = merge_intervals(&raw);

    let busy = merged
        .iter()
        .map(|&block| BusyBlock {
            interval: block,
            attendee_count: count_attendees_in(events, attendees, block),
        })
        .collect();

    // Gaps of any length: a minimum of zero keeps every non-degenerate gap.
    let free = free_intervals(&raw, 0);

    DaySchedule { busy, free }
}

/// Count the distinct members of `attendees` having at least one event that
/// overlaps `block`.
fn count_attendees_in(events: &[Event], attendees: &HashSet<String>, block: Interval) -> usize {
    attendees
        .iter()
        .filter(|attendee| {
            events
                .iter()
                .any(|event| event.attendees.contains(*attendee) && event.when.overlaps(block))
        })
        .count()
}
