//! Explain why a candidate slot is unavailable.
//!
//! Answers the "why not this time?" question: which existing events of the
//! considered attendees overlap a proposed interval. Adjacent events (one
//! ending exactly when the candidate starts) do NOT block.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::interval::Interval;

/// An existing event standing in the way of a candidate slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockingEvent {
    /// The offending event, cloned so the report outlives the snapshot.
    pub event: Event,
    /// How much of the candidate it covers, in minutes.
    pub overlap_minutes: i64,
}

/// Find every event blocking `candidate` for the given attendees.
///
/// An event blocks when it involves at least one of `attendees` and its
/// interval overlaps the candidate. The overlap length is
/// `min(ends) - max(starts)`. Results are sorted by event start (ties by
/// end) so the report order is deterministic.
pub fn find_blocking_events(
    events: &[Event],
    attendees: &HashSet<String>,
    candidate: Interval,
) -> Vec<BlockingEvent> {
    let mut blocking: Vec<BlockingEvent> = events
        .iter()
        .filter(|event| event.involves_any(attendees) && event.when.overlaps(candidate))
        .map(|event| {
            let overlap_start = event.when.start().max(candidate.start());
            let overlap_end = event.when.end().min(candidate.end());
            BlockingEvent {
                event: event.clone(),
                overlap_minutes: overlap_end - overlap_start,
            }
        })
        .collect();

    blocking.sort_by(|a, b| a.event.when.cmp(&b.event.when));
    blocking
}
