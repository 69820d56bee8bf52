//! Meeting-request resolution: which slots work for whom.
//!
//! The attendee-set policy sits on top of the pure gap-finding in
//! [`crate::freebusy`]: try to seat everyone first, and only when that leaves
//! no slot fall back to the mandatory attendees alone.

use std::collections::HashSet;

use crate::event::{Event, MeetingRequest};
use crate::freebusy::{busy_intervals_for, free_intervals};
use crate::interval::{Interval, DAY_MINUTES};

/// Find every slot satisfying `request` given the day's existing `events`.
///
/// Returns intervals sorted ascending by start, pairwise non-overlapping,
/// each at least `request.duration_minutes` long. The result distinguishes
/// "no constraint given" (`[WHOLE_DAY]`) from "no slot exists" (empty) —
/// callers rely on that difference.
///
/// Resolution order:
///
/// 1. A duration longer than the day can never be satisfied — empty.
/// 2. No events, or nobody requested — the whole day is open.
/// 3. Slots free for mandatory and optional attendees alike win outright.
/// 4. Otherwise mandatory attendees set the answer, even when it is "none":
///    optional attendees never cost the mandatory ones their slot.
/// 5. With no mandatory attendees at all, the optional set is all there is.
pub fn resolve(events: &[Event], request: &MeetingRequest) -> Vec<Interval> {
    let duration = request.duration_minutes;

    if duration > DAY_MINUTES {
        return Vec::new();
    }
    if events.is_empty()
        || (request.mandatory_attendees.is_empty() && request.optional_attendees.is_empty())
    {
        return vec![Interval::WHOLE_DAY];
    }

    // Everyone, mandatory and optional alike. The sets may share members;
    // the union makes that harmless.
    let everyone: HashSet<String> = request
        .mandatory_attendees
        .union(&request.optional_attendees)
        .cloned()
        .collect();
    let for_everyone = free_intervals(&busy_intervals_for(events, &everyone), duration);
    if !for_everyone.is_empty() {
        return for_everyone;
    }

    if !request.mandatory_attendees.is_empty() {
        free_intervals(
            &busy_intervals_for(events, &request.mandatory_attendees),
            duration,
        )
    } else {
        free_intervals(
            &busy_intervals_for(events, &request.optional_attendees),
            duration,
        )
    }
}

/// Earliest slot satisfying `request`, if any.
///
/// Delegates to [`resolve`] and takes the first entry of the sorted result.
pub fn find_first_slot(events: &[Event], request: &MeetingRequest) -> Option<Interval> {
    resolve(events, request).into_iter().next()
}
