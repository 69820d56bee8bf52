//! Busy events and meeting requests — the caller-supplied inputs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::interval::Interval;

/// A pre-existing busy event on somebody's calendar.
///
/// Owned by the caller; the resolver only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Display label. Carried through for reporting; resolution ignores it.
    #[serde(default)]
    pub title: String,
    /// The stretch of the day the event occupies.
    pub when: Interval,
    /// Attendees whose time the event consumes. An empty set is legal and
    /// never blocks anyone.
    #[serde(default)]
    pub attendees: HashSet<String>,
}

impl Event {
    /// True when the event involves at least one attendee from `group`.
    pub fn involves_any(&self, group: &HashSet<String>) -> bool {
        !self.attendees.is_disjoint(group)
    }
}

/// A request to schedule a new meeting.
///
/// The two attendee sets may overlap; membership in either set is what
/// matters. `duration_minutes` is the caller's contract to keep positive —
/// the resolver compares it against the day length and performs no other
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Attendees who must be free for a slot to qualify.
    #[serde(default)]
    pub mandatory_attendees: HashSet<String>,
    /// Attendees to accommodate when doing so still leaves a slot open.
    #[serde(default)]
    pub optional_attendees: HashSet<String>,
    /// Minimum length of the requested slot, in minutes.
    pub duration_minutes: i64,
}
