//! Tests for meeting-request resolution: the duration and trivial-input
//! guards, the combined mandatory+optional pass, and the mandatory-only
//! fallback.

use quorum_engine::{find_first_slot, resolve, Event, Interval, MeetingRequest, DAY_MINUTES};

/// Helper to build a known-valid interval.
fn iv(start: i64, end: i64) -> Interval {
    Interval::from_start_end(start, end).expect("test interval must be valid")
}

/// Helper to build an event over `[start, end)` for the given attendees.
fn event(start: i64, end: i64, attendees: &[&str]) -> Event {
    Event {
        title: String::new(),
        when: iv(start, end),
        attendees: attendees.iter().map(|a| a.to_string()).collect(),
    }
}

/// Helper to build a request from attendee name slices.
fn request(mandatory: &[&str], optional: &[&str], duration_minutes: i64) -> MeetingRequest {
    MeetingRequest {
        mandatory_attendees: mandatory.iter().map(|a| a.to_string()).collect(),
        optional_attendees: optional.iter().map(|a| a.to_string()).collect(),
        duration_minutes,
    }
}

// ---------------------------------------------------------------------------
// Guards: over-long durations and trivial inputs
// ---------------------------------------------------------------------------

#[test]
fn duration_longer_than_the_day_is_never_satisfiable() {
    let events = vec![event(540, 600, &["alice"])];
    let result = resolve(&events, &request(&["alice"], &[], DAY_MINUTES + 1));
    assert!(result.is_empty());

    // The guard outranks the trivial-availability check: even with no events
    // at all, an over-long duration yields nothing.
    let result = resolve(&[], &request(&["alice"], &[], DAY_MINUTES + 1));
    assert!(result.is_empty());
}

#[test]
fn duration_of_exactly_one_day_fits_an_open_day() {
    let result = resolve(&[], &request(&["alice"], &[], DAY_MINUTES));
    assert_eq!(result, vec![Interval::WHOLE_DAY]);
}

#[test]
fn no_events_means_the_whole_day_is_open() {
    let result = resolve(&[], &request(&["alice"], &["bob"], 60));
    assert_eq!(result, vec![Interval::WHOLE_DAY]);
}

#[test]
fn no_attendees_means_no_constraints() {
    // Events exist, but the request names nobody: nothing can block it.
    let events = vec![event(0, 1440, &["alice"])];
    let result = resolve(&events, &request(&[], &[], 60));
    assert_eq!(result, vec![Interval::WHOLE_DAY]);
}

// ---------------------------------------------------------------------------
// Mandatory attendees only
// ---------------------------------------------------------------------------

#[test]
fn fully_booked_mandatory_attendee_leaves_nothing() {
    let events = vec![event(0, 1440, &["alice"])];
    let result = resolve(&events, &request(&["alice"], &[], 60));
    assert!(result.is_empty());
}

#[test]
fn single_event_splits_the_day_in_two() {
    // Busy 09:00-10:00, one-hour meeting: before and after both qualify.
    let events = vec![event(540, 600, &["alice"])];
    let result = resolve(&events, &request(&["alice"], &[], 60));
    assert_eq!(result, vec![iv(0, 540), iv(600, 1440)]);
}

#[test]
fn other_peoples_events_do_not_constrain() {
    let events = vec![event(540, 600, &["carol"])];
    let result = resolve(&events, &request(&["alice"], &[], 60));
    assert_eq!(result, vec![Interval::WHOLE_DAY]);
}

#[test]
fn every_mandatory_attendee_is_considered() {
    // Alice busy 08:00-09:00, Bob busy 10:00-11:00: three gaps remain.
    let events = vec![
        event(480, 540, &["alice"]),
        event(600, 660, &["bob"]),
    ];
    let result = resolve(&events, &request(&["alice", "bob"], &[], 30));
    assert_eq!(result, vec![iv(0, 480), iv(540, 600), iv(660, 1440)]);
}

#[test]
fn overlapping_events_of_different_people_merge() {
    let events = vec![
        event(510, 570, &["alice"]),
        event(540, 630, &["bob"]),
    ];
    let result = resolve(&events, &request(&["alice", "bob"], &[], 60));
    assert_eq!(result, vec![iv(0, 510), iv(630, 1440)]);
}

#[test]
fn nested_events_do_not_resurface_inner_gaps() {
    // Bob's event sits strictly inside Alice's; the free time is decided by
    // the outer interval alone.
    let events = vec![
        event(300, 900, &["alice"]),
        event(400, 500, &["bob"]),
    ];
    let result = resolve(&events, &request(&["alice", "bob"], &[], 60));
    assert_eq!(result, vec![iv(0, 300), iv(900, 1440)]);
}

#[test]
fn double_booked_attendee_is_handled() {
    let events = vec![
        event(480, 600, &["alice"]),
        event(540, 660, &["alice"]),
    ];
    let result = resolve(&events, &request(&["alice"], &[], 60));
    assert_eq!(result, vec![iv(0, 480), iv(660, 1440)]);
}

#[test]
fn just_enough_room_at_the_end_of_the_day() {
    let events = vec![event(0, 1410, &["alice"])];
    let result = resolve(&events, &request(&["alice"], &[], 30));
    assert_eq!(result, vec![iv(1410, 1440)]);
}

#[test]
fn not_quite_enough_room_yields_nothing() {
    let events = vec![event(0, 1411, &["alice"])];
    let result = resolve(&events, &request(&["alice"], &[], 30));
    assert!(result.is_empty());
}

// ---------------------------------------------------------------------------
// Optional attendees: accommodation and fallback
// ---------------------------------------------------------------------------

#[test]
fn optional_attendee_accommodated_when_slots_survive() {
    // Mandatory busy 10:00-12:00, optional busy 08:00-11:00. The combined
    // merge is 08:00-12:00, which still leaves two two-hour slots, so the
    // optional attendee is seated without any fallback.
    let events = vec![
        event(600, 720, &["alice"]),
        event(480, 660, &["bob"]),
    ];
    let result = resolve(&events, &request(&["alice"], &["bob"], 120));
    assert_eq!(result, vec![iv(0, 480), iv(720, 1440)]);
}

#[test]
fn optional_attendee_dropped_when_they_block_everything() {
    // Bob's all-day event would leave nothing; the answer is Alice's gaps.
    let events = vec![
        event(540, 600, &["alice"]),
        event(0, 1440, &["bob"]),
    ];
    let result = resolve(&events, &request(&["alice"], &["bob"], 60));
    assert_eq!(result, vec![iv(0, 540), iv(600, 1440)]);
}

#[test]
fn optional_attendee_dropped_when_gaps_get_too_short() {
    // With Bob, only two one-hour gaps survive; the meeting needs 90
    // minutes, so Bob is dropped and Alice's own gaps win.
    let events = vec![
        event(480, 540, &["alice"]),
        event(0, 420, &["bob"]),
        event(600, 1440, &["bob"]),
    ];
    let result = resolve(&events, &request(&["alice"], &["bob"], 90));
    assert_eq!(result, vec![iv(0, 480), iv(540, 1440)]);
}

#[test]
fn fallback_reports_failure_for_mandatory_not_optional_success() {
    // Mandatory fully booked, optional free all day. The combined pass is
    // empty and the mandatory-only pass is empty too; the optional-only
    // answer must NOT leak through.
    let events = vec![event(0, 1440, &["alice"])];
    let result = resolve(&events, &request(&["alice"], &["bob"], 60));
    assert!(result.is_empty());
}

#[test]
fn optional_only_request_uses_optional_gaps() {
    let events = vec![event(540, 600, &["bob"])];
    let result = resolve(&events, &request(&[], &["bob"], 60));
    assert_eq!(result, vec![iv(0, 540), iv(600, 1440)]);
}

#[test]
fn optional_only_request_fully_booked_yields_nothing() {
    let events = vec![event(0, 1440, &["bob"])];
    let result = resolve(&events, &request(&[], &["bob"], 60));
    assert!(result.is_empty());
}

#[test]
fn attendee_in_both_sets_is_simply_a_member_of_the_union() {
    // Alice appears as both mandatory and optional; nothing special happens.
    let events = vec![event(0, 1380, &["alice"])];
    let result = resolve(&events, &request(&["alice"], &["alice"], 60));
    assert_eq!(result, vec![iv(1380, 1440)]);
}

// ---------------------------------------------------------------------------
// Output guarantees
// ---------------------------------------------------------------------------

#[test]
fn event_order_does_not_change_the_answer() {
    let forward = vec![
        event(480, 540, &["alice"]),
        event(600, 660, &["bob"]),
        event(720, 780, &["alice", "bob"]),
    ];
    let mut backward = forward.clone();
    backward.reverse();

    let req = request(&["alice", "bob"], &[], 30);
    assert_eq!(resolve(&forward, &req), resolve(&backward, &req));
}

#[test]
fn zero_duration_requests_stay_total() {
    // duration > 0 is the caller's contract; a zero just means every real
    // gap qualifies, and a fully booked day still yields nothing.
    let events = vec![event(540, 600, &["alice"])];
    assert_eq!(
        resolve(&events, &request(&["alice"], &[], 0)),
        vec![iv(0, 540), iv(600, 1440)]
    );

    let booked = vec![event(0, 1440, &["alice"])];
    assert!(resolve(&booked, &request(&["alice"], &[], 0)).is_empty());
}

// ---------------------------------------------------------------------------
// find_first_slot
// ---------------------------------------------------------------------------

#[test]
fn first_slot_is_the_earliest() {
    let events = vec![event(480, 540, &["alice"])];
    let first = find_first_slot(&events, &request(&["alice"], &[], 60));
    assert_eq!(first, Some(iv(0, 480)));
}

#[test]
fn first_slot_skips_a_blocked_morning() {
    let events = vec![event(0, 720, &["alice"])];
    let first = find_first_slot(&events, &request(&["alice"], &[], 60));
    assert_eq!(first, Some(iv(720, 1440)));
}

#[test]
fn first_slot_is_none_when_nothing_fits() {
    let events = vec![event(0, 1440, &["alice"])];
    let first = find_first_slot(&events, &request(&["alice"], &[], 60));
    assert_eq!(first, None);
}
