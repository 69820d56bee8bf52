//! # quorum-engine
//!
//! Deterministic free/busy resolution for meeting scheduling.
//!
//! Given a day's worth of busy events and a meeting request naming mandatory
//! and optional attendees, the engine computes the ordered list of free
//! intervals long enough for the meeting. Slots that seat everyone are
//! preferred; when none exist, the mandatory attendees alone decide. The
//! whole computation is a pure function over integer minutes within one
//! bounded day: no I/O, no clocks, no shared state.
//!
//! ## Modules
//!
//! - [`interval`] — half-open `[start, end)` minute intervals and their orderings
//! - [`event`] — busy events and meeting requests
//! - [`freebusy`] — busy-interval extraction, merging, and gap computation
//! - [`resolver`] — the mandatory/optional attendee policy
//! - [`conflict`] — which events block a candidate slot
//! - [`schedule`] — merged busy/free day overview for a group
//! - [`error`] — error types

pub mod conflict;
pub mod error;
pub mod event;
pub mod freebusy;
pub mod interval;
pub mod resolver;
pub mod schedule;

pub use conflict::{find_blocking_events, BlockingEvent};
pub use error::ScheduleError;
pub use event::{Event, MeetingRequest};
pub use freebusy::{busy_intervals_for, free_intervals, merge_intervals};
pub use interval::{Interval, DAY_MINUTES};
pub use resolver::{find_first_slot, resolve};
pub use schedule::{day_schedule, BusyBlock, DaySchedule};
