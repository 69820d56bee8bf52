//! `quorum` CLI — resolve meeting requests against a day of events from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Find every open window that fits the request (stdin → stdout)
//! quorum find < schedule.json
//!
//! # Find from a file, earliest window only
//! quorum find -s schedule.json --first
//!
//! # Check a specific window and list what blocks it
//! quorum check -s schedule.json --start 09:00 --end 10:30
//!
//! # Show the merged busy/free day for everyone on the request
//! quorum report -s schedule.json
//!
//! # Machine-readable output
//! quorum find -s schedule.json --json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::{self, Read};
use std::process;

use quorum_engine::{
    day_schedule, find_blocking_events, find_first_slot, resolve, BlockingEvent, Event, Interval,
    MeetingRequest,
};

#[derive(Parser)]
#[command(name = "quorum", version, about = "Free/busy meeting resolution CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every open window that fits the request
    Find {
        /// Schedule file (reads from stdin if omitted)
        #[arg(short, long)]
        schedule: Option<String>,
        /// Print only the earliest window
        #[arg(long)]
        first: bool,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check whether a specific window is free for everyone on the request
    Check {
        /// Schedule file (reads from stdin if omitted)
        #[arg(short, long)]
        schedule: Option<String>,
        /// Window start as HH:MM
        #[arg(long)]
        start: String,
        /// Window end as HH:MM (24:00 is the end of the day)
        #[arg(long)]
        end: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the merged busy/free day for everyone on the request
    Report {
        /// Schedule file (reads from stdin if omitted)
        #[arg(short, long)]
        schedule: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// On-disk schedule: one day of events plus the request to resolve.
#[derive(Deserialize)]
struct ScheduleFile {
    #[serde(default)]
    events: Vec<Event>,
    request: MeetingRequest,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    free: bool,
    blocking: &'a [BlockingEvent],
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            schedule,
            first,
            json,
        } => {
            let file = load_schedule(schedule.as_deref())?;
            let slots: Vec<Interval> = if first {
                find_first_slot(&file.events, &file.request)
                    .into_iter()
                    .collect()
            } else {
                resolve(&file.events, &file.request)
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&slots)?);
            } else if slots.is_empty() {
                println!("no slot satisfies the request");
            } else {
                for slot in &slots {
                    println!("{} ({} min)", format_window(*slot), slot.duration());
                }
            }
        }
        Commands::Check {
            schedule,
            start,
            end,
            json,
        } => {
            let file = load_schedule(schedule.as_deref())?;
            let window = parse_window(&start, &end)?;
            let attendees = everyone(&file.request);
            let blocking = find_blocking_events(&file.events, &attendees, window);
            let free = blocking.is_empty();

            if json {
                let report = CheckReport {
                    free,
                    blocking: &blocking,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if free {
                println!("{} is free for everyone", format_window(window));
            } else {
                println!("{} is blocked:", format_window(window));
                for blocker in &blocking {
                    println!(
                        "  {} {} ({} min overlap)",
                        format_window(blocker.event.when),
                        describe_event(&blocker.event),
                        blocker.overlap_minutes
                    );
                }
            }

            if !free {
                process::exit(1);
            }
        }
        Commands::Report { schedule, json } => {
            let file = load_schedule(schedule.as_deref())?;
            let attendees = everyone(&file.request);
            let day = day_schedule(&file.events, &attendees);

            if json {
                println!("{}", serde_json::to_string_pretty(&day)?);
            } else {
                println!("busy:");
                if day.busy.is_empty() {
                    println!("  (none)");
                }
                for block in &day.busy {
                    let noun = if block.attendee_count == 1 {
                        "attendee"
                    } else {
                        "attendees"
                    };
                    println!(
                        "  {} ({} {})",
                        format_window(block.interval),
                        block.attendee_count,
                        noun
                    );
                }
                println!("free:");
                if day.free.is_empty() {
                    println!("  (none)");
                }
                for gap in &day.free {
                    println!("  {} ({} min)", format_window(*gap), gap.duration());
                }
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn load_schedule(path: Option<&str>) -> Result<ScheduleFile> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse schedule JSON")
}

/// Union of the request's mandatory and optional attendees.
fn everyone(request: &MeetingRequest) -> HashSet<String> {
    request
        .mandatory_attendees
        .union(&request.optional_attendees)
        .cloned()
        .collect()
}

/// Parse a wall-clock `HH:MM` string into minutes from midnight.
///
/// `24:00` is accepted so the end of the day can be spelled naturally.
fn parse_clock(raw: &str) -> Result<i64> {
    let (h, m) = raw
        .split_once(':')
        .with_context(|| format!("'{}' is not a HH:MM time", raw))?;
    let hours: i64 = h
        .parse()
        .with_context(|| format!("'{}' is not a HH:MM time", raw))?;
    let minutes: i64 = m
        .parse()
        .with_context(|| format!("'{}' is not a HH:MM time", raw))?;
    if !(0..=24).contains(&hours) || !(0..=59).contains(&minutes) || (hours == 24 && minutes != 0) {
        anyhow::bail!("'{}' is out of range; times run 00:00 to 24:00", raw);
    }
    Ok(hours * 60 + minutes)
}

fn parse_window(start: &str, end: &str) -> Result<Interval> {
    let start = parse_clock(start)?;
    let end = parse_clock(end)?;
    Interval::from_start_end(start, end).context("invalid check window")
}

fn format_clock(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn format_window(interval: Interval) -> String {
    format!(
        "{}-{}",
        format_clock(interval.start()),
        format_clock(interval.end())
    )
}

/// Human label for an event: its title, or the attendee list when untitled.
fn describe_event(event: &Event) -> String {
    if !event.title.is_empty() {
        return event.title.clone();
    }
    let mut names: Vec<&str> = event.attendees.iter().map(|a| a.as_str()).collect();
    names.sort_unstable();
    names.join(", ")
}
