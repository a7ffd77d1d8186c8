pub mod auth;
pub mod dashboard;
pub mod delete;
pub mod events;
pub mod new;
pub mod rsvp;
pub mod update;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use eventhub_core::{Event, EventHub, KeyValueStore, User};

/// Local wall-clock time, which is what event dates and times are written in.
pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Shared refusal for commands that need someone signed in.
pub fn require_user<S: KeyValueStore + Clone>(hub: &EventHub<S>) -> Result<User> {
    match hub.current_user() {
        Some(user) => Ok(user.clone()),
        None => anyhow::bail!(
            "Not signed in.\n\n\
            Sign in with:\n  \
            eventhub login <email>"
        ),
    }
}

pub fn require_organizer<S: KeyValueStore + Clone>(hub: &EventHub<S>) -> Result<User> {
    let user = require_user(hub)?;
    if !user.is_organizer() {
        anyhow::bail!("Only organizers can manage events");
    }
    Ok(user)
}

pub fn require_event<'a, S: KeyValueStore + Clone>(hub: &'a EventHub<S>, id: &str) -> Result<&'a Event> {
    hub.event(id)
        .ok_or_else(|| anyhow::anyhow!("Event '{}' not found", id))
}

/// The event, provided the signed-in organizer is the one who created it.
pub fn require_own_event<'a, S: KeyValueStore + Clone>(
    hub: &'a EventHub<S>,
    id: &str,
) -> Result<&'a Event> {
    let user = require_organizer(hub)?;
    let event = require_event(hub, id)?;
    if event.organizer.id != user.id {
        anyhow::bail!("'{}' is organized by {}", event.title, event.organizer.name);
    }
    Ok(event)
}

/// Parse a date as YYYY-MM-DD, falling back to natural language ("next friday").
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d") {
        return Ok(date);
    }

    fuzzydate::parse(input)
        .map(|dt| dt.date())
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))
}

/// Parse a time as HH:MM (24h).
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| anyhow::anyhow!("Could not parse time: \"{}\" (expected HH:MM)", input))
}
