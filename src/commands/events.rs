use anyhow::Result;
use eventhub_core::{Event, EventHub, KeyValueStore, RsvpStatus};
use owo_colors::OwoColorize;

use crate::commands::{now, require_event};
use crate::render::{Render, pluralize, render_capacity};

pub fn list<S: KeyValueStore + Clone>(
    hub: &EventHub<S>,
    upcoming: bool,
    limit: Option<usize>,
) -> Result<()> {
    let limit = limit.unwrap_or(usize::MAX);
    let events: Vec<&Event> = if upcoming {
        hub.upcoming(now(), limit)
    } else {
        hub.events().iter().take(limit).collect()
    };

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for event in events {
        let summary = hub.rsvp_summary(&event.id);
        println!("  {}", event.render());
        println!(
            "    {} {}",
            event.id.dimmed(),
            render_capacity(event, &summary).dimmed()
        );
    }

    Ok(())
}

pub fn show<S: KeyValueStore + Clone>(hub: &EventHub<S>, id: &str) -> Result<()> {
    let event = require_event(hub, id)?;
    let summary = hub.rsvp_summary(&event.id);

    println!("{}", event.title.bold());
    println!(
        "  {} at {}",
        event.date.format("%A, %B %-d, %Y"),
        event.time.format("%H:%M")
    );
    println!("  {}", event.location);
    println!("  {}", format!("[{}]", event.category).dimmed());
    println!("  Organized by {}", event.organizer.name);
    if let Some(url) = &event.image_url {
        println!("  {}", url.dimmed());
    }

    if !event.description.is_empty() {
        println!();
        println!("  {}", event.description);
    }

    println!();
    println!("  {} {}", summary.render(), render_capacity(event, &summary).dimmed());

    let attending: Vec<_> = hub
        .event_rsvps(&event.id)
        .into_iter()
        .filter(|r| r.status == RsvpStatus::Yes)
        .collect();
    if !attending.is_empty() {
        println!();
        println!(
            "  {} {}:",
            attending.len(),
            pluralize("attendee", attending.len())
        );
        for rsvp in attending {
            println!("    {}", rsvp.render());
        }
    }

    println!();
    let ended = event.has_ended(now());
    match (hub.current_user(), hub.user_rsvp(&event.id)) {
        (Some(_), Some(rsvp)) => println!("  Your RSVP: {}", rsvp.render()),
        _ if ended => {}
        (None, _) => println!("{}", "  Sign in to RSVP to this event.".dimmed()),
        (Some(_), None) => println!(
            "{}",
            format!("  RSVP with: eventhub rsvp {} yes", event.id).dimmed()
        ),
    }
    if ended {
        println!("{}", "  Event ended.".dimmed());
    }

    Ok(())
}
