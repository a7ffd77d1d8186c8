use anyhow::Result;
use eventhub_core::{Event, EventHub, KeyValueStore};
use owo_colors::OwoColorize;

use crate::commands::{now, require_organizer};
use crate::render::{Render, pluralize};

pub fn run<S: KeyValueStore + Clone>(hub: &EventHub<S>) -> Result<()> {
    let user = require_organizer(hub)?;
    let Some(dashboard) = hub.dashboard(now()) else {
        return Ok(());
    };

    let total = dashboard.upcoming.len() + dashboard.past.len();
    println!("{}", format!("Dashboard for {}", user.name).bold());
    println!(
        "  {} {} ({} upcoming), {} {}",
        total,
        pluralize("event", total),
        dashboard.upcoming.len(),
        dashboard.total_attendees,
        pluralize("attendee", dashboard.total_attendees)
    );

    if total == 0 {
        println!();
        println!(
            "{}",
            "  No events yet. Create one with: eventhub new <title> --date ... --time ... --location ..."
                .dimmed()
        );
        return Ok(());
    }

    print_section(hub, "Upcoming", &dashboard.upcoming);
    print_section(hub, "Past", &dashboard.past);

    Ok(())
}

fn print_section<S: KeyValueStore + Clone>(hub: &EventHub<S>, label: &str, events: &[&Event]) {
    if events.is_empty() {
        return;
    }

    println!();
    println!("{}", label.bold());
    for event in events {
        let summary = hub.rsvp_summary(&event.id);
        println!("  {}", event.render());
        println!("    {} {}", event.id.dimmed(), summary.render());
    }
}
