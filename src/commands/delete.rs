use anyhow::Result;
use dialoguer::Confirm;
use eventhub_core::{EventHub, KeyValueStore};
use owo_colors::OwoColorize;

use crate::commands::require_own_event;
use crate::render::pluralize;

pub fn run<S: KeyValueStore + Clone>(hub: &mut EventHub<S>, id: &str, yes: bool) -> Result<()> {
    let event = require_own_event(hub, id)?;
    let title = event.title.clone();
    let rsvp_count = hub.event_rsvps(id).len();

    if !yes {
        let prompt = format!(
            "Delete '{}' and its {} {}? This can't be undone",
            title,
            rsvp_count,
            pluralize("RSVP", rsvp_count)
        );
        if !Confirm::new().with_prompt(prompt).default(false).interact()? {
            println!("{}", "  Cancelled".dimmed());
            return Ok(());
        }
    }

    hub.delete_event(id)?;
    println!("{}", format!("  Deleted: {}", title).red());

    Ok(())
}
