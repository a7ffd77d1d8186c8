use anyhow::Result;
use eventhub_core::event::CATEGORIES;
use eventhub_core::{EventHub, KeyValueStore, NewEvent};
use owo_colors::OwoColorize;

use crate::commands::{parse_date, parse_time, require_organizer};

pub struct NewArgs {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub category: String,
    pub max_attendees: Option<u32>,
    pub image_url: Option<String>,
}

impl NewArgs {
    fn into_new_event(self) -> Result<NewEvent> {
        if self.title.trim().is_empty() {
            anyhow::bail!("Title can't be empty");
        }
        if self.location.trim().is_empty() {
            anyhow::bail!("Location can't be empty");
        }
        if self.description.trim().is_empty() {
            anyhow::bail!("Description can't be empty");
        }

        Ok(NewEvent {
            title: self.title,
            description: self.description,
            date: parse_date(&self.date)?,
            time: parse_time(&self.time)?,
            location: self.location,
            max_attendees: self.max_attendees,
            image_url: self.image_url.filter(|url| !url.is_empty()),
            category: self.category,
        })
    }
}

pub fn run<S: KeyValueStore + Clone>(hub: &mut EventHub<S>, args: NewArgs) -> Result<()> {
    require_organizer(hub)?;

    if !CATEGORIES.contains(&args.category.as_str()) {
        eprintln!(
            "  {}",
            format!("Note: '{}' isn't one of: {}", args.category, CATEGORIES.join(", ")).yellow()
        );
    }

    let data = args.into_new_event()?;

    match hub.create_event(data)? {
        Some(event) => {
            println!("{}", format!("  Created: {}", event.title).green());
            println!("  {}", event.id.dimmed());
        }
        None => anyhow::bail!("Not signed in"),
    }

    Ok(())
}
