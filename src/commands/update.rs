use anyhow::Result;
use clap::Args;
use eventhub_core::{EventHub, EventPatch, KeyValueStore};
use owo_colors::OwoColorize;

use crate::commands::{parse_date, parse_time, require_own_event};

#[derive(Args, Default)]
pub struct UpdateArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(short, long)]
    pub date: Option<String>,

    #[arg(short, long)]
    pub time: Option<String>,

    #[arg(short, long)]
    pub location: Option<String>,

    #[arg(short, long)]
    pub category: Option<String>,

    #[arg(short, long, conflicts_with = "no_max_attendees")]
    pub max_attendees: Option<u32>,

    /// Remove the attendee cap
    #[arg(long)]
    pub no_max_attendees: bool,

    #[arg(long, conflicts_with = "no_image")]
    pub image_url: Option<String>,

    /// Remove the image
    #[arg(long)]
    pub no_image: bool,
}

impl UpdateArgs {
    fn into_patch(self) -> Result<EventPatch> {
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            anyhow::bail!("Title can't be empty");
        }
        if self.location.as_deref().is_some_and(|l| l.trim().is_empty()) {
            anyhow::bail!("Location can't be empty");
        }

        let max_attendees = if self.no_max_attendees {
            Some(None)
        } else {
            self.max_attendees.map(Some)
        };
        let image_url = if self.no_image {
            Some(None)
        } else {
            self.image_url.map(Some)
        };

        Ok(EventPatch {
            title: self.title,
            description: self.description,
            date: self.date.as_deref().map(parse_date).transpose()?,
            time: self.time.as_deref().map(parse_time).transpose()?,
            location: self.location,
            max_attendees,
            image_url,
            category: self.category,
        })
    }
}

pub fn run<S: KeyValueStore + Clone>(
    hub: &mut EventHub<S>,
    id: &str,
    args: UpdateArgs,
) -> Result<()> {
    require_own_event(hub, id)?;

    let patch = args.into_patch()?;
    if patch.is_empty() {
        println!("{}", "  Nothing to change".dimmed());
        return Ok(());
    }

    if let Some(event) = hub.update_event(id, patch)? {
        println!("{}", format!("  Updated: {}", event.title).yellow());
    }

    Ok(())
}
