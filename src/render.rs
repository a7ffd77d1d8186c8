//! TUI rendering traits for eventhub types.
//!
//! Extension traits that add colored terminal rendering to eventhub-core
//! types using owo_colors.

use eventhub_core::{Event, Rsvp, RsvpStatus, RsvpSummary, User};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for RsvpStatus {
    fn render(&self) -> String {
        match self {
            RsvpStatus::Yes => "yes".green().to_string(),
            RsvpStatus::Maybe => "maybe".yellow().to_string(),
            RsvpStatus::No => "no".red().to_string(),
        }
    }
}

impl Render for User {
    fn render(&self) -> String {
        format!("{} {}", self, format!("({})", self.role).dimmed())
    }
}

/// One line per event: when, title, where, and the category tag.
impl Render for Event {
    fn render(&self) -> String {
        let when = format!("{} {}", self.date.format("%a %b %-d %Y"), self.time.format("%H:%M"));
        let tag = format!("[{}]", self.category);
        format!(
            "{} {} {} {}",
            when.bold(),
            self.title,
            format!("@ {}", self.location).dimmed(),
            tag.dimmed()
        )
    }
}

impl Render for Rsvp {
    fn render(&self) -> String {
        let notes = self
            .notes
            .as_deref()
            .filter(|n| !n.is_empty())
            .map(|n| format!(" \"{}\"", n).dimmed().to_string())
            .unwrap_or_default();
        format!("{} {}{}", self.status.render(), self.user.name, notes)
    }
}

impl Render for RsvpSummary {
    fn render(&self) -> String {
        format!(
            "{} {}",
            format!("{} attending", self.attending).green(),
            format!("{} maybe", self.maybe).yellow()
        )
    }
}

/// "12 / 50 spots" when the event is capped, "12 attending" otherwise.
pub fn render_capacity(event: &Event, summary: &RsvpSummary) -> String {
    match event.max_attendees {
        Some(max) => format!("{} / {} spots", summary.attending, max),
        None => format!("{} attending", summary.attending),
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
