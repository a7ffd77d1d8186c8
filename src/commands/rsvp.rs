use anyhow::Result;
use eventhub_core::{EventHub, KeyValueStore, RsvpStatus};

use crate::commands::{now, require_event, require_user};
use crate::render::Render;

pub fn run<S: KeyValueStore + Clone>(
    hub: &mut EventHub<S>,
    id: &str,
    status: RsvpStatus,
    notes: Option<String>,
) -> Result<()> {
    require_user(hub)?;
    let event = require_event(hub, id)?;
    if event.has_ended(now()) {
        anyhow::bail!("'{}' has already taken place", event.title);
    }
    let title = event.title.clone();
    let had_rsvp = hub.user_rsvp(id).is_some();

    let notes = notes.filter(|n| !n.trim().is_empty());
    if let Some(rsvp) = hub.submit_rsvp(id, status, notes)? {
        let verb = if had_rsvp { "Updated RSVP" } else { "RSVP'd" };
        println!("  {} {} to {}", verb, rsvp.status.render(), title);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use eventhub_core::{MemoryStorage, NewEvent};

    fn future_event(hub: &mut EventHub<MemoryStorage>) -> String {
        hub.login("sarah@example.com", "pw").unwrap();
        let id = hub
            .create_event(NewEvent {
                title: "Rust Meetup".into(),
                description: "Talks and pizza".into(),
                date: NaiveDate::from_ymd_opt(2099, 6, 1).unwrap(),
                time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
                location: "Library".into(),
                max_attendees: None,
                image_url: None,
                category: "Technology".into(),
            })
            .unwrap()
            .unwrap()
            .id
            .clone();
        hub.logout().unwrap();
        id
    }

    #[test]
    fn test_rsvp_requires_sign_in_and_known_event() {
        let mut hub = EventHub::with_storage(MemoryStorage::new(), true).unwrap();
        assert!(run(&mut hub, "1", RsvpStatus::Yes, None).is_err());

        hub.login("mike@example.com", "pw").unwrap();
        assert!(run(&mut hub, "missing", RsvpStatus::Yes, None).is_err());
        assert!(hub.store().rsvps().is_empty());
    }

    #[test]
    fn test_blank_notes_are_dropped() {
        let mut hub = EventHub::with_storage(MemoryStorage::new(), true).unwrap();
        let id = future_event(&mut hub);
        hub.login("mike@example.com", "pw").unwrap();

        run(&mut hub, &id, RsvpStatus::Maybe, Some("   ".into())).unwrap();
        let rsvp = hub.user_rsvp(&id).unwrap();
        assert_eq!(rsvp.status, RsvpStatus::Maybe);
        assert_eq!(rsvp.notes, None);
    }

    #[test]
    fn test_rsvp_to_ended_event_is_refused() {
        let mut hub = EventHub::with_storage(MemoryStorage::new(), true).unwrap();
        hub.login("mike@example.com", "pw").unwrap();

        // Seed event "2" took place in February 2025.
        assert!(run(&mut hub, "2", RsvpStatus::Yes, None).is_err());
        assert!(hub.event_rsvps("2").is_empty());
    }
}
