//! The event/RSVP store.
//!
//! Holds events (most recent first) and RSVPs (in submission order). Every
//! lookup is a linear scan. Operations that need a caller take the current
//! user as an argument and do nothing when there isn't one.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::EventHubResult;
use crate::event::{Event, EventPatch, NewEvent};
use crate::rsvp::{Rsvp, RsvpStatus, RsvpSummary};
use crate::seed;
use crate::storage::{self, EVENTS_KEY, KeyValueStore, RSVPS_KEY};
use crate::user::User;

pub struct EventStore<S: KeyValueStore> {
    storage: S,
    persist_catalog: bool,
    events: Vec<Event>,
    rsvps: Vec<Rsvp>,
}

/// An organizer's events split around a point in time.
#[derive(Debug)]
pub struct Dashboard<'a> {
    pub upcoming: Vec<&'a Event>,
    pub past: Vec<&'a Event>,
    /// "yes" RSVPs across all of the organizer's events.
    pub total_attendees: usize,
}

impl<S: KeyValueStore> EventStore<S> {
    /// Restore RSVPs (and, with `persist_catalog`, events) from `storage`.
    /// Events fall back to the seed list.
    pub fn load(storage: S, persist_catalog: bool) -> EventHubResult<Self> {
        let stored: Option<Vec<Event>> = if persist_catalog {
            storage::load_entry(&storage, EVENTS_KEY)?
        } else {
            None
        };
        let events = stored.unwrap_or_else(seed::events);

        let rsvps: Vec<Rsvp> = storage::load_entry(&storage, RSVPS_KEY)?.unwrap_or_default();

        Ok(EventStore {
            storage,
            persist_catalog,
            events,
            rsvps,
        })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn rsvps(&self) -> &[Rsvp] {
        &self.rsvps
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    // EVENT OPERATIONS:

    /// Create an event organized by `user` and put it first. No-op without a user.
    pub fn create_event(
        &mut self,
        user: Option<&User>,
        data: NewEvent,
    ) -> EventHubResult<Option<&Event>> {
        let Some(user) = user else {
            return Ok(None);
        };

        let event = Event::new(data, user.clone());
        debug!(event_id = %event.id, organizer = %user.id, "Creating event");
        self.events.insert(0, event);
        self.save_events()?;

        Ok(self.events.first())
    }

    /// Merge `patch` into the event with this id. No-op if there is none.
    pub fn update_event(&mut self, id: &str, patch: EventPatch) -> EventHubResult<Option<&Event>> {
        let Some(index) = self.events.iter().position(|e| e.id == id) else {
            return Ok(None);
        };

        self.events[index].apply(patch);
        debug!(event_id = %id, "Updated event");
        self.save_events()?;

        Ok(self.events.get(index))
    }

    /// Remove the event and every RSVP pointing at it. Returns whether the
    /// event existed.
    pub fn delete_event(&mut self, id: &str) -> EventHubResult<bool> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        let removed = self.events.len() != before;

        let rsvps_before = self.rsvps.len();
        self.rsvps.retain(|r| r.event_id != id);
        debug!(
            event_id = %id,
            removed,
            rsvps_removed = rsvps_before - self.rsvps.len(),
            "Deleted event"
        );

        self.save_events()?;
        self.save_rsvps()?;
        Ok(removed)
    }

    // RSVP OPERATIONS:

    /// Record `user`'s answer for an event, replacing any earlier answer.
    /// No-op without a user.
    pub fn submit_rsvp(
        &mut self,
        user: Option<&User>,
        event_id: &str,
        status: RsvpStatus,
        notes: Option<String>,
    ) -> EventHubResult<Option<&Rsvp>> {
        let Some(user) = user else {
            return Ok(None);
        };

        let index = match self
            .rsvps
            .iter()
            .position(|r| r.event_id == event_id && r.user_id == user.id)
        {
            Some(index) => {
                self.rsvps[index].resubmit(status, notes);
                debug!(event_id, user_id = %user.id, %status, "Updated RSVP");
                index
            }
            None => {
                self.rsvps.push(Rsvp::new(event_id, user, status, notes));
                debug!(event_id, user_id = %user.id, %status, "Created RSVP");
                self.rsvps.len() - 1
            }
        };

        self.save_rsvps()?;
        Ok(self.rsvps.get(index))
    }

    /// `user`'s RSVP for this event, if both exist.
    pub fn user_rsvp(&self, user: Option<&User>, event_id: &str) -> Option<&Rsvp> {
        let user = user?;
        self.rsvps
            .iter()
            .find(|r| r.event_id == event_id && r.user_id == user.id)
    }

    /// Every RSVP for this event, in submission order.
    pub fn event_rsvps(&self, event_id: &str) -> Vec<&Rsvp> {
        self.rsvps.iter().filter(|r| r.event_id == event_id).collect()
    }

    pub fn rsvp_summary(&self, event_id: &str) -> RsvpSummary {
        RsvpSummary::tally(self.event_rsvps(event_id))
    }

    // QUERIES:

    /// Events starting after `now`, in collection order, at most `limit`.
    pub fn upcoming(&self, now: NaiveDateTime, limit: usize) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.is_upcoming(now))
            .take(limit)
            .collect()
    }

    pub fn organized_by(&self, user_id: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.organizer.id == user_id)
            .collect()
    }

    pub fn dashboard(&self, organizer: &User, now: NaiveDateTime) -> Dashboard<'_> {
        let (upcoming, past): (Vec<&Event>, Vec<&Event>) = self
            .organized_by(&organizer.id)
            .into_iter()
            .partition(|e| e.is_upcoming(now));

        let total_attendees = upcoming
            .iter()
            .chain(past.iter())
            .map(|e| self.rsvp_summary(&e.id).attending)
            .sum();

        Dashboard {
            upcoming,
            past,
            total_attendees,
        }
    }

    fn save_events(&self) -> EventHubResult<()> {
        if self.persist_catalog {
            storage::save_entry(&self.storage, EVENTS_KEY, &self.events)?;
        }
        Ok(())
    }

    fn save_rsvps(&self) -> EventHubResult<()> {
        storage::save_entry(&self.storage, RSVPS_KEY, &self.rsvps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::DEFAULT_CATEGORY;
    use crate::storage::MemoryStorage;
    use crate::user::Role;
    use chrono::{NaiveDate, NaiveTime};

    fn user(id: &str, role: Role) -> User {
        User {
            id: id.into(),
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            role,
            avatar: None,
        }
    }

    fn new_event(title: &str, date: (i32, u32, u32)) -> NewEvent {
        NewEvent {
            title: title.into(),
            description: "desc".into(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            location: "Hall".into(),
            max_attendees: Some(10),
            image_url: None,
            category: DEFAULT_CATEGORY.into(),
        }
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn store(storage: &MemoryStorage) -> EventStore<MemoryStorage> {
        EventStore::load(storage.clone(), true).unwrap()
    }

    #[test]
    fn test_starts_with_seed_events() {
        let events = store(&MemoryStorage::new());
        assert_eq!(events.events().len(), 3);
        assert!(events.rsvps().is_empty());
    }

    #[test]
    fn test_create_event_requires_user() {
        let mut events = store(&MemoryStorage::new());

        let created = events.create_event(None, new_event("Ghost", (2030, 1, 1))).unwrap();
        assert!(created.is_none());
        assert_eq!(events.events().len(), 3);
    }

    #[test]
    fn test_create_event_prepends_and_attributes() {
        let mut events = store(&MemoryStorage::new());
        let organizer = user("9", Role::Organizer);

        let id = events
            .create_event(Some(&organizer), new_event("Launch", (2030, 1, 1)))
            .unwrap()
            .map(|e| e.id.clone())
            .unwrap();

        assert_eq!(events.events()[0].id, id);
        assert_eq!(events.events()[0].organizer, organizer);
        assert_eq!(events.events().len(), 4);
    }

    #[test]
    fn test_update_event_merges_and_ignores_unknown_ids() {
        let mut events = store(&MemoryStorage::new());

        let patch = EventPatch {
            location: Some("Moscone West".into()),
            ..Default::default()
        };
        let updated = events.update_event("1", patch.clone()).unwrap().unwrap();
        assert_eq!(updated.location, "Moscone West");
        assert_eq!(updated.title, "Tech Conference 2025");

        assert!(events.update_event("missing", patch).unwrap().is_none());
    }

    #[test]
    fn test_submit_rsvp_twice_keeps_one_record() {
        let mut events = store(&MemoryStorage::new());
        let mike = user("2", Role::Attendee);

        events
            .submit_rsvp(Some(&mike), "1", RsvpStatus::Yes, Some("see you".into()))
            .unwrap();
        events
            .submit_rsvp(Some(&mike), "1", RsvpStatus::Maybe, None)
            .unwrap();

        let rsvps = events.event_rsvps("1");
        assert_eq!(rsvps.len(), 1);
        assert_eq!(rsvps[0].status, RsvpStatus::Maybe);
        assert_eq!(rsvps[0].notes, None);
        assert_eq!(
            events.user_rsvp(Some(&mike), "1").map(|r| r.status),
            Some(RsvpStatus::Maybe)
        );
    }

    #[test]
    fn test_submit_rsvp_without_user_is_noop() {
        let mut events = store(&MemoryStorage::new());

        assert!(events.submit_rsvp(None, "1", RsvpStatus::Yes, None).unwrap().is_none());
        assert!(events.rsvps().is_empty());
        assert!(events.user_rsvp(None, "1").is_none());
    }

    #[test]
    fn test_event_rsvps_filters_in_insertion_order() {
        let mut events = store(&MemoryStorage::new());
        let (a, b, c) = (
            user("a", Role::Attendee),
            user("b", Role::Attendee),
            user("c", Role::Attendee),
        );

        events.submit_rsvp(Some(&b), "1", RsvpStatus::Yes, None).unwrap();
        events.submit_rsvp(Some(&a), "2", RsvpStatus::Yes, None).unwrap();
        events.submit_rsvp(Some(&c), "1", RsvpStatus::No, None).unwrap();
        events.submit_rsvp(Some(&a), "1", RsvpStatus::Maybe, None).unwrap();

        let ids: Vec<_> = events.event_rsvps("1").iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_delete_event_cascades_to_rsvps() {
        let storage = MemoryStorage::new();
        let mut events = store(&storage);
        let mike = user("2", Role::Attendee);

        events.submit_rsvp(Some(&mike), "1", RsvpStatus::Yes, None).unwrap();
        events.submit_rsvp(Some(&mike), "2", RsvpStatus::Yes, None).unwrap();

        assert!(events.delete_event("1").unwrap());
        assert!(events.event("1").is_none());
        assert!(events.event_rsvps("1").is_empty());
        assert_eq!(events.event_rsvps("2").len(), 1);

        let reloaded = store(&storage);
        assert!(reloaded.event("1").is_none());
        assert!(reloaded.event_rsvps("1").is_empty());
        assert!(!events.delete_event("1").unwrap());
    }

    #[test]
    fn test_rsvps_survive_reload_without_catalog() {
        let storage = MemoryStorage::new();
        let mut events = EventStore::load(storage.clone(), false).unwrap();
        let organizer = user("9", Role::Organizer);
        events
            .create_event(Some(&organizer), new_event("Lost", (2030, 1, 1)))
            .unwrap();
        events
            .submit_rsvp(Some(&organizer), "3", RsvpStatus::Yes, None)
            .unwrap();

        let reloaded = EventStore::load(storage.clone(), false).unwrap();
        assert_eq!(reloaded.events().len(), 3);
        assert_eq!(reloaded.event_rsvps("3").len(), 1);
        assert!(storage.get(EVENTS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_upcoming_respects_limit_and_order() {
        let mut events = store(&MemoryStorage::new());
        let organizer = user("9", Role::Organizer);
        for (title, year) in [("A", 2030), ("B", 2031), ("C", 2032), ("D", 2033)] {
            events
                .create_event(Some(&organizer), new_event(title, (year, 1, 1)))
                .unwrap();
        }

        let titles: Vec<_> = events
            .upcoming(at(2026, 1, 1), 3)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["D", "C", "B"]);
    }

    #[test]
    fn test_dashboard_splits_and_counts_yes_only() {
        let mut events = store(&MemoryStorage::new());
        let sarah = user("1", Role::Organizer);
        let future_id = events
            .create_event(Some(&sarah), new_event("Future", (2030, 5, 5)))
            .unwrap()
            .map(|e| e.id.clone())
            .unwrap();

        let (a, b) = (user("a", Role::Attendee), user("b", Role::Attendee));
        events.submit_rsvp(Some(&a), &future_id, RsvpStatus::Yes, None).unwrap();
        events.submit_rsvp(Some(&b), &future_id, RsvpStatus::Maybe, None).unwrap();
        events.submit_rsvp(Some(&a), "3", RsvpStatus::Yes, None).unwrap();
        // Emily's event doesn't count toward Sarah's totals.
        events.submit_rsvp(Some(&b), "2", RsvpStatus::Yes, None).unwrap();

        let dashboard = events.dashboard(&sarah, at(2026, 1, 1));
        assert_eq!(dashboard.upcoming.len(), 1);
        assert_eq!(dashboard.upcoming[0].id, future_id);
        let past: Vec<_> = dashboard.past.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(past, vec!["1", "3"]);
        assert_eq!(dashboard.total_attendees, 2);
    }
}
