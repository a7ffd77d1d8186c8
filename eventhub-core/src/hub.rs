//! The application-wide pair of stores.

use chrono::NaiveDateTime;

use crate::config::EventHubConfig;
use crate::error::EventHubResult;
use crate::event::{Event, EventPatch, NewEvent};
use crate::events::{Dashboard, EventStore};
use crate::identity::IdentityStore;
use crate::rsvp::{Rsvp, RsvpStatus, RsvpSummary};
use crate::storage::{FileStorage, KeyValueStore};
use crate::user::{Role, User};

/// Identity store plus event store over one storage backend. The event store
/// always sees whoever the identity store says is signed in.
pub struct EventHub<S: KeyValueStore + Clone = FileStorage> {
    identity: IdentityStore<S>,
    events: EventStore<S>,
}

impl EventHub<FileStorage> {
    pub fn open(config: &EventHubConfig) -> EventHubResult<Self> {
        let storage = FileStorage::new(config.data_path());
        Self::with_storage(storage, config.persist_catalog)
    }
}

impl<S: KeyValueStore + Clone> EventHub<S> {
    pub fn with_storage(storage: S, persist_catalog: bool) -> EventHubResult<Self> {
        let identity = IdentityStore::load(storage.clone(), persist_catalog)?;
        let events = EventStore::load(storage, persist_catalog)?;
        Ok(EventHub { identity, events })
    }

    pub fn identity(&self) -> &IdentityStore<S> {
        &self.identity
    }

    pub fn store(&self) -> &EventStore<S> {
        &self.events
    }

    pub fn current_user(&self) -> Option<&User> {
        self.identity.current_user()
    }

    // IDENTITY:

    pub fn login(&mut self, email: &str, password: &str) -> EventHubResult<&User> {
        self.identity.login(email, password)
    }

    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> EventHubResult<&User> {
        self.identity.register(name, email, password, role)
    }

    pub fn logout(&mut self) -> EventHubResult<()> {
        self.identity.logout()
    }

    // EVENTS:

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.event(id)
    }

    pub fn create_event(&mut self, data: NewEvent) -> EventHubResult<Option<&Event>> {
        self.events.create_event(self.identity.current_user(), data)
    }

    pub fn update_event(&mut self, id: &str, patch: EventPatch) -> EventHubResult<Option<&Event>> {
        self.events.update_event(id, patch)
    }

    pub fn delete_event(&mut self, id: &str) -> EventHubResult<bool> {
        self.events.delete_event(id)
    }

    pub fn upcoming(&self, now: NaiveDateTime, limit: usize) -> Vec<&Event> {
        self.events.upcoming(now, limit)
    }

    /// The signed-in user's dashboard, if they're an organizer.
    pub fn dashboard(&self, now: NaiveDateTime) -> Option<Dashboard<'_>> {
        let user = self.current_user().filter(|u| u.is_organizer())?;
        Some(self.events.dashboard(user, now))
    }

    // RSVPS:

    pub fn submit_rsvp(
        &mut self,
        event_id: &str,
        status: RsvpStatus,
        notes: Option<String>,
    ) -> EventHubResult<Option<&Rsvp>> {
        self.events
            .submit_rsvp(self.identity.current_user(), event_id, status, notes)
    }

    pub fn user_rsvp(&self, event_id: &str) -> Option<&Rsvp> {
        self.events.user_rsvp(self.current_user(), event_id)
    }

    pub fn event_rsvps(&self, event_id: &str) -> Vec<&Rsvp> {
        self.events.event_rsvps(event_id)
    }

    pub fn rsvp_summary(&self, event_id: &str) -> RsvpSummary {
        self.events.rsvp_summary(event_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EventHubError;
    use crate::storage::MemoryStorage;
    use chrono::{NaiveDate, NaiveTime};

    fn hub(storage: &MemoryStorage) -> EventHub<MemoryStorage> {
        EventHub::with_storage(storage.clone(), true).unwrap()
    }

    fn meetup() -> NewEvent {
        NewEvent {
            title: "Meetup".into(),
            description: "Monthly".into(),
            date: NaiveDate::from_ymd_opt(2031, 4, 2).unwrap(),
            time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            location: "Cafe".into(),
            max_attendees: None,
            image_url: None,
            category: "Community".into(),
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_signed_out_mutations_are_noops() {
        let mut hub = hub(&MemoryStorage::new());

        assert!(hub.create_event(meetup()).unwrap().is_none());
        assert!(hub.submit_rsvp("1", RsvpStatus::Yes, None).unwrap().is_none());
        assert!(hub.dashboard(now()).is_none());
        assert_eq!(hub.events().len(), 3);
    }

    #[test]
    fn test_invalid_login_leaves_hub_signed_out() {
        let mut hub = hub(&MemoryStorage::new());
        assert!(matches!(
            hub.login("ghost@example.com", "pw"),
            Err(EventHubError::InvalidCredentials)
        ));
        assert!(hub.current_user().is_none());
    }

    #[test]
    fn test_organizer_flow_survives_reload() {
        let storage = MemoryStorage::new();
        let mut first = hub(&storage);

        first.login("emily@example.com", "pw").unwrap();
        let id = first
            .create_event(meetup())
            .unwrap()
            .map(|e| e.id.clone())
            .unwrap();
        assert_eq!(first.event(&id).map(|e| e.organizer.id.as_str()), Some("3"));

        first.logout().unwrap();
        first.register("Zed", "zed@example.com", "pw", Role::Attendee).unwrap();
        first
            .submit_rsvp(&id, RsvpStatus::Yes, Some("front row".into()))
            .unwrap();

        let mut second = hub(&storage);
        assert_eq!(second.current_user().map(|u| u.email.as_str()), Some("zed@example.com"));
        assert_eq!(second.user_rsvp(&id).map(|r| r.status), Some(RsvpStatus::Yes));
        assert_eq!(second.rsvp_summary(&id).attending, 1);

        second.logout().unwrap();
        second.login("emily@example.com", "pw").unwrap();
        let dashboard = second.dashboard(now()).unwrap();
        assert_eq!(dashboard.upcoming.len(), 1);
        assert_eq!(dashboard.total_attendees, 1);
    }

    #[test]
    fn test_attendee_has_no_dashboard() {
        let mut hub = hub(&MemoryStorage::new());
        hub.login("mike@example.com", "pw").unwrap();
        assert!(hub.dashboard(now()).is_none());
    }
}
