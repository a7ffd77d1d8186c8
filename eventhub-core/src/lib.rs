//! Data layer for eventhub.
//!
//! Two stores make up the app state:
//! - `IdentityStore` knows the users and who is signed in
//! - `EventStore` owns the events and the RSVPs to them
//!
//! `EventHub` holds one of each over a shared `KeyValueStore`, which both
//! mirror their state into so it survives a restart.

pub mod config;
pub mod error;
pub mod event;
pub mod events;
pub mod hub;
pub mod identity;
pub mod rsvp;
pub mod seed;
pub mod storage;
pub mod user;

pub use config::EventHubConfig;
pub use error::{EventHubError, EventHubResult};
pub use event::{Event, EventPatch, NewEvent};
pub use events::{Dashboard, EventStore};
pub use hub::EventHub;
pub use identity::IdentityStore;
pub use rsvp::{Rsvp, RsvpStatus, RsvpSummary};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage};
pub use user::{Role, User};
