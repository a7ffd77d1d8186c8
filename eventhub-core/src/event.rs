//! Event records.
//!
//! An event is owned by the event store. Its organizer is an embedded copy of
//! the user who created it, so later changes to that user don't touch it.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::user::User;

/// Categories offered when creating an event. Stored events may carry any string.
pub const CATEGORIES: &[&str] = &[
    "Technology",
    "Marketing",
    "Networking",
    "Business",
    "Education",
    "Entertainment",
    "Sports",
    "Health & Wellness",
    "Arts & Culture",
    "Community",
];

pub const DEFAULT_CATEGORY: &str = "Technology";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub location: String,
    pub organizer: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Build a stored event from caller-supplied fields.
    pub fn new(data: NewEvent, organizer: User) -> Self {
        Event {
            id: uuid::Uuid::new_v4().to_string(),
            title: data.title,
            description: data.description,
            date: data.date,
            time: data.time,
            location: data.location,
            organizer,
            max_attendees: data.max_attendees,
            image_url: data.image_url,
            category: data.category,
            created_at: Utc::now(),
        }
    }

    /// Local wall-clock start of the event.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// True when the event starts strictly after `now`.
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.starts_at() > now
    }

    /// True once the start has passed. An event starting exactly at `now`
    /// is still open for RSVPs.
    pub fn has_ended(&self, now: NaiveDateTime) -> bool {
        self.starts_at() < now
    }

    /// Overwrite every field the patch carries.
    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(max_attendees) = patch.max_attendees {
            self.max_attendees = max_attendees;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Fields an organizer supplies when creating an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub category: String,
}

/// A partial update. `None` leaves a field alone; for the optional fields,
/// `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub location: Option<String>,
    pub max_attendees: Option<Option<u32>>,
    pub image_url: Option<Option<String>>,
    pub category: Option<String>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        *self == EventPatch::default()
    }
}

/// `HH:MM` on the wire; `HH:MM:SS` is accepted on read.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}
