//! RSVP records: one user's answer to one event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::user::User;

/// At most one of these exists per (event_id, user_id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub user: User,
    pub status: RsvpStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Rsvp {
    pub fn new(event_id: &str, user: &User, status: RsvpStatus, notes: Option<String>) -> Self {
        Rsvp {
            id: uuid::Uuid::new_v4().to_string(),
            event_id: event_id.to_string(),
            user_id: user.id.clone(),
            user: user.clone(),
            status,
            notes,
            created_at: Utc::now(),
        }
    }

    /// Replace the answer in place. `created_at` tracks the latest submission.
    pub fn resubmit(&mut self, status: RsvpStatus, notes: Option<String>) {
        self.status = status;
        self.notes = notes;
        self.created_at = Utc::now();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    Yes,
    No,
    Maybe,
}

impl RsvpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpStatus::Yes => "yes",
            RsvpStatus::No => "no",
            RsvpStatus::Maybe => "maybe",
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RsvpStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" => Ok(RsvpStatus::Yes),
            "no" => Ok(RsvpStatus::No),
            "maybe" => Ok(RsvpStatus::Maybe),
            other => Err(format!("Unknown RSVP status '{}' (expected yes, no or maybe)", other)),
        }
    }
}

/// Per-status counts for one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RsvpSummary {
    pub attending: usize,
    pub maybe: usize,
    pub declined: usize,
}

impl RsvpSummary {
    pub fn tally<'a>(rsvps: impl IntoIterator<Item = &'a Rsvp>) -> Self {
        rsvps
            .into_iter()
            .fold(RsvpSummary::default(), |mut summary, rsvp| {
                match rsvp.status {
                    RsvpStatus::Yes => summary.attending += 1,
                    RsvpStatus::Maybe => summary.maybe += 1,
                    RsvpStatus::No => summary.declined += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.attending + self.maybe + self.declined
    }
}
