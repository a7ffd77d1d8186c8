//! Demo data the app starts with.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::event::Event;
use crate::user::{Role, User};

/// Avatar given to newly registered users.
pub const DEFAULT_AVATAR: &str = "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop";

fn user(id: &str, name: &str, email: &str, role: Role, avatar: Option<&str>) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        avatar: avatar.map(String::from),
    }
}

pub fn users() -> Vec<User> {
    vec![
        user(
            "1",
            "Sarah Johnson",
            "sarah@example.com",
            Role::Organizer,
            Some("https://images.pexels.com/photos/733872/pexels-photo-733872.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop"),
        ),
        user(
            "2",
            "Mike Chen",
            "mike@example.com",
            Role::Attendee,
            Some("https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop"),
        ),
        user(
            "3",
            "Emily Davis",
            "emily@example.com",
            Role::Organizer,
            Some("https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop"),
        ),
    ]
}

// Seed events embed organizers without avatars.
fn sarah() -> User {
    user("1", "Sarah Johnson", "sarah@example.com", Role::Organizer, None)
}

fn emily() -> User {
    user("3", "Emily Davis", "emily@example.com", Role::Organizer, None)
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    title: &str,
    description: &str,
    (y, m, d): (i32, u32, u32),
    (hour, minute): (u32, u32),
    location: &str,
    organizer: User,
    max_attendees: u32,
    image_url: &str,
    category: &str,
    created_at: &str,
) -> Option<Event> {
    Some(Event {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d)?,
        time: NaiveTime::from_hms_opt(hour, minute, 0)?,
        location: location.to_string(),
        organizer,
        max_attendees: Some(max_attendees),
        image_url: Some(image_url.to_string()),
        category: category.to_string(),
        created_at: DateTime::parse_from_rfc3339(created_at)
            .ok()?
            .with_timezone(&Utc),
    })
}

pub fn events() -> Vec<Event> {
    [
        event(
            "1",
            "Tech Conference 2025",
            "Join us for the biggest tech conference of the year featuring keynotes from industry leaders, workshops, and networking opportunities.",
            (2025, 3, 15),
            (9, 0),
            "San Francisco Convention Center",
            sarah(),
            500,
            "https://images.pexels.com/photos/1181396/pexels-photo-1181396.jpeg?auto=compress&cs=tinysrgb&w=800&h=400&fit=crop",
            "Technology",
            "2025-01-10T10:00:00Z",
        ),
        event(
            "2",
            "Digital Marketing Workshop",
            "Learn the latest digital marketing strategies and trends from experts in social media, SEO, and content marketing.",
            (2025, 2, 28),
            (14, 0),
            "Downtown Business Center",
            emily(),
            50,
            "https://images.pexels.com/photos/3183197/pexels-photo-3183197.jpeg?auto=compress&cs=tinysrgb&w=800&h=400&fit=crop",
            "Marketing",
            "2025-01-08T14:30:00Z",
        ),
        event(
            "3",
            "Startup Networking Meetup",
            "Connect with entrepreneurs, investors, and startup enthusiasts. Share ideas, find co-founders, and build your network.",
            (2025, 2, 20),
            (18, 0),
            "Innovation Hub Coworking Space",
            sarah(),
            100,
            "https://images.pexels.com/photos/1181673/pexels-photo-1181673.jpeg?auto=compress&cs=tinysrgb&w=800&h=400&fit=crop",
            "Networking",
            "2025-01-05T16:15:00Z",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_events_all_build() {
        let events = events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].title, "Tech Conference 2025");
        assert!(events.iter().all(|e| e.organizer.is_organizer()));
    }

    #[test]
    fn test_seed_users_have_unique_emails() {
        let users = users();
        let mut emails: Vec<_> = users.iter().map(|u| u.email.as_str()).collect();
        emails.sort();
        emails.dedup();
        assert_eq!(emails.len(), users.len());
    }
}
