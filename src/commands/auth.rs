use anyhow::{Context, Result};
use eventhub_core::{EventHub, EventHubError, KeyValueStore, Role};
use owo_colors::OwoColorize;

use crate::render::Render;

fn password_or_prompt(password: Option<String>) -> Result<String> {
    match password {
        Some(p) => Ok(p),
        None => rpassword::prompt_password("  Password: ").context("Failed to read password"),
    }
}

pub fn login<S: KeyValueStore + Clone>(
    hub: &mut EventHub<S>,
    email: &str,
    password: Option<String>,
) -> Result<()> {
    let password = password_or_prompt(password)?;

    match hub.login(email, &password) {
        Ok(user) => {
            println!("{}", format!("  Signed in as {}", user.name).green());
            Ok(())
        }
        Err(EventHubError::InvalidCredentials) => {
            anyhow::bail!("Invalid email or password")
        }
        Err(e) => Err(e.into()),
    }
}

pub fn register<S: KeyValueStore + Clone>(
    hub: &mut EventHub<S>,
    name: &str,
    email: &str,
    role: Role,
    password: Option<String>,
) -> Result<()> {
    let password = password_or_prompt(password)?;
    let user = hub.register(name, email, &password, role)?;

    println!("{}", format!("  Welcome, {}!", user.name).green());
    println!("  {}", format!("Signed in as {}", user.role).dimmed());
    Ok(())
}

pub fn logout<S: KeyValueStore + Clone>(hub: &mut EventHub<S>) -> Result<()> {
    let was_signed_in = hub.current_user().is_some();
    hub.logout()?;

    if was_signed_in {
        println!("  Signed out");
    } else {
        println!("{}", "  Not signed in".dimmed());
    }
    Ok(())
}

pub fn whoami<S: KeyValueStore + Clone>(hub: &EventHub<S>) -> Result<()> {
    match hub.current_user() {
        Some(user) => println!("  {}", user.render()),
        None => println!("{}", "  Not signed in".dimmed()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventhub_core::MemoryStorage;

    #[test]
    fn test_login_failure_is_generic() {
        let mut hub = EventHub::with_storage(MemoryStorage::new(), true).unwrap();
        let err = login(&mut hub, "nobody@example.com", Some("pw".into())).unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_register_signs_in() {
        let mut hub = EventHub::with_storage(MemoryStorage::new(), true).unwrap();
        register(&mut hub, "Ann", "ann@example.com", Role::Organizer, Some("pw".into())).unwrap();
        assert!(hub.current_user().is_some_and(|u| u.is_organizer()));
    }
}
