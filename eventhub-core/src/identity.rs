//! The identity store: who is signed in, and who could be.

use tracing::info;

use crate::error::{EventHubError, EventHubResult};
use crate::seed;
use crate::storage::{self, KeyValueStore, USER_KEY, USERS_KEY};
use crate::user::{Role, User};

pub struct IdentityStore<S: KeyValueStore> {
    storage: S,
    persist_catalog: bool,
    /// Seed users followed by anyone registered since.
    users: Vec<User>,
    current: Option<User>,
}

impl<S: KeyValueStore> IdentityStore<S> {
    /// Restore the signed-in user (and, with `persist_catalog`, registered
    /// users) from `storage`.
    pub fn load(storage: S, persist_catalog: bool) -> EventHubResult<Self> {
        let mut users = seed::users();

        if persist_catalog {
            let registered: Vec<User> = storage::load_entry(&storage, USERS_KEY)?.unwrap_or_default();
            users.extend(registered);
        }

        let current: Option<User> = storage::load_entry(&storage, USER_KEY)?;

        Ok(IdentityStore {
            storage,
            persist_catalog,
            users,
            current,
        })
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Sign in as the known user with this email. The password is not checked.
    pub fn login(&mut self, email: &str, _password: &str) -> EventHubResult<&User> {
        let user = self
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(EventHubError::InvalidCredentials)?;

        storage::save_entry(&self.storage, USER_KEY, &user)?;
        info!(user_id = %user.id, "Signed in");

        Ok(self.current.insert(user))
    }

    /// Create a new user and sign in as them. Never fails for domain reasons.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        _password: &str,
        role: Role,
    ) -> EventHubResult<&User> {
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            avatar: Some(seed::DEFAULT_AVATAR.to_string()),
        };

        // The new user only joins the known list once it's been written.
        self.users.push(user.clone());
        if let Err(e) = self.persist_registration(&user) {
            self.users.pop();
            return Err(e);
        }
        info!(user_id = %user.id, role = %role, "Registered");

        Ok(self.current.insert(user))
    }

    fn persist_registration(&self, user: &User) -> EventHubResult<()> {
        if self.persist_catalog {
            self.save_registered()?;
        }
        storage::save_entry(&self.storage, USER_KEY, user)
    }

    pub fn logout(&mut self) -> EventHubResult<()> {
        if let Some(user) = self.current.take() {
            info!(user_id = %user.id, "Signed out");
        }
        self.storage.remove(USER_KEY)
    }

    fn save_registered(&self) -> EventHubResult<()> {
        let seeded = seed::users().len();
        storage::save_entry(&self.storage, USERS_KEY, &self.users[seeded..])
    }
}
