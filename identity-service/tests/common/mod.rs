use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use identity_service::user::errors::PersistenceError;
use identity_service::user::models::User;
use identity_service::user::models::UserId;
use identity_service::user::ports::UserStore;

/// In-memory [`UserStore`] used by the integration tests.
///
/// Mirrors the store contract: ids are assigned on first insert, a save
/// with an id is a whole-record replace (and a no-op when the record has
/// vanished), and no uniqueness is enforced.
#[derive(Default)]
pub struct InMemoryUserStore {
    records: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: &UserId) -> Option<User> {
        self.records.lock().unwrap().get(&id.0).cloned()
    }

    async fn find_by_username(&self, username: &str) -> Option<User> {
        self.records
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        self.records
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned()
    }

    async fn find_all(&self) -> Vec<User> {
        let mut users: Vec<User> = self.records.lock().unwrap().values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        users
    }

    async fn save(&self, mut user: User) -> Result<User, PersistenceError> {
        let mut records = self.records.lock().unwrap();

        match user.id {
            Some(id) => {
                if let Some(slot) = records.get_mut(&id.0) {
                    *slot = user.clone();
                }
            }
            None => {
                let id = UserId::new();
                user.id = Some(id);
                records.insert(id.0, user.clone());
            }
        }

        Ok(user)
    }

    async fn delete_by_id(&self, id: &UserId) -> bool {
        self.records.lock().unwrap().remove(&id.0).is_some()
    }

    async fn exists_by_username(&self, username: &str) -> bool {
        self.records
            .lock()
            .unwrap()
            .values()
            .any(|u| u.username == username)
    }

    async fn exists_by_email(&self, email: &str) -> bool {
        self.records
            .lock()
            .unwrap()
            .values()
            .any(|u| u.email == email)
    }
}
