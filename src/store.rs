use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use thiserror::Error;
use uuid::Uuid;

use crate::models::{User, UserDraft};

/// Store error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("user not found")]
    NotFound,

    #[error("store unavailable")]
    Unavailable,
}

/// Storage abstraction for user records
///
/// Handlers depend on this trait so tests can substitute a fake store.
pub trait UserStore: Send + Sync {
    /// Assign a fresh id to the draft and store the resulting record
    fn insert(&self, draft: UserDraft) -> Result<User, StoreError>;

    /// All current records, in no particular order
    fn list(&self) -> Result<Vec<User>, StoreError>;

    fn get(&self, id: Uuid) -> Result<User, StoreError>;

    /// Overwrite every field of an existing record, preserving its id
    fn replace(&self, id: Uuid, draft: UserDraft) -> Result<User, StoreError>;

    /// Remove a record, returning its prior value
    fn delete(&self, id: Uuid) -> Result<User, StoreError>;
}

/// In-memory store: one map behind one exclusive lock
///
/// All five operations take the same lock, so concurrent handlers cannot
/// race on the map. Nothing survives a process restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<HashMap<Uuid, User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Uuid, User>>, StoreError> {
        // A poisoned lock means a handler panicked mid-operation; the store
        // is treated as unavailable from then on.
        self.users.lock().map_err(|_| StoreError::Unavailable)
    }
}

impl UserStore for MemoryStore {
    fn insert(&self, draft: UserDraft) -> Result<User, StoreError> {
        let mut users = self.lock()?;
        let user = User::from_draft(Uuid::new_v4(), draft);
        users.insert(user.id, user.clone());
        Ok(user)
    }

    fn list(&self) -> Result<Vec<User>, StoreError> {
        let users = self.lock()?;
        Ok(users.values().cloned().collect())
    }

    fn get(&self, id: Uuid) -> Result<User, StoreError> {
        let users = self.lock()?;
        users.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    fn replace(&self, id: Uuid, draft: UserDraft) -> Result<User, StoreError> {
        let mut users = self.lock()?;
        let existing = users.get_mut(&id).ok_or(StoreError::NotFound)?;
        *existing = User::from_draft(id, draft);
        Ok(existing.clone())
    }

    fn delete(&self, id: Uuid) -> Result<User, StoreError> {
        let mut users = self.lock()?;
        users.remove(&id).ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(first_name: &str, last_name: &str, biography: &str) -> UserDraft {
        UserDraft {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            biography: biography.to_string(),
        }
    }

    fn sample_draft() -> UserDraft {
        draft(
            "Ada",
            "Lovelace",
            "Wrote the first published computer program.",
        )
    }

    #[test]
    fn insert_assigns_a_fresh_id_and_stores_the_record() {
        let store = MemoryStore::new();

        let user = store.insert(sample_draft()).unwrap();
        let fetched = store.get(user.id).unwrap();

        assert_eq!(fetched, user);
        assert_eq!(fetched.first_name, "Ada");
    }

    #[test]
    fn insert_generates_distinct_ids() {
        let store = MemoryStore::new();

        let first = store.insert(sample_draft()).unwrap();
        let second = store.insert(sample_draft()).unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = MemoryStore::new();

        assert_eq!(store.get(Uuid::new_v4()), Err(StoreError::NotFound));
    }

    #[test]
    fn list_reflects_every_stored_record() {
        let store = MemoryStore::new();
        assert!(store.list().unwrap().is_empty());

        let first = store.insert(sample_draft()).unwrap();
        let second = store
            .insert(draft("Grace", "Hopper", "Invented the first compiler."))
            .unwrap();

        let users = store.list().unwrap();
        assert_eq!(users.len(), 2);
        assert!(users.contains(&first));
        assert!(users.contains(&second));
    }

    #[test]
    fn replace_overwrites_fields_and_preserves_the_id() {
        let store = MemoryStore::new();
        let user = store.insert(sample_draft()).unwrap();

        let updated = store
            .replace(user.id, draft("Augusta", "King", "Countess of Lovelace."))
            .unwrap();

        assert_eq!(updated.id, user.id);
        assert_eq!(updated.first_name, "Augusta");
        assert_eq!(store.get(user.id).unwrap(), updated);
    }

    #[test]
    fn replace_unknown_id_is_not_found() {
        let store = MemoryStore::new();

        let result = store.replace(Uuid::new_v4(), sample_draft());

        assert_eq!(result, Err(StoreError::NotFound));
    }

    #[test]
    fn delete_returns_the_prior_value_and_removes_it() {
        let store = MemoryStore::new();
        let user = store.insert(sample_draft()).unwrap();

        let deleted = store.delete(user.id).unwrap();

        assert_eq!(deleted, user);
        assert_eq!(store.get(user.id), Err(StoreError::NotFound));
        assert_eq!(store.delete(user.id), Err(StoreError::NotFound));
    }
}
