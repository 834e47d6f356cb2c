//! Persistent Store Adapter
//!
//! Mirrors the state into a `KeyValueStore`, one JSON value per slot, and
//! hydrates it again on startup.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{seed_users, StorageKeys};
use crate::domain::{Task, User};
use crate::state::{IdCounters, StateChange, StateObserver, TodoState};
use super::traits::{KeyValueStore, StoreResult};

pub struct PersistentStore<K> {
    backend: K,
    keys: StorageKeys,
}

impl<K: KeyValueStore> PersistentStore<K> {
    pub fn new(backend: K) -> Self {
        Self::with_keys(backend, StorageKeys::default())
    }

    pub fn with_keys(backend: K, keys: StorageKeys) -> Self {
        Self { backend, keys }
    }

    /// Hydrate state from storage.
    ///
    /// Each slot is read once. A missing or unreadable slot falls back on its
    /// own: seed users, no tasks, nobody logged in. Tasks whose ids leave no
    /// room for another id count as unreadable, and so does a current user
    /// missing from the user list.
    pub fn load(&self) -> TodoState {
        let users: Vec<User> = self.read_slot(&self.keys.users).unwrap_or_else(seed_users);
        let current_user: Option<User> = self
            .read_slot::<User>(&self.keys.current_user)
            .filter(|user| {
                let known = users.iter().any(|u| u.id == user.id);
                if !known {
                    log::warn!("ignoring stored current user {}: not in the user list", user.id);
                }
                known
            });
        let tasks: Vec<Task> = self
            .read_slot::<Vec<Task>>(&self.keys.tasks)
            .filter(|tasks| {
                let fits = IdCounters::past(tasks).is_some();
                if !fits {
                    log::warn!("ignoring slot '{}': ids exceed the id range", self.keys.tasks);
                }
                fits
            })
            .unwrap_or_default();
        let counters: IdCounters = self.read_slot(&self.keys.id_counters).unwrap_or_default();

        let state = TodoState::from_parts(current_user, users, tasks, counters);
        log::info!(
            "hydrated {} users, {} tasks, logged in: {}",
            state.users().len(),
            state.tasks().len(),
            state.current_user().is_some()
        );
        state
    }

    /// Write every slot
    pub fn save(&self, state: &TodoState) -> StoreResult<()> {
        for change in [StateChange::CurrentUser, StateChange::Users, StateChange::Tasks] {
            self.write(change, state)?;
        }
        Ok(())
    }

    /// Overwrite the slots backing `change`
    pub fn write(&self, change: StateChange, state: &TodoState) -> StoreResult<()> {
        match change {
            StateChange::CurrentUser => match state.current_user() {
                Some(user) => self.write_slot(&self.keys.current_user, user),
                None => self.backend.remove(&self.keys.current_user),
            },
            StateChange::Users => self.write_slot(&self.keys.users, state.users()),
            StateChange::Tasks => {
                self.write_slot(&self.keys.tasks, state.tasks())?;
                self.write_slot(&self.keys.id_counters, &state.counters())
            }
        }
    }

    /// Raw read of one slot; `Ok(None)` when absent
    pub fn try_read_slot<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn read_slot<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_read_slot(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("ignoring unreadable slot '{}': {}", key, e);
                None
            }
        }
    }

    fn write_slot<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let json = serde_json::to_string(value)?;
        self.backend.set(key, &json)
    }
}

impl<K: KeyValueStore> StateObserver for PersistentStore<K> {
    fn state_changed(&mut self, change: StateChange, state: &TodoState) {
        if let Err(e) = self.write(change, state) {
            log::error!("failed to persist {:?}: {}", change, e);
        }
    }
}
