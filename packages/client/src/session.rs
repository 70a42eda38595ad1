//! Explicit session context.
//!
//! One record, read from the local store exactly once at construction,
//! updated on every successful authentication and cleared on logout. The
//! presence of a session implies the holder completed one successful
//! authentication transaction; there is no ambient global.

use std::sync::{Arc, Mutex};

use sewa_domain::UserProfile;

use crate::error::Error;
use crate::state::{keys, StateStore, StateStoreExt};

pub struct SessionContext {
    store: Arc<dyn StateStore>,
    current: Mutex<Option<UserProfile>>,
}

impl SessionContext {
    /// Read-once initialization from the persisted record. A corrupt
    /// record counts as "not signed in" rather than an error.
    pub fn load(store: Arc<dyn StateStore>) -> Self {
        let current = store.get_as::<UserProfile>(keys::SESSION).unwrap_or(None);
        Self {
            store,
            current: Mutex::new(current),
        }
    }

    pub fn current(&self) -> Option<UserProfile> {
        self.current.lock().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.lock().unwrap().is_some()
    }

    /// Record a successful authentication. Secret fields are stripped
    /// before anything is persisted.
    pub fn set(&self, user: &UserProfile) -> Result<(), Error> {
        let safe = user.sanitized();
        self.store.put_as(keys::SESSION, &safe)?;
        *self.current.lock().unwrap() = Some(safe);
        Ok(())
    }

    /// Logout: clears both the in-memory record and the persisted one.
    pub fn clear(&self) -> Result<(), Error> {
        self.store.remove(keys::SESSION)?;
        *self.current.lock().unwrap() = None;
        Ok(())
    }
}
