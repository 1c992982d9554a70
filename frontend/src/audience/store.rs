use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use web_sys::window;

use super::selection::Audience;
use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read '{0}' from storage")]
    Read(String),
    #[error("failed to write '{0}' to storage")]
    Write(String),
}

/// Synchronous string key/value slot the preference is persisted in.
pub trait PreferenceBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The browser's `window.localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Read(key.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

/// Durable home of the selected audience.
///
/// Reads never fail: a missing, unreadable or unknown value is `None`.
/// Writes are best effort, a failure is logged and otherwise ignored so the
/// in-memory broadcast still goes out.
#[derive(Clone)]
pub struct PreferenceStore {
    backend: Rc<dyn PreferenceBackend>,
}

impl PreferenceStore {
    pub fn new(backend: Rc<dyn PreferenceBackend>) -> Self {
        Self { backend }
    }

    pub fn read(&self) -> Option<Audience> {
        match self.backend.get(config::AUDIENCE_STORAGE_KEY) {
            Ok(Some(raw)) => match raw.parse::<Audience>() {
                Ok(audience) => Some(audience),
                Err(e) => {
                    warn!("Ignoring stored audience: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Could not read audience preference: {}", e);
                None
            }
        }
    }

    pub fn write(&self, audience: Audience) {
        match self.backend.set(config::AUDIENCE_STORAGE_KEY, audience.as_str()) {
            Ok(()) => debug!("Stored audience preference '{}'", audience),
            Err(e) => warn!("Audience preference not persisted: {}", e),
        }
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::{PreferenceBackend, StorageError};

    /// In-memory stand-in for `localStorage`. Survives "reloads" as long as
    /// the same instance is handed to the next service.
    #[derive(Default)]
    pub struct MemoryBackend {
        entries: RefCell<HashMap<String, String>>,
        reject_writes: Cell<bool>,
        pub writes: Cell<usize>,
    }

    impl MemoryBackend {
        pub fn with_entry(key: &str, value: &str) -> Self {
            let backend = Self::default();
            backend.entries.borrow_mut().insert(key.to_string(), value.to_string());
            backend
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        pub fn reject_writes(&self, reject: bool) {
            self.reject_writes.set(reject);
        }
    }

    impl PreferenceBackend for MemoryBackend {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.entries.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.reject_writes.get() {
                return Err(StorageError::Write(key.to_string()));
            }
            self.writes.set(self.writes.get() + 1);
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Behaves like a browser with storage disabled.
    pub struct UnavailableBackend;

    impl PreferenceBackend for UnavailableBackend {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{MemoryBackend, UnavailableBackend};
    use super::*;

    #[test]
    fn write_then_fresh_read_round_trips() {
        let backend = Rc::new(MemoryBackend::default());
        for audience in Audience::ALL {
            PreferenceStore::new(backend.clone()).write(audience);
            let reloaded = PreferenceStore::new(backend.clone());
            assert_eq!(reloaded.read(), Some(audience));
        }
    }

    #[test]
    fn write_overwrites_previous_value() {
        let backend = Rc::new(MemoryBackend::default());
        let store = PreferenceStore::new(backend.clone());
        store.write(Audience::Investor);
        store.write(Audience::Business);
        assert_eq!(backend.raw(config::AUDIENCE_STORAGE_KEY).as_deref(), Some("business"));
    }

    #[test]
    fn empty_storage_reads_none() {
        let store = PreferenceStore::new(Rc::new(MemoryBackend::default()));
        assert_eq!(store.read(), None);
    }

    #[test]
    fn corrupt_stored_value_reads_none() {
        for junk in ["admin", "", "WORKER", "{\"audience\":\"worker\"}"] {
            let backend = MemoryBackend::with_entry(config::AUDIENCE_STORAGE_KEY, junk);
            let store = PreferenceStore::new(Rc::new(backend));
            assert_eq!(store.read(), None, "stored value {:?}", junk);
        }
    }

    #[test]
    fn unavailable_storage_is_swallowed() {
        let store = PreferenceStore::new(Rc::new(UnavailableBackend));
        store.write(Audience::Business);
        assert_eq!(store.read(), None);
    }

    #[test]
    fn rejected_write_keeps_old_value() {
        let backend = Rc::new(MemoryBackend::with_entry(config::AUDIENCE_STORAGE_KEY, "investor"));
        backend.reject_writes(true);
        let store = PreferenceStore::new(backend.clone());
        store.write(Audience::Business);
        assert_eq!(store.read(), Some(Audience::Investor));
    }
}
