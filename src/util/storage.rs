//! Key/value storage seam over browser `localStorage`/`sessionStorage`.
//!
//! DESIGN
//! ======
//! All persisted client state goes through the `StorageBackend` trait instead
//! of ambient `web_sys` calls scattered across components. Browser access is
//! hydrate-only with inert native stubs; native tests use `MemoryStorage`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Minimal key/value storage interface shared by every persisted store
/// (credentials, onboarding draft, flow-scoped keys, sudo window).
pub trait StorageBackend {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str);
}

/// Which browser storage area a [`BrowserStorage`] handle reads and writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
    /// `window.localStorage` — survives the tab.
    Local,
    /// `window.sessionStorage` — scoped to the tab lifetime.
    Session,
}

/// Browser-backed storage. Requires a browser environment; every operation
/// is a no-op (or `None`) when running natively.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    area: StorageArea,
}

impl BrowserStorage {
    /// Handle over `window.localStorage`.
    #[must_use]
    pub fn local() -> Self {
        Self { area: StorageArea::Local }
    }

    /// Handle over `window.sessionStorage`.
    #[must_use]
    pub fn session() -> Self {
        Self { area: StorageArea::Session }
    }

    #[cfg(feature = "hydrate")]
    fn raw(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.area {
            StorageArea::Local => window.local_storage().ok().flatten(),
            StorageArea::Session => window.session_storage().ok().flatten(),
        }
    }
}

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            self.raw()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = self.raw() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = self.raw() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory storage used by native tests. Clones share the same map so a
/// store under test and the assertions see one view of the data.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
