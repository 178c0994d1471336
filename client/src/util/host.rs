//! Host environment capabilities used by the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The toggle needs four things from its environment: the system color-scheme
//! preference, the `<html>` class list, and a read/write key-value store.
//! [`BrowserHost`] provides them through `web-sys` when hydrating and reports
//! "no browser" everywhere else (SSR, native tests). [`MemoryHost`] is an
//! in-memory stand-in for tests and non-browser embedders.
//!
//! TRADE-OFFS
//! ==========
//! Reads and class mutation are treated as infallible; only the storage write
//! reports an error, and callers are expected to log and drop it.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

/// Failure to persist a value. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistError {
    /// No storage exists in this execution context (SSR, storage disabled).
    #[error("persistent storage unavailable")]
    Unavailable,
    /// Storage exists but refused the write (quota exceeded, private mode).
    #[error("persistent storage rejected write: {0}")]
    Rejected(String),
}

/// Environment queried and mutated by the theme toggle.
///
/// All methods take `&self`: the toggle runs on the single UI thread and
/// browser handles are shared references anyway.
pub trait ThemeHost {
    /// Whether the environment reports a dark color-scheme preference.
    fn prefers_dark(&self) -> bool;

    /// Add (`true`) or remove (`false`) the dark marker on the document root.
    fn set_dark_marker(&self, present: bool);

    /// Read a stored string value.
    fn read_storage(&self, key: &str) -> Option<String>;

    /// Write a string value.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] when storage is missing or rejects the write.
    fn write_storage(&self, key: &str, value: &str) -> Result<(), PersistError>;
}

impl<H: ThemeHost + ?Sized> ThemeHost for &H {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }

    fn set_dark_marker(&self, present: bool) {
        (**self).set_dark_marker(present);
    }

    fn read_storage(&self, key: &str) -> Option<String> {
        (**self).read_storage(key)
    }

    fn write_storage(&self, key: &str, value: &str) -> Result<(), PersistError> {
        (**self).write_storage(key, value)
    }
}

// =============================================================
// Browser
// =============================================================

/// `window`/`document`/`localStorage` host. Outside the `hydrate` build every
/// query answers as if no browser were present.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

#[cfg(feature = "hydrate")]
impl ThemeHost for BrowserHost {
    fn prefers_dark(&self) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        window
            .match_media(super::theme::DARK_SCHEME_QUERY)
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }

    fn set_dark_marker(&self, present: bool) {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let class_list = el.class_list();
        if present {
            let _ = class_list.add_1(super::theme::DARK_CLASS);
        } else {
            let _ = class_list.remove_1(super::theme::DARK_CLASS);
        }
    }

    fn read_storage(&self, key: &str) -> Option<String> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }

    fn write_storage(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(PersistError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| PersistError::Rejected(format!("{e:?}")))
    }
}

#[cfg(not(feature = "hydrate"))]
impl ThemeHost for BrowserHost {
    fn prefers_dark(&self) -> bool {
        false
    }

    fn set_dark_marker(&self, present: bool) {
        let _ = present;
    }

    fn read_storage(&self, key: &str) -> Option<String> {
        let _ = key;
        None
    }

    fn write_storage(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let _ = (key, value);
        Err(PersistError::Unavailable)
    }
}

// =============================================================
// In-memory
// =============================================================

/// In-memory host with a configurable preference and injectable write
/// failures.
#[derive(Debug, Default)]
pub struct MemoryHost {
    prefers_dark: Cell<bool>,
    dark_marker: Cell<bool>,
    storage: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryHost {
    /// Light-preferring host with empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_dark_preference(self, prefers_dark: bool) -> Self {
        self.prefers_dark.set(prefers_dark);
        self
    }

    #[must_use]
    pub fn with_stored(self, key: &str, value: &str) -> Self {
        self.storage.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    /// Make every subsequent write fail with [`PersistError::Rejected`].
    #[must_use]
    pub fn with_failing_writes(self) -> Self {
        self.fail_writes.set(true);
        self
    }

    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.prefers_dark.set(prefers_dark);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    #[must_use]
    pub fn stored(&self, key: &str) -> Option<String> {
        self.storage.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn has_dark_marker(&self) -> bool {
        self.dark_marker.get()
    }

    /// Number of write attempts, failed ones included.
    #[must_use]
    pub fn write_attempts(&self) -> usize {
        self.writes.get()
    }
}

impl ThemeHost for MemoryHost {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }

    fn set_dark_marker(&self, present: bool) {
        self.dark_marker.set(present);
    }

    fn read_storage(&self, key: &str) -> Option<String> {
        self.stored(key)
    }

    fn write_storage(&self, key: &str, value: &str) -> Result<(), PersistError> {
        self.writes.set(self.writes.get() + 1);
        if self.fail_writes.get() {
            return Err(PersistError::Rejected("quota exceeded".to_owned()));
        }
        self.storage.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
