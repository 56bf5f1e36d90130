//! `localStorage`-backed session storage.
//!
//! Requires a browser environment. Without the `hydrate` feature every read
//! is empty and every write reports `Unavailable`, which keeps server
//! rendering deterministic.

use super::{SessionError, SessionStore};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserSessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &'static str, value: &str) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(SessionError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|_| SessionError::WriteRejected { key })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(SessionError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
