//! Browser localStorage persistence for the current session record.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single well-known slot, re-read on every load so the transport always
//! sees the freshest credential. Malformed stored data is treated the same
//! as no session; nothing here ever panics the caller.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::net::types::Session;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "user";

/// Serialize a session for storage.
#[cfg(any(test, feature = "hydrate"))]
fn encode(session: &Session) -> Option<String> {
    serde_json::to_string(session).ok()
}

/// Deserialize a stored record. Malformed data yields `None`.
#[cfg(any(test, feature = "hydrate"))]
fn decode(raw: &str) -> Option<Session> {
    serde_json::from_str(raw).ok()
}

/// Persist `session`, overwriting any prior record.
pub fn save(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Some(raw) = encode(session) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, &raw);
        log::debug!("session persisted for {}", session.username);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Read the persisted session, if any.
///
/// Returns `None` when storage is unavailable, empty, or holds a record
/// that no longer deserializes.
pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        decode(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove the persisted session. Clearing an empty store is a no-op.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
