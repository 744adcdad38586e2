//! Durable session cache.
//!
//! Mirrors the last confirmed identity into localStorage so a page
//! reload can render optimistically while the session is re-validated
//! against the backend. The in-memory state in [`crate::auth`] stays
//! authoritative; this cache is only a bootstrap hint.

use common::SessionUser;

const SESSION_KEY: &str = "accounted_user";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Read the cached identity, if any. Storage errors and stale or
/// unparseable entries all degrade to `None`.
pub fn load() -> Option<SessionUser> {
    let raw = storage()?.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("Discarding unreadable cached session: {}", e);
            None
        }
    }
}

/// Persist a confirmed identity.
pub fn store(user: &SessionUser) {
    let Ok(raw) = serde_json::to_string(user) else {
        return;
    };
    if let Some(storage) = storage() {
        if storage.set_item(SESSION_KEY, &raw).is_err() {
            log::warn!("Failed to persist session to localStorage");
        }
    }
}

/// Drop the cached identity.
pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
