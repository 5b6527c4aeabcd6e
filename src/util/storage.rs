//! Token and draft-transfer persistence in `localStorage`.
//!
//! The bearer token is the only durable client state. A draft transfer is
//! written when an anonymous visitor starts a transfer from the calculator,
//! so the send flow can resume after login. All functions are no-ops (or
//! `None`) outside the browser.

use crate::state::quote::DraftTransfer;

#[cfg(target_arch = "wasm32")]
const TOKEN_KEY: &str = "remity_access_token";
#[cfg(target_arch = "wasm32")]
const DRAFT_KEY: &str = "remity_draft_transfer";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted bearer token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()?.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Persist the bearer token.
pub fn write_token(token: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = token;
    }
}

/// Remove the persisted bearer token.
pub fn clear_token() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Read a draft transfer saved before login, if any.
pub fn read_draft() -> Option<DraftTransfer> {
    #[cfg(target_arch = "wasm32")]
    {
        let raw = local_storage()?.get_item(DRAFT_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Persist a draft transfer for after login.
pub fn write_draft(draft: &DraftTransfer) {
    #[cfg(target_arch = "wasm32")]
    {
        if let (Some(storage), Ok(raw)) = (local_storage(), serde_json::to_string(draft)) {
            let _ = storage.set_item(DRAFT_KEY, &raw);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = draft;
    }
}

/// Remove any persisted draft transfer.
pub fn clear_draft() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(DRAFT_KEY);
        }
    }
}
