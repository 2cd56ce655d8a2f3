//! Cached access token.
//!
//! The token survives a page reload (browser local storage on wasm, nothing
//! elsewhere) and is cleared on sign-out. Route decisions never read it
//! directly; the gate always re-queries the identity service, which merely
//! presents the cached token as a bearer credential.

#[cfg(target_arch = "wasm32")]
const TOKEN_KEY: &str = "portal.access_token";

#[cfg(target_arch = "wasm32")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub fn load() -> Option<String> {
    storage()?.get_item(TOKEN_KEY).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub fn store(token: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn store(_token: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear() {}
