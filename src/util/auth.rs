//! Auth-token persistence.
//!
//! The token is an opaque string in `localStorage`; the login page writes
//! it, the client's outgoing interceptor reads it, and the 401 interceptor
//! deletes it. No expiry tracking happens client-side. Requires a browser
//! environment; SSR paths safely no-op.

/// `localStorage` key the token lives under.
pub const TOKEN_KEY: &str = "token";

/// Read the persisted auth token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the auth token.
pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Delete the persisted auth token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}
