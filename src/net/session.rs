//! Session collaborators injected into the HTTP client.
//!
//! DESIGN
//! ======
//! Token storage and login navigation are behind a trait so the client's
//! interceptor behavior is deterministic under test. `BrowserSession` is the
//! real implementation backed by `localStorage` and `window.location`.

/// Route the 401 interceptor navigates to.
pub const LOGIN_ROUTE: &str = "/login";

/// Storage and navigation hooks consulted by [`super::client::ApiClient`].
pub trait SessionHooks: Send + Sync {
    /// Read the persisted auth token, if any.
    fn token(&self) -> Option<String>;
    /// Delete the persisted auth token.
    fn clear_token(&self);
    /// Perform a full client-side navigation to the login route.
    fn goto_login(&self);
}

/// Browser-backed session: `localStorage` for the token, `location` for
/// navigation. Both no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl SessionHooks for BrowserSession {
    fn token(&self) -> Option<String> {
        crate::util::auth::read_token()
    }

    fn clear_token(&self) {
        crate::util::auth::clear_token();
    }

    fn goto_login(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(LOGIN_ROUTE);
            }
        }
    }
}
