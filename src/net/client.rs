//! Configured HTTP client with auth interceptors.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<T, ApiError>`; there is exactly one error
//! contract for the whole network layer. A 401 response clears the stored
//! token and navigates to the login route before the error is returned, so
//! the navigation never suppresses propagation.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::session::SessionHooks;

/// Unified network-layer error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network unreachable, DNS, …).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server rejected the credentials; the session has been cleared.
    #[error("unauthorized")]
    Unauthorized,
    /// Non-2xx status with no service-specific context attached.
    #[error("server returned status {status}")]
    Status { status: u16 },
    /// Non-2xx status, described by the service that issued the request.
    #[error("failed to fetch {what}: status {status}")]
    Failed { what: &'static str, status: u16 },
    /// A 2xx response body that did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Network calls are browser-only; SSR paths land here.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Attach a service-level description to a bare status error.
    /// Other variants pass through unchanged.
    pub fn describe(self, what: &'static str) -> Self {
        match self {
            Self::Status { status } => Self::Failed { what, status },
            other => other,
        }
    }
}

/// Request-issuing object carrying the base URL and session hooks.
///
/// Constructed once at startup and provided via context; all data-access
/// services go through it, so every request is uniformly subject to the
/// bearer-token and 401 interceptors.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: Arc<dyn SessionHooks>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Arc<dyn SessionHooks>) -> Self {
        Self {
            base_url: base_url.into(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Outgoing interceptor: `Authorization` header value when a token is
    /// stored, `None` otherwise.
    fn bearer_header(&self) -> Option<String> {
        self.session.token().map(|token| format!("Bearer {token}"))
    }

    /// Incoming interceptor: 401 clears the session and redirects to login,
    /// then still fails the call; other non-2xx statuses become errors.
    fn check_status(&self, status: u16) -> Result<(), ApiError> {
        if status == 401 {
            self.session.clear_token();
            self.session.goto_login();
            return Err(ApiError::Unauthorized);
        }
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(ApiError::Status { status })
        }
    }

    /// GET `path` with URL-encoded `query` pairs and parse the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// unparseable body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = super::endpoints::request_url(&self.base_url, path, query);
            let mut request = gloo_net::http::Request::get(&url);
            if let Some(auth) = self.bearer_header() {
                request = request.header("Authorization", &auth);
            }
            let resp = request
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            self.check_status(resp.status())?;
            resp.json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, query);
            Err(ApiError::Unavailable)
        }
    }

    /// POST `body` as JSON to `path` and parse the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// unparseable body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = super::endpoints::api_url(&self.base_url, path);
            let mut request = gloo_net::http::Request::post(&url);
            if let Some(auth) = self.bearer_header() {
                request = request.header("Authorization", &auth);
            }
            let resp = request
                .json(body)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            self.check_status(resp.status())?;
            resp.json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// DELETE `path` with identifying `params` and parse the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// unparseable body.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = super::endpoints::request_url(&self.base_url, path, params);
            let mut request = gloo_net::http::Request::delete(&url);
            if let Some(auth) = self.bearer_header() {
                request = request.header("Authorization", &auth);
            }
            let resp = request
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            self.check_status(resp.status())?;
            resp.json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, params);
            Err(ApiError::Unavailable)
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
