use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

/// In-memory session double recording interceptor side effects.
#[derive(Default)]
struct FakeSession {
    token: Mutex<Option<String>>,
    login_navigations: AtomicUsize,
}

impl FakeSession {
    fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_owned())),
            login_navigations: AtomicUsize::new(0),
        }
    }
}

impl SessionHooks for FakeSession {
    fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn clear_token(&self) {
        *self.token.lock().unwrap() = None;
    }

    fn goto_login(&self) {
        self.login_navigations.fetch_add(1, Ordering::SeqCst);
    }
}

fn client_with(session: Arc<FakeSession>) -> ApiClient {
    ApiClient::new("http://localhost:8000", session)
}

// =============================================================
// Outgoing interceptor
// =============================================================

#[test]
fn bearer_header_formats_stored_token() {
    let client = client_with(Arc::new(FakeSession::with_token("abc123")));
    assert_eq!(client.bearer_header(), Some("Bearer abc123".to_owned()));
}

#[test]
fn bearer_header_absent_without_token() {
    let client = client_with(Arc::new(FakeSession::default()));
    assert_eq!(client.bearer_header(), None);
}

// =============================================================
// Incoming interceptor
// =============================================================

#[test]
fn check_status_accepts_2xx() {
    let client = client_with(Arc::new(FakeSession::default()));
    assert_eq!(client.check_status(200), Ok(()));
    assert_eq!(client.check_status(204), Ok(()));
}

#[test]
fn check_status_maps_non_2xx_to_status_error() {
    let client = client_with(Arc::new(FakeSession::default()));
    assert_eq!(
        client.check_status(500),
        Err(ApiError::Status { status: 500 })
    );
}

#[test]
fn unauthorized_clears_token_and_navigates_to_login_once() {
    let session = Arc::new(FakeSession::with_token("expired"));
    let client = client_with(session.clone());

    let result = client.check_status(401);

    assert_eq!(result, Err(ApiError::Unauthorized));
    assert_eq!(session.token(), None);
    assert_eq!(session.login_navigations.load(Ordering::SeqCst), 1);
}

#[test]
fn unauthorized_still_propagates_after_redirect() {
    let session = Arc::new(FakeSession::with_token("expired"));
    let client = client_with(session);
    assert!(client.check_status(401).is_err());
}

// =============================================================
// Error descriptions
// =============================================================

#[test]
fn describe_attaches_context_to_status_errors() {
    let err = ApiError::Status { status: 502 }.describe("company data");
    assert_eq!(err.to_string(), "failed to fetch company data: status 502");
}

#[test]
fn describe_passes_other_variants_through() {
    let err = ApiError::Transport("connection refused".to_owned()).describe("company data");
    assert_eq!(err, ApiError::Transport("connection refused".to_owned()));
}
