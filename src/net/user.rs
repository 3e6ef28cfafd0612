//! Authentication and profile services.
//!
//! Token issuance happens server-side; the login page persists the returned
//! token, and the client's interceptors take it from there.

use super::client::{ApiClient, ApiError};
use super::endpoints;
use super::types::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};

/// Exchange credentials for an auth token.
///
/// # Errors
///
/// Propagates [`ApiError`] from the client unchanged.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    client.post(endpoints::user::LOGIN, request).await
}

/// Create a new account.
///
/// # Errors
///
/// Propagates [`ApiError`] from the client unchanged.
pub async fn register(
    client: &ApiClient,
    request: &RegisterRequest,
) -> Result<AuthResponse, ApiError> {
    client.post(endpoints::user::REGISTER, request).await
}

/// Fetch the authenticated user's profile.
///
/// # Errors
///
/// Propagates [`ApiError`] from the client unchanged; a 401 clears the
/// session via the incoming interceptor.
pub async fn profile(client: &ApiClient) -> Result<UserProfile, ApiError> {
    client.get(endpoints::user::PROFILE, &[]).await
}
