use common::SessionUser;
use serde::Serialize;

use crate::api_client;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Ask the backend who the current session belongs to.
pub async fn current_user() -> Result<SessionUser, String> {
    log::trace!("Checking current session");
    let result: Result<SessionUser, String> = api_client::get("/auth/me").await;
    match &result {
        Ok(user) => log::info!("Session belongs to '{}'", user.username),
        Err(e) => log::debug!("No active session: {}", e),
    }
    result
}

/// Exchange credentials for a session cookie. The identity comes back
/// in the response body; the cookie rides along on the response.
pub async fn login(username: &str, password: &str) -> Result<SessionUser, String> {
    log::debug!("Logging in as '{}'", username);
    let result: Result<SessionUser, String> =
        api_client::post("/auth/login", &LoginRequest { username, password }).await;
    match &result {
        Ok(user) => log::info!("Logged in as '{}'", user.username),
        Err(e) => log::error!("Login failed for '{}': {}", username, e),
    }
    result
}

/// Invalidate the server-side session. Callers clear local state
/// regardless of the outcome.
pub async fn logout() -> Result<(), String> {
    log::debug!("Logging out");
    api_client::post_empty("/auth/logout").await
}
