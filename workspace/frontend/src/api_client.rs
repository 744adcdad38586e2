pub mod account;
pub mod auth;
pub mod customer;
pub mod data;
pub mod invoice;
pub mod reports;

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use web_sys::RequestCredentials;

use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

fn api_url(endpoint: &str) -> String {
    format!("{}{}", api_base(), endpoint)
}

/// Error body shape the backend uses for rejected requests.
#[derive(Debug, Deserialize, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Turns a non-OK response into an error string, preferring the
/// backend-provided message over the bare HTTP status.
async fn response_error(method: &str, endpoint: &str, response: Response) -> String {
    let status = response.status();
    log::warn!("{} {} - Non-OK response: {}", method, endpoint, status);
    match response.json::<ErrorResponse>().await {
        Ok(err) => {
            log::error!("{} {} - API error: {}", method, endpoint, err.error);
            format!("Error: {}", err.error)
        }
        Err(_) => {
            let error_msg = format!("HTTP error: {}", status);
            log::error!("{} {} - {}", method, endpoint, error_msg);
            error_msg
        }
    }
}

async fn parse_json<T>(method: &str, endpoint: &str, response: Response) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    if !response.ok() {
        return Err(response_error(method, endpoint, response).await);
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let parsed = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("{} {} - {}", method, endpoint, error_msg);
        error_msg
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(parsed)
}

fn send_error(method: &str, endpoint: &str, e: gloo_net::Error) -> String {
    let error_msg = format!("Request failed: {}", e);
    log::error!("{} {} - {}", method, endpoint, error_msg);
    error_msg
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| send_error("GET", endpoint, e))?;

    parse_json("GET", endpoint, response).await
}

/// GET handler for opaque payloads (backup export).
pub async fn get_bytes(endpoint: &str) -> Result<Vec<u8>, String> {
    let url = api_url(endpoint);
    log::debug!("GET (binary) request to: {}", url);

    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| send_error("GET", endpoint, e))?;

    if !response.ok() {
        return Err(response_error("GET", endpoint, response).await);
    }

    let bytes = response.binary().await.map_err(|e| {
        let error_msg = format!("Failed to read response body: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success ({} bytes)", endpoint, bytes.len());
    Ok(bytes)
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| send_error("POST", endpoint, e))?;

    parse_json("POST", endpoint, response).await
}

/// POST handler for bodyless calls where the response is ignored
/// beyond success/failure (logout).
pub async fn post_empty(endpoint: &str) -> Result<(), String> {
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| send_error("POST", endpoint, e))?;

    if !response.ok() {
        return Err(response_error("POST", endpoint, response).await);
    }

    log::info!("POST {} - Success", endpoint);
    Ok(())
}

/// POST handler for multipart uploads (backup restore). The browser
/// sets the multipart boundary from the FormData itself.
pub async fn post_multipart(endpoint: &str, form: web_sys::FormData) -> Result<(), String> {
    let url = api_url(endpoint);
    log::debug!("POST (multipart) request to: {}", url);

    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .body(form)
        .map_err(|e| {
            let error_msg = format!("Failed to build request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| send_error("POST", endpoint, e))?;

    if !response.ok() {
        return Err(response_error("POST", endpoint, response).await);
    }

    log::info!("POST {} - Success", endpoint);
    Ok(())
}

/// Common PUT request handler
pub async fn put<T, B>(endpoint: &str, body: &B) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("PUT request to: {}", url);

    let response = Request::put(&url)
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("PUT {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| send_error("PUT", endpoint, e))?;

    parse_json("PUT", endpoint, response).await
}

/// Common DELETE request handler. The backend responds with a message
/// object the client has no use for.
pub async fn delete(endpoint: &str) -> Result<(), String> {
    let url = api_url(endpoint);
    log::debug!("DELETE request to: {}", url);

    let response = Request::delete(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| send_error("DELETE", endpoint, e))?;

    if !response.ok() {
        return Err(response_error("DELETE", endpoint, response).await);
    }

    log::info!("DELETE {} - Success", endpoint);
    Ok(())
}
