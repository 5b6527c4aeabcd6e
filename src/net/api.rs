//! REST helpers for the remittance API.
//!
//! Client-side (wasm): real HTTP calls via `gloo-net`, bearer token attached
//! to every authenticated request. Host-side: stubs returning a network
//! error, so pure state modules stay testable without a browser.
//!
//! The base URL comes from a compile-time `REMITY_API_BASE` override when
//! set, otherwise from the page hostname: `*.remity.io` talks to the
//! production API, anything else to the local dev server.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    Recipient, RecipientCreate, TokenResponse, Transaction, TransactionCreate, TransactionUpdate,
    User, UserCreate,
};
use uuid::Uuid;

/// Production API, served for `remity.io` hostnames.
pub const PRODUCTION_BASE: &str = "https://api.remity.io/api/v1";

/// Local dev fallback, matching the backend's default compose port.
pub const DEV_BASE: &str = "http://localhost:8001/api/v1";

#[cfg(not(target_arch = "wasm32"))]
const OFF_BROWSER: &str = "not available outside the browser";

/// Resolve the API base URL from an optional compile-time override and the
/// page hostname. Pure so the fallback rules stay testable.
pub fn resolve_base_url(compiled_override: Option<&str>, hostname: &str) -> String {
    if let Some(base) = compiled_override {
        return base.trim_end_matches('/').to_owned();
    }
    if hostname == "remity.io" || hostname.ends_with(".remity.io") {
        PRODUCTION_BASE.to_owned()
    } else {
        DEV_BASE.to_owned()
    }
}

#[cfg(target_arch = "wasm32")]
fn base_url() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    resolve_base_url(option_env!("REMITY_API_BASE"), &hostname)
}

/// Encode credential pairs as `application/x-www-form-urlencoded`, as the
/// login endpoint's OAuth2 password form expects.
pub fn form_encode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn percent_encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

// =============================================================
// wasm transport plumbing
// =============================================================

#[cfg(target_arch = "wasm32")]
fn transport_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(target_arch = "wasm32")]
async fn parse_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    let status = resp.status();
    if (200..300).contains(&status) {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let body = resp.text().await.unwrap_or_default();
        Err(super::error::classify(status, &body))
    }
}

#[cfg(target_arch = "wasm32")]
async fn get_authed<T: serde::de::DeserializeOwned>(
    path: &str,
    token: &str,
) -> Result<T, ApiError> {
    let url = format!("{}{path}", base_url());
    let resp = gloo_net::http::Request::get(&url)
        .header("Authorization", &format!("Bearer {token}"))
        .send()
        .await
        .map_err(transport_err)?;
    parse_json(resp).await
}

#[cfg(target_arch = "wasm32")]
async fn send_json_authed<T: serde::de::DeserializeOwned>(
    method: &str,
    path: &str,
    token: &str,
    payload: &impl serde::Serialize,
) -> Result<T, ApiError> {
    let url = format!("{}{path}", base_url());
    let builder = match method {
        "PATCH" => gloo_net::http::Request::patch(&url),
        _ => gloo_net::http::Request::post(&url),
    };
    let resp = builder
        .header("Authorization", &format!("Bearer {token}"))
        .json(payload)
        .map_err(transport_err)?
        .send()
        .await
        .map_err(transport_err)?;
    parse_json(resp).await
}

// =============================================================
// Authentication
// =============================================================

/// Exchange credentials for a bearer token via `POST /auth/login`.
pub async fn login(email: &str, password: &str) -> Result<TokenResponse, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let url = format!("{}/auth/login", base_url());
        let form = form_encode(&[("username", email), ("password", password)]);
        let resp = gloo_net::http::Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .map_err(transport_err)?
            .send()
            .await
            .map_err(transport_err)?;
        parse_json(resp).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (email, password);
        Err(ApiError::Network(OFF_BROWSER.to_owned()))
    }
}

/// Register a new account via `POST /users/`.
pub async fn register(payload: &UserCreate) -> Result<User, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let url = format!("{}/users/", base_url());
        let resp = gloo_net::http::Request::post(&url)
            .json(payload)
            .map_err(transport_err)?
            .send()
            .await
            .map_err(transport_err)?;
        parse_json(resp).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = payload;
        Err(ApiError::Network(OFF_BROWSER.to_owned()))
    }
}

/// Fetch the authenticated profile via `GET /users/me`.
pub async fn fetch_me(token: &str) -> Result<User, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        get_authed("/users/me", token).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = token;
        Err(ApiError::Network(OFF_BROWSER.to_owned()))
    }
}

// =============================================================
// Transactions
// =============================================================

/// List the caller's transactions via `GET /transactions/`.
pub async fn fetch_transactions(token: &str) -> Result<Vec<Transaction>, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        get_authed("/transactions/", token).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = token;
        Err(ApiError::Network(OFF_BROWSER.to_owned()))
    }
}

/// Create a transaction via `POST /transactions/`.
pub async fn create_transaction(
    token: &str,
    payload: &TransactionCreate,
) -> Result<Transaction, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        send_json_authed("POST", "/transactions/", token, payload).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (token, payload);
        Err(ApiError::Network(OFF_BROWSER.to_owned()))
    }
}

// =============================================================
// Admin review
// =============================================================

/// List all transactions for review via `GET /transactions/admin`.
pub async fn fetch_admin_transactions(token: &str) -> Result<Vec<Transaction>, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        get_authed("/transactions/admin", token).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = token;
        Err(ApiError::Network(OFF_BROWSER.to_owned()))
    }
}

/// Apply a review action via `PATCH /transactions/{id}/admin`.
pub async fn admin_update_transaction(
    token: &str,
    id: Uuid,
    payload: &TransactionUpdate,
) -> Result<Transaction, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        send_json_authed("PATCH", &format!("/transactions/{id}/admin"), token, payload).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (token, id, payload);
        Err(ApiError::Network(OFF_BROWSER.to_owned()))
    }
}

/// List all users via `GET /users/` (superuser only).
pub async fn fetch_users(token: &str) -> Result<Vec<User>, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        get_authed("/users/", token).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = token;
        Err(ApiError::Network(OFF_BROWSER.to_owned()))
    }
}

// =============================================================
// Recipients
// =============================================================

/// List saved recipients via `GET /recipients/`.
pub async fn fetch_recipients(token: &str) -> Result<Vec<Recipient>, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        get_authed("/recipients/", token).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = token;
        Err(ApiError::Network(OFF_BROWSER.to_owned()))
    }
}

/// Save a recipient via `POST /recipients/`.
pub async fn create_recipient(
    token: &str,
    payload: &RecipientCreate,
) -> Result<Recipient, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        send_json_authed("POST", "/recipients/", token, payload).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (token, payload);
        Err(ApiError::Network(OFF_BROWSER.to_owned()))
    }
}
