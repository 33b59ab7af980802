//! Auth service operations against the `/auth` endpoints.
//!
//! ERROR HANDLING
//! ==============
//! `login` and `register` are user-initiated: failures propagate so forms
//! can display them. `check_auth` and `get_me` are background
//! reconciliation: every failure collapses to `None`, since the only
//! meaningful reaction is "treat as unauthenticated".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthCheck, RegisterResponse, Session, UserIdentity};
use crate::util::session_store;

#[cfg(feature = "hydrate")]
const LOGIN_PATH: &str = "/auth/login";
#[cfg(feature = "hydrate")]
const REGISTER_PATH: &str = "/auth/register";
#[cfg(feature = "hydrate")]
const CHECK_PATH: &str = "/auth/check";
#[cfg(feature = "hydrate")]
const ME_PATH: &str = "/auth/me";

#[cfg(any(test, feature = "hydrate"))]
fn login_payload(username: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "username": username, "password": password })
}

#[cfg(any(test, feature = "hydrate"))]
fn register_payload(username: &str, email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "username": username, "email": email, "password": password })
}

/// Whether a login success body should be persisted.
///
/// A success body without a token is returned to the caller but never
/// stored, so the store only ever holds a usable credential.
#[cfg(any(test, feature = "hydrate"))]
fn should_persist_session(session: &Session) -> bool {
    session.token.is_some()
}

/// Exchange credentials for a session via `POST /auth/login`.
///
/// Persists the full response body when it carries a token.
///
/// # Errors
///
/// Returns the server's `message` (or a generic status line) when the
/// request fails or the server rejects the credentials. The store is left
/// untouched on failure.
pub async fn login(username: &str, password: &str) -> Result<Session, String> {
    #[cfg(feature = "hydrate")]
    {
        log::info!("login attempt for {username}");
        let response = super::http::post_json(LOGIN_PATH, &login_payload(username, password)).await?;
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = super::http::error_message(status, &body);
            log::error!("login failed for {username}: {status} {message}");
            return Err(message);
        }
        let session: Session = response.json().await.map_err(|e| e.to_string())?;
        if should_persist_session(&session) {
            session_store::save(&session);
            log::info!("login succeeded for {}", session.username);
        } else {
            log::warn!("login response for {username} carried no token, nothing persisted");
        }
        Ok(session)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /auth/register`.
///
/// Never touches the session store; registration does not imply login.
///
/// # Errors
///
/// Returns the server's `message` (or a generic status line) when the
/// request fails, e.g. on a duplicate username.
pub async fn register(username: &str, email: &str, password: &str) -> Result<RegisterResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        log::info!("registering {username} ({email})");
        let response =
            super::http::post_json(REGISTER_PATH, &register_payload(username, email, password)).await?;
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = super::http::error_message(status, &body);
            log::error!("registration failed for {username}: {status} {message}");
            return Err(message);
        }
        response.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err("not available on server".to_owned())
    }
}

/// Drop the persisted session. Local-only; the server is not called.
pub fn logout() {
    #[cfg(feature = "hydrate")]
    log::info!("logging out, clearing stored session");
    session_store::clear();
}

/// Ask the server whether the stored credential is still valid via
/// `GET /auth/check`. Best-effort: any failure resolves to `None`.
pub async fn check_auth() -> Option<AuthCheck> {
    #[cfg(feature = "hydrate")]
    {
        let response = super::http::get(CHECK_PATH).await.ok()?;
        if !response.ok() {
            log::warn!("auth check rejected: {}", response.status());
            return None;
        }
        response.json::<AuthCheck>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the current user's profile via `GET /auth/me`.
/// Best-effort: any failure resolves to `None`.
pub async fn get_me() -> Option<UserIdentity> {
    #[cfg(feature = "hydrate")]
    {
        let response = super::http::get(ME_PATH).await.ok()?;
        if !response.ok() {
            log::warn!("profile fetch rejected: {}", response.status());
            return None;
        }
        response.json::<UserIdentity>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
