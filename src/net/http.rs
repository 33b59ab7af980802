//! HTTP transport for the `/auth` REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the concerns every remote call shares: resolving the API base URL,
//! attaching the stored bearer credential immediately before each send, and
//! the global reaction to an authorization rejection. The auth service and
//! pages never touch headers or status codes directly.
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as `Result<_, String>` carrying the server-provided
//! `message` when the body has one, so forms can display server text
//! verbatim. An authorization rejection on an authorized call clears the
//! session store here and raises the registered handler; navigation and
//! state updates stay with the subscriber.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;

/// Status the server uses to reject a missing or expired credential.
const UNAUTHORIZED: u16 = 401;

/// Port the backend listens on when no base-URL override is configured.
const API_PORT: u16 = 8080;

#[cfg(feature = "hydrate")]
thread_local! {
    static UNAUTHORIZED_HANDLER: RefCell<Option<Box<dyn Fn()>>> = const { RefCell::new(None) };
}

/// Register the callback invoked when an authorized call is rejected with
/// 401. The transport has already cleared the session store by the time the
/// handler runs, so it only needs to update UI state and navigate.
pub fn set_unauthorized_handler(handler: impl Fn() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        UNAUTHORIZED_HANDLER.with(|slot| *slot.borrow_mut() = Some(Box::new(handler)));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = handler;
    }
}

#[cfg(feature = "hydrate")]
fn notify_unauthorized() {
    UNAUTHORIZED_HANDLER.with(|slot| {
        if let Some(handler) = slot.borrow().as_ref() {
            handler();
        }
    });
}

/// Whether `status` is an authorization rejection.
pub fn is_unauthorized(status: u16) -> bool {
    status == UNAUTHORIZED
}

/// API base URL for the page `hostname`, used when no compile-time override
/// is set. Local hosts talk to a local backend; anything else (a LAN IP
/// during device testing) reuses the same hostname.
pub fn base_url_for_host(hostname: &str) -> String {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        format!("http://localhost:{API_PORT}/api")
    } else {
        format!("http://{hostname}:{API_PORT}/api")
    }
}

/// `Authorization` header value for `token`.
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Displayable message for a failed response: the server's `message` field
/// when the body carries one, else a generic status line.
pub fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_owned();
        }
    }
    format!("request failed: {status}")
}

/// Resolve the absolute URL for an API path such as `/auth/login`.
#[cfg(feature = "hydrate")]
fn api_url(path: &str) -> String {
    if let Some(base) = option_env!("API_URL") {
        return format!("{base}{path}");
    }
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_else(|| "localhost".to_owned());
    format!("{}{path}", base_url_for_host(&hostname))
}

/// Stored bearer token, re-read from the session store on every call so a
/// freshly logged-in session is picked up without rebuilding anything.
#[cfg(feature = "hydrate")]
fn stored_token() -> Option<String> {
    crate::util::session_store::load().and_then(|session| session.token)
}

/// GET an authorized endpoint.
///
/// A 401 response clears the session store and raises the registered
/// unauthorized handler before returning, so callers only see the response
/// after the global policy has run.
///
/// # Errors
///
/// Returns the transport error message if the request cannot be sent.
#[cfg(feature = "hydrate")]
pub async fn get(path: &str) -> Result<gloo_net::http::Response, String> {
    let url = api_url(path);
    log::debug!("GET {url}");
    let mut request = gloo_net::http::Request::get(&url);
    if let Some(token) = stored_token() {
        request = request.header("Authorization", &bearer_value(&token));
    }
    let response = request.send().await.map_err(|e| e.to_string())?;
    if is_unauthorized(response.status()) {
        log::warn!("authorization rejected on {path}, clearing stored session");
        crate::util::session_store::clear();
        notify_unauthorized();
    }
    Ok(response)
}

/// POST a JSON body to a credential-exchange endpoint.
///
/// 401 responses surface to the caller instead of triggering the global
/// policy, so a failed login renders inline rather than redirecting.
///
/// # Errors
///
/// Returns the transport error message if the body cannot be serialized or
/// the request cannot be sent.
#[cfg(feature = "hydrate")]
pub async fn post_json<T: serde::Serialize>(path: &str, body: &T) -> Result<gloo_net::http::Response, String> {
    let url = api_url(path);
    log::debug!("POST {url}");
    let mut request = gloo_net::http::Request::post(&url);
    if let Some(token) = stored_token() {
        request = request.header("Authorization", &bearer_value(&token));
    }
    request
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())
}
