//! Wire DTOs for the `/auth` REST endpoints.
//!
//! DESIGN
//! ======
//! `Session` mirrors the login success body exactly because that same shape
//! is what the session store persists. `UserIdentity` is the credential-free
//! projection handed to the UI, so the raw token never reaches render paths.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role identifier granting access to administrative screens.
pub const ADMIN_ROLE: &str = "ROLE_ADMIN";

/// An authenticated session as returned by `POST /auth/login`.
///
/// Also the exact shape the session store persists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential. A success body without a token is accepted
    /// but never persisted.
    #[serde(default)]
    pub token: Option<String>,
    /// Credential scheme reported by the server (e.g. `"Bearer"`).
    #[serde(rename = "type", default = "default_token_type")]
    pub token_type: String,
    /// Account identifier, if the server includes one.
    #[serde(default)]
    pub id: Option<i64>,
    /// Unique account name used to log in.
    pub username: String,
    /// Contact email, if known.
    #[serde(default)]
    pub email: Option<String>,
    /// Granted role identifiers (e.g. `"ROLE_USER"`, `"ROLE_ADMIN"`).
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Session {
    /// Credential-free projection for UI consumption.
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            roles: self.roles.clone(),
        }
    }
}

fn default_token_type() -> String {
    "Bearer".to_owned()
}

/// The non-credential identity fields of a session.
///
/// Also the body shape of `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Account identifier, if the server includes one.
    #[serde(default)]
    pub id: Option<i64>,
    /// Unique account name used to log in.
    pub username: String,
    /// Contact email, if known.
    #[serde(default)]
    pub email: Option<String>,
    /// Granted role identifiers.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserIdentity {
    /// Whether the role set grants administrative access.
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|role| role == ADMIN_ROLE)
    }
}

/// Body of `GET /auth/check`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthCheck {
    /// Whether the presented credential is still accepted by the server.
    #[serde(default)]
    pub authenticated: bool,
    /// Account name echoed back for logging, if included.
    #[serde(default)]
    pub username: Option<String>,
}

/// Body of a successful `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RegisterResponse {
    /// Human-readable confirmation to display to the user.
    pub message: String,
}
