//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as a `RwSignal<AuthState>` context at the application root.
//! Route guards and user-aware components read it to coordinate login
//! redirects and identity-dependent rendering. The startup bootstrap is the
//! only writer of `loading`; login and logout handlers are the only other
//! writers of `user`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AuthCheck, UserIdentity};

/// Authentication state tracking the current user and the startup
/// revalidation window.
#[derive(Clone, Debug)]
pub struct AuthState {
    /// Credential-free identity of the signed-in user, if any.
    pub user: Option<UserIdentity>,
    /// True only while the persisted session is being revalidated at
    /// startup. Cleared exactly once and never re-entered.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        // Starts inside the revalidation window so guards hold rendering
        // until the bootstrap settles.
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Whether a user is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the signed-in user holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(UserIdentity::is_admin)
    }
}

/// Whether a server validity check confirms the stored session.
///
/// An absent check (network failure, server error, rejected credential) and
/// a negative check both mean the stored record is stale.
pub fn session_still_valid(check: Option<&AuthCheck>) -> bool {
    check.is_some_and(|c| c.authenticated)
}

/// Load and revalidate any persisted session, then leave the loading state.
///
/// Runs once at application startup. Never surfaces an error; every failure
/// path settles as signed-out with the stale record cleared.
#[cfg(feature = "hydrate")]
pub fn spawn_bootstrap(auth: leptos::prelude::RwSignal<AuthState>) {
    use leptos::prelude::Update;

    leptos::task::spawn_local(async move {
        match crate::util::session_store::load() {
            Some(session) => {
                log::debug!("stored session found for {}, revalidating", session.username);
                let check = crate::net::api::check_auth().await;
                if session_still_valid(check.as_ref()) {
                    log::info!("stored session still valid for {}", session.username);
                    auth.update(|a| a.user = Some(session.identity()));
                } else {
                    log::warn!("stored session no longer valid, clearing");
                    crate::net::api::logout();
                }
            }
            None => log::debug!("no stored session"),
        }
        auth.update(|a| a.loading = false);
    });
}
