//! Authenticated home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Private route and the post-login landing screen. Shows the signed-in
//! identity, refreshes the profile from the server best-effort, and owns
//! the logout action.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::UserIdentity;
use crate::state::auth::AuthState;

/// Welcome headline for the signed-in user.
fn welcome_message(username: &str) -> String {
    format!("Bem-vindo, {username}!")
}

/// Home page: welcome header, profile details, and logout.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(auth, navigate);

    // Freshest profile from the server; display falls back to the identity
    // restored at bootstrap until (and unless) the fetch lands.
    let profile = RwSignal::new(None::<UserIdentity>);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(me) = crate::net::api::get_me().await {
            let _ = profile.try_set(Some(me));
        }
    });

    let username = move || auth.get().user.map(|u| u.username).unwrap_or_default();
    let email = move || {
        profile
            .get()
            .and_then(|p| p.email)
            .or_else(|| auth.get().user.and_then(|u| u.email))
    };

    let on_logout = move |_| {
        crate::net::api::logout();
        auth.update(|a| a.user = None);
        // Hard navigation so no authenticated UI stays mounted.
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="home-container">
                        <p>
                            {move || {
                                if auth.get().loading { "Carregando..." } else { "Redirecionando para o login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="home-container">
                <h1>{move || welcome_message(&username())}</h1>
                <Show when=move || email().is_some()>
                    <p class="home-email">{move || email().unwrap_or_default()}</p>
                </Show>
                <Show when=move || auth.get().is_admin()>
                    <span class="home-role">"Administrador"</span>
                </Show>
                <button class="logout-button" on:click=on_logout>
                    "Sair"
                </button>
            </div>
        </Show>
    }
}
