//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the session lifecycle: provides the auth context, kicks off the
//! one-time startup revalidation, and subscribes to the transport's
//! authorization-rejection event so any rejected call lands the user back
//! on the login screen.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth state context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    {
        // On a 401 the transport has already cleared the store; drop the
        // in-memory user and leave authenticated UI via a full navigation.
        crate::net::http::set_unauthorized_handler(move || {
            auth.update(|a| a.user = None);
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        });
        crate::state::auth::spawn_bootstrap(auth);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/portal-client.css"/>
        <Title text="Portal"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
