//! Login page with username/password form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Renders a placeholder while the startup revalidation is in
//! flight, bounces already-authenticated users to `/`, and surfaces login
//! failures inline so the user can retry.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Validate and normalize the login form fields.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Informe usuário e senha.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// HTML input type for the password field.
fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

/// Login page: username/password form with busy and error states.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    crate::util::auth::install_auth_redirect(auth, navigate);

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) =
            match validate_login_input(&username.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&username_value, &password_value).await {
                Ok(session) => {
                    // The public-route guard navigates to `/` once the user
                    // lands in state; page-local signals stay untouched so
                    // nothing writes after unmount.
                    auth.update(|a| a.user = Some(session.identity()));
                }
                Err(message) => {
                    let _ = error.try_set(message);
                    let _ = busy.try_set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value);
        }
    };

    view! {
        <Show
            when=move || !auth.get().loading
            fallback=|| view! {
                <div class="login-container">
                    <p>"Carregando..."</p>
                </div>
            }
        >
            <div class="login-container">
                <div class="login-card">
                    <div class="login-form-container">
                        <h1 class="login-title">"Login"</h1>
                        <p class="login-subtitle">"Faça login na sua conta em segundos"</p>

                        <form class="login-form" on:submit=on_submit>
                            <label class="form-group">
                                "Usuário"
                                <input
                                    class="form-input"
                                    type="text"
                                    placeholder="seu usuário"
                                    prop:value=move || username.get()
                                    on:input=move |ev| username.set(event_target_value(&ev))
                                    disabled=move || busy.get()
                                />
                            </label>
                            <label class="form-group">
                                "Senha"
                                <div class="password-field">
                                    <input
                                        class="form-input"
                                        type=move || password_input_type(show_password.get())
                                        placeholder="••••••••"
                                        prop:value=move || password.get()
                                        on:input=move |ev| password.set(event_target_value(&ev))
                                        disabled=move || busy.get()
                                    />
                                    <button
                                        type="button"
                                        class="password-toggle"
                                        on:click=move |_| show_password.update(|v| *v = !*v)
                                    >
                                        {move || if show_password.get() { "Ocultar" } else { "Mostrar" }}
                                    </button>
                                </div>
                            </label>
                            <button class="login-button" type="submit" disabled=move || busy.get()>
                                {move || if busy.get() { "Entrando..." } else { "Entrar" }}
                            </button>
                        </form>

                        <Show when=move || !error.get().is_empty()>
                            <p class="login-error">{move || error.get()}</p>
                        </Show>

                        <p class="login-register-hint">
                            "Não tem uma conta? "
                            <a href="/register">"Criar conta"</a>
                        </p>
                    </div>
                </div>
            </div>
        </Show>
    }
}
