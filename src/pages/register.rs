//! Registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Registration is a pure passthrough to the auth service: a
//! successful registration does not sign the user in, it only shows the
//! server's confirmation and points at the login screen.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Validate and normalize the registration form fields.
fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(String, String, String), &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Informe usuário, email e senha.");
    }
    if !email.contains('@') {
        return Err("Informe um email válido.");
    }
    Ok((username.to_owned(), email.to_owned(), password.to_owned()))
}

/// Registration page: account-creation form with busy and error states.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    crate::util::auth::install_auth_redirect(auth, navigate);

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, email_value, password_value) =
            match validate_register_input(&username.get(), &email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&username_value, &email_value, &password_value).await {
                Ok(response) => {
                    let _ = info.try_set(response.message);
                }
                Err(message) => {
                    let _ = error.try_set(message);
                }
            }
            let _ = busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, email_value, password_value);
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
                        <h1 class="login-title">"Criar conta"</h1>
                        <p class="login-subtitle">"Registre-se para acessar o portal"</p>

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
                                "Endereço de Email"
                                <input
                                    class="form-input"
                                    type="email"
                                    placeholder="seu@email.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                    disabled=move || busy.get()
                                />
                            </label>
                            <label class="form-group">
                                "Senha"
                                <input
                                    class="form-input"
                                    type="password"
                                    placeholder="••••••••"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                    disabled=move || busy.get()
                                />
                            </label>
                            <button class="login-button" type="submit" disabled=move || busy.get()>
                                {move || if busy.get() { "Registrando..." } else { "Registrar" }}
                            </button>
                        </form>

                        <Show when=move || !error.get().is_empty()>
                            <p class="login-error">{move || error.get()}</p>
                        </Show>
                        <Show when=move || !info.get().is_empty()>
                            <p class="login-message">{move || info.get()}</p>
                        </Show>

                        <p class="login-register-hint">
                            "Já tem uma conta? "
                            <a href="/login">"Ir para o login"</a>
                        </p>
                    </div>
                </div>
            </div>
        </Show>
    }
}
