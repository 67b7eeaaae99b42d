//! Sign-in form.

use dioxus::prelude::*;

use api::AuthState;

use crate::auth::{use_auth, use_session};

/// Login page body.
#[component]
pub fn LoginView(
    /// Called after a successful sign-in, or when already signed in.
    on_success: EventHandler<()>,
) -> Element {
    let mut auth = use_auth();
    let session = use_session();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_some() {
            on_success.call(());
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match session.login(&username(), &password()).await {
                Ok(user) => auth.set(AuthState::signed_in(user)),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { class: "auth-page__title", "Sign in to Notice" }

            form {
                class: "auth-page__form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "notice notice--error", role: "alert", "{err}" }
                }

                label { "Username" }
                input {
                    r#type: "text",
                    autocomplete: "username",
                    value: "{username}",
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                label { "Password" }
                input {
                    r#type: "password",
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "button button--primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-page__switch",
                "Don't have an account? "
                Link { to: "/register", "Sign up" }
            }
        }
    }
}
