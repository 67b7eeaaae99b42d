use dioxus::prelude::*;

use api::auth::MIN_PASSWORD_LEN;
use api::AuthState;

use crate::auth::{use_auth, use_session};

/// Registration page body. Form checks run before any request is sent.
#[component]
pub fn RegisterView(
    /// Called after a successful registration, or when already signed in.
    on_success: EventHandler<()>,
) -> Element {
    let mut auth = use_auth();
    let session = use_session();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_some() {
            on_success.call(());
        }
    });

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match session
                .register(&username(), &password(), &confirm_password())
                .await
            {
                Ok(user) => auth.set(AuthState::signed_in(user)),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { class: "auth-page__title", "Create your account" }

            form {
                class: "auth-page__form",
                onsubmit: handle_register,

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
                    autocomplete: "new-password",
                    placeholder: "At least {MIN_PASSWORD_LEN} characters",
                    value: "{password}",
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                label { "Confirm password" }
                input {
                    r#type: "password",
                    autocomplete: "new-password",
                    value: "{confirm_password}",
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "button button--primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Create account" }
                }
            }

            p {
                class: "auth-page__switch",
                "Already have an account? "
                Link { to: "/login", "Sign in" }
            }
        }
    }
}
