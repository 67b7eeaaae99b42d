//! Authentication context and hooks for the UI.

use api::{AuthSession, AuthState};
use dioxus::prelude::*;

use crate::client::{use_api, Api, PlatformTokens};

pub type Session = AuthSession<Api, PlatformTokens>;

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the session used by the login, register and logout actions.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Provider component that manages authentication state.
/// Must sit inside [`ApiProvider`](crate::ApiProvider).
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_api();
    let session = use_context_provider(move || {
        let tokens = client.tokens().clone();
        AuthSession::new(client, tokens)
    });
    let mut auth_state = use_signal(AuthState::default);

    // Resolve a stored token on mount
    let _ = use_resource(move || {
        let session = session.clone();
        async move {
            let restored = session.restore().await;
            auth_state.write().settle(restored);
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user. Local only; no request is sent.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: Option<EventHandler<()>>,
) -> Element {
    let mut auth_state = use_auth();
    let session = use_session();

    let onclick = move |_| {
        session.logout(&mut auth_state.write());
        tracing::info!("Signed out");
        if let Some(handler) = on_logout {
            handler.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
