use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::knowledge_graph::{KnowledgeGraphPanel, TopInterests};

/// Account page with the user's knowledge graph.
///
/// Calls `on_unauthenticated` once the session check finished without a user.
#[component]
pub fn ProfileView(on_unauthenticated: EventHandler<()>, on_logout: EventHandler<()>) -> Element {
    let auth = use_auth();

    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_none() {
            on_unauthenticated.call(());
        }
    });

    let state = auth();
    if state.loading {
        return rsx! {
            div { class: "profile profile--loading", p { "Loading..." } }
        };
    }
    let Some(user) = state.user else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "profile",
            h1 { class: "profile__name", {user.display_name()} }
            p { class: "profile__subtitle", "Your Notice account" }
            LogoutButton { class: "button button--secondary", on_logout }
            TopInterests {}
            KnowledgeGraphPanel {}
        }
    }
}
