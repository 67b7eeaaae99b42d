//! Shell shared by every route: navbar with brand, search box and account links.

use dioxus::prelude::*;
use ui::{use_auth, LogoutButton, Navbar, SearchBar};

use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();
    let on_home = matches!(route, Route::Home {});

    rsx! {
        Navbar {
            Link { class: "navbar__brand", to: Route::Home {}, "Notice" }
            if !on_home {
                div {
                    class: "navbar__search",
                    SearchBar {
                        on_search: move |query: String| {
                            nav.push(Route::Search { query });
                        },
                    }
                }
            }
            AccountLinks {}
        }
        Outlet::<Route> {}
    }
}

#[component]
fn AccountLinks() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth();

    rsx! {
        div {
            class: "navbar__links",
            if state.loading {
                span { "..." }
            } else {
                if let Some(user) = state.user {
                    Link { class: "navbar__link", to: Route::Profile {}, "{user.username}" }
                    LogoutButton {
                        class: "navbar__link",
                        on_logout: move |_| {
                            nav.push(Route::Home {});
                        },
                    }
                } else {
                    Link { class: "navbar__link", to: Route::Login {}, "Sign in" }
                    Link { class: "navbar__link navbar__cta", to: Route::Register {}, "Sign up" }
                }
            }
        }
    }
}
