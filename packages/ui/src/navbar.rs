use dioxus::prelude::*;

use crate::backend_status::BackendStatus;

/// Top bar. Platform packages supply the brand link, search box and account links
/// as children; the backend health dot is always shown on the right.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar__inner",
                {children}
                BackendStatus {}
            }
        }
    }
}
