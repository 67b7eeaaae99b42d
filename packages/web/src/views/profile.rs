//! Profile page. Signed-out visitors are sent to the login page.

use dioxus::prelude::*;
use ui::views::ProfileView;

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();

    rsx! {
        ProfileView {
            on_unauthenticated: move |_| {
                nav.replace(Route::Login {});
            },
            on_logout: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}
