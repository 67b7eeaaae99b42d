use dioxus::prelude::*;

use crate::icons::FaTriangleExclamation;
use crate::Icon;

#[component]
pub fn ErrorBlock(message: String) -> Element {
    let message = if message.trim().is_empty() {
        "Something went wrong".to_string()
    } else {
        message
    };
    rsx! {
        div {
            class: "block block--error",
            role: "alert",
            Icon { icon: FaTriangleExclamation, width: 16, height: 16 }
            span { "{message}" }
        }
    }
}
