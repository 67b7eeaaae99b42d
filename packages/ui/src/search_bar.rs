use dioxus::prelude::*;

use crate::icons::{FaMagnifyingGlass, FaXmark};
use crate::search_state::use_search;
use crate::Icon;

/// Query input bound to the shared search state.
///
/// Submitting calls `on_search` with the trimmed query; blank input is ignored.
#[component]
pub fn SearchBar(
    on_search: EventHandler<String>,
    #[props(default)] autofocus: bool,
    #[props(default = "Search anything...".to_string())] placeholder: String,
) -> Element {
    let mut search = use_search();
    let (query, loading) = {
        let state = search.read();
        (state.input_query.clone(), state.is_loading)
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let trimmed = search.read().input_query.trim().to_string();
        if !trimmed.is_empty() {
            on_search.call(trimmed);
        }
    };

    rsx! {
        form {
            class: "search-bar",
            onsubmit: onsubmit,
            Icon { class: "search-bar__icon", icon: FaMagnifyingGlass, width: 16, height: 16 }
            input {
                class: "search-bar__input",
                r#type: "text",
                placeholder: "{placeholder}",
                autofocus: autofocus,
                value: "{query}",
                oninput: move |evt: FormEvent| search.write().set_input_query(evt.value()),
            }
            if !query.is_empty() {
                button {
                    class: "search-bar__clear",
                    r#type: "button",
                    onclick: move |_| search.write().set_input_query(""),
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
            }
            button {
                class: "search-bar__submit",
                r#type: "submit",
                disabled: loading || query.trim().is_empty(),
                if loading {
                    span { class: "spinner" }
                } else {
                    "Search"
                }
            }
        }
    }
}
