//! Unit and currency conversions.
//!
//! The form re-submits `"{amount} {from} to {to}"` as a search and keeps the result
//! (and rate) of a conversion answer. Only currency codes are editable.

use dioxus::prelude::*;
use store::widgets::ConversionForm;
use store::{CurrencyConversion, SearchResult, UnitConversion};

use super::use_seeded;
use crate::client::use_api;

#[component]
pub fn UnitConverterBlock(data: UnitConversion) -> Element {
    let category = if data.category.trim().is_empty() {
        "Unit".to_string()
    } else {
        data.category.clone()
    };
    rsx! {
        ConverterCard {
            category,
            form: ConversionForm::from_unit(&data),
            result: data.result.clone(),
            rate: None,
        }
    }
}

#[component]
pub fn CurrencyConverterBlock(data: CurrencyConversion) -> Element {
    rsx! {
        ConverterCard {
            category: "Currency".to_string(),
            form: ConversionForm::from_currency(&data),
            result: data.result.clone(),
            rate: data.rate.clone(),
        }
    }
}

#[component]
fn ConverterCard(category: String, form: ConversionForm, result: String, rate: Option<String>) -> Element {
    let api = use_api();
    let mut form = use_seeded(&form, ConversionForm::clone);
    let mut result = use_seeded(&result, String::clone);
    let mut rate = use_seeded(&rate, Option::clone);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let query = match form.read().to_query() {
            Ok(q) => q,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let api = api.clone();
        spawn(async move {
            match api.search_instant(&query).await {
                Ok(dispatch) => match dispatch.result {
                    SearchResult::UnitConversion(u) => result.set(u.result),
                    SearchResult::CurrencyConversion(c) => {
                        result.set(c.result);
                        if c.rate.is_some() {
                            rate.set(c.rate);
                        }
                    }
                    SearchResult::Error(e) => error.set(Some(e.error)),
                    other => tracing::debug!("Conversion answered with {}", other.result_type()),
                },
                Err(e) => {
                    tracing::error!("Conversion fetch failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            busy.set(false);
        });
    };

    let current = form();
    let editable = current.editable_units;
    let rate_line = rate()
        .filter(|r| editable && !r.is_empty())
        .map(|r| current.rate_line(&r));

    rsx! {
        div {
            class: "block block--converter",
            span { class: "block__eyebrow", "{category} Conversion" }

            form {
                class: "converter__form",
                onsubmit: onsubmit,

                div {
                    class: "converter__row",
                    input {
                        class: "converter__amount",
                        r#type: "number",
                        step: "any",
                        value: "{current.amount}",
                        oninput: move |evt: FormEvent| form.write().amount = evt.value(),
                    }
                    input {
                        class: "converter__unit",
                        r#type: "text",
                        disabled: !editable,
                        value: "{current.from}",
                        oninput: move |evt: FormEvent| form.write().from = evt.value(),
                    }
                }

                p { class: "converter__equals", "=" }

                div {
                    class: "converter__row",
                    div {
                        class: if busy() { "converter__result converter__result--busy" } else { "converter__result" },
                        "{result}"
                    }
                    input {
                        class: "converter__unit",
                        r#type: "text",
                        disabled: !editable,
                        value: "{current.to}",
                        oninput: move |evt: FormEvent| form.write().to = evt.value(),
                    }
                }

                button { r#type: "submit", class: "hidden" }
            }

            if let Some(err) = error() {
                p { class: "notice notice--error", "{err}" }
            }

            if let Some(line) = rate_line {
                p { class: "converter__rate", "{line}" }
            }
        }
    }
}
