//! Math answers with a keypad that re-evaluates through `POST /calculate`.

use dioxus::prelude::*;
use store::widgets::{key_kind, Calculator, KeyKind, CALCULATOR_KEYS};
use store::MathResult;

use super::use_seeded;
use crate::client::use_api;

#[component]
pub fn CalculatorBlock(data: MathResult) -> Element {
    let api = use_api();
    let mut calc = use_seeded(&data, Calculator::from_result);
    let mut evaluating = use_signal(|| false);

    let press = use_callback(move |key: &'static str| {
        let Some(expression) = calc.write().press(key) else {
            return;
        };
        let api = api.clone();
        evaluating.set(true);
        spawn(async move {
            match api.calculate(&expression).await {
                Ok(result) => calc.write().apply_result(result),
                Err(e) => tracing::error!("Calculate failed: {}", e),
            }
            evaluating.set(false);
        });
    });

    let state = calc();
    let expression = state.expression_line();

    rsx! {
        div {
            class: "block block--calculator",
            div {
                class: "calculator__screen",
                p { class: "calculator__expression", "{expression}" }
                p {
                    class: if evaluating() { "calculator__result calculator__result--busy" } else { "calculator__result" },
                    "{state.display}"
                }
            }
            div {
                class: "calculator__keypad",
                for key in CALCULATOR_KEYS {
                    button {
                        key: "{key}",
                        class: match key_kind(key) {
                            KeyKind::Equals => "key key--equals",
                            KeyKind::Clear => "key key--clear",
                            KeyKind::Operator => "key key--operator",
                            KeyKind::Digit => "key",
                        },
                        onclick: move |_| press.call(key),
                        "{key}"
                    }
                }
            }
        }
    }
}
