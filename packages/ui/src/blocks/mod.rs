//! # Result blocks
//!
//! One presentational component per [`SearchResult`] variant. [`ResultBlock`] is the
//! dispatcher: it picks the block from the typed result, so a payload can only ever
//! reach the block that understands its shape. Error results (including payloads
//! that carried an `error` field) always land on [`ErrorBlock`].
//!
//! | Variant | Block |
//! |---------|-------|
//! | `Universal` | [`UniversalBlock`] |
//! | `Math` | [`CalculatorBlock`] |
//! | `UnitConversion` | [`UnitConverterBlock`] |
//! | `CurrencyConversion` | [`CurrencyConverterBlock`] |
//! | `Timer` | [`TimerBlock`] |
//! | `Error` | [`ErrorBlock`] |

use dioxus::prelude::*;
use store::SearchResult;

mod calculator;
mod converter;
mod error;
mod timer;
mod universal;

pub use calculator::CalculatorBlock;
pub use converter::{CurrencyConverterBlock, UnitConverterBlock};
pub use error::ErrorBlock;
pub use timer::TimerBlock;
pub use universal::UniversalBlock;

/// Block-local state seeded from a result prop.
///
/// A new search can return the same variant, reusing the mounted block; the state
/// is rebuilt from `seed` whenever the prop changes.
pub(crate) fn use_seeded<T, S>(seed: &T, init: impl Fn(&T) -> S) -> Signal<S>
where
    T: Clone + PartialEq + 'static,
    S: 'static,
{
    let mut last = use_signal(|| seed.clone());
    let mut state = use_signal(|| init(seed));
    if *last.peek() != *seed {
        last.set(seed.clone());
        state.set(init(seed));
    }
    state
}

#[component]
pub fn ResultBlock(
    result: SearchResult,
    #[props(default)]
    summary_loading: bool,
    summary_error: Option<String>,
    on_search: EventHandler<String>,
) -> Element {
    match result {
        SearchResult::Universal(data) => rsx! {
            UniversalBlock { data, summary_loading, summary_error, on_search }
        },
        SearchResult::Math(data) => rsx! {
            CalculatorBlock { data }
        },
        SearchResult::UnitConversion(data) => rsx! {
            UnitConverterBlock { data }
        },
        SearchResult::CurrencyConversion(data) => rsx! {
            CurrencyConverterBlock { data }
        },
        SearchResult::Timer(data) => rsx! {
            TimerBlock { data }
        },
        SearchResult::Error(data) => rsx! {
            ErrorBlock { message: data.error }
        },
    }
}
