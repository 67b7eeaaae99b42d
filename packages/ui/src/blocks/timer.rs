//! Countdown timer. Purely local after the initial payload.

use dioxus::prelude::*;
use store::widgets::Countdown;
use store::TimerResult;

use super::use_seeded;
use crate::client::sleep_secs;
use crate::icons::{FaPause, FaPlay, FaRotateLeft};
use crate::Icon;

const CHIME: Asset = asset!("/assets/chime.wav");

const RING_RADIUS: f64 = 90.0;

#[component]
pub fn TimerBlock(data: TimerResult) -> Element {
    let mut countdown = use_seeded(&data, Countdown::from_result);

    use_future(move || async move {
        loop {
            sleep_secs(1).await;
            if !countdown.peek().is_running() {
                continue;
            }
            if countdown.write().tick() {
                play_chime();
            }
        }
    });

    let state = countdown();
    let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
    let offset = circumference * (1.0 - state.fraction_left());
    let finished = state.is_finished();
    let label = state.label();

    rsx! {
        div {
            class: "block block--timer",
            span { class: "timer__query", "{data.query}" }

            div {
                class: "timer__dial",
                svg {
                    class: "timer__ring",
                    width: "224",
                    height: "224",
                    circle {
                        class: "timer__track",
                        cx: "112",
                        cy: "112",
                        r: "{RING_RADIUS}",
                        stroke_width: "12",
                        fill: "transparent",
                    }
                    circle {
                        class: if finished { "timer__progress timer__progress--done" } else { "timer__progress" },
                        cx: "112",
                        cy: "112",
                        r: "{RING_RADIUS}",
                        stroke_width: "12",
                        fill: "transparent",
                        stroke_linecap: "round",
                        stroke_dasharray: "{circumference}",
                        stroke_dashoffset: "{offset}",
                    }
                }
                span {
                    class: if finished { "timer__label timer__label--done" } else { "timer__label" },
                    "{label}"
                }
            }

            div {
                class: "timer__controls",
                button {
                    class: if state.is_running() { "timer__toggle timer__toggle--running" } else { "timer__toggle" },
                    onclick: move |_| countdown.write().toggle(),
                    if state.is_running() {
                        Icon { icon: FaPause, width: 20, height: 20 }
                    } else {
                        Icon { icon: FaPlay, width: 20, height: 20 }
                    }
                }
                button {
                    class: "timer__reset",
                    title: "Reset Timer",
                    onclick: move |_| countdown.write().reset(),
                    Icon { icon: FaRotateLeft, width: 16, height: 16 }
                }
            }
        }
    }
}

fn play_chime() {
    #[cfg(target_arch = "wasm32")]
    {
        match web_sys::HtmlAudioElement::new_with_src(&CHIME.to_string()) {
            Ok(audio) => {
                if let Err(e) = audio.play() {
                    tracing::warn!("Audio play failed: {:?}", e);
                }
            }
            Err(e) => tracing::warn!("Audio unavailable: {:?}", e),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("Timer finished ({})", CHIME);
}
