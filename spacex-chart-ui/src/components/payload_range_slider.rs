//! Payload range slider built from two range inputs sharing one track.

use crate::state::AppState;
use dioxus::prelude::*;
use spacex_launch::payload_range::{SLIDER_MARKS, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};

/// DOM id of the payload slider.
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";

/// Payload range slider (0-10000 kg, step 1000).
///
/// Dragging one handle past the other pushes the other along, so the
/// selection always satisfies low <= high.
#[component]
pub fn PayloadRangeSlider() -> Element {
    let mut state = use_context::<AppState>();
    let low = (state.payload_low)();
    let high = (state.payload_high)();
    let range_label = format!("{:.0} - {:.0}", low, high);

    let on_low_input = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            state.payload_low.set(value);
            if value > (state.payload_high)() {
                state.payload_high.set(value);
            }
        }
    };

    let on_high_input = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            state.payload_high.set(value);
            if value < (state.payload_low)() {
                state.payload_low.set(value);
            }
        }
    };

    rsx! {
        div {
            id: PAYLOAD_SLIDER_ID,
            style: "margin: 8px 0; max-width: 720px;",
            p {
                style: "margin: 0 0 4px 0;",
                "Payload range (Kg): "
                strong { "{range_label}" }
            }
            div {
                style: "display: flex; gap: 8px; align-items: center;",
                input {
                    r#type: "range",
                    min: "{SLIDER_MIN}",
                    max: "{SLIDER_MAX}",
                    step: "{SLIDER_STEP}",
                    value: "{low}",
                    style: "flex: 1;",
                    oninput: on_low_input,
                }
                input {
                    r#type: "range",
                    min: "{SLIDER_MIN}",
                    max: "{SLIDER_MAX}",
                    step: "{SLIDER_STEP}",
                    value: "{high}",
                    style: "flex: 1;",
                    oninput: on_high_input,
                }
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 12px; color: #666;",
                for mark in SLIDER_MARKS {
                    span { "{mark}" }
                }
            }
        }
    }
}
