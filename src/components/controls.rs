//! Margin/angle sliders and dataset regeneration controls.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use std::num::ParseFloatError;

use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::state::plot::{ANGLE_MAX_DEG, ANGLE_MIN_DEG, FocusTopic, MARGIN_MAX, MARGIN_MIN, PlotState};

/// Parse a range-input value. The control enforces the numeric range, so the
/// only failure mode is a non-numeric string.
pub fn parse_slider_value(raw: &str) -> Result<f64, ParseFloatError> {
    raw.trim().parse()
}

/// Sliders for margin width and boundary angle, plus the two dataset buttons.
#[component]
pub fn PlotControls() -> impl IntoView {
    let plot = expect_context::<RwSignal<PlotState>>();

    let set_focus = move |topic: FocusTopic| plot.update(|p| p.focus = topic);

    let on_margin_input = move |ev: leptos::ev::Event| {
        if let Ok(margin) = parse_slider_value(&event_target_value(&ev)) {
            plot.update(|p| p.margin = margin);
        }
    };
    let on_angle_input = move |ev: leptos::ev::Event| {
        if let Ok(angle) = parse_slider_value(&event_target_value(&ev)) {
            plot.update(|p| p.angle_deg = angle);
        }
    };
    let regenerate_uniform = move |_| {
        let mut rng = SmallRng::from_os_rng();
        plot.update(|p| p.regenerate_uniform(&mut rng));
    };
    let regenerate_separable = move |_| {
        let mut rng = SmallRng::from_os_rng();
        plot.update(|p| p.regenerate_separable(&mut rng));
    };

    view! {
        <div class="plot-controls">
            <label
                class="plot-controls__field"
                on:pointerenter=move |_| set_focus(FocusTopic::Margin)
            >
                <span class="plot-controls__label">
                    {move || format!("Margin: {}", plot.with(|p| p.margin))}
                </span>
                <input
                    type="range"
                    min=MARGIN_MIN
                    max=MARGIN_MAX
                    step="1"
                    prop:value=move || plot.with(|p| p.margin.to_string())
                    on:input=on_margin_input
                />
            </label>
            <label
                class="plot-controls__field"
                on:pointerenter=move |_| set_focus(FocusTopic::Angle)
            >
                <span class="plot-controls__label">
                    {move || format!("Angle: {}°", plot.with(|p| p.angle_deg))}
                </span>
                <input
                    type="range"
                    min=ANGLE_MIN_DEG
                    max=ANGLE_MAX_DEG
                    step="1"
                    prop:value=move || plot.with(|p| p.angle_deg.to_string())
                    on:input=on_angle_input
                />
            </label>
            <div class="plot-controls__actions">
                <button class="plot-controls__button" on:click=regenerate_uniform>
                    "Random points"
                </button>
                <button class="plot-controls__button" on:click=regenerate_separable>
                    "Separable points"
                </button>
            </div>
        </div>
    }
}
