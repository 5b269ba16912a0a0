//! Interactive decision-boundary plot.
//!
//! ARCHITECTURE
//! ============
//! The plot renders the dataset and three parallel boundary lines as SVG.
//! Dragging anywhere on the surface re-projects the pointer onto the
//! boundary normal, so the line tracks the pointer's perpendicular distance
//! from the plot center instead of accumulating per-event deltas. Hovering a
//! primitive updates the shared focus topic read by the explanation panel.

use leptos::prelude::*;

use crate::state::plot::{DragState, FocusTopic, PlotState};
use crate::util::dataset::Label;
use crate::util::geometry::{self, PLOT_SIZE};
use crate::util::plot_input::pointer_delta_from_center;

/// Marker fill for a sample.
#[must_use]
pub fn sample_fill(label: Label) -> &'static str {
    match label {
        Label::Positive => "#3B82F6",
        Label::Negative => "#D94B4B",
    }
}

/// SVG plot surface with drag-to-move boundary interaction.
#[component]
pub fn BoundaryPlot() -> impl IntoView {
    let plot = expect_context::<RwSignal<PlotState>>();
    let surface_ref = NodeRef::<leptos::html::Div>::new();

    let set_focus = move |topic: FocusTopic| plot.update(|p| p.focus = topic);

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        plot.update(PlotState::begin_drag);
    };
    let end_drag = move |_ev: leptos::ev::PointerEvent| {
        plot.update(PlotState::end_drag);
    };
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if plot.with(|p| p.drag != DragState::Dragging) {
            return;
        }
        let Some(surface) = surface_ref.get() else {
            return;
        };
        let (dx, dy) = pointer_delta_from_center(&ev, &surface);
        plot.update(|p| p.drag_to(dx, dy));
    };

    let margin_below = move || {
        plot.with(|p| geometry::boundary_segment(p.angle_deg, p.offset - (p.margin * 0.5)).to_path_data())
    };
    let decision = move || plot.with(|p| geometry::boundary_segment(p.angle_deg, p.offset).to_path_data());
    let margin_above = move || {
        plot.with(|p| geometry::boundary_segment(p.angle_deg, p.offset + (p.margin * 0.5)).to_path_data())
    };

    // Memoized so focus/offset updates leave the circle elements untouched;
    // re-creating them under a hovering pointer would re-fire pointerenter.
    let samples = Memo::new(move |_| plot.with(|p| p.samples.clone()));
    let markers = move || {
        samples
            .get()
            .into_iter()
            .map(|sample| {
                view! {
                    <circle
                        class="boundary-plot__sample"
                        cx=sample.x
                        cy=sample.y
                        r="5"
                        fill=sample_fill(sample.label)
                        on:pointerenter=move |_| set_focus(FocusTopic::Points)
                    />
                }
            })
            .collect_view()
    };

    view! {
        <div
            class="boundary-plot"
            node_ref=surface_ref
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=end_drag
            on:pointercancel=end_drag
            on:pointerleave=end_drag
            on:pointerenter=move |_| set_focus(FocusTopic::Interaction)
        >
            <svg
                class="boundary-plot__svg"
                viewBox=format!("0 0 {PLOT_SIZE} {PLOT_SIZE}")
                width=PLOT_SIZE
                height=PLOT_SIZE
            >
                {markers}
                <path
                    class="boundary-plot__margin"
                    d=margin_below
                    on:pointerenter=move |_| set_focus(FocusTopic::Margin)
                />
                <path
                    class="boundary-plot__decision"
                    d=decision
                    on:pointerenter=move |_| set_focus(FocusTopic::Hyperplane)
                />
                <path
                    class="boundary-plot__margin"
                    d=margin_above
                    on:pointerenter=move |_| set_focus(FocusTopic::Margin)
                />
            </svg>
        </div>
    }
}
