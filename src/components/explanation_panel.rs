//! Explanation card keyed by the current pointer focus.

use leptos::prelude::*;

use crate::content;
use crate::state::plot::PlotState;

/// Read-only card showing the explanation for the element the pointer last
/// entered.
#[component]
pub fn ExplanationPanel() -> impl IntoView {
    let plot = expect_context::<RwSignal<PlotState>>();

    view! {
        <aside class="explanation-panel">
            <h3 class="explanation-panel__title">"Explanation"</h3>
            <p class="explanation-panel__body">
                {move || content::explanation(plot.with(|p| p.focus))}
            </p>
        </aside>
    }
}
