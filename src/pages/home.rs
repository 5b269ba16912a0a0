//! Home page: the interactive plot plus the theory reading panel.

use leptos::prelude::*;

use crate::components::boundary_plot::BoundaryPlot;
use crate::components::controls::PlotControls;
use crate::components::explanation_panel::ExplanationPanel;
use crate::components::theory_panel::TheoryPanel;

/// Single page composing the two independent presentation units: the
/// boundary visualizer (plot, controls, explanation card) and the theory
/// panel. They share no state.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h2 class="home-page__title">"Interactive support vector machine"</h2>
            <div class="home-page__playground">
                <div class="home-page__plot-column">
                    <BoundaryPlot/>
                    <PlotControls/>
                </div>
                <ExplanationPanel/>
            </div>
            <TheoryPanel/>
        </div>
    }
}
