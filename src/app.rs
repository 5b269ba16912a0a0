//! Root application component with context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::pages::home::HomePage;
use crate::state::plot::PlotState;

/// Root application component.
///
/// Provides the shared plot state context, seeded with an initial uniform
/// dataset so the plot is never empty on first render.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let mut initial = PlotState::default();
    initial.regenerate_uniform(&mut SmallRng::from_os_rng());
    let plot = RwSignal::new(initial);
    provide_context(plot);

    view! {
        <Title text="SVM Playground"/>
        <HomePage/>
    }
}
