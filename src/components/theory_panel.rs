//! Theory reading panel wrapping the accordion.

use leptos::prelude::*;

use crate::components::accordion::Accordion;
use crate::content;

#[component]
pub fn TheoryPanel() -> impl IntoView {
    view! {
        <section class="theory-panel">
            <h3 class="theory-panel__title">"Support vector machine theory"</h3>
            <Accordion sections=content::theory_sections()/>
        </section>
    }
}
