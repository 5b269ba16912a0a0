//! Expandable theory sections with independent open/closed toggles.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

use leptos::prelude::*;

use crate::content::{Block, Section};
use crate::state::sections::SectionsState;

/// Chevron indicator for a section header.
#[must_use]
pub fn chevron(open: bool) -> &'static str {
    if open { "▲" } else { "▼" }
}

fn block_view(block: &'static Block) -> AnyView {
    match block {
        Block::Paragraph(text) => view! { <p class="accordion__paragraph">{*text}</p> }.into_any(),
        Block::Bullets(items) => view! {
            <ul class="accordion__list">
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
        Block::Steps(items) => view! {
            <ol class="accordion__list">
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ol>
        }
        .into_any(),
    }
}

/// Section list where each item toggles independently; any number of
/// sections may be open at once.
#[component]
pub fn Accordion(sections: &'static [Section]) -> impl IntoView {
    let open_sections = RwSignal::new(SectionsState::default());

    view! {
        <div class="accordion">
            {sections
                .iter()
                .enumerate()
                .map(|(id, section)| {
                    let is_open = move || open_sections.with(|s| s.is_open(id));
                    view! {
                        <div class="accordion__item">
                            <button
                                class="accordion__header"
                                on:click=move |_| open_sections.update(|s| s.toggle(id))
                            >
                                <span class="accordion__title">{section.title}</span>
                                <span class="accordion__chevron">{move || chevron(is_open())}</span>
                            </button>
                            <Show when=is_open>
                                <div class="accordion__body">
                                    {section.body.iter().map(block_view).collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
