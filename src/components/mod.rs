//! Reusable UI component modules.
//!
//! Components render the page surfaces while reading/writing shared state
//! from Leptos context providers.

pub mod accordion;
pub mod boundary_plot;
pub mod controls;
pub mod explanation_panel;
pub mod theory_panel;
