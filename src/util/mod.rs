//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate geometry and browser/environment concerns from
//! component logic to improve reuse and testability.

pub mod dataset;
pub mod geometry;
pub mod plot_input;
