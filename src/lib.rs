//! # svm-playground
//!
//! Leptos + WASM front-end for an interactive support vector machine
//! teaching page: a draggable decision boundary over a random dataset, with
//! margin/angle controls, a hover-driven explanation panel, and collapsible
//! theory sections.
//!
//! This crate contains pages, components, application state, and the
//! geometry/dataset utilities behind the plot.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;
