//! Shared application state.
//!
//! Keeps interaction state out of component bodies so it can be unit tested
//! without a DOM.

pub mod plot;
pub mod sections;
