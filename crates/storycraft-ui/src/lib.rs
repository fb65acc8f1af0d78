//! StoryCraft UI Components
//!
//! Reusable presentational Dioxus components. These render props and emit
//! events; every navigation, theme, and tooltip decision lives in
//! `storycraft-core` and the application shell.

pub mod components;

pub use components::*;
