//! Terminal UI: the app view, theme colors and components.

pub mod app;
pub mod colors;
pub mod components;
pub mod traits;
