//! Reusable UI components (footer, page strip).

pub mod footer;
pub mod pages;
