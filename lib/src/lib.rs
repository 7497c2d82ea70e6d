//! Title bar widget for paged views
//!
//! The bar shows the title of the current page centered, with the titles of
//! the previous and next pages peeking in from the edges. As the paged view
//! is dragged the labels slide continuously, and the centered title is
//! highlighted only while it sits on the visual center of the bar.
//!
//! The crate is split into:
//!
//! - [`scroll`]: tracks the settled page and pixel offset reported by a
//!   paged view through [`scroll::PageChangeListener`]
//! - [`layout`]: the per-frame computation of label positions and styles
//! - [`widget`]: a [ratatui](https://ratatui.rs) widget drawing the layout
//! - [`pager`]: a minimal paged container producing scroll notifications
//!
//! # Examples
//!
//! <https://github.com/robgonnella/r-pagebar/blob/main/lib/examples/layout-sweep.rs>
//!
//! ```bash
//! cargo run --example layout-sweep -p pagebar
//! ```

#![deny(missing_docs)]
pub mod error;
pub mod layout;
pub mod measure;
pub mod pager;
pub mod scroll;
pub mod text;
pub mod widget;
