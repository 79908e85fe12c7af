//! HTML assembly for the worklist pages.
//!
//! No template engine; pages are built as strings from small helper
//! functions, the same way the service builds its other inline HTML.

pub mod helpers;
pub mod pages;

pub use helpers::{filter_options, progress_bar, progress_bar_sum, total_estimates, ProgressBarOptions};
