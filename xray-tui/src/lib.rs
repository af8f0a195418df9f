//! xray TUI - terminal viewer for analysis results
//!
//! Renders each group of a layout as a titled grid of statistic cards,
//! skipping groups whose statistics are all absent.

pub mod app;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::AppState;
pub use theme::Theme;
pub use widgets::{Heading, SimpleStat, StatGroupPanel};

#[cfg(test)]
mod test_helpers;
