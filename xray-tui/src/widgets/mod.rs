//! Widgets for rendering stat groups.

pub mod heading;
pub mod simple_stat;
pub mod stat_group;

pub use heading::Heading;
pub use simple_stat::SimpleStat;
pub use stat_group::{StatGroupPanel, GRID_COLUMNS};
