//! xray core: analysis results and the stat groups derived from them.
//!
//! - [`AnalysisResult`]: statistic identifier to optional [`StatValue`]
//! - [`stat_group`]: visibility and ordering rule for one titled panel
//! - [`Layout`]: ordered groups of identifiers, loaded from TOML

pub mod error;
pub mod group;
pub mod layout;
pub mod result;
pub mod stat;

pub use error::LoadError;
pub use group::{at_least_one_stat, stat_group, StatCard, StatGroup};
pub use layout::{GroupSpec, Layout};
pub use result::AnalysisResult;
pub use stat::{StatDatum, StatValue};
