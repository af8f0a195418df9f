//! Layouts: ordered, titled groups of statistic identifiers.
//!
//! Layouts are plain TOML:
//!
//! ```toml
//! [[groups]]
//! title = "Overview"
//! stats = ["count", "distinct-count", "nil%"]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::LoadError;
use crate::group::{stat_group, StatGroup};
use crate::result::AnalysisResult;

/// One titled group in a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    pub title: String,
    #[serde(default)]
    pub stats: Vec<String>,
}

impl GroupSpec {
    pub fn new(title: impl Into<String>, stats: &[&str]) -> Self {
        Self {
            title: title.into(),
            stats: stats.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub groups: Vec<GroupSpec>,
}

impl Default for Layout {
    /// Built-in layout for a single field's xray.
    fn default() -> Self {
        Self {
            groups: vec![
                GroupSpec::new(
                    "Overview",
                    &["count", "distinct-count", "nil%", "has-nils?", "all-distinct?"],
                ),
                GroupSpec::new(
                    "Distribution",
                    &[
                        "min",
                        "max",
                        "mean",
                        "median",
                        "sd",
                        "mean-median-spread",
                        "skewness",
                        "kurtosis",
                    ],
                ),
                GroupSpec::new(
                    "Values",
                    &["earliest", "latest", "sum", "range", "list-of-values"],
                ),
            ],
        }
    }
}

impl Layout {
    pub fn from_toml_str(s: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let layout = Self::from_toml_str(&content)?;
        info!(path = %path.display(), groups = layout.groups.len(), "loaded layout");
        Ok(layout)
    }

    /// Derive every visible group, in layout order.
    pub fn render<'a, V>(
        &'a self,
        result: &'a AnalysisResult<V>,
        show_descriptions: bool,
    ) -> Vec<StatGroup<'a, V>> {
        self.groups
            .iter()
            .filter_map(|g| stat_group(&g.title, result, &g.stats, show_descriptions))
            .collect()
    }

    /// Identifiers named by the layout that the result does not have.
    pub fn missing<'a, V>(&'a self, result: &AnalysisResult<V>) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.groups
            .iter()
            .flat_map(|g| g.stats.iter().map(String::as_str))
            .filter(|id| !result.is_present(id))
            .filter(|id| seen.insert(*id))
            .collect()
    }
}
