//! The analysis result ("xray"): statistic identifier to optional value.
//!
//! An identifier can be missing from the map, mapped to an explicit null,
//! or mapped to something that does not parse as a statistic. All three
//! read back as absent.

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::stat::StatValue;

/// Read-only view over one analyzed entity's statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult<V = StatValue> {
    entries: HashMap<String, Option<V>>,
}

impl<V> Default for AnalysisResult<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V> AnalysisResult<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a statistic. `None` for both missing keys and absent values.
    pub fn get(&self, id: &str) -> Option<&V> {
        self.entries.get(id).and_then(Option::as_ref)
    }

    pub fn is_present(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of present statistics.
    pub fn present_count(&self) -> usize {
        self.entries.values().filter(|v| v.is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry; `None` records the identifier as explicitly absent.
    pub fn insert(&mut self, id: impl Into<String>, value: Option<V>) {
        self.entries.insert(id.into(), value);
    }
}

impl<V> FromIterator<(String, V)> for AnalysisResult<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k, Some(v))).collect(),
        }
    }
}

impl<V: DeserializeOwned> AnalysisResult<V> {
    /// Parse an xray JSON object. Null and malformed entries become absent.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let doc: Value = serde_json::from_str(json)?;
        Self::from_json_value(doc)
    }

    pub fn from_json_value(doc: Value) -> Result<Self, LoadError> {
        let map = match doc {
            Value::Object(map) => map,
            other => {
                return Err(LoadError::NotAnObject {
                    found: json_kind(&other),
                })
            }
        };

        let entries = map
            .into_iter()
            .map(|(id, raw)| {
                let value = match raw {
                    Value::Null => None,
                    raw => match serde_json::from_value::<V>(raw) {
                        Ok(v) => Some(v),
                        Err(e) => {
                            debug!(stat = %id, error = %e, "skipping malformed statistic");
                            None
                        }
                    },
                };
                (id, value)
            })
            .collect();

        Ok(Self { entries })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let result = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            entries = result.len(),
            present = result.present_count(),
            "loaded xray"
        );
        Ok(result)
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
