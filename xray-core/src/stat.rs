//! Statistic values produced by the analysis backend.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single statistic as it appears in an xray document.
///
/// Any JSON object is a statistic. Fields other than `label`, `value` and
/// `description` are kept in `extra` and serialize back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub value: StatDatum,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StatValue {
    pub fn new(label: impl Into<String>, value: impl Into<StatDatum>) -> Self {
        Self {
            label: Some(label.into()),
            value: value.into(),
            ..Self::default()
        }
    }

    /// A statistic carrying only a value.
    pub fn unlabeled(value: impl Into<StatDatum>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The label, or `id` when the document gives none.
    pub fn label_or<'a>(&'a self, id: &'a str) -> &'a str {
        self.label.as_deref().unwrap_or(id)
    }
}

/// Raw payload of a statistic. Untagged so plain JSON values deserialize
/// directly; objects and anything else land in `Other` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatDatum {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<StatDatum>),
    Other(Value),
}

impl fmt::Display for StatDatum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatDatum::Null => f.write_str("-"),
            StatDatum::Bool(true) => f.write_str("Yes"),
            StatDatum::Bool(false) => f.write_str("No"),
            StatDatum::Integer(n) => write!(f, "{n}"),
            StatDatum::Float(x) => f.write_str(&format_float(*x)),
            StatDatum::Text(s) => f.write_str(s),
            StatDatum::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            StatDatum::Other(v) => write!(f, "{v}"),
        }
    }
}

/// Two decimals, trailing zeros trimmed.
fn format_float(x: f64) -> String {
    if !x.is_finite() {
        return format!("{x}");
    }
    let s = format!("{x:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

impl From<bool> for StatDatum {
    fn from(v: bool) -> Self {
        StatDatum::Bool(v)
    }
}

impl From<i64> for StatDatum {
    fn from(v: i64) -> Self {
        StatDatum::Integer(v)
    }
}

impl From<f64> for StatDatum {
    fn from(v: f64) -> Self {
        StatDatum::Float(v)
    }
}

impl From<&str> for StatDatum {
    fn from(v: &str) -> Self {
        StatDatum::Text(v.to_string())
    }
}

impl From<String> for StatDatum {
    fn from(v: String) -> Self {
        StatDatum::Text(v)
    }
}
