//! Test helpers for building xrays and reading rendered buffers

use ratatui::buffer::Buffer;
use xray_core::{AnalysisResult, StatDatum, StatValue};

pub fn sample_xray() -> AnalysisResult {
    let mut xray: AnalysisResult = vec![
        (
            "count",
            StatValue::new("Count", 1200i64).with_description("Number of rows analyzed"),
        ),
        ("distinct-count", StatValue::new("Distinct values", 87i64)),
        ("nil%", StatValue::new("Nil %", 0.0)),
        ("min", StatValue::new("Min", 1.5)),
        ("max", StatValue::new("Max", 99.25)),
        ("has-nils?", StatValue::new("Has nils", false)),
        (
            "list-of-values",
            StatValue::new(
                "Values",
                StatDatum::List(vec!["red".into(), "green".into(), "blue".into()]),
            ),
        ),
    ]
    .into_iter()
    .map(|(id, v)| (id.to_string(), v))
    .collect();
    xray.insert("mean", None);
    xray
}

/// Rendered buffer as one string per row.
pub fn buffer_text(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect()
        })
        .collect()
}
