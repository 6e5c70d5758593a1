//! Read-only view over the alerts payload
//!
//! The payload stays an opaque `serde_json::Value` in state. Rendering pulls
//! rows out of it leniently: a bare array, or an object with an `alerts`
//! array. Anything else yields no rows.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AlertRow {
    pub alertname: String,
    pub status: String,
    pub namespace: String,
    pub severity: String,
    pub summary: String,
}

/// Severity buckets for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical,
    Warning,
    Info,
    Unknown,
}

impl AlertRow {
    pub fn severity_level(&self) -> Severity {
        match self.severity.to_ascii_lowercase().as_str() {
            "critical" | "error" => Severity::Critical,
            "warning" => Severity::Warning,
            "info" | "none" => Severity::Info,
            _ => Severity::Unknown,
        }
    }
}

pub fn alert_rows(payload: &Value) -> Vec<AlertRow> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("alerts") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    let mut rows: Vec<AlertRow> = items
        .iter()
        .filter_map(|item| AlertRow::deserialize(item).ok())
        .collect();
    rows.sort_by(|a, b| {
        a.severity_level()
            .cmp(&b.severity_level())
            .then_with(|| a.alertname.cmp(&b.alertname))
    });
    rows
}
