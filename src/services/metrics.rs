use crate::domain::constants::{ACCURACY_KEYS, F1_KEYS};
use crate::domain::models::{MetricValue, MetricsLoad, NamedMetric};
use serde_json::Value;
use std::path::Path;

pub fn load_metrics(path: &Path) -> MetricsLoad {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("metrics document {} not found", path.display());
            return MetricsLoad::Absent;
        }
        Err(e) => {
            log::warn!("metrics document {} unreadable: {}", path.display(), e);
            return MetricsLoad::Invalid(format!("unreadable: {}", e));
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(map)) => MetricsLoad::Loaded(map),
        Ok(other) => {
            let reason = format!("expected a JSON object, found {}", json_kind(&other));
            log::warn!("metrics document {}: {}", path.display(), reason);
            MetricsLoad::Invalid(reason)
        }
        Err(e) => {
            log::warn!("metrics document {} is not valid JSON: {}", path.display(), e);
            MetricsLoad::Invalid(format!("not valid JSON: {}", e))
        }
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

/// Numbers and numeric strings count; everything else is not available.
pub fn metric_value(v: &Value) -> MetricValue {
    let parsed = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(x) if x.is_finite() => MetricValue::Available(x),
        _ => MetricValue::NotAvailable,
    }
}

/// First alias holding a usable value wins.
pub fn extract(load: &MetricsLoad, keys: &[&str]) -> MetricValue {
    let Some(map) = load.entries() else {
        return MetricValue::NotAvailable;
    };
    keys.iter()
        .filter_map(|k| map.get(*k))
        .map(metric_value)
        .find(|v| matches!(v, MetricValue::Available(_)))
        .unwrap_or(MetricValue::NotAvailable)
}

pub fn accuracy(load: &MetricsLoad) -> MetricValue {
    extract(load, ACCURACY_KEYS)
}

pub fn f1(load: &MetricsLoad) -> MetricValue {
    extract(load, F1_KEYS)
}

/// Numeric metrics other than accuracy/F1, sorted by name.
pub fn extra_metrics(load: &MetricsLoad) -> Vec<NamedMetric> {
    let Some(map) = load.entries() else {
        return vec![];
    };
    let mut out: Vec<NamedMetric> = map
        .iter()
        .filter(|(k, _)| !ACCURACY_KEYS.contains(&k.as_str()) && !F1_KEYS.contains(&k.as_str()))
        .filter_map(|(k, v)| {
            metric_value(v).value().map(|value| NamedMetric {
                name: k.clone(),
                value,
            })
        })
        .collect();
    out.sort_by(|a, b| a.name.cmp(&b.name));
    out
}
