//! TOML flattening and application

use std::path::Path;

use toml::{Table, Value};

use super::{ConfigReport, ConfigResult};
use crate::cvars::{registry, CVarError, CVarRegistry};

/// Text handed to the CVar's parser, or None for unsupported values
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Integer(value) => Some(value.to_string()),
        Value::Float(value) => Some(value.to_string()),
        Value::Boolean(value) => Some(if *value { "1" } else { "0" }.to_string()),
        Value::String(value) => Some(value.clone()),
        Value::Datetime(value) => Some(value.to_string()),
        Value::Array(_) | Value::Table(_) => None,
    }
}

/// Flatten nested tables into dotted names
fn flatten(prefix: &str, table: Table, out: &mut Vec<(String, Value)>) {
    for (key, value) in table {
        let name = if prefix.is_empty() {
            key
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            Value::Table(inner) => flatten(&name, inner, out),
            value => out.push((name, value)),
        }
    }
}

/// Apply TOML text to `registry`
pub fn apply_str(registry: &CVarRegistry, content: &str) -> ConfigResult<ConfigReport> {
    let table: Table = toml::from_str(content)?;

    let mut entries = Vec::new();
    flatten("", table, &mut entries);

    let mut report = ConfigReport::default();
    for (name, value) in entries {
        let Some(text) = value_text(&value) else {
            tracing::warn!("Unsupported value for CVar {} in config", name);
            report
                .rejected
                .push((name, "unsupported value type".to_string()));
            continue;
        };

        match registry.set_from_str(&name, &text) {
            Ok(true) => report.applied.push(name),
            Ok(false) => {
                tracing::debug!("Config value for init-once CVar {} ignored", name);
                report.ignored.push(name);
            }
            Err(CVarError::NotFound(_)) => {
                tracing::warn!("Config sets unknown CVar {}", name);
                report.unknown.push(name);
            }
            Err(err) => {
                tracing::warn!("Config value rejected: {}", err);
                report.rejected.push((name, err.to_string()));
            }
        }
    }

    Ok(report)
}

/// Read a TOML file and apply it to `registry`
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn apply_file(registry: &CVarRegistry, path: impl AsRef<Path>) -> ConfigResult<ConfigReport> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let report = apply_str(registry, &content)?;

    tracing::info!(
        "Applied {} CVars from {:?} ({} ignored, {} unknown, {} rejected)",
        report.applied.len(),
        path.as_ref(),
        report.ignored.len(),
        report.unknown.len(),
        report.rejected.len()
    );
    Ok(report)
}

/// Read a TOML file and apply it to the global registry
pub fn load_file(path: impl AsRef<Path>) -> ConfigResult<ConfigReport> {
    apply_file(registry(), path)
}
