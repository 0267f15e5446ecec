use crate::Result;
use crate::report::Report;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Convert a report to a JSON array of row objects
///
/// Each object carries `URL_ID`, `URL` and the thirteen metric fields under
/// their report column names.
pub fn convert_to_json(report: &Report, config: &JsonConfig) -> Result<String> {
    if config.pretty {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(serde_json::to_string(report)?)
    }
}

/// Convert a report to a `serde_json::Value`
pub fn report_to_value(report: &Report) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(report)?)
}
