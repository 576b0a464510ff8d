//! Output formatting controls.

use serde::Serialize;
use serde_json::{json, Value};

/// Output control settings from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct OutputControls {
    pub json: bool,
    pub compact: bool,
}

impl OutputControls {
    /// Render data as JSON according to output controls.
    pub fn emit<T: Serialize>(&self, data: &T) -> String {
        let value = serde_json::to_value(data).unwrap_or(Value::Null);
        if self.compact {
            serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Print data to stdout according to output controls.
    pub fn print<T: Serialize>(&self, data: &T) {
        println!("{}", self.emit(data));
    }
}

/// Print labelled lines with aligned values.
pub fn print_fields(fields: &[(&str, String)]) {
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in fields {
        println!("{label:<width$} : {value}");
    }
}

/// Format error as JSON.
pub fn format_error(error: &str, code: &str) -> String {
    serde_json::to_string(&json!({
        "success": false,
        "error": error,
        "code": code,
    }))
    .unwrap_or_else(|_| format!(r#"{{"error":"{}"}}"#, error))
}
