// File: crates/chart-core/src/label.rs
// Summary: Numeric label formatting.

/// Two-decimal label for a value, or `placeholder` when it is missing.
pub fn format_value(value: Option<f64>, placeholder: &str) -> String {
    match value.filter(|v| v.is_finite()) {
        // -0.004 would otherwise print as "-0.00"
        Some(v) if v.abs() < 0.005 => "0.00".to_string(),
        Some(v) => format!("{v:.2}"),
        None => placeholder.to_string(),
    }
}
