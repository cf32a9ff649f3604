// File: crates/demo/src/input.rs
// Summary: Loading balance series from JSON or CSV files.

use anyhow::{bail, Context, Result};
use balance_chart_core::series::Point;
use balance_chart_core::{BucketMode, ChartSet, Series};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// Load `path` into a chart set. A plain series (JSON array or CSV) is stored
/// under `mode`; a JSON object with `hourly`/`daily`/`monthly` keys fills all three.
pub fn load_chart_set(path: &Path, mode: BucketMode) -> Result<ChartSet> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            parse_json(&text, mode)
        }
        "csv" => {
            let series = load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let mut set = ChartSet::default();
            set.set_series(mode, series);
            Ok(set)
        }
        other => bail!("unsupported input extension '{other}' (expected .json or .csv)"),
    }
}

pub fn parse_json(text: &str, mode: BucketMode) -> Result<ChartSet> {
    let value: Value = serde_json::from_str(text).context("input is not valid JSON")?;
    match value {
        Value::Array(_) => {
            let series: Series = serde_json::from_value(value).context("parsing series rows")?;
            let mut set = ChartSet::default();
            set.set_series(mode, series);
            Ok(set)
        }
        Value::Object(_) => serde_json::from_value(value).context("parsing hourly/daily/monthly series"),
        _ => bail!("expected a JSON array of [label, value] rows or an object of series"),
    }
}

/// Read `label,value` rows. Header names are matched loosely; without a
/// recognised header the first two columns are used and the first row is
/// plotted like any other.
pub fn load_csv(path: &Path) -> Result<Series> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_csv(rdr)
}

pub fn read_csv<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Series> {
    let header_row = rdr.headers()?.clone();
    let headers = header_row.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let label_col = idx(&["label", "timestamp", "time", "date", "datetime", "hour", "month"]);
    let value_col = idx(&["value", "balance", "avg_balance"]);
    let i_label = label_col.unwrap_or(0);
    let i_value = value_col.unwrap_or(1);

    let mut series = Series::new();
    // no recognised header: the first row is data
    if label_col.is_none() && value_col.is_none() {
        if let Some(label) = header_row.get(i_label) {
            debug!("csv has no header row");
            series.push(Point::new(label, header_row.get(i_value).and_then(|s| s.parse::<f64>().ok())));
        }
    }
    for rec in rdr.records() {
        let rec = rec?;
        let Some(label) = rec.get(i_label) else {
            warn!(line = ?rec.position().map(|p| p.line()), "row without a label column; skipped");
            continue;
        };
        let value = rec.get(i_value).and_then(|s| s.parse::<f64>().ok());
        series.push(Point::new(label, value));
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_array_goes_to_selected_mode() {
        let set = parse_json(r#"[["2024-03", 12.5], ["2024-04", null]]"#, BucketMode::Monthly).unwrap();
        assert_eq!(set.monthly.len(), 2);
        assert!(set.daily.is_empty());
        assert_eq!(set.monthly.points[1].value, None);
    }

    #[test]
    fn json_object_fills_all_modes() {
        let text = r#"{"hourly": [["2024-03-05 14:00:00", 1.0]], "daily": [["2024-03-05", 2.0]]}"#;
        let set = parse_json(text, BucketMode::Daily).unwrap();
        assert_eq!(set.hourly.len(), 1);
        assert_eq!(set.daily.len(), 1);
        assert!(set.monthly.is_empty());
    }

    #[test]
    fn csv_with_named_columns_and_bad_value() {
        let data = "balance,timestamp\n10.5,2024-01-01\nn/a,2024-01-02\n";
        let rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(data.as_bytes());
        let series = read_csv(rdr).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.points[0].label, "2024-01-01");
        assert_eq!(series.points[0].value, Some(10.5));
        assert_eq!(series.points[1].value, None);
    }

    #[test]
    fn csv_without_header_keeps_first_row() {
        let data = "2024-01-01,10.5\n2024-01-02,11\n";
        let rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(data.as_bytes());
        let series = read_csv(rdr).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.points[0].label, "2024-01-01");
        assert_eq!(series.points[0].value, Some(10.5));
        assert_eq!(series.points[1].value, Some(11.0));
    }
}
