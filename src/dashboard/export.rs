//! CSV export of the dashboard's headline figures.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::data::{export_metrics, top_products, ExportRow, Period};
use crate::error::DashboardError;

/// File name for an export made on `date`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("sales-dashboard-{}.csv", date.format("%Y-%m-%d"))
}

fn push_rows(lines: &mut Vec<String>, header: &str, rows: &[ExportRow]) {
    lines.push(header.to_string());
    lines.extend(rows.iter().map(|r| format!("{},{}", r.label, r.value)));
}

/// Build the export text. Fields are written verbatim, no quoting.
pub fn export_csv(date: NaiveDate, period: Period) -> String {
    let mut lines = vec![
        "Sales Dashboard Export".to_string(),
        format!("Export Date: {}", date.format("%-m/%-d/%Y")),
        format!("Period: {period}"),
        String::new(),
    ];
    push_rows(&mut lines, "Metrics,Value", export_metrics());
    lines.push(String::new());
    push_rows(&mut lines, "Top Products,Sales", top_products());
    lines.join("\n")
}

/// Write the export into `dir`, creating it if needed. Returns the file path.
pub fn export_to_dir(dir: &Path, date: NaiveDate, period: Period) -> Result<PathBuf, DashboardError> {
    fs::create_dir_all(dir).map_err(|source| DashboardError::CreateExportDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(export_file_name(date));
    fs::write(&path, export_csv(date, period)).map_err(|source| DashboardError::WriteExport {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), %period, "exported dashboard data");
    Ok(path)
}
