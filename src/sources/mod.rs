//! Spreadsheet file readers.
//!
//! Each reader turns a file into in-memory [`Table`]s for the parser. The
//! format is chosen by file extension.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use crate::core::Table;

pub mod delimited;
pub mod json;

pub const SUPPORTED_EXTENSIONS: &[&str] = &["json", "csv", "tsv"];

pub fn load_workbook(path: &Path) -> Result<Vec<Table>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        bail!(
            "Unsupported spreadsheet format: {} (expected one of: {})",
            path.display(),
            SUPPORTED_EXTENSIONS.join(", ")
        );
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read spreadsheet: {}", path.display()))?;
    let sheet_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let tables = match extension.as_str() {
        "json" => json::parse_workbook(&content, &sheet_name)
            .with_context(|| format!("Failed to parse spreadsheet: {}", path.display()))?,
        "csv" => vec![delimited::parse_table(&content, ',', &sheet_name)],
        _ => vec![delimited::parse_table(&content, '\t', &sheet_name)],
    };

    tracing::debug!(
        path = %path.display(),
        sheets = tables.len(),
        "Loaded spreadsheet"
    );
    Ok(tables)
}
