use anyhow::{Result, bail};
use serde::Deserialize;
use serde_json::Value;

use crate::core::Table;

/// Workbook with named sheets: `{"sheets": [{"name": "...", "rows": [[...]]}]}`.
#[derive(Debug, Deserialize)]
struct WorkbookDocument {
    sheets: Vec<SheetDocument>,
}

#[derive(Debug, Deserialize)]
struct SheetDocument {
    #[serde(default)]
    name: Option<String>,
    rows: Vec<Vec<Value>>,
}

/// Parse a JSON workbook.
///
/// Accepts either a bare array of rows (one sheet named `default_name`) or a
/// workbook object with a `sheets` array. Numbers and booleans become their
/// textual form and `null` becomes an empty cell.
pub fn parse_workbook(content: &str, default_name: &str) -> Result<Vec<Table>> {
    let value: Value = serde_json::from_str(content)?;

    match value {
        Value::Array(_) => {
            let rows: Vec<Vec<Value>> = serde_json::from_value(value)?;
            Ok(vec![to_table(default_name.to_string(), rows)?])
        }
        Value::Object(_) => {
            let workbook: WorkbookDocument = serde_json::from_value(value)?;
            workbook
                .sheets
                .into_iter()
                .enumerate()
                .map(|(i, sheet)| {
                    let name = sheet.name.unwrap_or_else(|| format!("Sheet{}", i + 1));
                    to_table(name, sheet.rows)
                })
                .collect()
        }
        _ => bail!("Expected an array of rows or an object with a \"sheets\" array"),
    }
}

fn to_table(name: String, rows: Vec<Vec<Value>>) -> Result<Table> {
    let mut cells = Vec::with_capacity(rows.len());
    for (row_index, row) in rows.into_iter().enumerate() {
        let mut out = Vec::with_capacity(row.len());
        for (column_index, value) in row.into_iter().enumerate() {
            out.push(match value {
                Value::Null => String::new(),
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Array(_) | Value::Object(_) => bail!(
                    "Sheet \"{}\": cell at row {}, column {} is not a scalar value",
                    name,
                    row_index + 1,
                    column_index + 1
                ),
            });
        }
        cells.push(out);
    }
    Ok(Table::new(name, cells))
}
