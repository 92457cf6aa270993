//! Workbook writers: one CSV file per sheet, or a single JSON document.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ExportError, Result};
use crate::sheet::{Cell, Workbook};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    #[default]
    #[serde(rename = "xlsx")]
    Xlsx,
    #[serde(rename = "csv")]
    Csv,
    #[serde(rename = "json")]
    Json,
}

impl ExportFormat {
    /// Where a workbook exported to `out` lands.
    ///
    /// CSV fills the directory `out`; xlsx and json write one file and get
    /// their extension added when `out` has none.
    pub fn output_path(self, out: &Path) -> PathBuf {
        match self {
            ExportFormat::Csv => out.to_path_buf(),
            ExportFormat::Xlsx | ExportFormat::Json if out.extension().is_none() => {
                out.with_extension(self.to_string())
            }
            ExportFormat::Xlsx | ExportFormat::Json => out.to_path_buf(),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "xlsx" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Xlsx => f.write_str("xlsx"),
            ExportFormat::Csv => f.write_str("csv"),
            ExportFormat::Json => f.write_str("json"),
        }
    }
}

/// Write each sheet to `<dir>/<sheet name>.csv`, creating `dir` if needed.
///
/// Returns the written paths in sheet order.
pub fn write_csv_dir(workbook: &Workbook, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(workbook.sheets.len());
    for sheet in &workbook.sheets {
        let path = dir.join(format!("{}.csv", sheet.name));
        let mut wtr = csv::Writer::from_path(&path)?;
        wtr.write_record(&sheet.headers)?;
        for row in &sheet.rows {
            wtr.write_record(row.iter().map(|c| c.to_string()))?;
        }
        wtr.flush().map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

        debug!(sheet = %sheet.name, rows = sheet.rows.len(), path = %path.display(), "wrote sheet");
        written.push(path);
    }

    Ok(written)
}

/// Write the workbook as one JSON object keyed by sheet name.
///
/// Each sheet is an array of rows, each row an object keyed by column
/// header in column order. Amounts are JSON numbers.
pub fn write_json<W: Write>(workbook: &Workbook, mut w: W) -> Result<()> {
    let doc: Map<String, Value> = workbook
        .sheets
        .iter()
        .map(|sheet| {
            let rows = sheet
                .rows
                .iter()
                .map(|row| {
                    let obj: Map<String, Value> = sheet
                        .headers
                        .iter()
                        .cloned()
                        .zip(row.iter().map(cell_value))
                        .collect();
                    Value::Object(obj)
                })
                .collect();
            (sheet.name.clone(), Value::Array(rows))
        })
        .collect();

    serde_json::to_writer_pretty(&mut w, &Value::Object(doc))?;
    writeln!(w).map_err(|source| ExportError::Io {
        path: PathBuf::from("<json output>"),
        source,
    })?;
    Ok(())
}

fn cell_value(cell: &Cell) -> Value {
    match cell {
        Cell::Text(s) => Value::String(s.clone()),
        Cell::Number(d) => d.to_f64().map(Value::from).unwrap_or(Value::Null),
    }
}
