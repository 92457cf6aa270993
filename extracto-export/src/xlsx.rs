//! Single-file `.xlsx` workbook, one worksheet per sheet in order.
//!
//! Headers are bold; amount cells are stored as numbers with a
//! `#,##0.00` display format so the spreadsheet can total them.

use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook as XlsxWorkbook};
use tracing::debug;

use crate::error::Result;
use crate::sheet::{Cell, Workbook};

pub fn write_xlsx(workbook: &Workbook, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let header = Format::new().set_bold();
    let amount = Format::new().set_num_format("#,##0.00");

    let mut book = XlsxWorkbook::new();
    for sheet in &workbook.sheets {
        let ws = book.add_worksheet();
        ws.set_name(&sheet.name)?;

        for (col, title) in sheet.headers.iter().enumerate() {
            ws.write_string_with_format(0, col as ColNum, title, &header)?;
        }
        for (i, row) in sheet.rows.iter().enumerate() {
            let r = i as RowNum + 1;
            for (col, cell) in row.iter().enumerate() {
                let c = col as ColNum;
                match cell {
                    Cell::Text(s) => {
                        ws.write_string(r, c, s)?;
                    }
                    Cell::Number(d) => {
                        ws.write_number_with_format(r, c, d.to_f64().unwrap_or_default(), &amount)?;
                    }
                }
            }
        }
        debug!(sheet = %sheet.name, rows = sheet.rows.len(), "laid out worksheet");
    }

    book.save(path)?;
    debug!(path = %path.display(), "wrote workbook");
    Ok(())
}
