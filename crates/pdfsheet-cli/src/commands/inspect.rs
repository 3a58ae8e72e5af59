use std::path::PathBuf;

use crate::output;

pub fn run(workbook: PathBuf, output_format: &str) -> Result<(), pdfsheet_core::error::PdfSheetError> {
    let sheets = pdfsheet_core::inspect::inspect_workbook(&workbook)?;

    match output_format {
        "json" => output::json::print(&sheets)?,
        _ => output::text::print_sheets(&sheets),
    }

    Ok(())
}
