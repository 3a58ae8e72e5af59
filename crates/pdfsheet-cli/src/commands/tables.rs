use pdfsheet_core::extraction::plumber::{PlumberTableExtractor, TableSettings};
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    settings: TableSettings,
) -> Result<(), pdfsheet_core::error::PdfSheetError> {
    let extractor = PlumberTableExtractor::new(settings);
    let tables = pdfsheet_core::extract_tables(&extractor, &input_file)?;

    match output_format {
        "json" => output::json::print(&tables)?,
        _ => output::text::print_tables(&tables),
    }

    Ok(())
}
