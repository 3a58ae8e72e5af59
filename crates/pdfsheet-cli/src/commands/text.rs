use pdfsheet_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
) -> Result<(), pdfsheet_core::error::PdfSheetError> {
    let extractor = PdftotextExtractor::new();
    let pages = pdfsheet_core::extract_text(&extractor, &input_file)?;

    match output_format {
        "json" => output::json::print(&pages)?,
        _ => output::text::print_pages(&pages),
    }

    Ok(())
}
