use pdfsheet_core::extraction::plumber::{PlumberTableExtractor, TableSettings};
use pdfsheet_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_file: PathBuf,
    output_format: &str,
    settings: TableSettings,
) -> Result<(), pdfsheet_core::error::PdfSheetError> {
    let text_extractor = PdftotextExtractor::new();
    let table_extractor = PlumberTableExtractor::new(settings);

    let summary = pdfsheet_core::extract_to_workbook(
        &text_extractor,
        &table_extractor,
        &input_file,
        &output_file,
    )?;

    match output_format {
        "json" => {
            // Keep stdout valid JSON
            eprintln!("✅ Data successfully saved to {}", output_file.display());
            output::json::print(&summary)?;
        }
        _ => {
            println!("✅ Data successfully saved to {}", output_file.display());
            output::text::print_summary(&summary);
        }
    }

    Ok(())
}
