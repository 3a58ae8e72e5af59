use crate::error::PdfSheetError;
use crate::extraction::{PdfTableExtractor, RawTable};
use pdfplumber::Pdf;
use std::path::Path;

pub use pdfplumber::{Strategy, TableSettings};

/// Table backend built on pdfplumber's table finder.
///
/// Tables come from ruling lines (lattice, the default) or from word
/// alignment (stream). Body text that is merely spaced out, such as
/// justified prose, has no ruling and is never reported as a table under
/// the default settings.
pub struct PlumberTableExtractor {
    settings: TableSettings,
}

impl PlumberTableExtractor {
    pub fn new(settings: TableSettings) -> Self {
        PlumberTableExtractor { settings }
    }
}

impl Default for PlumberTableExtractor {
    fn default() -> Self {
        Self::new(TableSettings::default())
    }
}

impl PdfTableExtractor for PlumberTableExtractor {
    fn extract_tables(&self, pdf_path: &Path) -> Result<Vec<RawTable>, PdfSheetError> {
        if !pdf_path.exists() {
            return Err(PdfSheetError::InputNotFound(pdf_path.to_path_buf()));
        }

        let pdf = Pdf::open_file(pdf_path, None)
            .map_err(|e| PdfSheetError::Extraction(format!("failed to open PDF: {e}")))?;

        let mut tables = Vec::new();
        for idx in 0..pdf.page_count() {
            let page = pdf.page(idx).map_err(|e| {
                PdfSheetError::Extraction(format!("failed to read page {}: {e}", idx + 1))
            })?;

            let found = page.find_tables(&self.settings);
            if !found.is_empty() {
                log::debug!("page {}: {} table(s)", idx + 1, found.len());
            }

            for table in &found {
                let rows: Vec<Vec<String>> = table
                    .rows
                    .iter()
                    .map(|row| {
                        row.iter()
                            .map(|cell| cell.text.clone().unwrap_or_default())
                            .collect()
                    })
                    .collect();

                let rows = pad_rows(rows);
                if rows.is_empty() {
                    continue;
                }
                tables.push(RawTable {
                    page_number: idx + 1,
                    rows,
                });
            }
        }
        Ok(tables)
    }

    fn backend_name(&self) -> &str {
        "pdfplumber"
    }
}

/// Pad short rows with empty cells up to the widest row.
///
/// Merged cells make pdfplumber return rows of different lengths.
fn pad_rows(mut rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, String::new());
    }
    rows
}
