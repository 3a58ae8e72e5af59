pub mod error;
pub mod extraction;
pub mod inspect;
pub mod model;
pub mod spreadsheet;

use std::path::Path;

use error::PdfSheetError;
use extraction::{PdfTableExtractor, PdfTextExtractor, RawTable};
use model::{ExtractionSummary, PageText, TableRecord, TableSummary};

/// Extract per-page text records from the PDF at `pdf_path`.
///
/// Pages whose text is empty after trimming are skipped; the rest come back
/// in ascending page order with their text trimmed.
pub fn extract_text(
    extractor: &dyn PdfTextExtractor,
    pdf_path: &Path,
) -> Result<Vec<PageText>, PdfSheetError> {
    let pages = extractor.extract_pages(pdf_path)?;

    let records: Vec<PageText> = pages
        .iter()
        .filter_map(|page| {
            let text = page.text();
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(PageText {
                    page_number: page.page_number,
                    text: trimmed.to_string(),
                })
            }
        })
        .collect();

    log::info!(
        "{}: {} of {} page(s) have text",
        extractor.backend_name(),
        records.len(),
        pages.len()
    );
    Ok(records)
}

/// Extract table records from the PDF at `pdf_path`.
///
/// The first row of every detected table becomes its header and the page
/// number is prepended as a leading column.
pub fn extract_tables(
    extractor: &dyn PdfTableExtractor,
    pdf_path: &Path,
) -> Result<Vec<TableRecord>, PdfSheetError> {
    let raw = extractor.extract_tables(pdf_path)?;

    let mut records = Vec::with_capacity(raw.len());
    for table in raw {
        if let Some(record) = to_record(table)? {
            records.push(record);
        }
    }

    log::info!(
        "{}: {} table(s) detected",
        extractor.backend_name(),
        records.len()
    );
    Ok(records)
}

fn to_record(table: RawTable) -> Result<Option<TableRecord>, PdfSheetError> {
    let mut rows = table.rows.into_iter();
    let Some(header) = rows.next() else {
        return Ok(None);
    };
    let rows: Vec<Vec<String>> = rows.collect();

    if let Some((i, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != header.len())
    {
        return Err(PdfSheetError::MalformedTable {
            page_number: table.page_number,
            row: i + 2,
            expected: header.len(),
            found: row.len(),
        });
    }

    Ok(Some(TableRecord {
        page_number: table.page_number,
        header,
        rows,
    }))
}

/// Main API entry point: extract text and tables from `input` and write the
/// workbook to `output`.
///
/// The two extraction passes run one after the other and are not
/// reconciled. Nothing is written if either pass fails.
pub fn extract_to_workbook(
    text_extractor: &dyn PdfTextExtractor,
    table_extractor: &dyn PdfTableExtractor,
    input: &Path,
    output: &Path,
) -> Result<ExtractionSummary, PdfSheetError> {
    let pages = extract_text(text_extractor, input)?;
    let tables = extract_tables(table_extractor, input)?;

    spreadsheet::write_workbook(&pages, &tables, output)?;
    log::info!("saved workbook to {}", output.display());

    Ok(ExtractionSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        text_pages: pages.len(),
        text_rows: spreadsheet::text_row_count(&pages),
        tables: tables
            .iter()
            .enumerate()
            .map(|(i, t)| TableSummary {
                sheet_name: spreadsheet::table_sheet_name(i + 1),
                page_number: t.page_number,
                columns: t.width(),
                data_rows: t.rows.len(),
            })
            .collect(),
    })
}
