use std::path::Path;

use rust_xlsxwriter::{ColNum, Format, FormatAlign, RowNum, Workbook, Worksheet};

use crate::error::PdfSheetError;
use crate::model::{PageText, TableRecord, PAGE_COLUMN};

pub const TEXT_SHEET_NAME: &str = "Extracted Text";
pub const TEXT_COLUMN: &str = "Extracted Text";

/// Excel's hard limit on the length of one cell, in chars.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Longest text written to one text-sheet cell.
pub const CHUNK_CHARS: usize = 32_000;

pub const DEFAULT_OUTPUT: &str = "extract.xlsx";

/// Name of the sheet holding the `index`-th table (1-based).
pub fn table_sheet_name(index: usize) -> String {
    format!("Table {index}")
}

/// Cut `text` into consecutive slices of at most `max_chars` characters.
///
/// Cut points are fixed offsets, not word boundaries. Concatenating the
/// slices gives back `text`.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    if max_chars == 0 {
        return vec![text];
    }

    let mut chunks = Vec::with_capacity(text.len() / max_chars + 1);
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in text.char_indices() {
        if count == max_chars {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    chunks.push(&text[start..]);
    chunks
}

/// Build the in-memory workbook: the text sheet first, then one sheet per
/// table in the order given.
pub fn build_workbook(
    pages: &[PageText],
    tables: &[TableRecord],
) -> Result<Workbook, PdfSheetError> {
    let mut workbook = Workbook::new();

    let text_rows = write_text_sheet(workbook.add_worksheet(), pages)?;
    log::info!("wrote {} text row(s) for {} page(s)", text_rows, pages.len());

    for (i, table) in tables.iter().enumerate() {
        let name = table_sheet_name(i + 1);
        let sheet = workbook.add_worksheet();
        sheet.set_name(&name)?;
        write_table_sheet(sheet, &name, table)?;
        log::debug!(
            "{}: page {}, {} data row(s)",
            name,
            table.page_number,
            table.rows.len()
        );
    }

    Ok(workbook)
}

/// Build the workbook and save it to `path`, replacing any existing file.
pub fn write_workbook(
    pages: &[PageText],
    tables: &[TableRecord],
    path: &Path,
) -> Result<(), PdfSheetError> {
    let mut workbook = build_workbook(pages, tables)?;
    workbook.save(path)?;
    Ok(())
}

/// Number of rows `pages` takes up on the text sheet, header excluded.
pub fn text_row_count(pages: &[PageText]) -> usize {
    pages
        .iter()
        .map(|p| chunk_text(&p.text, CHUNK_CHARS).len())
        .sum()
}

fn write_text_sheet(sheet: &mut Worksheet, pages: &[PageText]) -> Result<usize, PdfSheetError> {
    let wrap = Format::new().set_text_wrap();
    let header = Format::new().set_bold().set_text_wrap();

    sheet.set_name(TEXT_SHEET_NAME)?;
    sheet.write_string_with_format(0, 0, PAGE_COLUMN, &header)?;
    sheet.write_string_with_format(0, 1, TEXT_COLUMN, &header)?;

    let mut written = 0;
    for page in pages {
        for chunk in chunk_text(&page.text, CHUNK_CHARS) {
            let row = row_index(written + 1, TEXT_SHEET_NAME)?;
            sheet.write_number_with_format(row, 0, page.page_number as f64, &wrap)?;
            sheet.write_string_with_format(row, 1, chunk, &wrap)?;
            written += 1;
        }
    }

    Ok(written)
}

fn write_table_sheet(
    sheet: &mut Worksheet,
    name: &str,
    table: &TableRecord,
) -> Result<(), PdfSheetError> {
    let header = Format::new().set_bold().set_align(FormatAlign::Center);

    for (col, label) in table.columns().into_iter().enumerate() {
        let label = fit_cell(label, name);
        sheet.write_string_with_format(0, col_index(col, name)?, label, &header)?;
    }

    for (i, cells) in table.rows.iter().enumerate() {
        let row = row_index(i + 1, name)?;
        sheet.write_number(row, 0, table.page_number as f64)?;
        for (col, value) in cells.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            sheet.write_string(row, col_index(col + 1, name)?, fit_cell(value, name))?;
        }
    }

    Ok(())
}

/// Truncate a table cell to [`MAX_CELL_CHARS`].
///
/// Table cells are not split across rows, since that would shift the
/// columns of every following row.
fn fit_cell<'a>(value: &'a str, sheet: &str) -> &'a str {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((cut, _)) => {
            log::warn!(
                "{}: cell of {} chars truncated to {}",
                sheet,
                value.chars().count(),
                MAX_CELL_CHARS
            );
            &value[..cut]
        }
        None => value,
    }
}

fn row_index(row: usize, sheet: &str) -> Result<RowNum, PdfSheetError> {
    RowNum::try_from(row).map_err(|_| PdfSheetError::SheetLimit {
        sheet: sheet.to_string(),
    })
}

fn col_index(col: usize, sheet: &str) -> Result<ColNum, PdfSheetError> {
    ColNum::try_from(col).map_err(|_| PdfSheetError::SheetLimit {
        sheet: sheet.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::inspect_workbook;
    use pretty_assertions::assert_eq;

    fn page(page_number: usize, text: &str) -> PageText {
        PageText {
            page_number,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_chunk_short_text_is_one_chunk() {
        assert_eq!(chunk_text("Hello World", CHUNK_CHARS), vec!["Hello World"]);
    }

    #[test]
    fn test_chunk_exact_multiple() {
        let text = "ab".repeat(CHUNK_CHARS);
        let chunks = chunk_text(&text, CHUNK_CHARS);
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.chars().count() == CHUNK_CHARS));
    }

    #[test]
    fn test_chunk_count_is_ceiling_and_reconstructs() {
        for len in [1usize, 31_999, 32_000, 32_001, 64_000, 64_001, 100_000] {
            let text: String = (0..len).map(|i| (b'a' + (i % 26) as u8) as char).collect();
            let chunks = chunk_text(&text, CHUNK_CHARS);
            assert_eq!(chunks.len(), len.div_ceil(CHUNK_CHARS), "len {len}");
            assert!(chunks.iter().all(|c| c.chars().count() <= CHUNK_CHARS));
            assert_eq!(chunks.concat(), text);
        }
    }

    #[test]
    fn test_chunk_counts_chars_not_bytes() {
        let text = "é".repeat(5);
        let chunks = chunk_text(&text, 2);
        assert_eq!(chunks, vec!["éé", "éé", "é"]);
    }

    #[test]
    fn test_chunk_empty_text() {
        assert!(chunk_text("", CHUNK_CHARS).is_empty());
    }

    #[test]
    fn test_text_row_count() {
        let pages = vec![page(1, "short"), page(2, &"x".repeat(CHUNK_CHARS * 2 + 1))];
        assert_eq!(text_row_count(&pages), 4);
    }

    #[test]
    fn test_table_sheet_name() {
        assert_eq!(table_sheet_name(1), "Table 1");
        assert_eq!(table_sheet_name(12), "Table 12");
    }

    #[test]
    fn test_hello_world_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");

        write_workbook(&[page(1, "Hello World")], &[], &path).unwrap();

        let sheets = inspect_workbook(&path).unwrap();
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].name, TEXT_SHEET_NAME);
        assert_eq!(
            sheets[0].rows,
            vec![
                vec!["Page".to_string(), "Extracted Text".to_string()],
                vec!["1".to_string(), "Hello World".to_string()],
            ]
        );
    }

    #[test]
    fn test_long_page_spans_rows_with_same_page_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("long.xlsx");
        let text = "z".repeat(CHUNK_CHARS + 10);

        write_workbook(&[page(7, &text)], &[], &path).unwrap();

        let sheets = inspect_workbook(&path).unwrap();
        let rows = &sheets[0].rows;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][0], "7");
        assert_eq!(rows[2][0], "7");
        assert_eq!(rows[1][1].len(), CHUNK_CHARS);
        assert_eq!(format!("{}{}", rows[1][1], rows[2][1]), text);
    }

    #[test]
    fn test_table_sheets_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tables.xlsx");
        let table = |page_number: usize, label: &str| TableRecord {
            page_number,
            header: vec!["Item".into(), "Rate".into()],
            rows: vec![vec![label.into(), "100".into()]],
        };
        let tables = vec![table(2, "a"), table(2, "b"), table(5, "c")];

        write_workbook(&[], &tables, &path).unwrap();

        let sheets = inspect_workbook(&path).unwrap();
        let names: Vec<&str> = sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![TEXT_SHEET_NAME, "Table 1", "Table 2", "Table 3"]);

        let pages: Vec<&str> = sheets[1..].iter().map(|s| s.rows[1][0].as_str()).collect();
        assert_eq!(pages, vec!["2", "2", "5"]);
        assert_eq!(sheets[3].rows[0], vec!["Page", "Item", "Rate"]);
        assert_eq!(sheets[3].rows[1], vec!["5", "c", "100"]);
    }

    #[test]
    fn test_oversized_table_cell_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide-cell.xlsx");
        let long = "é".repeat(40_000);
        let table = TableRecord {
            page_number: 4,
            header: vec!["Clause".into(), "Text".into()],
            rows: vec![vec!["12".into(), long.clone()]],
        };

        write_workbook(&[], &[table], &path).unwrap();

        let sheets = inspect_workbook(&path).unwrap();
        let cell = &sheets[1].rows[1][2];
        assert_eq!(cell.chars().count(), MAX_CELL_CHARS);
        assert!(long.starts_with(cell.as_str()));
        assert_eq!(sheets[1].rows[1][0], "4");
        assert_eq!(sheets[1].rows[1][1], "12");
    }

    #[test]
    fn test_fit_cell_leaves_short_values_alone() {
        assert_eq!(fit_cell("120", "Table 1"), "120");
        let exact = "x".repeat(MAX_CELL_CHARS);
        assert_eq!(fit_cell(&exact, "Table 1").len(), MAX_CELL_CHARS);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("existing.xlsx");
        std::fs::write(&path, b"not a workbook").unwrap();

        write_workbook(&[page(1, "fresh")], &[], &path).unwrap();

        let sheets = inspect_workbook(&path).unwrap();
        assert_eq!(sheets[0].rows[1][1], "fresh");
    }

    #[test]
    fn test_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.xlsx");

        let err = write_workbook(&[page(1, "text")], &[], &path).unwrap_err();
        assert!(matches!(err, PdfSheetError::WorkbookWrite(_)));
    }
}
