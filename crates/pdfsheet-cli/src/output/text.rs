use pdfsheet_core::model::{ExtractionSummary, PageText, SheetOverview, TableRecord};

pub fn print_summary(summary: &ExtractionSummary) {
    println!(
        "  Extracted Text: {} page(s), {} row(s)",
        summary.text_pages, summary.text_rows
    );

    if summary.tables.is_empty() {
        println!("  No tables detected");
        return;
    }

    let max_name = summary
        .tables
        .iter()
        .map(|t| t.sheet_name.len())
        .max()
        .unwrap_or(7);

    for t in &summary.tables {
        println!(
            "  {:<width$}  page {:>3}  {} column(s), {} data row(s)",
            t.sheet_name,
            t.page_number,
            t.columns,
            t.data_rows,
            width = max_name
        );
    }
}

pub fn print_pages(pages: &[PageText]) {
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("=== Page {} ===\n", page.page_number);
        println!("{}", page.text);
    }
}

pub fn print_tables(tables: &[TableRecord]) {
    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("--- Table {} (page {}) ---", i + 1, table.page_number);

        let page = table.page_number.to_string();
        let mut rows: Vec<Vec<&str>> = vec![table.columns()];
        for data in &table.rows {
            rows.push(
                std::iter::once(page.as_str())
                    .chain(data.iter().map(|c| c.as_str()))
                    .collect(),
            );
        }
        print_grid(&rows);
    }
}

pub fn print_sheets(sheets: &[SheetOverview]) {
    let max_name = sheets.iter().map(|s| s.name.len()).max().unwrap_or(10);

    for sheet in sheets {
        // The header row is not a data row
        let data_rows = sheet.row_count().saturating_sub(1);
        let columns = sheet.rows.first().map(|r| r.len()).unwrap_or(0);
        println!(
            "  {:<width$}  {} column(s), {} data row(s)",
            sheet.name,
            columns,
            data_rows,
            width = max_name
        );
    }
}

/// Print rows with | separators, columns padded to their widest cell.
fn print_grid(rows: &[Vec<&str>]) {
    let col_count = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let mut col_widths = vec![1usize; col_count];
    for row in rows {
        for (ci, text) in row.iter().enumerate() {
            col_widths[ci] = col_widths[ci].max(text.chars().count());
        }
    }

    for row in rows {
        let cells: Vec<String> = col_widths
            .iter()
            .enumerate()
            .map(|(ci, &w)| format!("{:<w$}", row.get(ci).copied().unwrap_or("")))
            .collect();
        println!("| {} |", cells.join(" | "));
    }
}
