use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Label of the page column prepended to every table.
pub const PAGE_COLUMN: &str = "Page";

/// One page's extracted text, trimmed and known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    pub page_number: usize,
    pub text: String,
}

/// A detected table with its header row picked and the page column added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRecord {
    pub page_number: usize,
    /// First row of the raw table, without the page column.
    pub header: Vec<String>,
    /// Remaining rows, each as wide as `header`.
    pub rows: Vec<Vec<String>>,
}

impl TableRecord {
    /// Column labels as written to the sheet: "Page" followed by the header.
    pub fn columns(&self) -> Vec<&str> {
        std::iter::once(PAGE_COLUMN)
            .chain(self.header.iter().map(|h| h.as_str()))
            .collect()
    }

    /// Number of columns including the page column.
    pub fn width(&self) -> usize {
        self.header.len() + 1
    }
}

/// What one run of the pipeline produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub text_pages: usize,
    pub text_rows: usize,
    pub tables: Vec<TableSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    pub sheet_name: String,
    pub page_number: usize,
    pub columns: usize,
    pub data_rows: usize,
}

/// A sheet read back from an existing workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetOverview {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

impl SheetOverview {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
