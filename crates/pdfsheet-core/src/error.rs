use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PdfSheetError {
    #[error("input PDF not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("malformed table on page {page_number}: row {row} has {found} cells, header has {expected}")]
    MalformedTable {
        page_number: usize,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("sheet '{sheet}' exceeds the worksheet size limits")]
    SheetLimit { sheet: String },

    #[error("failed to write workbook: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("failed to read workbook: {0}")]
    WorkbookRead(#[from] calamine::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
