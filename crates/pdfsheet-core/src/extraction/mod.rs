pub mod pdftotext;
pub mod plumber;

use std::path::Path;

use crate::error::PdfSheetError;

/// Lines extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

impl PageContent {
    /// The page's lines joined back into one block of text.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// A table as the detection backend found it: page number plus raw rows.
///
/// No header has been picked yet; the first row is whatever came first on
/// the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub page_number: usize,
    pub rows: Vec<Vec<String>>,
}

/// Trait for PDF text extraction backends.
pub trait PdfTextExtractor {
    /// Extract plain text from the PDF at `pdf_path`, one PageContent per page.
    fn extract_pages(&self, pdf_path: &Path) -> Result<Vec<PageContent>, PdfSheetError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Trait for PDF table detection backends.
///
/// Implementations open the PDF on their own; nothing is shared with the
/// text pass.
pub trait PdfTableExtractor {
    /// Detect tables in the PDF at `pdf_path`, in page order then in
    /// within-page detection order.
    fn extract_tables(&self, pdf_path: &Path) -> Result<Vec<RawTable>, PdfSheetError>;

    fn backend_name(&self) -> &str;
}

/// Split `pdftotext` output into pages on form feeds.
///
/// pdftotext terminates every page with `\x0c`, so the segment after the
/// last one is not a page.
pub fn split_pages(output: &str) -> Vec<PageContent> {
    if output.is_empty() {
        return Vec::new();
    }

    let body = output.strip_suffix('\x0c').unwrap_or(output);
    body.split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            lines: page_text.lines().map(|l| l.to_string()).collect(),
        })
        .collect()
}
