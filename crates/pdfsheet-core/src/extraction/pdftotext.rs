use crate::error::PdfSheetError;
use crate::extraction::{split_pages, PageContent, PdfTextExtractor};
use std::path::Path;
use std::process::Command;

/// PDF text backend using pdftotext (from poppler-utils).
///
/// Runs pdftotext in its default reading-order mode, which is what we want
/// for the plain text sheet. Tables come from a separate backend, see
/// [`crate::extraction::plumber`].
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is installed
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfTextExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_path: &Path) -> Result<Vec<PageContent>, PdfSheetError> {
        let text = run_pdftotext(pdf_path)?;
        let pages = split_pages(&text);
        log::debug!(
            "pdftotext returned {} page(s) for {}",
            pages.len(),
            pdf_path.display()
        );
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Run pdftotext on `pdf_path`, returning its stdout.
///
/// The child process and its pipes live only for the duration of this call,
/// on every return path.
fn run_pdftotext(pdf_path: &Path) -> Result<String, PdfSheetError> {
    if !pdf_path.exists() {
        return Err(PdfSheetError::InputNotFound(pdf_path.to_path_buf()));
    }

    let output = Command::new("pdftotext")
        .arg("-enc")
        .arg("UTF-8")
        .arg(pdf_path)
        .arg("-") // output to stdout
        .output()
        .map_err(spawn_error)?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(PdfSheetError::PdftotextFailed { code, stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn spawn_error(e: std::io::Error) -> PdfSheetError {
    match e.kind() {
        std::io::ErrorKind::NotFound => PdfSheetError::PdftotextNotFound,
        _ => PdfSheetError::Io(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_missing_input_is_reported_before_spawning() {
        let err = run_pdftotext(Path::new("/definitely/not/here.pdf")).unwrap_err();
        assert!(matches!(err, PdfSheetError::InputNotFound(_)));
    }

    #[test]
    fn test_missing_binary_maps_to_install_hint() {
        let err = spawn_error(Error::new(ErrorKind::NotFound, "no such file"));
        assert!(matches!(err, PdfSheetError::PdftotextNotFound));
        assert!(err.to_string().contains("poppler"));
    }

    #[test]
    fn test_other_spawn_failures_keep_the_io_error() {
        let err = spawn_error(Error::new(ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(
            err,
            PdfSheetError::Io(ref e) if e.kind() == ErrorKind::PermissionDenied
        ));
        assert_eq!(err.to_string(), "IO error: denied");
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(PdftotextExtractor::new().backend_name(), "pdftotext");
    }
}
