use std::path::Path;

use calamine::{open_workbook_auto, Reader};

use crate::error::PdfSheetError;
use crate::model::SheetOverview;

/// Read every sheet of an xlsx workbook back as strings, in workbook order.
pub fn inspect_workbook(path: &Path) -> Result<Vec<SheetOverview>, PdfSheetError> {
    let mut workbook = open_workbook_auto(path)?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name)?;
        let rows = range
            .rows()
            .map(|row| row.iter().map(cell_as_string).collect())
            .collect();
        sheets.push(SheetOverview { name, rows });
    }

    Ok(sheets)
}

/// Render a cell the way it was written: integral numbers without a
/// trailing ".0", empty cells as "".
fn cell_as_string(cell: &calamine::Data) -> String {
    match cell {
        calamine::Data::String(s) => s.clone(),
        calamine::Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", *f as i64)
        }
        calamine::Data::Float(f) => f.to_string(),
        calamine::Data::Int(i) => i.to_string(),
        calamine::Data::Empty => String::new(),
        other => format!("{other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_as_string() {
        assert_eq!(cell_as_string(&calamine::Data::Float(2.0)), "2");
        assert_eq!(cell_as_string(&calamine::Data::Float(2.5)), "2.5");
        assert_eq!(cell_as_string(&calamine::Data::Int(12)), "12");
        assert_eq!(cell_as_string(&calamine::Data::Empty), "");
        assert_eq!(
            cell_as_string(&calamine::Data::String("OMR".into())),
            "OMR"
        );
    }

    #[test]
    fn test_missing_workbook_is_an_error() {
        let err = inspect_workbook(Path::new("/no/such/workbook.xlsx")).unwrap_err();
        assert!(matches!(err, PdfSheetError::WorkbookRead(_)));
    }
}
