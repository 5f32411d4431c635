//! Spreadsheet rendering of a lead collection.
//!
//! Same schema and row order as the CSV rendering; the rating is written as
//! a number cell when present and left blank when absent.

use std::path::{Path, PathBuf};

use leadgen_core::LeadRecord;
use rust_xlsxwriter::Workbook;

use crate::{ExportError, COLUMNS};

/// Writes the collection as a single-sheet XLSX workbook.
///
/// Returns the written path.
///
/// # Errors
///
/// Returns [`ExportError::Xlsx`] when a cell write or the final save fails.
pub fn write_xlsx(leads: &[LeadRecord], path: &Path) -> Result<PathBuf, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Leads")?;

    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet.write_string(0, u16::try_from(col).unwrap_or(u16::MAX), *name)?;
    }

    for (index, lead) in leads.iter().enumerate() {
        let row = u32::try_from(index).unwrap_or(u32::MAX) + 1;
        worksheet.write_string(row, 0, lead.name.as_str())?;
        worksheet.write_string(row, 1, lead.address.as_str())?;
        worksheet.write_string(row, 2, lead.phone.as_str())?;
        worksheet.write_string(row, 3, lead.website.as_str())?;
        worksheet.write_string(row, 4, lead.email.as_str())?;
        if let Some(rating) = lead.rating {
            worksheet.write_number(row, 5, rating)?;
        }
    }

    workbook.save(path)?;
    Ok(path.to_path_buf())
}
