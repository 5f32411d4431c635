//! CSV rendering of a lead collection.

use std::path::{Path, PathBuf};

use csv::Writer;
use leadgen_core::LeadRecord;

use crate::{ExportError, COLUMNS};

/// Writes the collection as UTF-8 CSV: one header row, then one row per
/// lead in insertion order. An absent rating renders as an empty field.
///
/// Returns the written path.
///
/// # Errors
///
/// Returns [`ExportError`] when the file cannot be created or a row fails
/// to serialize.
pub fn write_csv(leads: &[LeadRecord], path: &Path) -> Result<PathBuf, ExportError> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(COLUMNS)?;

    for lead in leads {
        let rating = lead.rating_display();
        writer.write_record([
            lead.name.as_str(),
            lead.address.as_str(),
            lead.phone.as_str(),
            lead.website.as_str(),
            lead.email.as_str(),
            rating.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
#[path = "csv_test.rs"]
mod tests;
