//! Tabular export of a lead collection.
//!
//! Both renderings share the same fixed column order and are deterministic
//! functions of the collection: same leads in, same bytes out. Rows follow
//! insertion order; no reordering, no locale-dependent formatting.

pub mod csv;
pub mod xlsx;

use thiserror::Error;

pub use crate::csv::write_csv;
pub use crate::xlsx::write_xlsx;

/// Fixed output schema, in column order.
pub const COLUMNS: [&str; 6] = ["name", "address", "phone", "website", "email", "rating"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("XLSX write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
