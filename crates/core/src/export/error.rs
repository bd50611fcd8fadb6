//! Export error types.

use thiserror::Error;

/// Errors raised while rendering a tabular document.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// XLSX workbook generation failed.
    #[error("XLSX export failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// JSON serialization failed.
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Buffer I/O failed.
    #[error("Export I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
