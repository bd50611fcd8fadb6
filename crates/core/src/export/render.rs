//! Rendering of tabular documents to byte streams.

use rust_xlsxwriter::Workbook;
use serde::{Deserialize, Serialize};

use super::error::ExportError;

/// Target format for a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Comma-separated values.
    Csv,
    /// Excel workbook.
    Xlsx,
    /// JSON document.
    Json,
    /// Column-aligned plain text.
    Text,
}

impl ExportFormat {
    /// MIME type for HTTP responses.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Json => "application/json",
            Self::Text => "text/plain",
        }
    }

    /// File extension for download names.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Json => "json",
            Self::Text => "txt",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(format!("Unknown export format: {s}")),
        }
    }
}

/// An ordered table with a title, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularDocument {
    /// Document title.
    pub title: String,
    /// Column headers, in order.
    pub columns: Vec<String>,
    /// Data rows; each row has one cell per column, already formatted.
    pub rows: Vec<Vec<String>>,
}

/// Renders a document to the given format as an in-memory byte stream.
///
/// # Errors
///
/// Returns `ExportError` if the backing library fails; for in-memory
/// buffers this is effectively limited to XLSX workbook constraints.
pub fn render(document: &TabularDocument, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Csv => render_csv(document),
        ExportFormat::Xlsx => render_xlsx(document),
        ExportFormat::Json => Ok(serde_json::to_vec_pretty(document)?),
        ExportFormat::Text => Ok(render_text(document).into_bytes()),
    }
}

fn render_csv(document: &TabularDocument) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(&document.columns)?;
        for row in &document.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
    }
    Ok(buf)
}

fn render_xlsx(document: &TabularDocument) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in (0u16..).zip(&document.columns) {
        worksheet.write_string(0, col, name)?;
    }
    for (row_index, row) in (1u32..).zip(&document.rows) {
        for (col, cell) in (0u16..).zip(row) {
            worksheet.write_string(row_index, col, cell)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn render_text(document: &TabularDocument) -> String {
    // Column widths: widest of header and cells.
    let mut widths: Vec<usize> = document
        .columns
        .iter()
        .map(|c| c.chars().count())
        .collect();
    for row in &document.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&document.title);
    out.push_str("\n\n");
    out.push_str(&format_row(&document.columns));
    out.push('\n');
    let separator: usize = widths.iter().sum::<usize>() + 2 * (widths.len().saturating_sub(1));
    out.push_str(&"-".repeat(separator));
    out.push('\n');
    for row in &document.rows {
        out.push_str(&format_row(row));
        out.push('\n');
    }
    out
}
