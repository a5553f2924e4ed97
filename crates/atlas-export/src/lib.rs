//! atlas-export
//!
//! PDF generation for ATLAS consulting reports. A session record is
//! assembled into layout blocks, flowed onto A4 pages, and written out
//! through `printpdf`.

pub mod assemble;
pub mod blocks;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod rich_text;
pub mod styles;

use std::path::Path;

use atlas_core::models::record::SessionRecord;
use tracing::info;

use crate::error::ExportError;
use crate::styles::ReportStyles;

/// Render `session` as a PDF report at `output_path`, replacing any
/// existing file.
pub fn generate_report(session: &SessionRecord, output_path: &Path) -> Result<(), ExportError> {
    generate_report_with_styles(session, output_path, &ReportStyles::default())
}

pub fn generate_report_with_styles(
    session: &SessionRecord,
    output_path: &Path,
    styles: &ReportStyles,
) -> Result<(), ExportError> {
    let document = assemble::assemble_report(session);
    let bytes = pdf::render_pdf(&document, styles)?;

    std::fs::write(output_path, &bytes).map_err(|source| ExportError::Io {
        path: output_path.to_path_buf(),
        source,
    })?;

    info!(path = %output_path.display(), bytes = bytes.len(), "report written");
    Ok(())
}
