use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::debug;

use crate::blocks::ReportDocument;
use crate::error::ExportError;
use crate::layout::layout_document;
use crate::styles::{FontFace, MM_PER_PT, ReportStyles};

/// Lay out a report and render it to PDF bytes.
///
/// Text is drawn with the builtin Helvetica faces, so no font files are
/// needed at runtime.
pub fn render_pdf(document: &ReportDocument, styles: &ReportStyles) -> Result<Vec<u8>, ExportError> {
    let pages = layout_document(document, styles)?;

    let width = Mm(styles.page.width_mm);
    let height = Mm(styles.page.height_mm);
    let height_pt = styles.page.height_pt();

    let (doc, first_page, first_layer) = PdfDocument::new(&styles.title, width, height, "Layer 1");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut target = (first_page, first_layer);
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            target = doc.add_page(width, height, format!("Layer {}", i + 1));
        }
        let layer = doc.get_page(target.0).get_layer(target.1);
        for run in &page.runs {
            let font = match run.face {
                FontFace::Regular => &regular,
                FontFace::Bold => &bold,
            };
            layer.use_text(
                run.text.as_str(),
                run.font_size,
                Mm(run.x * MM_PER_PT),
                Mm((height_pt - run.baseline) * MM_PER_PT),
                font,
            );
        }
    }

    let bytes = doc.save_to_bytes()?;
    debug!(pages = pages.len(), bytes = bytes.len(), "rendered PDF");
    Ok(bytes)
}
