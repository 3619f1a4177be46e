use std::collections::BTreeMap;

use printpdf::{Base64OrRaw, GeneratePdfOptions, PdfDocument, PdfSaveOptions};
use tracing::{debug, warn};

use crate::error::LayoutError;
use crate::font::FontRegistry;

/// A finished PDF.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub page_count: usize,
    /// Non-fatal renderer diagnostics, already logged.
    pub warnings: usize,
}

/// Lay out a complete HTML document and serialise it as PDF. Font files in
/// `fonts` are available to the document under their registered names.
pub fn html_to_pdf(html: &str, fonts: &FontRegistry) -> Result<RenderedDocument, LayoutError> {
    let images = BTreeMap::new();
    let sources: BTreeMap<String, Base64OrRaw> = fonts
        .embedded()
        .map(|font| (font.name().to_string(), Base64OrRaw::Raw(font.data().to_vec())))
        .collect();
    let mut warnings = Vec::new();

    let document = PdfDocument::from_html(
        html,
        &images,
        &sources,
        &GeneratePdfOptions::default(),
        &mut warnings,
    )
    .map_err(|err| LayoutError::Render {
        reason: err.to_string(),
    })?;

    let page_count = document.pages.len();
    if page_count == 0 {
        return Err(LayoutError::Render {
            reason: "no pages were produced".to_string(),
        });
    }

    let bytes = document.save(&PdfSaveOptions::default(), &mut warnings);

    for warning in &warnings {
        debug!(?warning, "renderer diagnostic");
    }
    if !warnings.is_empty() {
        warn!(count = warnings.len(), "PDF renderer reported warnings");
    }

    Ok(RenderedDocument {
        bytes,
        page_count,
        warnings: warnings.len(),
    })
}
