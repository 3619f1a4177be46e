//! The MyResty framework guide: a cover page, table of contents, eight
//! bilingual chapters and a configuration appendix, laid out on A4.

pub mod content;
pub mod story;
pub mod styles;

use std::io;
use std::path::PathBuf;

use docpdf_layout::{
    missing_glyphs, mm, DocTemplate, FontCandidate, FontRegistry, LayoutError, Margins, PageSize,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

pub use content::{Section, CONFIG_CODE, SECTIONS};
pub use story::build_story;
pub use styles::GuideStyles;

#[derive(Debug, Error)]
pub enum GuideError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone)]
pub struct GuideOptions {
    pub output: PathBuf,
    /// Tried in order; Helvetica is used when none loads.
    pub fonts: Vec<FontCandidate>,
}

/// Summary of a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct GuideOutcome {
    pub output: PathBuf,
    pub pages: usize,
    pub bytes: usize,
    pub font: String,
    /// Characters the selected fonts could not draw.
    pub missing_glyphs: usize,
}

pub fn page_template() -> DocTemplate {
    DocTemplate::new(PageSize::A4)
        .with_margins(Margins::new(mm(20.0), mm(18.0), mm(18.0), mm(18.0)))
        .with_title(content::DOC_TITLE)
}

/// Render the guide to `options.output`.
pub fn render_guide(options: &GuideOptions) -> Result<GuideOutcome, GuideError> {
    let mut fonts = FontRegistry::new();
    let font = fonts.register_first_available(&options.fonts);
    let styles = GuideStyles::new(&fonts, font);
    let story = build_story(&styles);

    let missing = missing_glyphs(&story, &fonts);
    if missing > 0 {
        warn!(
            missing,
            font = fonts.name(font),
            "guide text has characters the font cannot draw; configure a CJK font"
        );
    }

    let rendered = page_template().build(&story, &fonts)?;
    docpdf_utils::atomic_write(&options.output, &rendered.bytes).map_err(|source| {
        GuideError::Write {
            path: options.output.clone(),
            source,
        }
    })?;

    info!(
        path = %options.output.display(),
        pages = rendered.page_count,
        "PDF generated"
    );

    Ok(GuideOutcome {
        output: options.output.clone(),
        pages: rendered.page_count,
        bytes: rendered.bytes.len(),
        font: fonts.name(font).to_string(),
        missing_glyphs: missing,
    })
}
