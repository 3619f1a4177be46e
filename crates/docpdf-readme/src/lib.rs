//! README rendering. The Markdown source is converted to blocks, written out
//! as HTML, and that HTML is rendered as a PDF. When the PDF cannot be
//! produced the HTML is written next to the requested output instead.

use std::io;
use std::path::{Path, PathBuf};

use docpdf_layout::{html_to_pdf, FontCandidate, FontKey, FontRegistry, LayoutError};
use docpdf_markup::{render_html, HtmlOptions, MarkupDocument, STYLESHEET};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Debug, Error)]
pub enum ReadmeError {
    #[error("{path} not found")]
    InputNotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("{count} character(s) have no glyph in font {font}")]
    MissingGlyphs { count: usize, font: String },

    #[error("nothing to render: the README has no content")]
    Empty,

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

#[derive(Debug, Clone)]
pub struct ReadmeOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Text of the HTML `<title>` and the PDF document title.
    pub title: String,
    pub fonts: Vec<FontCandidate>,
    /// Skip the PDF and write only the HTML.
    pub html_only: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReadmeArtifact {
    Pdf { pages: usize },
    Html { reason: Option<String> },
}

/// Summary of a finished run. `output` is the file actually written.
#[derive(Debug, Clone, Serialize)]
pub struct ReadmeOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub artifact: ReadmeArtifact,
    pub blocks: usize,
    pub headings: usize,
}

/// Where the HTML goes when it replaces the PDF.
pub fn fallback_path(output: &Path) -> PathBuf {
    output.with_extension("html")
}

/// The default stylesheet with `font` placed first in the body's font stack.
pub fn stylesheet_for(fonts: &FontRegistry, font: FontKey) -> String {
    format!(
        "{STYLESHEET}\nbody {{\n    font-family: '{}', 'NotoSansCJK', sans-serif;\n}}\n",
        fonts.css_family(font)
    )
}

pub fn render_readme(options: &ReadmeOptions) -> Result<ReadmeOutcome, ReadmeError> {
    if !options.input.is_file() {
        return Err(ReadmeError::InputNotFound {
            path: options.input.clone(),
        });
    }

    let document =
        docpdf_markup::convert_path(&options.input).map_err(|source| ReadmeError::Read {
            path: options.input.clone(),
            source,
        })?;
    debug!(
        blocks = document.blocks.len(),
        headings = document.heading_count(),
        "converted markdown"
    );

    let outcome = |output: PathBuf, artifact: ReadmeArtifact| ReadmeOutcome {
        input: options.input.clone(),
        output,
        artifact,
        blocks: document.blocks.len(),
        headings: document.heading_count(),
    };

    if options.html_only {
        let html = render_html(&document, &HtmlOptions::new(&options.title));
        let path = write_html(&options.output, &html)?;
        return Ok(outcome(path, ReadmeArtifact::Html { reason: None }));
    }

    let mut fonts = FontRegistry::new();
    let font = fonts.register_first_available(&options.fonts);
    let stylesheet = stylesheet_for(&fonts, font);
    let html = render_html(
        &document,
        &HtmlOptions {
            stylesheet: &stylesheet,
            ..HtmlOptions::new(&options.title)
        },
    );

    match write_pdf(&document, &html, &fonts, font, &options.output) {
        Ok(pages) => {
            info!(path = %options.output.display(), pages, "PDF generated");
            Ok(outcome(options.output.clone(), ReadmeArtifact::Pdf { pages }))
        }
        Err(err) => {
            error!(error = %err, "error generating PDF");
            let path = write_html(&options.output, &html)?;
            info!(path = %path.display(), "generated HTML instead");
            Ok(outcome(
                path,
                ReadmeArtifact::Html {
                    reason: Some(err.to_string()),
                },
            ))
        }
    }
}

fn write_pdf(
    document: &MarkupDocument,
    html: &str,
    fonts: &FontRegistry,
    font: FontKey,
    output: &Path,
) -> Result<usize, ReadmeError> {
    if document.is_empty() {
        return Err(ReadmeError::Empty);
    }

    let count = fonts.missing_glyphs(font, &document.plain_text());
    if count > 0 {
        warn!(
            missing = count,
            font = fonts.name(font),
            "README has characters the font cannot draw"
        );
        return Err(ReadmeError::MissingGlyphs {
            count,
            font: fonts.name(font).to_string(),
        });
    }

    let rendered = html_to_pdf(html, fonts)?;
    docpdf_utils::atomic_write(output, &rendered.bytes).map_err(|source| ReadmeError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(rendered.page_count)
}

fn write_html(output: &Path, html: &str) -> Result<PathBuf, ReadmeError> {
    let path = fallback_path(output);
    docpdf_utils::atomic_write_str(&path, html).map_err(|source| ReadmeError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
