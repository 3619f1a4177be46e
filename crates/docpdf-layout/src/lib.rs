//! Styled documents rendered to PDF.
//!
//! A document is a *story*: a list of [`Flowable`]s placed top to bottom on
//! the page of a [`DocTemplate`]. The story is written out as HTML with each
//! paragraph's [`ParagraphStyle`] inlined, and `printpdf` does the line
//! breaking, pagination and PDF output. Any HTML document can take the same
//! path through [`html_to_pdf`].
//!
//! ```no_run
//! use docpdf_layout::{DocTemplate, Flowable, FontRegistry, PageSize, Paragraph, StyleSheet};
//!
//! let fonts = FontRegistry::new();
//! let styles = StyleSheet::sample(&fonts);
//! let normal = styles.get("Normal").unwrap();
//! let story: Vec<Flowable> = vec![Paragraph::new("Hello", normal).into()];
//! let rendered = DocTemplate::new(PageSize::A4).build(&story, &fonts).unwrap();
//! std::fs::write("hello.pdf", rendered.bytes).unwrap();
//! ```

pub mod color;
pub mod error;
pub mod flowable;
pub mod font;
pub mod html;
mod render;
pub mod style;
pub mod template;
pub mod units;

pub use color::Color;
pub use error::{ColorParseError, FontError, LayoutError};
pub use flowable::{Flowable, Paragraph};
pub use font::{FontCandidate, FontKey, FontRegistry, StandardFont};
pub use html::story_to_html;
pub use render::{html_to_pdf, RenderedDocument};
pub use style::{Alignment, ParagraphStyle, StyleSheet};
pub use template::{missing_glyphs, DocTemplate};
pub use units::{cm, mm, Margins, PageSize};
