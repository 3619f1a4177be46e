use tracing::warn;

use crate::error::LayoutError;
use crate::flowable::Flowable;
use crate::font::FontRegistry;
use crate::html::story_to_html;
use crate::render::{html_to_pdf, RenderedDocument};
use crate::units::{Margins, PageSize};

/// Page geometry and metadata for a story.
#[derive(Debug, Clone)]
pub struct DocTemplate {
    pub page_size: PageSize,
    pub margins: Margins,
    pub title: String,
}

impl DocTemplate {
    pub fn new(page_size: PageSize) -> Self {
        DocTemplate {
            page_size,
            margins: Margins::all(72.0),
            title: String::new(),
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn to_html(&self, story: &[Flowable], fonts: &FontRegistry) -> String {
        story_to_html(self, story, fonts)
    }

    pub fn build(
        &self,
        story: &[Flowable],
        fonts: &FontRegistry,
    ) -> Result<RenderedDocument, LayoutError> {
        if story.is_empty() {
            return Err(LayoutError::EmptyStory);
        }

        let missing = missing_glyphs(story, fonts);
        if missing > 0 {
            warn!(missing, "characters without a glyph in their font will not show");
        }

        html_to_pdf(&self.to_html(story, fonts), fonts)
    }
}

/// Characters across `story` that their paragraph's font cannot draw.
pub fn missing_glyphs(story: &[Flowable], fonts: &FontRegistry) -> usize {
    story
        .iter()
        .map(|flowable| match flowable {
            Flowable::Paragraph(paragraph) => {
                fonts.missing_glyphs(paragraph.style.font, &paragraph.text)
            }
            Flowable::Spacer(_) | Flowable::PageBreak => 0,
        })
        .sum()
}
