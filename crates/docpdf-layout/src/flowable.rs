use crate::style::ParagraphStyle;

/// Anything that can be placed in the page frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Flowable {
    Paragraph(Paragraph),
    /// Vertical gap in points.
    Spacer(f32),
    /// Continue on a fresh page.
    PageBreak,
}

/// Styled text. `\n` forces a line break.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub style: ParagraphStyle,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, style: &ParagraphStyle) -> Self {
        Paragraph {
            text: text.into(),
            style: style.clone(),
        }
    }
}

impl From<Paragraph> for Flowable {
    fn from(paragraph: Paragraph) -> Self {
        Flowable::Paragraph(paragraph)
    }
}
