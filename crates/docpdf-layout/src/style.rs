use crate::color::Color;
use crate::font::{FontKey, FontRegistry, StandardFont};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Visual attributes of a paragraph. Sizes are in points.
///
/// `back_color` fills the paragraph box; `border_padding` separates the box
/// edge from the text on every side.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphStyle {
    pub name: String,
    pub font: FontKey,
    pub font_size: f32,
    pub leading: f32,
    pub space_before: f32,
    pub space_after: f32,
    pub alignment: Alignment,
    pub text_color: Color,
    pub back_color: Option<Color>,
    pub border_padding: f32,
    pub left_indent: f32,
    pub right_indent: f32,
    /// Keep runs of spaces and leading indentation, as code needs.
    pub preserve_whitespace: bool,
}

impl ParagraphStyle {
    pub fn new(name: impl Into<String>, font: FontKey) -> Self {
        ParagraphStyle {
            name: name.into(),
            font,
            font_size: 10.0,
            leading: 12.0,
            space_before: 0.0,
            space_after: 0.0,
            alignment: Alignment::Left,
            text_color: Color::BLACK,
            back_color: None,
            border_padding: 0.0,
            left_indent: 0.0,
            right_indent: 0.0,
            preserve_whitespace: false,
        }
    }

    /// Copy this style under a new name, like a child style inheriting
    /// from its parent.
    pub fn derive(&self, name: impl Into<String>) -> Self {
        ParagraphStyle {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_font(mut self, font: FontKey) -> Self {
        self.font = font;
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_leading(mut self, leading: f32) -> Self {
        self.leading = leading;
        self
    }

    pub fn with_space_before(mut self, space: f32) -> Self {
        self.space_before = space;
        self
    }

    pub fn with_space_after(mut self, space: f32) -> Self {
        self.space_after = space;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_back_color(mut self, color: Color) -> Self {
        self.back_color = Some(color);
        self
    }

    pub fn without_back_color(mut self) -> Self {
        self.back_color = None;
        self
    }

    pub fn with_border_padding(mut self, padding: f32) -> Self {
        self.border_padding = padding;
        self
    }

    pub fn with_indents(mut self, left: f32, right: f32) -> Self {
        self.left_indent = left;
        self.right_indent = right;
        self
    }

    pub fn preserving_whitespace(mut self) -> Self {
        self.preserve_whitespace = true;
        self
    }
}

/// Named collection of paragraph styles.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    styles: Vec<ParagraphStyle>,
}

impl StyleSheet {
    /// The stock styles every document starts from: `Normal`, `Title`,
    /// `Heading1`..`Heading3` and `Code`.
    pub fn sample(fonts: &FontRegistry) -> Self {
        let regular = fonts.standard(StandardFont::Helvetica);
        let bold = fonts.standard(StandardFont::HelveticaBold);
        let mono = fonts.standard(StandardFont::Courier);

        let normal = ParagraphStyle::new("Normal", regular);
        let title = normal
            .derive("Title")
            .with_font(bold)
            .with_font_size(18.0)
            .with_leading(22.0)
            .with_alignment(Alignment::Center)
            .with_space_after(6.0);
        let heading1 = normal
            .derive("Heading1")
            .with_font(bold)
            .with_font_size(18.0)
            .with_leading(22.0)
            .with_space_after(6.0);
        let heading2 = normal
            .derive("Heading2")
            .with_font(bold)
            .with_font_size(14.0)
            .with_leading(18.0)
            .with_space_before(12.0)
            .with_space_after(6.0);
        let heading3 = normal
            .derive("Heading3")
            .with_font(bold)
            .with_font_size(12.0)
            .with_leading(14.4)
            .with_space_before(12.0)
            .with_space_after(6.0);
        let code = normal
            .derive("Code")
            .with_font(mono)
            .with_font_size(8.0)
            .with_leading(8.8)
            .with_indents(36.0, 0.0)
            .preserving_whitespace();

        StyleSheet {
            styles: vec![normal, title, heading1, heading2, heading3, code],
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParagraphStyle> {
        self.styles.iter().find(|style| style.name == name)
    }

    /// Insert or replace a style by name.
    pub fn add(&mut self, style: ParagraphStyle) {
        match self.styles.iter_mut().find(|existing| existing.name == style.name) {
            Some(existing) => *existing = style,
            None => self.styles.push(style),
        }
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_styles_inherit_and_override() {
        let fonts = FontRegistry::new();
        let sheet = StyleSheet::sample(&fonts);
        let title = sheet.get("Title").expect("title style");

        let custom = title.derive("CustomTitle").with_font_size(28.0);

        assert_eq!(custom.alignment, Alignment::Center);
        assert_eq!(custom.font, fonts.standard(StandardFont::HelveticaBold));
        assert_eq!(custom.font_size, 28.0);
        assert_eq!(title.font_size, 18.0);
    }

    #[test]
    fn adding_a_style_replaces_by_name() {
        let fonts = FontRegistry::new();
        let mut sheet = StyleSheet::sample(&fonts);
        let before = sheet.len();

        let normal = sheet.get("Normal").expect("normal").clone().with_font_size(11.0);
        sheet.add(normal);

        assert_eq!(sheet.len(), before);
        assert_eq!(sheet.get("Normal").map(|style| style.font_size), Some(11.0));
    }
}
