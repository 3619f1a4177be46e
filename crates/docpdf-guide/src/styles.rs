use docpdf_layout::{
    Alignment, Color, FontKey, FontRegistry, ParagraphStyle, StandardFont, StyleSheet,
};

/// Paragraph styles of the guide, all derived from the stock sheet with the
/// registered document font swapped in. Code keeps Courier.
#[derive(Debug, Clone)]
pub struct GuideStyles {
    pub title: ParagraphStyle,
    pub subtitle: ParagraphStyle,
    pub subtitle_cn: ParagraphStyle,
    pub heading: ParagraphStyle,
    pub heading_cn: ParagraphStyle,
    pub body: ParagraphStyle,
    pub code: ParagraphStyle,
    pub version: ParagraphStyle,
    pub end: ParagraphStyle,
}

const fn hex(r: u8, g: u8, b: u8) -> Color {
    Color::rgb8(r, g, b)
}

impl GuideStyles {
    pub fn new(fonts: &FontRegistry, font: FontKey) -> Self {
        let sheet = StyleSheet::sample(fonts);
        let normal = sheet
            .get("Normal")
            .cloned()
            .unwrap_or_else(|| ParagraphStyle::new("Normal", font));
        let title_parent = sheet.get("Title").cloned().unwrap_or_else(|| normal.clone());
        let heading_parent = sheet
            .get("Heading1")
            .cloned()
            .unwrap_or_else(|| normal.clone());

        let title = title_parent
            .derive("CustomTitle")
            .with_font(font)
            .with_font_size(28.0)
            .with_leading(34.0)
            .with_space_after(25.0)
            .with_alignment(Alignment::Center)
            .with_text_color(hex(0x1A, 0x52, 0x76));

        let subtitle = normal
            .derive("Subtitle")
            .with_font(font)
            .with_font_size(16.0)
            .with_leading(19.2)
            .with_space_after(30.0)
            .with_alignment(Alignment::Center)
            .with_text_color(hex(0x5D, 0x6D, 0x7E));

        let subtitle_cn = subtitle
            .derive("SubtitleCN")
            .with_font_size(14.0)
            .with_leading(16.8)
            .with_text_color(hex(0x85, 0x92, 0x9E));

        let heading = heading_parent
            .derive("Heading")
            .with_font(font)
            .with_font_size(16.0)
            .with_space_before(20.0)
            .with_space_after(12.0)
            .with_text_color(hex(0x28, 0x74, 0xA6))
            .with_border_padding(8.0)
            .with_back_color(hex(0xD4, 0xE6, 0xF1));

        let heading_cn = heading
            .derive("HeadingCN")
            .with_font_size(12.0)
            .with_text_color(hex(0x7F, 0x8C, 0x8D))
            .without_back_color();

        let body = normal
            .derive("Body")
            .with_font(font)
            .with_font_size(11.0)
            .with_space_before(6.0)
            .with_space_after(6.0)
            .with_leading(16.0)
            .with_alignment(Alignment::Justify);

        let code = normal
            .derive("Code")
            .with_font(fonts.standard(StandardFont::Courier))
            .with_font_size(9.0)
            .with_space_before(8.0)
            .with_space_after(8.0)
            .with_indents(16.0, 16.0)
            .with_leading(14.0)
            .with_back_color(hex(0x2C, 0x3E, 0x50))
            .with_text_color(hex(0xF8, 0xF9, 0xF9))
            .preserving_whitespace();

        let version = normal
            .derive("Version")
            .with_alignment(Alignment::Center)
            .with_font_size(12.0)
            .with_leading(14.4)
            .with_text_color(hex(0xAE, 0xB6, 0xBF));

        let end = normal
            .derive("End")
            .with_alignment(Alignment::Center)
            .with_font_size(12.0)
            .with_leading(14.4)
            .with_text_color(hex(0x95, 0xA5, 0xA6));

        GuideStyles {
            title,
            subtitle,
            subtitle_cn,
            heading,
            heading_cn,
            body,
            code,
            version,
            end,
        }
    }
}
