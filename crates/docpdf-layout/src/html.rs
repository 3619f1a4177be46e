//! Story to HTML. Every paragraph carries its style inline so the renderer
//! needs no stylesheet beyond the page box.

use std::fmt::Write;

use docpdf_markup::escape_html;

use crate::flowable::{Flowable, Paragraph};
use crate::font::FontRegistry;
use crate::style::{Alignment, ParagraphStyle};
use crate::template::DocTemplate;

/// Render `story` as a complete HTML document laid out on `template`'s page.
pub fn story_to_html(template: &DocTemplate, story: &[Flowable], fonts: &FontRegistry) -> String {
    let page = template.page_size;
    let margins = template.margins;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(&template.title));
    html.push_str("<style>\n");
    let _ = writeln!(
        html,
        "@page {{ size: {}pt {}pt; margin: 0; }}",
        page.width, page.height
    );
    let _ = writeln!(
        html,
        "body {{ margin: {}pt {}pt {}pt {}pt; }}",
        margins.top, margins.right, margins.bottom, margins.left
    );
    html.push_str("</style>\n</head>\n<body>\n");

    for flowable in story {
        match flowable {
            Flowable::Paragraph(paragraph) => write_paragraph(&mut html, paragraph, fonts),
            Flowable::Spacer(height) => {
                let _ = writeln!(html, "<div style=\"height: {height}pt\"></div>");
            }
            Flowable::PageBreak => {
                html.push_str("<div style=\"page-break-after: always; break-after: page\"></div>\n");
            }
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn write_paragraph(out: &mut String, paragraph: &Paragraph, fonts: &FontRegistry) {
    let style = &paragraph.style;
    let css = paragraph_css(style, fonts);
    let text = escape_html(&paragraph.text);

    if style.preserve_whitespace {
        let _ = writeln!(out, "<pre style=\"{css}\">{text}</pre>");
    } else {
        let _ = writeln!(out, "<p style=\"{css}\">{}</p>", text.replace('\n', "<br>"));
    }
}

/// Inline CSS for one paragraph style.
pub fn paragraph_css(style: &ParagraphStyle, fonts: &FontRegistry) -> String {
    let mut css = String::new();

    let _ = write!(css, "font-family: '{}'; ", fonts.css_family(style.font));
    if fonts.is_bold(style.font) {
        css.push_str("font-weight: bold; ");
    }
    let _ = write!(
        css,
        "font-size: {}pt; line-height: {}pt; color: {}; ",
        style.font_size, style.leading, style.text_color
    );
    let _ = write!(
        css,
        "margin: {}pt {}pt {}pt {}pt; ",
        style.space_before, style.right_indent, style.space_after, style.left_indent
    );
    if let Some(back) = style.back_color {
        let _ = write!(css, "background-color: {back}; ");
    }
    if style.border_padding > 0.0 {
        let _ = write!(css, "padding: {}pt; ", style.border_padding);
    }
    let align = match style.alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
        Alignment::Justify => "justify",
    };
    let _ = write!(css, "text-align: {align};");
    if style.preserve_whitespace {
        css.push_str(" white-space: pre;");
    }

    css
}
