use std::fs;

use docpdf_guide::story::{toc_entry, END_LINE, TOC_HEADING};
use docpdf_guide::{build_story, render_guide, GuideOptions, GuideStyles, SECTIONS};
use docpdf_layout::{Flowable, FontCandidate, FontRegistry, StandardFont};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn paragraph_texts(story: &[Flowable]) -> Vec<String> {
    story
        .iter()
        .filter_map(|flowable| match flowable {
            Flowable::Paragraph(paragraph) => Some(paragraph.text.clone()),
            _ => None,
        })
        .collect()
}

fn helvetica_styles() -> GuideStyles {
    let fonts = FontRegistry::new();
    let font = fonts.standard(StandardFont::Helvetica);
    GuideStyles::new(&fonts, font)
}

#[test]
fn story_starts_with_cover_and_ends_with_closing_line() {
    // Given
    let styles = helvetica_styles();

    // When
    let story = build_story(&styles);

    // Then
    assert_eq!(story.first(), Some(&Flowable::Spacer(60.0)));
    let texts = paragraph_texts(&story);
    assert_eq!(
        &texts[..5],
        &[
            "MyResty",
            "API Framework Documentation",
            "API 框架文档",
            "Version 1.0.0",
            "© 2026 OpenResty API Framework",
        ]
    );
    assert_eq!(texts.last().map(String::as_str), Some(END_LINE));

    let breaks = story
        .iter()
        .filter(|flowable| **flowable == Flowable::PageBreak)
        .count();
    assert_eq!(breaks, 3);
}

#[test]
fn table_of_contents_numbers_each_section() {
    // Given
    let styles = helvetica_styles();

    // When
    let texts = paragraph_texts(&build_story(&styles));

    // Then
    let toc_start = texts
        .iter()
        .position(|text| text == TOC_HEADING)
        .expect("toc heading");
    let entries: Vec<String> = SECTIONS
        .iter()
        .enumerate()
        .map(|(index, section)| toc_entry(index + 1, section))
        .collect();
    assert_eq!(&texts[toc_start + 1..toc_start + 9], entries.as_slice());
    assert_eq!(entries[0], "1. 1. Directory Structure  1. 目录结构");
    assert_eq!(entries[7], "8. 8. Connection Pool & Cache  8. 连接池与缓存");
}

#[test]
fn chapters_follow_section_order_with_code_blocks() {
    // Given
    let styles = helvetica_styles();

    // When
    let story = build_story(&styles);

    // Then
    let headings: Vec<&str> = story
        .iter()
        .filter_map(|flowable| match flowable {
            Flowable::Paragraph(paragraph) if paragraph.style.name == "Heading" => {
                Some(paragraph.text.as_str())
            }
            _ => None,
        })
        .collect();
    assert_eq!(headings.len(), 10);
    assert_eq!(headings[1], "1. Directory Structure");
    assert_eq!(headings[8], "8. Connection Pool & Cache");
    assert_eq!(headings[9], "Appendix: Configuration");

    let code_blocks = story
        .iter()
        .filter(|flowable| {
            matches!(flowable, Flowable::Paragraph(paragraph) if paragraph.style.name == "Code")
        })
        .count();
    assert_eq!(code_blocks, 8);
}

#[test]
fn renders_pdf_with_default_font_when_candidates_are_missing() {
    // Given
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("out/MyResty_Documentation.pdf");
    let options = GuideOptions {
        output: output.clone(),
        fonts: vec![FontCandidate::new(temp.path().join("missing.ttc"), "UMing")],
    };

    // When
    let outcome = render_guide(&options).expect("render guide");

    // Then
    assert_eq!(outcome.font, "Helvetica");
    assert_eq!(outcome.output, output);
    assert!(outcome.pages >= 1, "pages: {}", outcome.pages);
    assert!(outcome.missing_glyphs > 0);
    let bytes = fs::read(&output).expect("read pdf");
    assert_eq!(bytes.len(), outcome.bytes);
    assert!(bytes.starts_with(b"%PDF-"));
}
