use std::fs;
use std::path::{Path, PathBuf};

use docpdf_layout::FontCandidate;
use docpdf_readme::{fallback_path, render_readme, ReadmeArtifact, ReadmeError, ReadmeOptions};
use tempfile::TempDir;

fn fixture() -> PathBuf {
    PathBuf::from("tests/fixtures/README.md")
}

const ASCII_README: &str = "# MyResty Framework\n\nA lightweight API framework.\n\n## Install\n\n3. Fetch\n4. Run\n";

fn ascii_readme(dir: &Path) -> PathBuf {
    let path = dir.join("README.md");
    fs::write(&path, ASCII_README).expect("write readme");
    path
}

fn options(input: PathBuf, output: PathBuf, dir: &Path) -> ReadmeOptions {
    ReadmeOptions {
        input,
        output,
        title: "MyResty Framework".into(),
        fonts: vec![FontCandidate::new(dir.join("missing.ttc"), "NotoSans")],
        html_only: false,
    }
}

#[test]
fn missing_input_is_reported() {
    let temp = TempDir::new().expect("tempdir");
    let opts = options(
        temp.path().join("README.md"),
        temp.path().join("README.pdf"),
        temp.path(),
    );

    let err = render_readme(&opts).expect_err("input is missing");

    assert!(matches!(err, ReadmeError::InputNotFound { .. }));
    assert!(err.to_string().ends_with("README.md not found"));
}

#[test]
fn renders_pdf_from_markdown() {
    // Given
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("README.pdf");
    let opts = options(ascii_readme(temp.path()), output.clone(), temp.path());

    // When
    let outcome = render_readme(&opts).expect("render readme");

    // Then
    assert!(matches!(outcome.artifact, ReadmeArtifact::Pdf { pages } if pages >= 1));
    assert_eq!(outcome.output, output);
    assert_eq!(outcome.headings, 1);
    let bytes = fs::read(&output).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(!fallback_path(&output).exists());
}

#[test]
fn html_only_writes_the_intermediate_document() {
    // Given
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("README.pdf");
    let mut opts = options(fixture(), output.clone(), temp.path());
    opts.html_only = true;

    // When
    let outcome = render_readme(&opts).expect("render html");

    // Then
    let html_path = temp.path().join("README.html");
    assert_eq!(outcome.output, html_path);
    assert_eq!(outcome.artifact, ReadmeArtifact::Html { reason: None });
    assert!(!output.exists());

    let html = fs::read_to_string(&html_path).expect("read html");
    assert!(html.contains("<title>MyResty Framework</title>"));
    assert!(html.contains("<h1>MyResty Framework</h1>"));
    assert!(html.contains(
        "<p>A lightweight API framework built on OpenResty, inspired by CodeIgniter.</p>"
    ));
    assert!(html.contains("<ol>\n<li>Install OpenResty</li>\n<li>Start nginx</li>\n</ol>"));
    assert!(!html.contains("Method"));
}

#[test]
fn falls_back_to_html_when_the_pdf_cannot_be_written() {
    // Given: a directory occupies the PDF path.
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("README.pdf");
    fs::create_dir(&output).expect("create blocking dir");
    let opts = options(ascii_readme(temp.path()), output.clone(), temp.path());

    // When
    let outcome = render_readme(&opts).expect("fallback succeeds");

    // Then
    match &outcome.artifact {
        ReadmeArtifact::Html { reason: Some(reason) } => {
            assert!(reason.contains("README.pdf"), "{reason}");
        }
        other => panic!("expected HTML fallback, got {other:?}"),
    }
    assert_eq!(outcome.output, temp.path().join("README.html"));
    assert!(outcome.output.is_file());
}

#[test]
fn empty_markdown_falls_back_to_html() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("README.md");
    fs::write(&input, "").expect("write empty readme");
    let opts = options(input, temp.path().join("README.pdf"), temp.path());

    let outcome = render_readme(&opts).expect("fallback succeeds");

    assert!(matches!(
        outcome.artifact,
        ReadmeArtifact::Html { reason: Some(_) }
    ));
    assert!(temp.path().join("README.html").is_file());
}

#[test]
fn chinese_text_without_a_cjk_font_falls_back_to_html() {
    // Given
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("README.md");
    fs::write(&input, "# 框架\n\n中文说明\n").expect("write readme");
    let output = temp.path().join("README.pdf");
    let mut opts = options(input, output.clone(), temp.path());
    opts.fonts = vec![];

    // When
    let outcome = render_readme(&opts).expect("fallback succeeds");

    // Then
    match &outcome.artifact {
        ReadmeArtifact::Html { reason: Some(reason) } => {
            assert_eq!(reason, "6 character(s) have no glyph in font Helvetica");
        }
        other => panic!("expected HTML fallback, got {other:?}"),
    }
    assert!(!output.exists());
    let html = fs::read_to_string(temp.path().join("README.html")).expect("read html");
    assert!(html.contains("<h1>框架</h1>"));
    assert!(html.contains("<p>中文说明</p>"));
    assert!(html.contains("font-family: 'Helvetica', 'NotoSansCJK', sans-serif;"));
}

#[test]
fn fallback_html_is_the_document_handed_to_the_renderer() {
    // Given
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("README.pdf");
    let opts = options(fixture(), output, temp.path());

    // When
    let outcome = render_readme(&opts).expect("fallback succeeds");

    // Then
    assert!(matches!(outcome.artifact, ReadmeArtifact::Html { reason: Some(_) }));
    let html = fs::read_to_string(&outcome.output).expect("read html");
    assert!(html.contains("<ol>\n<li>Install OpenResty</li>"));
    assert!(html.contains("<li>中文文档支持</li>"));
    assert!(html.contains("@page"));
}
