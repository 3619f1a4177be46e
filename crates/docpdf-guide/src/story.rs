use docpdf_layout::{Flowable, Paragraph, ParagraphStyle};

use crate::content::{paragraphs, Section, CONFIG_CODE, SECTIONS};
use crate::styles::GuideStyles;

pub const COVER_TITLE: &str = "MyResty";
pub const COVER_SUBTITLE: &str = "API Framework Documentation";
pub const COVER_SUBTITLE_CN: &str = "API 框架文档";
pub const VERSION_LINE: &str = "Version 1.0.0";
pub const COPYRIGHT_LINE: &str = "© 2026 OpenResty API Framework";
pub const TOC_HEADING: &str = "Table of Contents / 目录";
pub const APPENDIX_HEADING: &str = "Appendix: Configuration";
pub const APPENDIX_HEADING_CN: &str = "附录：配置参考";
pub const END_LINE: &str = "— End of Document —";

/// Table-of-contents entry for the `index`th section, counting from 1.
/// The entry number is prefixed to titles that carry their own.
pub fn toc_entry(index: usize, section: &Section) -> String {
    format!("{index}. {}  {}", section.title, section.title_cn)
}

/// Assemble cover, contents, chapters, appendix and closing line.
pub fn build_story(styles: &GuideStyles) -> Vec<Flowable> {
    let mut story: Vec<Flowable> = Vec::new();
    let para = |text: &str, style: &ParagraphStyle| -> Flowable { Paragraph::new(text, style).into() };

    story.push(Flowable::Spacer(60.0));
    story.push(para(COVER_TITLE, &styles.title));
    story.push(para(COVER_SUBTITLE, &styles.subtitle));
    story.push(para(COVER_SUBTITLE_CN, &styles.subtitle_cn));
    story.push(Flowable::Spacer(50.0));
    story.push(para(VERSION_LINE, &styles.version));
    story.push(para(COPYRIGHT_LINE, &styles.version));
    story.push(Flowable::PageBreak);

    story.push(para(TOC_HEADING, &styles.heading));
    story.push(Flowable::Spacer(10.0));
    for (index, section) in SECTIONS.iter().enumerate() {
        story.push(para(&toc_entry(index + 1, section), &styles.body));
    }
    story.push(Flowable::PageBreak);

    for section in &SECTIONS {
        story.push(para(section.title, &styles.heading));
        story.push(para(section.title_cn, &styles.heading_cn));
        story.push(Flowable::Spacer(5.0));
        for text in paragraphs(section.content) {
            story.push(para(&text, &styles.body));
        }

        if let Some(code) = section.code {
            story.push(Flowable::Spacer(8.0));
            story.push(para(code, &styles.code));
        }

        story.push(Flowable::Spacer(12.0));
    }

    story.push(Flowable::PageBreak);
    story.push(para(APPENDIX_HEADING, &styles.heading));
    story.push(para(APPENDIX_HEADING_CN, &styles.heading_cn));
    story.push(Flowable::Spacer(10.0));
    story.push(para(CONFIG_CODE, &styles.code));

    story.push(Flowable::Spacer(30.0));
    story.push(para(END_LINE, &styles.end));

    story
}
