use std::fmt::Write;

use crate::block::{Block, ListKind, MarkupDocument};

/// Default stylesheet embedded into generated HTML documents.
pub const STYLESHEET: &str = r#"@font-face {
    font-family: 'NotoSansCJK';
    src: url('/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc') format('truetype');
}

body {
    font-family: 'NotoSansCJK', 'Noto Serif CJK SC', 'AR PL UMing TW MBE', sans-serif;
    font-size: 12pt;
    line-height: 1.6;
    margin: 2cm;
    color: #333;
}

h1 {
    font-size: 24pt;
    color: #1a1a1a;
    border-bottom: 2px solid #007bff;
    padding-bottom: 10px;
    margin-bottom: 30px;
}

h2 {
    font-size: 18pt;
    color: #2c3e50;
    margin-top: 25px;
    margin-bottom: 15px;
}

h3 {
    font-size: 14pt;
    color: #34495e;
    margin-top: 20px;
    margin-bottom: 10px;
}

h4, h5, h6 {
    font-size: 12pt;
    color: #555;
    margin-top: 15px;
    margin-bottom: 8px;
}

p {
    margin: 10px 0;
    text-align: justify;
}

ul, ol {
    margin: 10px 0;
    padding-left: 30px;
}

li {
    margin: 5px 0;
}

pre {
    background-color: #f5f5f5;
    padding: 10px;
    border-radius: 5px;
    overflow-x: auto;
    font-family: 'Courier New', monospace;
    font-size: 10pt;
}

hr {
    border: none;
    border-top: 1px solid #ddd;
    margin: 20px 0;
}

.content {
    max-width: 100%;
}

@page {
    size: A4;
    margin: 2cm;
}
"#;

/// Options for the HTML document wrapper.
#[derive(Debug, Clone)]
pub struct HtmlOptions<'a> {
    /// Text of the `<title>` element.
    pub title: &'a str,
    pub lang: &'a str,
    pub stylesheet: &'a str,
}

impl<'a> HtmlOptions<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            lang: "zh-CN",
            stylesheet: STYLESHEET,
        }
    }
}

/// Render the converted blocks as a complete HTML document.
pub fn render_html(document: &MarkupDocument, options: &HtmlOptions<'_>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(html, "<html lang=\"{}\">", escape_html(options.lang));
    html.push_str("<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    let _ = writeln!(html, "    <title>{}</title>", escape_html(options.title));
    html.push_str("    <style>\n");
    html.push_str(options.stylesheet);
    html.push_str("    </style>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str(&render_body(document));
    html.push_str("</body>\n");
    html.push_str("</html>\n");

    html
}

/// Render only the body fragment: the title heading followed by the content
/// container.
pub fn render_body(document: &MarkupDocument) -> String {
    let mut body = String::new();

    for block in &document.blocks {
        if let Block::Title(title) = block {
            let _ = writeln!(body, "<h1>{}</h1>", escape_html(title));
        }
    }

    body.push_str("<div class=\"content\">\n");
    for block in &document.blocks {
        write_block(&mut body, block);
    }
    body.push_str("</div>\n");

    body
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Title(_) => {}
        Block::Heading { level, text } => {
            let _ = writeln!(out, "<h{level}>{}</h{level}>", escape_html(text));
        }
        Block::Paragraph(text) => {
            let _ = writeln!(out, "<p>{}</p>", escape_html(text));
        }
        Block::List { kind, start, items } => {
            let tag = match kind {
                ListKind::Unordered => "ul",
                ListKind::Ordered => "ol",
            };
            match start {
                Some(start) if *start != 1 => {
                    let _ = writeln!(out, "<{tag} start=\"{start}\">");
                }
                _ => {
                    let _ = writeln!(out, "<{tag}>");
                }
            }
            for item in items {
                let _ = writeln!(out, "<li>{}</li>", escape_html(item));
            }
            let _ = writeln!(out, "</{tag}>");
        }
        Block::Code { lines } => {
            let escaped: Vec<String> = lines.iter().map(|line| escape_html(line)).collect();
            let _ = writeln!(out, "<pre>{}</pre>", escaped.join("\n"));
        }
        Block::Rule => out.push_str("<hr>\n"),
        Block::Break => out.push_str("<br>\n"),
    }
}

/// Escape the characters that carry meaning in HTML text and attributes.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"a < b && "c" > d"#),
            "a &lt; b &amp;&amp; &quot;c&quot; &gt; d"
        );
    }

    #[test]
    fn code_lines_share_one_pre_element() {
        let doc = MarkupDocument {
            title: None,
            blocks: vec![Block::Code {
                lines: vec!["local x = 1".into(), "    return <x>".into()],
            }],
        };

        let body = render_body(&doc);
        assert!(body.contains("<pre>local x = 1\n    return &lt;x&gt;</pre>"));
    }

    #[test]
    fn ordered_lists_keep_their_first_number() {
        let list = |start| MarkupDocument {
            title: None,
            blocks: vec![Block::List {
                kind: ListKind::Ordered,
                start,
                items: vec!["third".into()],
            }],
        };

        assert!(render_body(&list(Some(3))).contains("<ol start=\"3\">\n<li>third</li>\n</ol>"));
        assert!(render_body(&list(Some(1))).contains("<ol>\n<li>third</li>"));
    }
}
