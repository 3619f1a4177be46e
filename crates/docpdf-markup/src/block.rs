/// Kind of list a run of items belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// One block of converted output, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Leading `# ` line of the document.
    Title(String),
    Heading { level: u8, text: String },
    Paragraph(String),
    List {
        kind: ListKind,
        /// Number of the first item of an ordered list.
        start: Option<u64>,
        items: Vec<String>,
    },
    /// Lines of a fenced code block, indentation preserved.
    Code { lines: Vec<String> },
    Rule,
    /// Blank source line.
    Break,
}

/// Result of converting a Markdown source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupDocument {
    pub title: Option<String>,
    pub blocks: Vec<Block>,
}

impl MarkupDocument {
    /// Number of headings (title excluded) in the document.
    pub fn heading_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|block| matches!(block, Block::Heading { .. }))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Every piece of text the document shows, one block per line.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for block in &self.blocks {
            match block {
                Block::Title(line) | Block::Paragraph(line) | Block::Heading { text: line, .. } => {
                    text.push_str(line);
                    text.push('\n');
                }
                Block::List { items: lines, .. } | Block::Code { lines } => {
                    for line in lines {
                        text.push_str(line);
                        text.push('\n');
                    }
                }
                Block::Rule | Block::Break => {}
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_collects_visible_text_in_order() {
        let doc = MarkupDocument {
            title: Some("框架".into()),
            blocks: vec![
                Block::Title("框架".into()),
                Block::Rule,
                Block::List {
                    kind: ListKind::Ordered,
                    start: Some(2),
                    items: vec!["two".into(), "three".into()],
                },
                Block::Code {
                    lines: vec!["end".into()],
                },
            ],
        };

        assert_eq!(doc.plain_text(), "框架\ntwo\nthree\nend\n");
    }
}
