use crate::block::{Block, ListKind, MarkupDocument};
use crate::inline::clean_inline;

const FENCE: &str = "```";

/// Linear scanner state. At most one list and one code block are open at a
/// time, and an open list is always closed before any other block is pushed.
#[derive(Default)]
pub struct State {
    title: Option<String>,
    blocks: Vec<Block>,
    list: Option<ListBuilder>,
    code: Option<Vec<String>>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_within_code(&self) -> bool {
        self.code.is_some()
    }

    pub fn is_within_list(&self) -> bool {
        self.list.is_some()
    }

    pub fn set_title(&mut self, title: String) {
        self.blocks.push(Block::Title(title.clone()));
        self.title = Some(title);
    }

    pub fn open_code(&mut self) {
        self.close_list();
        self.code = Some(Vec::new());
    }

    pub fn append_code_line(&mut self, line: &str) {
        if let Some(code) = &mut self.code {
            code.push(line.to_string());
        }
    }

    pub fn close_code(&mut self) {
        if let Some(lines) = self.code.take() {
            self.blocks.push(Block::Code { lines });
        }
    }

    /// Append an item, opening a list when none of `marker`'s kind is open.
    pub fn push_item(&mut self, marker: ListMarker, item: String) {
        let kind = marker.kind();
        if self.list.as_ref().is_some_and(|list| list.kind != kind) {
            self.close_list();
        }
        self.list
            .get_or_insert_with(|| ListBuilder::new(marker))
            .items
            .push(item);
    }

    pub fn push_block(&mut self, block: Block) {
        self.close_list();
        self.blocks.push(block);
    }

    pub fn close_list(&mut self) {
        if let Some(list) = self.list.take() {
            self.blocks.push(list.into_block());
        }
    }

    pub fn finalize(mut self) -> MarkupDocument {
        self.close_code();
        self.close_list();
        MarkupDocument {
            title: self.title,
            blocks: self.blocks,
        }
    }
}

/// Marker that introduced a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    Bullet,
    Number(u64),
}

impl ListMarker {
    fn kind(self) -> ListKind {
        match self {
            ListMarker::Bullet => ListKind::Unordered,
            ListMarker::Number(_) => ListKind::Ordered,
        }
    }
}

struct ListBuilder {
    kind: ListKind,
    start: Option<u64>,
    items: Vec<String>,
}

impl ListBuilder {
    fn new(first: ListMarker) -> Self {
        let start = match first {
            ListMarker::Bullet => None,
            ListMarker::Number(number) => Some(number),
        };
        Self {
            kind: first.kind(),
            start,
            items: Vec::new(),
        }
    }

    fn into_block(self) -> Block {
        Block::List {
            kind: self.kind,
            start: self.start,
            items: self.items,
        }
    }
}

/// Run the scanner over `lines` and return the converted document.
pub fn scan<'a>(lines: impl IntoIterator<Item = &'a str>) -> MarkupDocument {
    let mut state = State::new();

    for (idx, text) in lines.into_iter().enumerate() {
        if idx == 0 {
            if let Some(title) = text.strip_prefix("# ") {
                state.set_title(title.trim().to_string());
                continue;
            }
        }

        if state.is_within_code() {
            if text.trim().starts_with(FENCE) {
                state.close_code();
            } else {
                state.append_code_line(text.trim_end());
            }
            continue;
        }

        let line = text.trim();

        if line.starts_with(FENCE) {
            state.open_code();
            continue;
        }

        if let Some((level, text)) = detect_heading(line) {
            state.push_block(Block::Heading {
                level,
                text: clean_inline(text),
            });
        } else if let Some((marker, item)) = detect_list_item(line) {
            state.push_item(marker, clean_inline(item));
        } else if line.starts_with('|') {
            // Tables have no rendering; their rows leave the state untouched.
            continue;
        } else if line.starts_with("---") {
            state.push_block(Block::Rule);
        } else if line.is_empty() {
            state.push_block(Block::Break);
        } else {
            state.close_list();
            let text = clean_inline(line);
            if !text.is_empty() {
                state.push_block(Block::Paragraph(text));
            }
        }
    }

    state.finalize()
}

fn detect_heading(line: &str) -> Option<(u8, &str)> {
    let pounds = line.chars().take_while(|ch| *ch == '#').count();
    if pounds == 0 || pounds > 6 {
        return None;
    }

    let rest = line[pounds..].strip_prefix(' ')?;
    Some((pounds as u8, rest.trim()))
}

fn detect_list_item(line: &str) -> Option<(ListMarker, &str)> {
    if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return Some((ListMarker::Bullet, item));
    }

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let item = line[digits..].strip_prefix(". ")?;
    // Numbers too long for u64 still mark an item; the list then counts from 1.
    let number = line[..digits].parse().unwrap_or(1);
    Some((ListMarker::Number(number), item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_heading_levels() {
        assert_eq!(detect_heading("## Install"), Some((2, "Install")));
        assert_eq!(detect_heading("###### Deep"), Some((6, "Deep")));
        assert_eq!(detect_heading("####### Too deep"), None);
        assert_eq!(detect_heading("##NoSpace"), None);
        assert_eq!(detect_heading("plain"), None);
    }

    #[test]
    fn detects_list_items() {
        assert_eq!(detect_list_item("- dash"), Some((ListMarker::Bullet, "dash")));
        assert_eq!(detect_list_item("* star"), Some((ListMarker::Bullet, "star")));
        assert_eq!(
            detect_list_item("12. twelfth"),
            Some((ListMarker::Number(12), "twelfth"))
        );
        assert_eq!(detect_list_item("12.5 percent"), None);
        assert_eq!(detect_list_item("-dash"), None);
    }

    #[test]
    fn switching_list_kind_starts_a_new_list() {
        let mut state = State::new();
        state.push_item(ListMarker::Bullet, "a".into());
        state.push_item(ListMarker::Number(4), "b".into());
        state.push_item(ListMarker::Number(9), "c".into());
        let doc = state.finalize();

        assert_eq!(
            doc.blocks,
            vec![
                Block::List {
                    kind: ListKind::Unordered,
                    start: None,
                    items: vec!["a".into()],
                },
                Block::List {
                    kind: ListKind::Ordered,
                    start: Some(4),
                    items: vec!["b".into(), "c".into()],
                },
            ]
        );
    }
}
