//! Line-based Markdown conversion for documentation rendering.
//!
//! The converter is a single linear scan with local state (inside a code
//! fence, inside a list). It recognises headings, bullet and numbered lists,
//! fenced code, horizontal rules and blank lines; everything else becomes a
//! paragraph with inline markup stripped. Tables are skipped. There is no
//! nesting and no attempt at full CommonMark compliance.

mod block;
mod html;
mod inline;
mod state;

pub use block::{Block, ListKind, MarkupDocument};
pub use html::{escape_html, render_body, render_html, HtmlOptions, STYLESHEET};
pub use inline::clean_inline;

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

pub fn convert_path(path: &Path) -> io::Result<MarkupDocument> {
    let file = File::open(path)?;
    convert_reader(BufReader::new(file))
}

/// Convert everything `reader` yields. `\n` and `\r\n` both end a line.
pub fn convert_reader<R: BufRead>(reader: R) -> io::Result<MarkupDocument> {
    let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
    Ok(state::scan(lines.iter().map(String::as_str)))
}

pub fn convert_str(input: &str) -> MarkupDocument {
    state::scan(input.lines())
}
