use std::sync::OnceLock;

use regex::Regex;

fn link_pattern() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("link pattern is valid"))
}

/// Strip the inline markup that has no counterpart in rendered output:
/// strong markers (`**`), code ticks and link targets (`[text](url)` keeps
/// `text`). Emphasis with single `*` or `_` is left untouched.
pub fn clean_inline(input: &str) -> String {
    let stripped = input.replace("**", "").replace('`', "");
    link_pattern().replace_all(&stripped, "$1").into_owned()
}
