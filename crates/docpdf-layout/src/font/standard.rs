//! Fonts every PDF viewer ships, used when no font file loads.

const WINANSI_EXTRA: [(char, u8); 27] = [
    ('€', 0x80),
    ('‚', 0x82),
    ('ƒ', 0x83),
    ('„', 0x84),
    ('…', 0x85),
    ('†', 0x86),
    ('‡', 0x87),
    ('ˆ', 0x88),
    ('‰', 0x89),
    ('Š', 0x8A),
    ('‹', 0x8B),
    ('Œ', 0x8C),
    ('Ž', 0x8E),
    ('‘', 0x91),
    ('’', 0x92),
    ('“', 0x93),
    ('”', 0x94),
    ('•', 0x95),
    ('–', 0x96),
    ('—', 0x97),
    ('˜', 0x98),
    ('™', 0x99),
    ('š', 0x9A),
    ('›', 0x9B),
    ('œ', 0x9C),
    ('ž', 0x9E),
    ('Ÿ', 0x9F),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    Courier,
}

impl StandardFont {
    pub const ALL: [StandardFont; 3] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::Courier,
    ];

    pub fn base_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::Courier => "Courier",
        }
    }

    /// CSS `font-family` value. Bold is carried by `font-weight`.
    pub fn css_family(self) -> &'static str {
        match self {
            StandardFont::Helvetica | StandardFont::HelveticaBold => "Helvetica",
            StandardFont::Courier => "Courier",
        }
    }

    pub fn is_bold(self) -> bool {
        self == StandardFont::HelveticaBold
    }

    /// Whether the font's single-byte encoding can show `ch`.
    pub fn covers(self, ch: char) -> bool {
        winansi(ch).is_some()
    }
}

/// Map a character to its single-byte `WinAnsiEncoding` code.
pub fn winansi(ch: char) -> Option<u8> {
    match ch as u32 {
        code @ 0x20..=0x7E => Some(code as u8),
        code @ 0xA0..=0xFF => Some(code as u8),
        _ => WINANSI_EXTRA
            .iter()
            .find(|(candidate, _)| *candidate == ch)
            .map(|(_, code)| *code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_latin_and_typographic_characters() {
        assert_eq!(winansi('A'), Some(b'A'));
        assert_eq!(winansi('©'), Some(0xA9));
        assert_eq!(winansi('—'), Some(0x97));
        assert_eq!(winansi('中'), None);
        assert_eq!(winansi('\t'), None);
    }

    #[test]
    fn bold_helvetica_shares_the_family() {
        assert_eq!(StandardFont::HelveticaBold.css_family(), "Helvetica");
        assert!(StandardFont::HelveticaBold.is_bold());
        assert!(!StandardFont::Courier.covers('框'));
        assert!(StandardFont::Courier.covers('é'));
    }
}
