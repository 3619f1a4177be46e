//! Fonts a document may name in its styles.

pub mod embedded;
pub mod standard;

use std::path::PathBuf;

use tracing::{debug, info, warn};

pub use embedded::EmbeddedFont;
pub use standard::{winansi, StandardFont};

use crate::error::FontError;

/// Handle to a font held by a [`FontRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontKey(usize);

/// A font file to try during registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontCandidate {
    pub path: PathBuf,
    pub name: String,
}

impl FontCandidate {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        FontCandidate {
            path: path.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug)]
enum LoadedFont {
    Standard(StandardFont),
    Embedded(EmbeddedFont),
}

/// Owns every font a document may draw with. The standard fonts are always
/// present; font files are appended by registration and passed to the
/// renderer under their registered name.
#[derive(Debug)]
pub struct FontRegistry {
    fonts: Vec<LoadedFont>,
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FontRegistry {
    pub fn new() -> Self {
        let fonts = StandardFont::ALL
            .iter()
            .copied()
            .map(LoadedFont::Standard)
            .collect();
        FontRegistry { fonts }
    }

    pub fn standard(&self, font: StandardFont) -> FontKey {
        let position = StandardFont::ALL
            .iter()
            .position(|candidate| *candidate == font)
            .unwrap_or(0);
        FontKey(position)
    }

    /// Look up a font by its registered name or standard name.
    pub fn find(&self, name: &str) -> Option<FontKey> {
        self.fonts
            .iter()
            .position(|font| match font {
                LoadedFont::Standard(font) => font.base_name() == name,
                LoadedFont::Embedded(embedded) => embedded.name() == name,
            })
            .map(FontKey)
    }

    pub fn name(&self, key: FontKey) -> &str {
        match &self.fonts[key.0] {
            LoadedFont::Standard(font) => font.base_name(),
            LoadedFont::Embedded(embedded) => embedded.name(),
        }
    }

    pub fn is_embedded(&self, key: FontKey) -> bool {
        matches!(self.fonts[key.0], LoadedFont::Embedded(_))
    }

    /// Value for a CSS `font-family` declaration.
    pub fn css_family(&self, key: FontKey) -> &str {
        match &self.fonts[key.0] {
            LoadedFont::Standard(font) => font.css_family(),
            LoadedFont::Embedded(embedded) => embedded.name(),
        }
    }

    pub fn is_bold(&self, key: FontKey) -> bool {
        matches!(&self.fonts[key.0], LoadedFont::Standard(font) if font.is_bold())
    }

    /// Count the characters of `text` that `key` cannot draw.
    pub fn missing_glyphs(&self, key: FontKey, text: &str) -> usize {
        match &self.fonts[key.0] {
            LoadedFont::Standard(font) => text
                .chars()
                .filter(|ch| embedded::needs_glyph(*ch) && !font.covers(*ch))
                .count(),
            LoadedFont::Embedded(embedded) => embedded.missing_glyphs(text),
        }
    }

    /// Font files registered so far, in registration order.
    pub fn embedded(&self) -> impl Iterator<Item = &EmbeddedFont> {
        self.fonts.iter().filter_map(|font| match font {
            LoadedFont::Embedded(embedded) => Some(embedded),
            LoadedFont::Standard(_) => None,
        })
    }

    /// Load a single font file. Registering a name twice returns the
    /// existing key.
    pub fn register_file(&mut self, candidate: &FontCandidate) -> Result<FontKey, FontError> {
        if let Some(key) = self.find(&candidate.name) {
            return Ok(key);
        }

        let font = EmbeddedFont::load(&candidate.path, &candidate.name)?;
        self.fonts.push(LoadedFont::Embedded(font));
        Ok(FontKey(self.fonts.len() - 1))
    }

    /// Try `candidates` in order and return the first that loads; fall back
    /// to Helvetica when none does.
    pub fn register_first_available(&mut self, candidates: &[FontCandidate]) -> FontKey {
        for candidate in candidates {
            if !candidate.path.exists() {
                debug!(path = %candidate.path.display(), "font candidate not present");
                continue;
            }

            match self.register_file(candidate) {
                Ok(key) => {
                    info!(
                        font = %candidate.name,
                        path = %candidate.path.display(),
                        "registered font"
                    );
                    return key;
                }
                Err(err) => {
                    warn!(path = %candidate.path.display(), error = %err, "failed to register font");
                }
            }
        }

        info!("using default Helvetica font");
        self.standard(StandardFont::Helvetica)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_helvetica_when_no_candidate_loads() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        let broken = temp.path().join("broken.ttc");
        std::fs::write(&broken, b"not a font").expect("write broken font");

        let mut registry = FontRegistry::new();
        let key = registry.register_first_available(&[
            FontCandidate::new(temp.path().join("missing.ttc"), "Missing"),
            FontCandidate::new(&broken, "Broken"),
        ]);

        assert_eq!(key, registry.standard(StandardFont::Helvetica));
        assert_eq!(registry.name(key), "Helvetica");
        assert_eq!(registry.find("Broken"), None);
        assert_eq!(registry.embedded().count(), 0);
    }

    #[test]
    fn counts_characters_the_standard_fonts_cannot_draw() {
        let registry = FontRegistry::new();
        let helvetica = registry.standard(StandardFont::Helvetica);

        assert_eq!(registry.missing_glyphs(helvetica, "Café — ok\n"), 0);
        assert_eq!(registry.missing_glyphs(helvetica, "# 框架 中文说明"), 6);
    }

    #[test]
    fn bold_helvetica_maps_to_a_css_weight() {
        let registry = FontRegistry::new();
        let bold = registry.standard(StandardFont::HelveticaBold);

        assert_eq!(registry.css_family(bold), "Helvetica");
        assert!(registry.is_bold(bold));
        assert_eq!(registry.find("Helvetica-Bold"), Some(bold));
    }
}
