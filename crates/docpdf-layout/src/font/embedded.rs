use std::fs;
use std::path::{Path, PathBuf};

use ttf_parser::Face;

use crate::error::FontError;

/// A TrueType or OpenType file handed to the PDF renderer as-is. For a
/// `.ttc` collection the first face is used.
#[derive(Clone)]
pub struct EmbeddedFont {
    name: String,
    path: PathBuf,
    data: Vec<u8>,
}

impl EmbeddedFont {
    pub fn load(path: &Path, name: &str) -> Result<Self, FontError> {
        if !path.is_file() {
            return Err(FontError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let data = fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let face = Face::parse(&data, 0).map_err(|err| FontError::Parse {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        if face.number_of_glyphs() == 0 {
            return Err(FontError::Parse {
                path: path.to_path_buf(),
                reason: "face has no glyphs".to_string(),
            });
        }

        Ok(EmbeddedFont {
            name: name.to_string(),
            path: path.to_path_buf(),
            data,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Characters of `text` the face has no glyph for.
    pub fn missing_glyphs(&self, text: &str) -> usize {
        let Ok(face) = Face::parse(&self.data, 0) else {
            return text.chars().filter(|ch| needs_glyph(*ch)).count();
        };
        text.chars()
            .filter(|ch| needs_glyph(*ch) && face.glyph_index(*ch).is_none())
            .count()
    }
}

impl std::fmt::Debug for EmbeddedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddedFont")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Whitespace and control characters are laid out, not drawn.
pub(crate) fn needs_glyph(ch: char) -> bool {
    !ch.is_whitespace() && !ch.is_control()
}
