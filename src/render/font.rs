//! Font resolution for the ASCII-art rasterizer.
//!
//! Fonts are tried in order; the chain always ends with a built-in 8x8
//! bitmap font so resolution cannot fail.

use ab_glyph::FontVec;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One way of obtaining a font
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontStrategy {
    /// A TrueType/OpenType file on disk
    TrueType(PathBuf),
    /// Compiled-in bitmap glyphs
    BuiltinBitmap,
}

/// A font ready to draw with
pub enum LoadedFont {
    TrueType(FontVec),
    Builtin,
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadedFont::TrueType(_) => write!(f, "LoadedFont::TrueType"),
            LoadedFont::Builtin => write!(f, "LoadedFont::Builtin"),
        }
    }
}

impl FontStrategy {
    pub fn load(&self) -> Option<LoadedFont> {
        match self {
            FontStrategy::TrueType(path) => load_truetype(path).map(LoadedFont::TrueType),
            FontStrategy::BuiltinBitmap => Some(LoadedFont::Builtin),
        }
    }
}

fn load_truetype(path: &Path) -> Option<FontVec> {
    let bytes = std::fs::read(path).ok()?;
    match FontVec::try_from_vec(bytes) {
        Ok(font) => Some(font),
        Err(e) => {
            debug!("Ignoring unreadable font {}: {}", path.display(), e);
            None
        }
    }
}

/// Ordered font strategies terminated by [`FontStrategy::BuiltinBitmap`]
#[derive(Debug, Clone)]
pub struct FontChain {
    strategies: Vec<FontStrategy>,
}

impl FontChain {
    pub fn new(candidates: &[PathBuf]) -> Self {
        let strategies = candidates
            .iter()
            .cloned()
            .map(FontStrategy::TrueType)
            .chain(std::iter::once(FontStrategy::BuiltinBitmap))
            .collect();
        Self { strategies }
    }

    /// Only the built-in font
    pub fn builtin() -> Self {
        Self::new(&[])
    }

    pub fn strategies(&self) -> &[FontStrategy] {
        &self.strategies
    }

    /// First strategy that loads
    pub fn resolve(&self) -> LoadedFont {
        for strategy in &self.strategies {
            if let Some(font) = strategy.load() {
                debug!("Resolved font strategy: {:?}", strategy);
                return font;
            }
        }
        LoadedFont::Builtin
    }
}
