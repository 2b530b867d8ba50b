use crate::item::GlyphRef;
use thiserror::Error;

/// Violations of the selection-state range invariant. These signal a caller
/// bug and are never clamped away internally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("index {index} is out of range for {len} item(s)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Failures while turning a glyph reference into a raster.
///
/// `NotFound` and `Load` are recovered locally with the fallback reference;
/// only `FallbackUnresolvable` escapes the render pass.
#[derive(Debug, Error)]
pub enum GlyphError {
    #[error("no glyph found for '{0}'")]
    NotFound(GlyphRef),
    #[error("failed to load glyph '{glyph}': {source}")]
    Load { glyph: GlyphRef, source: glib::Error },
    #[error("fallback glyph '{0}' could not be resolved")]
    FallbackUnresolvable(GlyphRef),
}

/// A render pass that could not complete.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Cairo(#[from] cairo::Error),
    #[error(transparent)]
    Glyph(#[from] GlyphError),
}

/// Malformed persisted view state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("saved state truncated: expected {expected} words, found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("saved index {0} is negative")]
    NegativeIndex(i32),
}
