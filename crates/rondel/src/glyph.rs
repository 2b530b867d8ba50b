//! Glyph resolution: mapping opaque references to rasters.

use crate::error::GlyphError;
use crate::item::GlyphRef;
use crate::selector::GLYPH_RASTER_SIZE;
use gdk_pixbuf::Pixbuf;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Maps an opaque glyph reference to a raster.
///
/// The widget never loads images itself; it asks this seam and recovers
/// through [`GlyphResolver::resolve_or_fallback`] when an item's own
/// reference turns out to be broken.
pub trait GlyphResolver {
    fn resolve(&self, glyph: &GlyphRef) -> Result<Pixbuf, GlyphError>;

    /// The reference substituted when an item's own glyph cannot be
    /// resolved.
    fn fallback(&self) -> &GlyphRef;

    /// Drop any memoized rasters. The widget calls this when the item list
    /// is replaced.
    fn invalidate(&self) {}

    /// Resolve with local recovery: a failing reference falls back to
    /// [`GlyphResolver::fallback`]; only an unresolvable fallback escapes.
    fn resolve_or_fallback(&self, glyph: &GlyphRef) -> Result<Pixbuf, GlyphError> {
        match self.resolve(glyph) {
            Ok(pixbuf) => Ok(pixbuf),
            Err(err) => {
                log::warn!("glyph '{glyph}' unresolvable ({err}), substituting fallback");
                let fallback = self.fallback().clone();
                self.resolve(&fallback)
                    .map_err(|_| GlyphError::FallbackUnresolvable(fallback))
            }
        }
    }
}

/// Resolves glyph references against the freedesktop icon theme, treating
/// absolute paths as image files directly.
///
/// Rasters are memoized per reference. The widget runs single-threaded by
/// contract, so a `RefCell` map is enough.
pub struct IconGlyphResolver {
    fallback: GlyphRef,
    raster_size: i32,
    cache: RefCell<HashMap<GlyphRef, Pixbuf>>,
}

impl IconGlyphResolver {
    pub const DEFAULT_FALLBACK: &'static str = "image-missing";

    pub fn new() -> Self {
        Self::with_fallback(GlyphRef::new(Self::DEFAULT_FALLBACK))
    }

    pub fn with_fallback(fallback: GlyphRef) -> Self {
        Self {
            fallback,
            raster_size: GLYPH_RASTER_SIZE,
            cache: RefCell::new(HashMap::new()),
        }
    }

    fn find_path(&self, glyph: &GlyphRef) -> Option<PathBuf> {
        if glyph.is_empty() {
            return None;
        }

        let path = Path::new(glyph.as_str());
        if path.is_absolute() && path.exists() {
            return Some(path.to_path_buf());
        }

        freedesktop_icons::lookup(glyph.as_str())
            .with_size(self.raster_size as u16)
            .with_scale(1)
            .find()
    }
}

impl Default for IconGlyphResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphResolver for IconGlyphResolver {
    fn resolve(&self, glyph: &GlyphRef) -> Result<Pixbuf, GlyphError> {
        if let Some(hit) = self.cache.borrow().get(glyph) {
            return Ok(hit.clone());
        }

        let path = self
            .find_path(glyph)
            .ok_or_else(|| GlyphError::NotFound(glyph.clone()))?;
        let pixbuf = Pixbuf::from_file_at_scale(&path, self.raster_size, self.raster_size, true)
            .map_err(|source| GlyphError::Load {
                glyph: glyph.clone(),
                source,
            })?;

        self.cache.borrow_mut().insert(glyph.clone(), pixbuf.clone());
        Ok(pixbuf)
    }

    fn fallback(&self) -> &GlyphRef {
        &self.fallback
    }

    fn invalidate(&self) {
        self.cache.borrow_mut().clear();
    }
}
