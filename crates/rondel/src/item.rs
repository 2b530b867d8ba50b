use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Visible name of a selectable item.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Label(String);

crate::impl_string_newtype!(Label);

/// Opaque reference to a glyph raster: an icon-theme name or an absolute
/// image path. Resolution is the host's business, behind
/// [`GlyphResolver`](crate::glyph::GlyphResolver).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct GlyphRef(String);

crate::impl_string_newtype!(GlyphRef);

/// Capability pair carried by every selectable item. Immutable once built;
/// the selector only ever reads the two halves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    label: Label,
    glyph: GlyphRef,
}

impl Item {
    pub fn new(label: impl Into<Label>, glyph: impl Into<GlyphRef>) -> Self {
        Self {
            label: label.into(),
            glyph: glyph.into(),
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn glyph(&self) -> &GlyphRef {
        &self.glyph
    }
}
