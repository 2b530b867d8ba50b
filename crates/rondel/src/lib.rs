//! A circular item selector widget drawn with cairo.
//!
//! The selector shows the current item at the top of a ring with its
//! neighbors riding the arc to either side. Taps on the left/right half of
//! the widget step the selection; loop mode wraps at the ends. Hosts embed
//! it behind the [`Widget`] seam, feed it glyphs through a
//! [`GlyphResolver`], and persist its view state as a flat [`SavedState`]
//! triple.

pub mod error;
pub mod geometry;
pub mod glyph;
pub mod item;
mod macros;
pub mod saved;
pub mod selector;
pub mod style;
pub mod widget;

pub use error::{GlyphError, RenderError, SelectorError, StateError};
pub use glyph::{GlyphResolver, IconGlyphResolver};
pub use item::{GlyphRef, Item, Label};
pub use saved::{SAVED_STATE_WORDS, SavedState};
pub use selector::{Redraw, SelectorState};
pub use style::Style;
pub use widget::{Constraint, Constraints, PointerEvent, RoundSelector, SelectorConfig, Widget};
