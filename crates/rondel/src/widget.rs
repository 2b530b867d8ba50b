//! The renderable-widget seam and the selector that implements it.

use crate::error::{RenderError, SelectorError};
use crate::geometry::{Geometry, Point, Size};
use crate::glyph::GlyphResolver;
use crate::item::Item;
use crate::saved::SavedState;
use crate::selector::{self, Redraw, SelectorState};
use crate::style::Style;
use cairo::Context;

/// One axis of a measurement request from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// The host imposes nothing; the widget picks its natural size.
    Unspecified,
    AtMost(f64),
    Exactly(f64),
}

impl Constraint {
    fn resolve(self) -> f64 {
        match self {
            Constraint::Unspecified => selector::DEFAULT_SIDE,
            Constraint::AtMost(v) | Constraint::Exactly(v) => v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub width: Constraint,
    pub height: Constraint,
}

impl Constraints {
    pub fn exactly(width: f64, height: f64) -> Self {
        Self {
            width: Constraint::Exactly(width),
            height: Constraint::Exactly(height),
        }
    }

    pub fn unspecified() -> Self {
        Self {
            width: Constraint::Unspecified,
            height: Constraint::Unspecified,
        }
    }
}

/// A pointer release in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
}

impl PointerEvent {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
        }
    }
}

/// Renderable-widget seam the host toolkit drives, free of any toolkit base
/// type: the host owns measurement, event delivery and the cairo surface.
pub trait Widget {
    fn measure(&self, constraints: Constraints) -> Size;
    fn layout(&mut self, size: Size);
    fn paint(&self, cr: &Context) -> Result<(), RenderError>;
    fn handle_pointer(&mut self, event: PointerEvent) -> Redraw;
}

/// Construction-time attributes, all optional.
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    pub style: Style,
    pub looped: bool,
    pub show_labels: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            style: Style::default(),
            looped: false,
            show_labels: true,
        }
    }
}

/// The circular item selector.
///
/// Owns the selection state machine, the geometry snapshot of the last
/// layout and the glyph-resolution seam; the host drives it through
/// [`Widget`] and the state operations below.
pub struct RoundSelector {
    state: SelectorState,
    geometry: Geometry,
    size: Size,
    style: Style,
    glyphs: Box<dyn GlyphResolver>,
}

impl RoundSelector {
    pub fn new(config: SelectorConfig, glyphs: Box<dyn GlyphResolver>) -> Self {
        Self {
            state: SelectorState::new(config.looped, config.show_labels),
            geometry: Geometry::default(),
            size: Size::default(),
            style: config.style,
            glyphs,
        }
    }

    pub fn state(&self) -> &SelectorState {
        &self.state
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn items(&self) -> &[Item] {
        self.state.items()
    }

    /// Replace the item list, dropping any rasters memoized for the old
    /// one.
    pub fn set_items(&mut self, items: Vec<Item>) -> Redraw {
        self.glyphs.invalidate();
        self.state.set_items(items)
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn set_current_index(&mut self, index: usize) -> Result<Redraw, SelectorError> {
        self.state.set_current_index(index)
    }

    pub fn is_looped(&self) -> bool {
        self.state.is_looped()
    }

    pub fn set_looped(&mut self, looped: bool) -> Redraw {
        self.state.set_looped(looped)
    }

    pub fn shows_labels(&self) -> bool {
        self.state.shows_labels()
    }

    pub fn set_show_labels(&mut self, show: bool) -> Redraw {
        self.state.set_show_labels(show)
    }

    pub fn advance(&mut self) -> Redraw {
        self.state.advance()
    }

    pub fn retreat(&mut self) -> Redraw {
        self.state.retreat()
    }

    pub fn save_state(&self) -> SavedState {
        SavedState::capture(&self.state)
    }

    pub fn restore_state(&mut self, saved: SavedState) -> Result<Redraw, SelectorError> {
        saved.apply(&mut self.state)
    }
}

impl Widget for RoundSelector {
    /// The selector is square: both axes resolve (unconstrained axes fall
    /// back to the default side) and the smaller one wins.
    fn measure(&self, constraints: Constraints) -> Size {
        let side = constraints.width.resolve().min(constraints.height.resolve());
        Size::square(side)
    }

    fn layout(&mut self, size: Size) {
        self.size = size;
        self.geometry = Geometry::from_size(size);
    }

    fn paint(&self, cr: &Context) -> Result<(), RenderError> {
        selector::draw(cr, &self.state, &self.geometry, &self.style, self.glyphs.as_ref())
    }

    /// A release on the left half of the bounds retreats, on the right half
    /// advances. With no items this is a no-op.
    fn handle_pointer(&mut self, event: PointerEvent) -> Redraw {
        if self.state.is_empty() {
            return Redraw::Unchanged;
        }
        if event.position.x < self.size.width / 2.0 {
            self.state.retreat()
        } else {
            self.state.advance()
        }
    }
}
