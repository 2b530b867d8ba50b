pub mod state;
pub mod view;

pub use state::{Redraw, SelectorState};
pub use view::draw;

/// Side the widget measures to when the host imposes no constraint.
pub const DEFAULT_SIDE: f64 = 120.0;

/// Item glyphs orbit at this fraction of the outer radius.
pub const ITEM_ORBIT_FACTOR: f64 = 3.0 / 5.0;
/// Labels sit slightly closer to the center than their glyphs.
pub const LABEL_ORBIT_FACTOR: f64 = 2.0 / 5.0;
/// Angular position of the left neighbor.
pub const LEFT_ANGLE_DEG: f64 = 180.0 + 30.0;
/// Angular position of the right neighbor.
pub const RIGHT_ANGLE_DEG: f64 = 360.0 - 30.0;
/// Neighbor glyphs tilt by this much, mirrored per side.
pub const NEIGHBOR_TILT_DEG: f64 = 60.0;
/// The inner disk and the border track end at this fraction of the outer
/// radius.
pub const TRACK_FACTOR: f64 = 0.9;

/// Track arc carved across the hub, in degrees (start, sweep).
pub const HUB_TRACK_ARC_DEG: (f64, f64) = (178.0, 184.0);
/// Track arc carved across the lower outer ring.
pub const OUTER_TRACK_ARC_DEG: (f64, f64) = (0.0, 180.0);
/// Radial divider lines separating the three item positions.
pub const DIVIDER_ANGLES_DEG: [f64; 2] = [180.0 + 60.0, 180.0 + 120.0];

/// Square size glyph rasters are requested at from the resolver.
pub const GLYPH_RASTER_SIZE: i32 = 64;
/// Drawn glyph extent as a fraction of the outer radius.
pub const GLYPH_EXTENT_FACTOR: f64 = 2.0 / 5.0;
