//! Pure coordinate mapping for the ring. Nothing here touches cairo; the
//! render pass feeds these values into the context.

/// A point in widget-local pixel space, y-down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }
}

/// Axis-aligned rectangle stored by edges, the way canvas arc APIs take
/// their oval bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    /// Square rect with the given half-extent on each side of `center`.
    pub fn centered(center: Point, half_extent: f64) -> Self {
        Self {
            left: center.x - half_extent,
            top: center.y - half_extent,
            right: center.x + half_extent,
            bottom: center.y + half_extent,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    pub fn half_width(&self) -> f64 {
        (self.right - self.left) / 2.0
    }
}

/// Converts an angle in degrees (0° along the positive x-axis, increasing
/// clockwise in screen space) and a radius into widget coordinates.
pub fn polar_to_cartesian(center: Point, angle_degrees: f64, radius: f64) -> Point {
    let rad = angle_degrees.to_radians();
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Everything the render pass needs to know about the widget's current
/// pixel size. Recomputed on layout, immutable in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    outer_rect: Rect,
    inner_rect: Rect,
}

impl Geometry {
    pub fn from_size(size: Size) -> Self {
        let outer_radius = size.width.min(size.height) / 2.0 * 0.95;
        let inner_radius = outer_radius / 6.0;
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        Self {
            center,
            outer_radius,
            inner_radius,
            outer_rect: Rect::centered(center, outer_radius),
            inner_rect: Rect::centered(center, inner_radius),
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn outer_rect(&self) -> Rect {
        self.outer_rect
    }

    pub fn inner_rect(&self) -> Rect {
        self.inner_rect
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::from_size(Size::default())
    }
}
