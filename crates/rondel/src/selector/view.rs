use super::{
    DIVIDER_ANGLES_DEG, GLYPH_EXTENT_FACTOR, HUB_TRACK_ARC_DEG, ITEM_ORBIT_FACTOR,
    LABEL_ORBIT_FACTOR, LEFT_ANGLE_DEG, NEIGHBOR_TILT_DEG, OUTER_TRACK_ARC_DEG, RIGHT_ANGLE_DEG,
    TRACK_FACTOR,
};
use crate::error::RenderError;
use crate::geometry::{Geometry, Point, Rect, polar_to_cartesian};
use crate::glyph::GlyphResolver;
use crate::item::Item;
use crate::selector::state::SelectorState;
use crate::style::Style;
use cairo::{Context, FontSlant, FontWeight};
use gdk4::prelude::*;
use palette::Srgba;
use std::f64::consts::PI;

/// Paint one full frame of the selector onto `cr`.
///
/// Coordinates are widget-local: the host has already positioned the
/// context so (0, 0) is the widget's top-left corner.
pub fn draw(
    cr: &Context,
    state: &SelectorState,
    geometry: &Geometry,
    style: &Style,
    glyphs: &dyn GlyphResolver,
) -> Result<(), RenderError> {
    // not laid out yet, nothing sensible to paint
    if geometry.outer_radius() <= 0.0 {
        return Ok(());
    }

    let pass = RenderPass {
        cr,
        geometry,
        style,
        glyphs,
    };

    pass.draw_ring()?;
    if !state.is_empty() {
        assert!(
            state.current_index() < state.len(),
            "current index {} escaped a {}-item list",
            state.current_index(),
            state.len(),
        );
        pass.draw_items(state)?;
    }
    pass.draw_border()?;
    Ok(())
}

struct RenderPass<'a> {
    cr: &'a Context,
    geometry: &'a Geometry,
    style: &'a Style,
    glyphs: &'a dyn GlyphResolver,
}

impl RenderPass<'_> {
    fn draw_ring(&self) -> Result<(), cairo::Error> {
        let g = self.geometry;

        self.set_color(self.style.foreground);
        self.fill_circle(g.center(), g.outer_radius())?;
        self.set_color(self.style.background);
        self.fill_circle(g.center(), g.outer_radius() * TRACK_FACTOR)?;

        // the two flattened arcs carving the visual track
        self.set_color(self.style.foreground);
        self.fill_arc(g.inner_rect(), HUB_TRACK_ARC_DEG)?;
        self.fill_arc(g.outer_rect(), OUTER_TRACK_ARC_DEG)?;
        Ok(())
    }

    fn draw_items(&self, state: &SelectorState) -> Result<(), RenderError> {
        let g = self.geometry;
        let items = state.items();
        let current = &items[state.current_index()];

        // current item rides the top of the ring, unrotated
        let top = Point::new(
            g.center().x,
            g.center().y - g.outer_radius() * ITEM_ORBIT_FACTOR,
        );
        self.draw_glyph(current, top, 0.0)?;
        if state.shows_labels() {
            self.draw_label(current.label().as_str(), 0.0)?;
        }

        if let Some(index) = state.left_neighbor() {
            self.draw_neighbor(&items[index], LEFT_ANGLE_DEG, -NEIGHBOR_TILT_DEG, state)?;
        }
        if let Some(index) = state.right_neighbor() {
            self.draw_neighbor(&items[index], RIGHT_ANGLE_DEG, NEIGHBOR_TILT_DEG, state)?;
        }
        Ok(())
    }

    fn draw_neighbor(
        &self,
        item: &Item,
        angle_deg: f64,
        tilt_deg: f64,
        state: &SelectorState,
    ) -> Result<(), RenderError> {
        let g = self.geometry;
        let position = polar_to_cartesian(
            g.center(),
            angle_deg,
            g.outer_radius() * ITEM_ORBIT_FACTOR,
        );
        self.draw_glyph(item, position, tilt_deg)?;
        if state.shows_labels() {
            self.draw_label(item.label().as_str(), tilt_deg)?;
        }
        Ok(())
    }

    /// Glyphs scale to a fixed fraction of the outer radius so the ring
    /// reads the same at any widget size.
    fn draw_glyph(&self, item: &Item, position: Point, tilt_deg: f64) -> Result<(), RenderError> {
        let pixbuf = self.glyphs.resolve_or_fallback(item.glyph())?;
        let extent = self.geometry.outer_radius() * GLYPH_EXTENT_FACTOR;
        let scale = extent / f64::from(pixbuf.width().max(pixbuf.height()).max(1));

        self.cr.save().map_err(RenderError::Cairo)?;
        self.cr.translate(position.x, position.y);
        if tilt_deg != 0.0 {
            self.cr.rotate(tilt_deg.to_radians());
        }
        self.cr.scale(scale, scale);
        self.cr.set_source_pixbuf(
            &pixbuf,
            -f64::from(pixbuf.width()) / 2.0,
            -f64::from(pixbuf.height()) / 2.0,
        );
        self.cr.paint().map_err(RenderError::Cairo)?;
        self.cr.restore().map_err(RenderError::Cairo)?;
        Ok(())
    }

    /// Labels all render at the top-of-ring anchor; neighbor labels get to
    /// their arc position by rotating the canvas about the center, which
    /// keeps the text upright in the ring's local frame.
    fn draw_label(&self, text: &str, tilt_deg: f64) -> Result<(), cairo::Error> {
        let g = self.geometry;
        let anchor = Point::new(
            g.center().x,
            g.center().y - g.outer_radius() * LABEL_ORBIT_FACTOR,
        );

        self.cr.save()?;
        if tilt_deg != 0.0 {
            self.rotate_about_center(tilt_deg);
        }
        self.set_color(self.style.labels_color);
        self.cr
            .select_font_face("Sans", FontSlant::Normal, FontWeight::Normal);
        self.cr.set_font_size(self.style.labels_text_size);
        let extents = self.cr.text_extents(text)?;
        self.cr
            .move_to(anchor.x - extents.width() / 2.0, anchor.y);
        self.cr.show_text(text)?;
        self.cr.restore()
    }

    fn draw_border(&self) -> Result<(), cairo::Error> {
        let g = self.geometry;
        let c = g.center();
        let track_radius = g.outer_radius() * TRACK_FACTOR;

        self.set_color(self.style.border);
        self.cr.set_line_width(self.style.border_width);

        // ring outline
        self.cr.new_path();
        self.cr.arc(c.x, c.y, g.outer_radius(), 0.0, 2.0 * PI);
        self.cr.stroke()?;

        // horizontal ticks from the hub edge out to the track
        self.stroke_line(
            Point::new(c.x - track_radius, c.y),
            Point::new(c.x - g.inner_radius(), c.y),
        )?;
        self.stroke_line(
            Point::new(c.x + g.inner_radius(), c.y),
            Point::new(c.x + track_radius, c.y),
        )?;

        // semicircular caps on the hub and on the track
        self.stroke_arc(g.inner_rect(), (180.0, 180.0))?;
        self.stroke_arc(Rect::centered(c, track_radius), (180.0, 180.0))?;

        // radial dividers between the three item positions
        for angle in DIVIDER_ANGLES_DEG {
            let outer = polar_to_cartesian(c, angle, track_radius);
            let inner = polar_to_cartesian(c, angle, g.inner_radius());
            self.stroke_line(outer, inner)?;
        }
        Ok(())
    }

    fn set_color(&self, color: Srgba<f64>) {
        let (r, g, b, a) = color.into_components();
        self.cr.set_source_rgba(r, g, b, a);
    }

    fn fill_circle(&self, center: Point, radius: f64) -> Result<(), cairo::Error> {
        self.cr.new_path();
        self.cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
        self.cr.fill()
    }

    /// Filled arc segment of the circle inscribed in `rect`, chord-closed.
    fn fill_arc(&self, rect: Rect, (start_deg, sweep_deg): (f64, f64)) -> Result<(), cairo::Error> {
        let c = rect.center();
        self.cr.new_path();
        self.cr.arc(
            c.x,
            c.y,
            rect.half_width(),
            start_deg.to_radians(),
            (start_deg + sweep_deg).to_radians(),
        );
        self.cr.fill()
    }

    fn stroke_arc(
        &self,
        rect: Rect,
        (start_deg, sweep_deg): (f64, f64),
    ) -> Result<(), cairo::Error> {
        let c = rect.center();
        self.cr.new_path();
        self.cr.arc(
            c.x,
            c.y,
            rect.half_width(),
            start_deg.to_radians(),
            (start_deg + sweep_deg).to_radians(),
        );
        self.cr.stroke()
    }

    fn stroke_line(&self, from: Point, to: Point) -> Result<(), cairo::Error> {
        self.cr.new_path();
        self.cr.move_to(from.x, from.y);
        self.cr.line_to(to.x, to.y);
        self.cr.stroke()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GlyphError;
    use crate::geometry::Size;
    use crate::item::{GlyphRef, Label};
    use cairo::{Format, ImageSurface};
    use gdk_pixbuf::{Colorspace, Pixbuf};

    struct StubGlyphs {
        fallback: GlyphRef,
        broken: bool,
        fallback_broken: bool,
    }

    impl StubGlyphs {
        fn working() -> Self {
            Self {
                fallback: GlyphRef::new("fallback"),
                broken: false,
                fallback_broken: false,
            }
        }

        fn broken() -> Self {
            Self {
                broken: true,
                ..Self::working()
            }
        }

        fn hopeless() -> Self {
            Self {
                broken: true,
                fallback_broken: true,
                ..Self::working()
            }
        }
    }

    impl GlyphResolver for StubGlyphs {
        fn resolve(&self, glyph: &GlyphRef) -> Result<Pixbuf, GlyphError> {
            let fail = if glyph == &self.fallback {
                self.fallback_broken
            } else {
                self.broken
            };
            if fail {
                return Err(GlyphError::NotFound(glyph.clone()));
            }
            let pixbuf = Pixbuf::new(Colorspace::Rgb, true, 8, 16, 16).unwrap();
            pixbuf.fill(0x3366_99ff);
            Ok(pixbuf)
        }

        fn fallback(&self) -> &GlyphRef {
            &self.fallback
        }
    }

    fn populated_state(n: usize, looped: bool) -> SelectorState {
        let mut state = SelectorState::new(looped, true);
        let _ = state.set_items(
            (0..n)
                .map(|i| Item::new(Label::new(format!("item {i}")), GlyphRef::new(format!("g{i}"))))
                .collect(),
        );
        state
    }

    fn paint(state: &SelectorState, glyphs: &dyn GlyphResolver) -> Result<ImageSurface, RenderError> {
        let surface = ImageSurface::create(Format::ARgb32, 200, 200).unwrap();
        {
            let cr = Context::new(&surface).unwrap();
            let geometry = Geometry::from_size(Size::square(200.0));
            draw(&cr, state, &geometry, &Style::default(), glyphs)?;
        }
        Ok(surface)
    }

    #[test]
    fn full_pass_touches_pixels() {
        let state = populated_state(3, false);

        let mut surface = paint(&state, &StubGlyphs::working()).unwrap();
        surface.flush();
        let data = surface.data().unwrap();
        assert!(data.iter().any(|&b| b != 0));
    }

    #[test]
    fn empty_list_still_paints_the_ring() {
        let state = SelectorState::default();

        // resolver would fail every lookup, proving it is never consulted
        assert!(paint(&state, &StubGlyphs::hopeless()).is_ok());
    }

    #[test]
    fn broken_glyphs_fall_back_and_render() {
        let state = populated_state(4, true);

        assert!(paint(&state, &StubGlyphs::broken()).is_ok());
    }

    #[test]
    fn unresolvable_fallback_fails_the_pass() {
        let state = populated_state(2, false);

        let err = paint(&state, &StubGlyphs::hopeless()).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Glyph(GlyphError::FallbackUnresolvable(_))
        ));
    }

    #[test]
    fn labels_can_be_switched_off() {
        let mut state = populated_state(3, false);
        let _ = state.set_show_labels(false);

        assert!(paint(&state, &StubGlyphs::working()).is_ok());
    }
}
