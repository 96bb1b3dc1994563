//! Rendering: draws the full editor scene through the host painter.
//!
//! This module is the only place that produces draw calls. It receives
//! read-only engine state and emits primitives — it never mutates the model;
//! every vertex is projected to screen space first. Layers are independent:
//! any of fill, wire, stroke, or the vertex overlay may be toggled off, and
//! none assumes another ran this frame.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::camera::{Camera, Point};
use crate::consts::{
    FILE_SCALE_DIVISOR, GRID_MAJOR_EVERY, GRID_SKIP_BELOW_ZOOM, LABEL_SIZE_FACTOR,
    POINT_RADIUS_SCALE,
};
use crate::engine::EngineCore;

/// Solid RGBA color handed to the painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Drawing primitives the host provides.
///
/// All coordinates are screen pixels. This trait is the only seam between
/// the core and the windowing library; tests drive it with a recording
/// implementation.
pub trait Painter {
    /// Clear the whole viewport to a solid color.
    fn clear(&mut self, color: Color);
    /// One-pixel line segment between two points.
    fn line(&mut self, from: Point, to: Point, color: Color);
    /// Filled triangle.
    fn triangle(&mut self, a: Point, b: Point, c: Point, color: Color);
    /// Filled circle.
    fn circle(&mut self, center: Point, radius: f64, color: Color);
    /// Text with its top-left corner at `at`, `size` pixels tall.
    fn text(&mut self, text: &str, at: Point, size: f64, color: Color);
    /// Rendered width of `text` at `size`, in pixels.
    fn text_width(&self, text: &str, size: f64) -> f64;
}

const BACKGROUND: Color = Color::rgb(0, 0, 32);
const GRID_MINOR: Color = Color::rgb(0, 0, 128);
const GRID_MAJOR: Color = Color::rgb(64, 0, 0);
const GRID_AXIS: Color = Color::rgb(0, 0, 255);
const CURSOR: Color = Color::rgb(0, 128, 128);
const FILL: Color = Color::rgb(128, 128, 128);
const WIRE: Color = Color::rgb(192, 192, 192);
const STROKE: Color = Color::rgb(255, 255, 255);
const POINT_DEFAULT: Color = Color::rgb(255, 0, 0);
const POINT_HOVER: Color = Color::rgb(255, 255, 0);
const POINT_SELECTED: Color = Color::rgb(0, 255, 0);
const LABEL: Color = Color::rgb(255, 255, 255);
const LABEL_SHADOW: Color = Color::rgb(0, 0, 0);
const HUD: Color = Color::rgb(255, 255, 255);
const HUD_ACTIVE: Color = Color::rgb(255, 0, 0);

/// HUD glyph height in pixels.
const HUD_TEXT_SIZE: f64 = 16.0;

/// Draw the full scene: grid, polygon layers, cursor, vertex overlay, HUD.
pub fn draw_scene(p: &mut impl Painter, engine: &EngineCore, viewport_w: f64, viewport_h: f64) {
    p.clear(BACKGROUND);
    draw_grid(p, &engine.camera, viewport_w, viewport_h);

    let screen: Vec<Point> = engine
        .model
        .points()
        .iter()
        .map(|&w| engine.camera.world_to_screen(w))
        .collect();

    if engine.layers.fill {
        draw_fill(p, &screen);
    }
    if engine.layers.wire {
        draw_wire(p, &screen);
    }
    if engine.layers.stroke {
        draw_stroke(p, &screen);
    }

    draw_cursor(p, engine);
    if engine.layers.points {
        draw_points(p, engine, &screen);
    }
    draw_hud(p, engine, viewport_h);
}

// =============================================================
// Background grid
// =============================================================

/// Integer world-unit grid over the visible range, major lines every
/// [`GRID_MAJOR_EVERY`] units, origin axes layered on top.
fn draw_grid(p: &mut impl Painter, camera: &Camera, viewport_w: f64, viewport_h: f64) {
    // Fixed stride 2 when zoomed out, not adaptive to exact scale.
    let stride: i64 = if camera.zoom() < GRID_SKIP_BELOW_ZOOM { 2 } else { 1 };

    let min = camera.screen_to_world(Point::new(0.0, 0.0));
    let max = camera.screen_to_world(Point::new(viewport_w, viewport_h));

    #[allow(clippy::cast_possible_truncation)]
    let (first_x, last_x) = (min.x.floor() as i64, max.x.ceil() as i64);
    #[allow(clippy::cast_possible_truncation)]
    let (first_y, last_y) = (min.y.floor() as i64, max.y.ceil() as i64);

    #[allow(clippy::cast_precision_loss)]
    for gx in first_x..=last_x {
        if gx.rem_euclid(stride) != 0 {
            continue;
        }
        let color = if gx % GRID_MAJOR_EVERY == 0 { GRID_MAJOR } else { GRID_MINOR };
        let sx = camera.world_to_screen(Point::new(gx as f64, 0.0)).x.floor();
        p.line(Point::new(sx, 0.0), Point::new(sx, viewport_h), color);
    }

    #[allow(clippy::cast_precision_loss)]
    for gy in first_y..=last_y {
        if gy.rem_euclid(stride) != 0 {
            continue;
        }
        let color = if gy % GRID_MAJOR_EVERY == 0 { GRID_MAJOR } else { GRID_MINOR };
        let sy = camera.world_to_screen(Point::new(0.0, gy as f64)).y.floor();
        p.line(Point::new(0.0, sy), Point::new(viewport_w, sy), color);
    }

    let origin = camera.world_to_screen(Point::new(0.0, 0.0));
    p.line(
        Point::new(origin.x.floor(), 0.0),
        Point::new(origin.x.floor(), viewport_h),
        GRID_AXIS,
    );
    p.line(
        Point::new(0.0, origin.y.floor()),
        Point::new(viewport_w, origin.y.floor()),
        GRID_AXIS,
    );
}

// =============================================================
// Polygon layers
// =============================================================

/// Fan triangulation anchored at vertex 0: triangles `(0, i, i+1)`.
fn draw_fill(p: &mut impl Painter, screen: &[Point]) {
    if screen.len() < 3 {
        return;
    }
    for pair in screen[1..].windows(2) {
        p.triangle(screen[0], pair[0], pair[1], FILL);
    }
}

/// Internal fan diagonals (`0 → i`), the same decomposition fill uses.
fn draw_wire(p: &mut impl Painter, screen: &[Point]) {
    if screen.len() < 3 {
        return;
    }
    for v in &screen[2..screen.len() - 1] {
        p.line(screen[0], *v, WIRE);
    }
}

/// Closed boundary: consecutive pairs plus last back to first.
fn draw_stroke(p: &mut impl Painter, screen: &[Point]) {
    if screen.len() < 2 {
        return;
    }
    for pair in screen.windows(2) {
        p.line(pair[0], pair[1], STROKE);
    }
    if screen.len() > 2 {
        p.line(screen[screen.len() - 1], screen[0], STROKE);
    }
}

// =============================================================
// Overlay
// =============================================================

/// Marker radius in screen pixels, proportional to the current zoom.
fn point_radius(camera: &Camera) -> f64 {
    camera.zoom() / camera.max_zoom() * POINT_RADIUS_SCALE
}

fn draw_cursor(p: &mut impl Painter, engine: &EngineCore) {
    let pos = engine.camera.world_to_screen(engine.cursor);
    p.circle(pos, point_radius(&engine.camera), CURSOR);
}

/// Vertex markers colored by state, with shadowed ordinal labels.
/// Selected takes precedence over hover, hover over default.
fn draw_points(p: &mut impl Painter, engine: &EngineCore, screen: &[Point]) {
    let radius = point_radius(&engine.camera);
    let selected = engine.selected();

    for (i, &pos) in screen.iter().enumerate() {
        let color = if selected == Some(i) {
            POINT_SELECTED
        } else if engine.hover == Some(i) {
            POINT_HOVER
        } else {
            POINT_DEFAULT
        };
        p.circle(pos, radius, color);

        let label = i.to_string();
        let size = radius * LABEL_SIZE_FACTOR;
        p.text(&label, Point::new(pos.x + 1.0, pos.y + 1.0), size, LABEL_SHADOW);
        p.text(&label, pos, size, LABEL);
    }
}

fn draw_hud(p: &mut impl Painter, engine: &EngineCore, viewport_h: f64) {
    let readout = format!(
        "{} {}",
        engine.cursor.x / FILE_SCALE_DIVISOR,
        engine.cursor.y / FILE_SCALE_DIVISOR
    );
    p.text(&readout, Point::new(5.0, 5.0), HUD_TEXT_SIZE, HUD);

    let base = Point::new(5.0, viewport_h - HUD_TEXT_SIZE - 5.0);
    p.text("F)ill P)oints S)troke W)ire", base, HUD_TEXT_SIZE, HUD);

    // Re-draw the lead letter of each active layer in the highlight color.
    let mut x = base.x;
    if engine.layers.fill {
        p.text("F", Point::new(x, base.y), HUD_TEXT_SIZE, HUD_ACTIVE);
    }
    x += p.text_width("F)ill ", HUD_TEXT_SIZE);
    if engine.layers.points {
        p.text("P", Point::new(x, base.y), HUD_TEXT_SIZE, HUD_ACTIVE);
    }
    x += p.text_width("P)oints ", HUD_TEXT_SIZE);
    if engine.layers.stroke {
        p.text("S", Point::new(x, base.y), HUD_TEXT_SIZE, HUD_ACTIVE);
    }
    x += p.text_width("S)troke ", HUD_TEXT_SIZE);
    if engine.layers.wire {
        p.text("W", Point::new(x, base.y), HUD_TEXT_SIZE, HUD_ACTIVE);
    }
}
