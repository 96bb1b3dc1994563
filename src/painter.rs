//! [`Painter`] implementation over macroquad's immediate-mode draw calls.

#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use editor::camera::Point;
use editor::render::{Color, Painter};
use macroquad::prelude as mq;

pub struct MacroquadPainter;

fn mq_color(c: Color) -> mq::Color {
    mq::Color::from_rgba(c.r, c.g, c.b, c.a)
}

impl Painter for MacroquadPainter {
    fn clear(&mut self, color: Color) {
        mq::clear_background(mq_color(color));
    }

    fn line(&mut self, from: Point, to: Point, color: Color) {
        mq::draw_line(
            from.x as f32,
            from.y as f32,
            to.x as f32,
            to.y as f32,
            1.0,
            mq_color(color),
        );
    }

    fn triangle(&mut self, a: Point, b: Point, c: Point, color: Color) {
        mq::draw_triangle(
            mq::vec2(a.x as f32, a.y as f32),
            mq::vec2(b.x as f32, b.y as f32),
            mq::vec2(c.x as f32, c.y as f32),
            mq_color(color),
        );
    }

    fn circle(&mut self, center: Point, radius: f64, color: Color) {
        mq::draw_circle(center.x as f32, center.y as f32, radius as f32, mq_color(color));
    }

    fn text(&mut self, text: &str, at: Point, size: f64, color: Color) {
        // macroquad anchors text on the baseline; the painter contract is
        // top-left.
        mq::draw_text(
            text,
            at.x as f32,
            (at.y + size) as f32,
            size as f32,
            mq_color(color),
        );
    }

    fn text_width(&self, text: &str, size: f64) -> f64 {
        f64::from(mq::measure_text(text, None, size as u16, 1.0).width)
    }
}
