use beaker_engine::coords::{Rect, Vec2};
use beaker_engine::paint::Color;
use beaker_engine::scene::{DrawList, Stroke, TextAlign, ZIndex};

/// Font size, colour and anchor alignment for a text run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub align: TextAlign,
}

/// Drawing surface handed to every renderer.
///
/// Wraps the engine's `DrawList`. Each call carries its own style, and each
/// call lands above everything issued before it on the same painter, so issue
/// order is paint order.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Fills the whole canvas.
    pub fn clear(&mut self, color: Color) {
        let z = self.next_z();
        self.draw_list.push_clear(z, color);
    }

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, color);
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        let z = self.next_z();
        self.draw_list.push_line(z, from, to, stroke);
    }

    /// Filled ellipse without outline. `size` is the full width/height.
    pub fn fill_ellipse(&mut self, center: Vec2, size: Vec2, color: Color) {
        let z = self.next_z();
        self.draw_list.push_ellipse(z, center, size, Some(color), None);
    }

    /// Ellipse outline without fill.
    pub fn stroke_ellipse(&mut self, center: Vec2, size: Vec2, stroke: Stroke) {
        let z = self.next_z();
        self.draw_list.push_ellipse(z, center, size, None, Some(stroke));
    }

    /// Elliptical arc outline from `start` to `end` radians (clockwise on screen).
    pub fn arc(&mut self, center: Vec2, size: Vec2, start: f32, end: f32, stroke: Stroke) {
        let z = self.next_z();
        self.draw_list.push_arc(z, center, size, start, end, stroke);
    }

    pub fn text(&mut self, text: impl Into<String>, origin: Vec2, style: TextStyle) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, origin, style.size, style.color, style.align);
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
