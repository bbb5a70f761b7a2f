//! Cylindrical beaker gauge: a value drawn as a fluid level.

use core::f32::consts::{PI, TAU};

use beaker_engine::coords::{Rect, Vec2};
use beaker_engine::paint::Color;
use beaker_engine::scene::{Stroke, TextAlign};

use crate::painter::{Painter, TextStyle};
use crate::scale::ScaleRenderer;

/// Rim half drawn before the fill.
pub const BACK_RIM: (f32, f32) = (0.0, PI);
/// Rim half drawn over the fill.
pub const FRONT_RIM: (f32, f32) = (PI, TAU);

/// One gauge to draw this frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GaugeSpec<'a> {
    pub center: Vec2,
    /// Width and height of the beaker body.
    pub size: Vec2,
    pub value: i32,
    pub max_value: u32,
    pub label: &'a str,
}

impl GaugeSpec<'_> {
    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.size.y * 0.5
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y * 0.5
    }
}

/// `value / max_value` clamped to `[0, 1]`. A zero `max_value` is treated as 1.
pub fn fill_ratio(value: i32, max_value: u32) -> f32 {
    let max_value = max_value.max(1);
    (value as f32 / max_value as f32).clamp(0.0, 1.0)
}

/// Derived fill dimensions for one draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FillGeometry {
    pub ratio: f32,
    /// Draw-space height of the fluid body.
    pub height: f32,
    /// Draw-space y of the fluid surface.
    pub top: f32,
}

impl FillGeometry {
    pub fn of(spec: &GaugeSpec<'_>) -> Self {
        let ratio = fill_ratio(spec.value, spec.max_value);
        let height = spec.size.y * ratio;
        Self { ratio, height, top: spec.bottom() - height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ratio <= 0.0
    }
}

/// Colours, strokes and text placement for gauges.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GaugeStyle {
    pub outline: Stroke,
    pub fluid: Color,
    /// Rim ellipse height as a fraction of the gauge width.
    pub rim_aspect: f32,
    /// Gap between the right wall and the scale.
    pub scale_gap: f32,
    pub text: TextStyle,
    /// Value text sits this far below the bottom.
    pub value_offset: f32,
    /// Label sits this far above the top.
    pub label_offset: f32,
}

impl Default for GaugeStyle {
    fn default() -> Self {
        Self {
            outline: Stroke::new(2.0, Color::grey(200)),
            fluid: Color::from_srgb_u8(0, 150, 255, 180),
            rim_aspect: 0.3,
            scale_gap: 5.0,
            text: TextStyle { size: 20.0, color: Color::white(), align: TextAlign::CENTER },
            value_offset: 35.0,
            label_offset: 25.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GaugeRenderer {
    pub style: GaugeStyle,
    pub scale: ScaleRenderer,
}

impl GaugeRenderer {
    pub fn new(style: GaugeStyle, scale: ScaleRenderer) -> Self {
        Self { style, scale }
    }

    /// Draws scale, outline, fluid and text for `spec`.
    ///
    /// Layering: back rim, then fluid, then front rim, so the rim encloses the fluid.
    pub fn draw(&self, painter: &mut Painter<'_>, spec: &GaugeSpec<'_>) {
        let style = &self.style;
        let fill = FillGeometry::of(spec);

        let (cx, w, h) = (spec.center.x, spec.size.x, spec.size.y);
        let (top, bottom) = (spec.top(), spec.bottom());
        let rim = Vec2::new(w, w * style.rim_aspect);

        self.scale.draw(
            painter,
            Vec2::new(cx + w * 0.5 + style.scale_gap, bottom),
            h,
            spec.max_value,
        );

        // Outline
        painter.line(Vec2::new(cx - w * 0.5, top), Vec2::new(cx - w * 0.5, bottom), style.outline);
        painter.line(Vec2::new(cx + w * 0.5, top), Vec2::new(cx + w * 0.5, bottom), style.outline);
        painter.stroke_ellipse(Vec2::new(cx, bottom), rim, style.outline);
        painter.arc(Vec2::new(cx, top), rim, BACK_RIM.0, BACK_RIM.1, style.outline);

        // Fluid; an empty gauge draws none of it.
        if !fill.is_empty() {
            painter.fill_rect(
                Rect::from_bottom_center(Vec2::new(cx, bottom), Vec2::new(w, fill.height)),
                style.fluid,
            );
            painter.fill_ellipse(Vec2::new(cx, fill.top), rim, style.fluid);
            painter.fill_ellipse(Vec2::new(cx, bottom), rim, style.fluid);
        }

        painter.arc(Vec2::new(cx, top), rim, FRONT_RIM.0, FRONT_RIM.1, style.outline);

        painter.text(
            format!("{} ml", spec.value),
            Vec2::new(cx, bottom + style.value_offset),
            style.text,
        );
        painter.text(spec.label, Vec2::new(cx, top - style.label_offset), style.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beaker_engine::scene::{DrawCmd, DrawList};

    fn spec(value: i32, max_value: u32) -> GaugeSpec<'static> {
        GaugeSpec {
            center: Vec2::new(450.0, 180.0),
            size: Vec2::new(80.0, 200.0),
            value,
            max_value,
            label: "Minutes",
        }
    }

    fn draw(spec: &GaugeSpec<'_>) -> Vec<DrawCmd> {
        let mut list = DrawList::new();
        GaugeRenderer::default().draw(&mut Painter::new(&mut list), spec);
        list.iter_in_paint_order().map(|i| i.cmd.clone()).collect()
    }

    fn fluid_color() -> Color {
        GaugeStyle::default().fluid
    }

    fn fluid_ellipses(cmds: &[DrawCmd]) -> usize {
        cmds.iter()
            .filter(|c| matches!(c, DrawCmd::Ellipse(e) if e.fill == Some(fluid_color())))
            .count()
    }

    // ── fill ratio ────────────────────────────────────────────────────────

    #[test]
    fn ratio_is_exact_in_range() {
        for value in 0..=60 {
            assert_eq!(fill_ratio(value, 60), value as f32 / 60.0);
        }
        assert_eq!(fill_ratio(6, 12), 0.5);
    }

    #[test]
    fn ratio_is_clamped_out_of_range() {
        for value in [-1000, -1, 61, 1000, i32::MIN, i32::MAX] {
            let r = fill_ratio(value, 60);
            assert!((0.0..=1.0).contains(&r), "ratio {r} for {value}");
        }
        assert_eq!(fill_ratio(-5, 60), 0.0);
        assert_eq!(fill_ratio(75, 60), 1.0);
    }

    #[test]
    fn zero_max_is_guarded() {
        assert_eq!(fill_ratio(0, 0), 0.0);
        assert_eq!(fill_ratio(3, 0), 1.0);
    }

    #[test]
    fn geometry_anchors_fluid_to_the_bottom() {
        let g = FillGeometry::of(&spec(30, 60));
        assert_eq!(g.ratio, 0.5);
        assert_eq!(g.height, 100.0);
        assert_eq!(g.top, 180.0);

        let full = FillGeometry::of(&spec(90, 60));
        assert_eq!(full.top, spec(0, 60).top());
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn empty_gauge_has_no_fluid() {
        let cmds = draw(&spec(0, 60));
        assert_eq!(fluid_ellipses(&cmds), 0);
        assert!(!cmds.iter().any(|c| matches!(c, DrawCmd::Rect(_))));
        assert!(cmds.iter().any(|c| matches!(c, DrawCmd::Arc(_))));
    }

    #[test]
    fn filled_gauge_has_surface_and_bottom_ellipses() {
        let cmds = draw(&spec(15, 60));
        assert_eq!(fluid_ellipses(&cmds), 2);

        let rect = cmds
            .iter()
            .find_map(|c| match c {
                DrawCmd::Rect(r) => Some(r.rect),
                _ => None,
            })
            .unwrap();
        assert_eq!(rect, Rect::new(410.0, 230.0, 80.0, 50.0));
    }

    #[test]
    fn back_rim_then_fluid_then_front_rim() {
        let cmds = draw(&spec(40, 60));
        let pos = |pred: fn(&DrawCmd) -> bool| cmds.iter().position(pred).unwrap();

        let back = pos(|c| matches!(c, DrawCmd::Arc(a) if (a.start, a.end) == BACK_RIM));
        let body = pos(|c| matches!(c, DrawCmd::Rect(_)));
        let surface = pos(|c| matches!(c, DrawCmd::Ellipse(e) if e.fill.is_some()));
        let front = pos(|c| matches!(c, DrawCmd::Arc(a) if (a.start, a.end) == FRONT_RIM));

        assert!(back < body);
        assert!(body < surface);
        assert!(surface < front);
    }

    #[test]
    fn outline_walls_and_rims() {
        let cmds = draw(&spec(0, 12));
        let walls: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Line(l) if l.stroke.width == 2.0 => Some((l.from, l.to)),
                _ => None,
            })
            .collect();
        assert_eq!(walls, vec![
            (Vec2::new(410.0, 80.0), Vec2::new(410.0, 280.0)),
            (Vec2::new(490.0, 80.0), Vec2::new(490.0, 280.0)),
        ]);

        let rims: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Arc(a) => Some((a.center, a.size)),
                _ => None,
            })
            .collect();
        assert_eq!(rims.len(), 2);
        for (center, size) in rims {
            assert_eq!(center, Vec2::new(450.0, 80.0));
            assert_eq!(size.x, 80.0);
            assert!((size.y - 24.0).abs() < 1e-4);
        }
    }

    #[test]
    fn value_and_label_text() {
        let cmds = draw(&spec(42, 60));
        let texts: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text(t) if t.size == 20.0 => Some((t.text.as_str(), t.origin)),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec![
            ("42 ml", Vec2::new(450.0, 315.0)),
            ("Minutes", Vec2::new(450.0, 55.0)),
        ]);
    }

    #[test]
    fn scale_sits_right_of_the_beaker() {
        let cmds = draw(&spec(0, 60));
        let first_tick = cmds
            .iter()
            .find_map(|c| match c {
                DrawCmd::Line(l) if l.stroke.width != 2.0 => Some(l.from),
                _ => None,
            })
            .unwrap();
        assert_eq!(first_tick, Vec2::new(495.0, 280.0));
    }
}
