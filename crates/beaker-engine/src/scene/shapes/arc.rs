use core::f32::consts::TAU;

use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// Open elliptical arc outline.
///
/// The arc runs clockwise on screen from `start` to `end` (radians, `end > start`).
/// `size` holds the full width and height of the underlying ellipse.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcCmd {
    pub center: Vec2,
    pub size: Vec2,
    pub start: f32,
    pub end: f32,
    pub stroke: Stroke,
}

impl ArcCmd {
    /// Angular extent, clamped to one full turn.
    #[inline]
    pub fn span(&self) -> f32 {
        (self.end - self.start).clamp(0.0, TAU)
    }

    #[inline]
    pub fn start_point(&self) -> Vec2 {
        self.center.on_ellipse(self.size, self.start)
    }

    #[inline]
    pub fn end_point(&self) -> Vec2 {
        self.center.on_ellipse(self.size, self.start + self.span())
    }
}

impl DrawList {
    /// Records an elliptical arc outline.
    #[inline]
    pub fn push_arc(
        &mut self,
        z: ZIndex,
        center: Vec2,
        size: Vec2,
        start: f32,
        end: f32,
        stroke: Stroke,
    ) {
        self.push(z, DrawCmd::Arc(ArcCmd { center, size, start, end, stroke }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use core::f32::consts::PI;

    fn arc(start: f32, end: f32) -> ArcCmd {
        ArcCmd {
            center: Vec2::new(0.0, 0.0),
            size: Vec2::new(10.0, 4.0),
            start,
            end,
            stroke: Stroke::new(1.0, Color::white()),
        }
    }

    #[test]
    fn span_is_clamped() {
        assert_eq!(arc(0.0, PI).span(), PI);
        assert_eq!(arc(PI, 0.0).span(), 0.0);
        assert_eq!(arc(0.0, 3.0 * PI).span(), TAU);
    }

    #[test]
    fn lower_half_runs_right_to_left() {
        let a = arc(0.0, PI);
        assert!((a.start_point().x - 5.0).abs() < 1e-4);
        assert!((a.end_point().x + 5.0).abs() < 1e-4);
    }
}
