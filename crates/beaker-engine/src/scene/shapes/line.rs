use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// Straight line segment payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: Stroke,
}

impl DrawList {
    /// Records a stroked line segment.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, stroke: Stroke) {
        self.push(z, DrawCmd::Line(LineCmd { from, to, stroke }));
    }
}
