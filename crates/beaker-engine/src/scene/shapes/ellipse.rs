use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// Ellipse payload.
///
/// `size` holds the full width and height, not the radii.
/// An ellipse with neither `fill` nor `stroke` is invisible; consumers may skip it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EllipseCmd {
    pub center: Vec2,
    pub size: Vec2,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl DrawList {
    /// Records an ellipse with optional fill and outline.
    #[inline]
    pub fn push_ellipse(
        &mut self,
        z: ZIndex,
        center: Vec2,
        size: Vec2,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    ) {
        self.push(z, DrawCmd::Ellipse(EllipseCmd { center, size, fill, stroke }));
    }
}
