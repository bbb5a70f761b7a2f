mod arc;
mod ellipse;
mod line;
mod rect;
mod text;

pub use arc::ArcCmd;
pub use ellipse::EllipseCmd;
pub use line::LineCmd;
pub use rect::RectCmd;
pub use text::{HAlign, TextAlign, TextCmd, VAlign};

use crate::paint::Color;

/// Outline style for lines, arcs and ellipse borders.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
