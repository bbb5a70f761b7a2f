use crate::coords::{Rect, Viewport};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled rectangle payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

impl DrawList {
    /// Records a solid rectangle.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push(z, DrawCmd::Rect(RectCmd { rect, color }));
    }

    /// Records a full-canvas clear.
    #[inline]
    pub fn push_clear(&mut self, z: ZIndex, color: Color) {
        self.push(z, DrawCmd::Clear(color));
    }
}

impl RectCmd {
    /// Rect covering the whole viewport, for consumers that turn `Clear` into a fill.
    #[inline]
    pub fn covering(viewport: Viewport, color: Color) -> Self {
        Self { rect: Rect::new(0.0, 0.0, viewport.width, viewport.height), color }
    }
}
