use crate::coords::Viewport;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called once before the first frame.
    fn on_start(&mut self, viewport: Viewport) {
        let _ = viewport;
    }

    /// Called once per frame. The draw list in `ctx` is empty on entry.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}

impl<A: App + ?Sized> App for &mut A {
    fn on_start(&mut self, viewport: Viewport) {
        (**self).on_start(viewport);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        (**self).on_frame(ctx)
    }
}
