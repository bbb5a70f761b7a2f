use crate::coords::Viewport;
use crate::runtime::RuntimeCtx;
use crate::scene::DrawList;
use crate::time::FrameTime;

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    pub viewport: Viewport,
    pub time: FrameTime,
    pub draw_list: &'a mut DrawList,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a> FrameCtx<'a> {
    /// Host monotonic clock reading for this frame, in milliseconds.
    #[inline]
    pub fn now_ms(&self) -> u64 {
        self.time.now_ms
    }
}
