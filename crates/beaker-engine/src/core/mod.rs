//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (frame loop) and the
//! application that fills each frame's draw stream.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
