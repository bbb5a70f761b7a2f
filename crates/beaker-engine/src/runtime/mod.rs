//! Headless frame loop.
//!
//! Owns the frame clock and the per-frame draw list, and calls the application
//! at a fixed cadence on the current thread.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
