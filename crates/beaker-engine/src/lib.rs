//! Beaker engine crate.
//!
//! Owns the renderer-agnostic pieces used by higher layers: geometry, colour,
//! the recorded draw stream, frame timing, the headless frame loop and
//! draw-stream exporters.

pub mod core;
pub mod runtime;
pub mod time;

pub mod coords;
pub mod export;
pub mod logging;
pub mod paint;
pub mod scene;
