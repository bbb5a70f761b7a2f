//! Paint model shared between the scene and its consumers.
//!
//! Colours are linear premultiplied RGBA. Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
