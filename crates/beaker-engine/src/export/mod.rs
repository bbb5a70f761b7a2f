//! Draw stream exporters.
//!
//! Exporters consume a recorded `DrawList` in paint order. They never feed
//! anything back into the scene.

pub mod svg;

pub use svg::{render_svg, write_svg};
