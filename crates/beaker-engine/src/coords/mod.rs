//! Coordinate and geometry types shared by the draw stream and its consumers.
//!
//! Canonical canvas space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are radians in the same space: 0 points along +X and positive
//! angles turn clockwise on screen.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
