//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands, each carrying its own style
//! - provide deterministic ordering (z-index + insertion order)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod key;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
pub use shapes::{
    ArcCmd, EllipseCmd, HAlign, LineCmd, RectCmd, Stroke, TextAlign, TextCmd, VAlign,
};
