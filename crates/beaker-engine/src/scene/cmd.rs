use crate::paint::Color;
use crate::scene::shapes::{ArcCmd, EllipseCmd, LineCmd, RectCmd, TextCmd};

/// Renderer-agnostic draw command stream.
///
/// Every variant is self-describing: stroke, fill and text settings travel
/// with the command, so no consumer has to track ambient drawing state.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `export::svg` to emit it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Fill the whole canvas.
    Clear(Color),
    Rect(RectCmd),
    Line(LineCmd),
    Ellipse(EllipseCmd),
    Arc(ArcCmd),
    Text(TextCmd),
}
