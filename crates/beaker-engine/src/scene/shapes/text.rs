use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Horizontal placement of text relative to its anchor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical placement of text relative to its anchor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct TextAlign {
    pub h: HAlign,
    pub v: VAlign,
}

impl TextAlign {
    pub const CENTER: TextAlign = TextAlign { h: HAlign::Center, v: VAlign::Center };
    pub const LEFT_CENTER: TextAlign = TextAlign { h: HAlign::Left, v: VAlign::Center };
}

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Anchor point; `align` says how the text box sits on it.
    pub origin: Vec2,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    pub align: TextAlign,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        origin: Vec2,
        size: f32,
        color: Color,
        align: TextAlign,
    ) {
        self.push(z, DrawCmd::Text(TextCmd {
            text: text.into(),
            origin,
            size,
            color,
            align,
        }));
    }
}
