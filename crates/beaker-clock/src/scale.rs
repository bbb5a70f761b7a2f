//! Graduated scale drawn beside a gauge.

use beaker_engine::coords::Vec2;
use beaker_engine::paint::Color;
use beaker_engine::scene::{Stroke, TextAlign};

use crate::painter::{Painter, TextStyle};

/// Tick and label spacing for a scale, in value units.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ScaleSpec {
    /// Values that get a long tick.
    pub major_interval: u32,
    /// Step between consecutive ticks.
    pub minor_interval: u32,
    /// Long ticks at multiples of this also get a numeric label.
    pub label_interval: u32,
}

impl ScaleSpec {
    /// Dense scale for small ranges such as the 12-hour gauge.
    pub const FINE: ScaleSpec = ScaleSpec { major_interval: 2, minor_interval: 1, label_interval: 2 };
    /// Coarse scale for 0..60 style ranges.
    pub const COARSE: ScaleSpec = ScaleSpec { major_interval: 10, minor_interval: 5, label_interval: 10 };

    pub fn for_max(max_value: u32) -> Self {
        if max_value <= 12 { Self::FINE } else { Self::COARSE }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TickKind {
    Minor,
    Major,
}

/// One graduation on the scale.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScaleMark {
    pub value: u32,
    /// `value / max_value`.
    pub ratio: f32,
    /// Draw-space y of the mark.
    pub y: f32,
    pub kind: TickKind,
    pub labeled: bool,
}

/// Marks from 0 to `max_value` inclusive, stepping by the minor interval.
///
/// `bottom` is the y of value 0 and `length` the draw-space height of the full range.
/// A zero `max_value` is treated as 1.
pub fn marks(max_value: u32, bottom: f32, length: f32) -> impl Iterator<Item = ScaleMark> {
    let max_value = max_value.max(1);
    let spec = ScaleSpec::for_max(max_value);

    (0..=max_value).step_by(spec.minor_interval as usize).map(move |value| {
        let ratio = value as f32 / max_value as f32;
        let major = value % spec.major_interval == 0;
        ScaleMark {
            value,
            ratio,
            y: bottom - length * ratio,
            kind: if major { TickKind::Major } else { TickKind::Minor },
            labeled: major && value % spec.label_interval == 0,
        }
    })
}

/// Tick geometry and colours.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScaleStyle {
    pub major_length: f32,
    pub minor_length: f32,
    pub major_stroke: Stroke,
    pub minor_stroke: Stroke,
    /// Horizontal gap between the scale anchor and label text.
    pub label_offset: f32,
    pub label: TextStyle,
}

impl Default for ScaleStyle {
    fn default() -> Self {
        let tick = Color::grey(150);
        Self {
            major_length: 12.0,
            minor_length: 6.0,
            major_stroke: Stroke::new(1.5, tick),
            minor_stroke: Stroke::new(1.0, tick),
            label_offset: 15.0,
            label: TextStyle { size: 10.0, color: Color::grey(200), align: TextAlign::LEFT_CENTER },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScaleRenderer {
    pub style: ScaleStyle,
}

impl ScaleRenderer {
    pub fn new(style: ScaleStyle) -> Self {
        Self { style }
    }

    /// Draws ticks rising from `anchor` (the x of the scale and the y of value 0).
    pub fn draw(&self, painter: &mut Painter<'_>, anchor: Vec2, length: f32, max_value: u32) {
        let style = &self.style;

        for mark in marks(max_value, anchor.y, length) {
            let (tick_len, stroke) = match mark.kind {
                TickKind::Major => (style.major_length, style.major_stroke),
                TickKind::Minor => (style.minor_length, style.minor_stroke),
            };

            painter.line(
                Vec2::new(anchor.x, mark.y),
                Vec2::new(anchor.x + tick_len, mark.y),
                stroke,
            );

            if mark.labeled {
                painter.text(
                    mark.value.to_string(),
                    Vec2::new(anchor.x + style.label_offset, mark.y),
                    style.label,
                );
            }
        }
    }
}
