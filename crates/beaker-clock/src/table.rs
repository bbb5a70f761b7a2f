//! Decorative lab table drawn behind the beakers.

use beaker_engine::coords::{Rect, Vec2, Viewport};
use beaker_engine::paint::Color;
use beaker_engine::scene::Stroke;

use crate::painter::Painter;

const TABLE_HEIGHT: f32 = 135.0;
const TOP_THICKNESS: f32 = 30.0;
const EDGE_THICKNESS: f32 = 8.0;

const LEG_WIDTH: f32 = 20.0;
const LEG_INSET: f32 = 40.0;
// Back legs sit further in and narrower to suggest depth.
const BACK_LEG_SHIFT: f32 = 10.0;
const BACK_LEG_NARROWING: f32 = 5.0;

const APRON_INSET: f32 = 20.0;
const APRON_HEIGHT: f32 = 25.0;

const GRAIN_LINES: usize = 8;
const GRAIN_SPACING: f32 = 1.5;
const GRAIN_INSET: f32 = 30.0;

/// Stateless table backdrop.
#[derive(Debug, Copy, Clone, Default)]
pub struct TableBackdrop;

impl TableBackdrop {
    /// Y of the tabletop surface for a canvas of `height`.
    #[inline]
    pub fn surface_y(height: f32) -> f32 {
        height - TABLE_HEIGHT
    }

    pub fn draw(&self, painter: &mut Painter<'_>, viewport: Viewport) {
        let Viewport { width, height } = viewport;
        let table_y = Self::surface_y(height);
        let under_top = table_y + TOP_THICKNESS;
        let leg_y = under_top + EDGE_THICKNESS;
        let leg_height = TABLE_HEIGHT - TOP_THICKNESS - EDGE_THICKNESS;

        // Top surface and front edge
        painter.fill_rect(Rect::new(0.0, table_y, width, TOP_THICKNESS), Color::rgb(100, 70, 45));
        painter.fill_rect(Rect::new(0.0, under_top, width, EDGE_THICKNESS), Color::rgb(80, 55, 35));

        // Legs: front left, front right, back left, back right
        let leg = Color::rgb(70, 50, 30);
        let back_width = LEG_WIDTH - BACK_LEG_NARROWING;
        let right_x = width - LEG_INSET - LEG_WIDTH;
        for (x, w) in [
            (LEG_INSET, LEG_WIDTH),
            (right_x, LEG_WIDTH),
            (LEG_INSET + BACK_LEG_SHIFT, back_width),
            (right_x + BACK_LEG_SHIFT, back_width),
        ] {
            painter.fill_rect(Rect::new(x, leg_y, w, leg_height), leg);
        }

        // Apron
        painter.fill_rect(
            Rect::new(APRON_INSET, under_top, width - 2.0 * APRON_INSET, APRON_HEIGHT),
            Color::rgb(85, 60, 40),
        );

        // Wood grain
        let grain = Stroke::new(1.0, Color::rgb(120, 85, 55));
        for i in 0..GRAIN_LINES {
            let y = table_y + 3.0 + i as f32 * GRAIN_SPACING;
            painter.line(Vec2::new(GRAIN_INSET, y), Vec2::new(width - GRAIN_INSET, y), grain);
        }

        // Highlight on the top, shadow on the floor
        painter.fill_ellipse(
            Vec2::new(width * 0.5, table_y + 8.0),
            Vec2::new(width * 0.6, 12.0),
            Color::from_srgb_u8(255, 255, 255, 25),
        );
        painter.fill_ellipse(
            Vec2::new(width * 0.5, height - 5.0),
            Vec2::new(width * 0.9, 15.0),
            Color::from_srgb_u8(0, 0, 0, 40),
        );
    }
}
