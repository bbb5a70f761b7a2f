use beaker_engine::coords::{Vec2, Viewport};
use beaker_engine::paint::Color;
use beaker_engine::scene::DrawList;

use crate::clock::{
    Advance, ClockSimulator, ClockTime, MinuteChanged, HOURS_PER_CYCLE, MINUTES_PER_HOUR,
    SECONDS_PER_MINUTE,
};
use crate::gauge::{GaugeRenderer, GaugeSpec};
use crate::painter::Painter;
use crate::table::TableBackdrop;

/// Beaker body size in logical pixels.
pub const BEAKER_SIZE: Vec2 = Vec2::new(80.0, 200.0);
/// Distance from the canvas bottom up to the beaker centres.
pub const BEAKER_LIFT: f32 = 220.0;

/// Gauges for `time`: hours, minutes, seconds at a quarter, half and three
/// quarters of the canvas width.
pub fn gauge_specs(time: ClockTime, viewport: Viewport) -> [GaugeSpec<'static>; 3] {
    let y = viewport.height - BEAKER_LIFT;
    let at = |fraction: f32| Vec2::new(viewport.width * fraction, y);

    [
        GaugeSpec {
            center: at(0.25),
            size: BEAKER_SIZE,
            value: i32::from(time.hours()),
            max_value: u32::from(HOURS_PER_CYCLE),
            label: "Hours",
        },
        GaugeSpec {
            center: at(0.5),
            size: BEAKER_SIZE,
            value: i32::from(time.minutes()),
            max_value: u32::from(MINUTES_PER_HOUR),
            label: "Minutes",
        },
        GaugeSpec {
            center: at(0.75),
            size: BEAKER_SIZE,
            value: i32::from(time.seconds()),
            max_value: u32::from(SECONDS_PER_MINUTE),
            label: "Seconds",
        },
    ]
}

/// Per-frame orchestrator: background, table, clock tick, three gauges.
#[derive(Debug)]
pub struct SceneComposer {
    clock: ClockSimulator,
    table: TableBackdrop,
    gauge: GaugeRenderer,
    background: Color,
}

impl SceneComposer {
    pub fn new(clock: ClockSimulator) -> Self {
        Self {
            clock,
            table: TableBackdrop,
            gauge: GaugeRenderer::default(),
            background: Color::black(),
        }
    }

    pub fn clock(&self) -> &ClockSimulator {
        &self.clock
    }

    /// Forwards to [`ClockSimulator::on_minute_changed`].
    pub fn on_minute_changed(&mut self, listener: impl FnMut(MinuteChanged) + 'static) {
        self.clock.on_minute_changed(listener);
    }

    /// Records one frame into `draw_list`.
    ///
    /// Returns the clock advance if this frame produced a qualifying tick.
    pub fn render_frame(
        &mut self,
        now_ms: u64,
        viewport: Viewport,
        draw_list: &mut DrawList,
    ) -> Option<Advance> {
        let mut painter = Painter::new(draw_list);

        painter.clear(self.background);
        self.table.draw(&mut painter, viewport);

        let advance = self.clock.tick(now_ms);
        let time = self.clock.snapshot();

        for spec in &gauge_specs(time, viewport) {
            self.gauge.draw(&mut painter, spec);
        }

        advance
    }
}

impl Default for SceneComposer {
    fn default() -> Self {
        Self::new(ClockSimulator::new())
    }
}
