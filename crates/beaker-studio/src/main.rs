use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use beaker_clock::{ClockSimulator, ClockTime, SceneComposer};
use beaker_engine::coords::Viewport;
use beaker_engine::core::{App, AppControl, FrameCtx};
use beaker_engine::export::write_svg;
use beaker_engine::logging::{init_logging, LoggingConfig};
use beaker_engine::runtime::{Runtime, RuntimeConfig};

/// `HH:MM:SS` start time, e.g. `11:59:59` to watch the 12-hour wrap.
const START_VAR: &str = "BEAKER_CLOCK_START";
/// Where the latest frame is written as SVG.
const SNAPSHOT_VAR: &str = "BEAKER_CLOCK_SVG";
const DEFAULT_SNAPSHOT: &str = "beaker-clock.svg";

struct ClockApp {
    composer: SceneComposer,
    snapshot_path: PathBuf,
}

impl App for ClockApp {
    fn on_start(&mut self, viewport: Viewport) {
        log::info!(
            "clock starts at {} on a {}x{} canvas; snapshots go to {}",
            self.composer.clock().snapshot(),
            viewport.width,
            viewport.height,
            self.snapshot_path.display()
        );
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let now_ms = ctx.now_ms();
        let advance = self.composer.render_frame(now_ms, ctx.viewport, ctx.draw_list);

        // The picture only changes when the clock does.
        if advance.is_some() || ctx.time.frame_index == 0 {
            if let Err(e) = write_svg(&self.snapshot_path, ctx.draw_list, ctx.viewport) {
                log::error!("{e:#}");
            }
        }

        AppControl::Continue
    }
}

fn start_time() -> Result<ClockTime> {
    match env::var(START_VAR) {
        Ok(raw) => raw
            .parse::<ClockTime>()
            .with_context(|| format!("{START_VAR}={raw:?}")),
        Err(_) => Ok(ClockTime::MIDNIGHT),
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut composer = SceneComposer::new(ClockSimulator::starting_at(start_time()?));
    composer.on_minute_changed(|ev| log::info!("minute changed to {}", ev.minute));

    let snapshot_path = env::var_os(SNAPSHOT_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT));

    Runtime::run(RuntimeConfig::default(), ClockApp { composer, snapshot_path })
}
