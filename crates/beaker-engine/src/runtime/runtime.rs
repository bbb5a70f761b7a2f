use std::thread;
use std::time::{Duration, Instant};

use anyhow::{ensure, Result};

use crate::coords::Viewport;
use crate::core::{App, AppControl, FrameCtx};
use crate::scene::DrawList;
use crate::time::{FrameClock, FrameTime};

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: Viewport,
    /// Target time between frame starts.
    pub frame_interval: Duration,
    /// Stop after this many frames. `None` runs until the app exits.
    pub max_frames: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "beaker clock".to_string(),
            initial_size: Viewport::new(900.0, 400.0),
            frame_interval: Duration::from_micros(16_667),
            max_frames: None,
        }
    }
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns.
#[derive(Default)]
pub struct RuntimeCtx {
    commands: Vec<Command>,
}

impl RuntimeCtx {
    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }
}

enum Command {
    Exit,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs `app` until it exits or `config.max_frames` frames have been produced.
    pub fn run<A>(config: RuntimeConfig, mut app: A) -> Result<()>
    where
        A: App,
    {
        ensure!(
            config.initial_size.is_valid(),
            "invalid canvas size {}x{}",
            config.initial_size.width,
            config.initial_size.height
        );
        ensure!(!config.frame_interval.is_zero(), "frame interval must be non-zero");

        log::info!(
            "{}: {}x{} canvas, frame interval {:?}",
            config.title,
            config.initial_size.width,
            config.initial_size.height,
            config.frame_interval
        );

        let mut state = LoopState::new(config);
        app.on_start(state.config.initial_size);

        while !state.exit_requested {
            let started = Instant::now();
            state.frame(&mut app);

            if state.exit_requested {
                break;
            }

            let elapsed = started.elapsed();
            if let Some(rest) = state.config.frame_interval.checked_sub(elapsed) {
                thread::sleep(rest);
            } else {
                log::trace!("frame overran its interval by {:?}", elapsed - state.config.frame_interval);
            }
        }

        log::debug!("runtime stopped after {} frames", state.frames);
        Ok(())
    }
}

struct LoopState {
    config: RuntimeConfig,
    clock: FrameClock,
    draw_list: DrawList,
    frames: u64,
    exit_requested: bool,
}

impl LoopState {
    fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            clock: FrameClock::new(),
            draw_list: DrawList::new(),
            frames: 0,
            exit_requested: false,
        }
    }

    /// Drives one frame and applies any buffered commands.
    fn frame<A: App>(&mut self, app: &mut A) {
        let ft: FrameTime = self.clock.tick();
        let mut runtime_ctx = RuntimeCtx::default();

        self.draw_list.clear();

        let control = {
            let mut ctx = FrameCtx {
                viewport: self.config.initial_size,
                time: ft,
                draw_list: &mut self.draw_list,
                runtime: &mut runtime_ctx,
            };
            app.on_frame(&mut ctx)
        };

        log::trace!(
            "frame {} at {} ms: {} draw items",
            ft.frame_index,
            ft.now_ms,
            self.draw_list.len()
        );

        self.frames += 1;

        if control == AppControl::Exit {
            runtime_ctx.exit();
        }

        for cmd in runtime_ctx.commands.drain(..) {
            match cmd {
                Command::Exit => self.exit_requested = true,
            }
        }

        if self.config.max_frames.is_some_and(|max| self.frames >= max) {
            self.exit_requested = true;
        }
    }
}
