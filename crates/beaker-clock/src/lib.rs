//! Beaker clock — a simulated 12-hour clock drawn as three graduated beakers.
//!
//! The crate records drawing intents into a `beaker_engine::scene::DrawList`;
//! rasterising or exporting that stream is the host's job.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use beaker_clock::SceneComposer;
//! use beaker_engine::coords::Viewport;
//! use beaker_engine::scene::DrawList;
//!
//! let mut composer = SceneComposer::default();
//! composer.on_minute_changed(|ev| log::info!("minute changed to {}", ev.minute));
//!
//! let mut draw_list = DrawList::new();
//! // Once per frame, with the host's monotonic clock:
//! draw_list.clear();
//! composer.render_frame(now_ms, Viewport::new(900.0, 400.0), &mut draw_list);
//! ```

pub mod clock;
pub mod composer;
pub mod gauge;
pub mod painter;
pub mod scale;
pub mod table;

pub use clock::{Advance, ClockSimulator, ClockTime, ClockTimeError, MinuteChanged};
pub use composer::SceneComposer;
pub use gauge::{GaugeRenderer, GaugeSpec};
pub use painter::{Painter, TextStyle};
pub use scale::ScaleRenderer;
pub use table::TableBackdrop;
