//! Simulated 12-hour clock.
//!
//! The clock is not synchronised to wall time. It advances one second for every
//! 1000 ms of host time that passes between qualifying ticks.

use std::fmt;
use std::str::FromStr;

/// Host time that must elapse between two qualifying ticks.
pub const TICK_INTERVAL_MS: u64 = 1000;

pub const HOURS_PER_CYCLE: u8 = 12;
pub const MINUTES_PER_HOUR: u8 = 60;
pub const SECONDS_PER_MINUTE: u8 = 60;

/// Error returned when building a [`ClockTime`] from out-of-range or malformed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockTimeError(pub String);

impl ClockTimeError {
    fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl fmt::Display for ClockTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid clock time: {}", self.0)
    }
}

impl std::error::Error for ClockTimeError {}

/// Hours, minutes and seconds of the simulated clock.
///
/// Always within bounds: hours `0..12`, minutes and seconds `0..60`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime { hours: 0, minutes: 0, seconds: 0 };

    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, ClockTimeError> {
        if hours >= HOURS_PER_CYCLE {
            return Err(ClockTimeError::new(format!("hours {hours} not in 0..{HOURS_PER_CYCLE}")));
        }
        if minutes >= MINUTES_PER_HOUR {
            return Err(ClockTimeError::new(format!("minutes {minutes} not in 0..{MINUTES_PER_HOUR}")));
        }
        if seconds >= SECONDS_PER_MINUTE {
            return Err(ClockTimeError::new(format!(
                "seconds {seconds} not in 0..{SECONDS_PER_MINUTE}"
            )));
        }
        Ok(Self { hours, minutes, seconds })
    }

    #[inline]
    pub fn hours(self) -> u8 {
        self.hours
    }

    #[inline]
    pub fn minutes(self) -> u8 {
        self.minutes
    }

    #[inline]
    pub fn seconds(self) -> u8 {
        self.seconds
    }

    /// The time one second later, rolling seconds into minutes, minutes into
    /// hours, and 11:59:59 back to 00:00:00.
    pub fn advanced(self) -> Self {
        let mut next = self;

        next.seconds += 1;
        if next.seconds == SECONDS_PER_MINUTE {
            next.seconds = 0;
            next.minutes += 1;
            if next.minutes == MINUTES_PER_HOUR {
                next.minutes = 0;
                next.hours += 1;
                if next.hours == HOURS_PER_CYCLE {
                    next.hours = 0;
                }
            }
        }

        next
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    /// Parses `HH:MM:SS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(':');
        let mut field = |name: &str| -> Result<u8, ClockTimeError> {
            let raw = parts
                .next()
                .ok_or_else(|| ClockTimeError::new(format!("missing {name} in {s:?}")))?;
            raw.parse::<u8>()
                .map_err(|_| ClockTimeError::new(format!("{name} {raw:?} is not a number")))
        };

        let hours = field("hours")?;
        let minutes = field("minutes")?;
        let seconds = field("seconds")?;

        if parts.next().is_some() {
            return Err(ClockTimeError::new(format!("expected HH:MM:SS, got {s:?}")));
        }

        ClockTime::new(hours, minutes, seconds)
    }
}

/// Emitted when a tick changes the minutes value, including 59 → 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MinuteChanged {
    pub minute: u8,
}

/// Result of a qualifying tick.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Advance {
    pub time: ClockTime,
    pub minute_changed: Option<MinuteChanged>,
}

#[derive(Debug, Copy, Clone)]
struct ClockState {
    time: ClockTime,
    last_tick_ms: u64,
}

type MinuteListener = Box<dyn FnMut(MinuteChanged)>;

/// Owns the clock state. `tick` is the only mutator.
pub struct ClockSimulator {
    state: ClockState,
    listeners: Vec<MinuteListener>,
}

impl ClockSimulator {
    /// Starts at 00:00:00 with the last tick at host time zero.
    pub fn new() -> Self {
        Self::starting_at(ClockTime::MIDNIGHT)
    }

    /// Starts at `time`, e.g. 11:59:59 to watch the 12-hour wrap.
    pub fn starting_at(time: ClockTime) -> Self {
        Self {
            state: ClockState { time, last_tick_ms: 0 },
            listeners: Vec::new(),
        }
    }

    /// Registers a diagnostic listener, called once per minute transition.
    pub fn on_minute_changed(&mut self, listener: impl FnMut(MinuteChanged) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Current time by value.
    #[inline]
    pub fn snapshot(&self) -> ClockTime {
        self.state.time
    }

    /// Host time of the last qualifying tick.
    #[inline]
    pub fn last_tick_ms(&self) -> u64 {
        self.state.last_tick_ms
    }

    /// Advances one second if at least [`TICK_INTERVAL_MS`] passed since the last
    /// qualifying tick. Returns `None` otherwise.
    ///
    /// A timestamp earlier than the last tick counts as no elapsed time.
    pub fn tick(&mut self, now_ms: u64) -> Option<Advance> {
        if now_ms.saturating_sub(self.state.last_tick_ms) < TICK_INTERVAL_MS {
            return None;
        }

        let previous = self.state.time;
        let time = previous.advanced();
        self.state = ClockState { time, last_tick_ms: now_ms };

        log::trace!("tick at {now_ms} ms: {previous} -> {time}");

        let minute_changed =
            (time.minutes != previous.minutes).then_some(MinuteChanged { minute: time.minutes });

        if let Some(event) = minute_changed {
            for listener in &mut self.listeners {
                listener(event);
            }
        }

        Some(Advance { time, minute_changed })
    }
}

impl Default for ClockSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ClockSimulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClockSimulator")
            .field("time", &self.state.time)
            .field("last_tick_ms", &self.state.last_tick_ms)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
