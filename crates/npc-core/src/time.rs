//! Simulation time model.
//!
//! # Design
//!
//! Steps are counted by a monotonically increasing `Tick`.  Each step also
//! carries a `dt` in seconds, which is what the movement primitives scale by:
//!
//!   elapsed_secs = Σ dt over all steps so far
//!
//! A fixed-timestep run uses `SimConfig::dt_secs` for every step; a host
//! engine with a variable frame time passes its own `dt` per step instead.
//! `SimClock` also carries a pause flag standing in for a zero time scale.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and accumulated simulated time.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick, advanced by `SimClock::advance()` each step.
    pub current_tick: Tick,
    /// Simulated seconds elapsed since tick 0.
    pub elapsed_secs: f64,
    /// Set once the scene is settled; a paused scene ignores `Sim::step`.
    pub paused: bool,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick of `dt` seconds.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.current_tick = self.current_tick + 1;
        self.elapsed_secs += f64::from(dt);
    }

    #[inline]
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Break elapsed time into (minutes, seconds) for human-readable logs.
    pub fn elapsed_ms(&self) -> (u64, f64) {
        let total = self.elapsed_secs.max(0.0);
        let minutes = (total / 60.0).floor();
        (minutes as u64, total - minutes * 60.0)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, s) = self.elapsed_ms();
        write!(f, "{} ({m:02}:{s:06.3})", self.current_tick)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON scene file by the application crate and
/// passed to the simulation runner.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SimConfig {
    /// Fixed step length in seconds used by `Sim::run`.  Default: 1/60.
    pub dt_secs: f32,

    /// Total ticks to simulate with `Sim::run`.
    pub total_ticks: u64,

    /// Master RNG seed for scene-level randomness.
    pub seed: u64,

    /// Write snapshot output every N ticks.  1 = every tick.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt_secs:               1.0 / 60.0,
            total_ticks:           3_600,
            seed:                  0,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new()
    }

    /// Reject a non-positive or non-finite step length.
    pub fn validate(&self) -> crate::CoreResult<()> {
        if !(self.dt_secs.is_finite() && self.dt_secs > 0.0) {
            return Err(crate::CoreError::Config(format!(
                "dt_secs must be positive, got {}",
                self.dt_secs
            )));
        }
        Ok(())
    }
}
