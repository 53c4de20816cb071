//! Simulation observer trait for UI updates and data collection.

use npc_behavior::{AgentKind, Event};
use npc_core::{AgentId, Tick};

use crate::{GameOutcome, Sim};

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  This is where a host hangs its UI: state
/// labels, sprite swaps, the stockpile counter, the victory/restart menus.
///
/// # Example — state label printer
///
/// ```rust,ignore
/// struct Labels;
///
/// impl SimObserver for Labels {
///     fn on_events(&mut self, tick: Tick, agent: AgentId, events: &[Event]) {
///         for e in events {
///             println!("{tick} {agent}: {e}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any agent ticks.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per agent that produced events this step, in ascending
    /// `AgentId` order.
    fn on_events(&mut self, _tick: Tick, _agent: AgentId, _events: &[Event]) {}

    /// Called at the end of each step.
    ///
    /// `ticked` is the number of active agents that were ticked.
    fn on_tick_end(&mut self, _tick: Tick, _ticked: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// Provides read-only access to the whole scene so that output writers
    /// can record positions and counters without the sim needing to know
    /// about any specific output format.
    fn on_snapshot(&mut self, _tick: Tick, _sim: &Sim) {}

    /// Called when an agent is removed from play.
    fn on_deactivated(&mut self, _tick: Tick, _agent: AgentId, _kind: AgentKind) {}

    /// Called once when the scene's outcome is decided.
    fn on_outcome(&mut self, _tick: Tick, _outcome: GameOutcome) {}

    /// Called once after [`Sim::run`][crate::Sim::run] finishes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
