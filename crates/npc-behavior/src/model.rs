//! The `AgentBehavior` trait — the interface npc-sim drives every tick.

use npc_core::Vec2;

use crate::{Event, TickContext};

/// Which state machine an agent runs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AgentKind {
    Forager,
    Patroller,
}

impl AgentKind {
    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Forager   => "forager",
            AgentKind::Patroller => "patroller",
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-tick agent state machine.
///
/// # Required methods
///
/// [`tick`][Self::tick] advances the machine by one step: it may change mode
/// or move the agent, and returns the [`Event`]s that happened.  The
/// accessors expose what external UI needs to display.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: npc-sim's `parallel` feature ticks
/// agents on Rayon's pool, each with exclusive `&mut` access to its own
/// agent.  Anything shared between agents (the stockpile) must be updated
/// atomically.
pub trait AgentBehavior: Send + Sync + 'static {
    fn kind(&self) -> AgentKind;

    /// Advance one tick.  Total over valid inputs: never fails.
    fn tick(&mut self, ctx: &TickContext) -> Vec<Event>;

    fn position(&self) -> Vec2;

    /// Name of the current mode, e.g. `"Foraging"`.
    fn state_name(&self) -> &'static str;

    /// Index of the waypoint currently targeted.
    fn waypoint_index(&self) -> usize;

    /// Resources currently carried, for kinds that carry any.
    fn resources(&self) -> Option<u32> {
        None
    }
}
