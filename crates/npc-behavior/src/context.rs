//! Read-only per-tick inputs passed to every agent.

use npc_core::{Tick, Vec2};

/// What agents may observe about the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    pub position: Vec2,
    /// `true` once the player has picked up a weapon.
    pub armed:    bool,
}

/// A read-only snapshot of the scene passed to [`AgentBehavior::tick`].
///
/// Built once per step by npc-sim and shared by every agent, so all agents
/// in a step see the same player position regardless of tick order.
///
/// [`AgentBehavior::tick`]: crate::AgentBehavior::tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    /// Current simulation tick.
    pub tick:   Tick,
    /// Seconds elapsed since the previous tick.
    pub dt:     f32,
    pub player: PlayerView,
}

impl TickContext {
    #[inline]
    pub fn new(tick: Tick, dt: f32, player: PlayerView) -> Self {
        Self { tick, dt, player }
    }
}
