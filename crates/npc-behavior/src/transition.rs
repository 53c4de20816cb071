//! Declarative mode-transition tables.

use crate::PlayerView;
use npc_core::Vec2;

/// What a transition row tests against the current tick's [`Senses`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    /// The player is not farther than the proximity threshold
    /// (`!(distance > proximity)`).
    PlayerNear,
    /// The player is not closer than the proximity threshold
    /// (`!(distance < proximity)`).
    PlayerClear,
    /// The player is carrying a weapon.
    PlayerArmed,
}

/// Per-tick perception an agent evaluates its table against.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Senses {
    pub player_distance: f32,
    pub proximity:       f32,
    pub player_armed:    bool,
}

impl Senses {
    pub fn new(agent: Vec2, player: &PlayerView, proximity: f32) -> Self {
        Self {
            player_distance: agent.distance(player.position),
            proximity,
            player_armed: player.armed,
        }
    }
}

impl Condition {
    pub fn holds(self, senses: &Senses) -> bool {
        match self {
            // Written as negations so that exactly-at-threshold counts as
            // both near and clear, matching the action guards (`>` / `<`).
            Condition::PlayerNear  => !(senses.player_distance > senses.proximity),
            Condition::PlayerClear => !(senses.player_distance < senses.proximity),
            Condition::PlayerArmed => senses.player_armed,
        }
    }
}

/// One row of a transition table: in mode `from`, if `when` holds, switch to `to`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition<M> {
    pub from: M,
    pub when: Condition,
    pub to:   M,
}

/// Scan `table` in order and return the target of the first row for
/// `current` whose condition holds.
pub fn next_mode<M: Copy + Eq>(table: &[Transition<M>], current: M, senses: &Senses) -> Option<M> {
    table
        .iter()
        .find(|row| row.from == current && row.when.holds(senses))
        .map(|row| row.to)
}
