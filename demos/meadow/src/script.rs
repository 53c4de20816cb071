//! A scripted stand-in for keyboard input.
//!
//! The player wanders, then heads for the sword, then hunts the nearest
//! patroller.

use npc_behavior::AgentKind;
use npc_core::{SimRng, Vec2};
use npc_sim::Sim;

/// Ticks between random heading changes while wandering.
const RETARGET_EVERY: u64 = 90;

pub struct Wanderer {
    rng:        SimRng,
    heading:    Vec2,
    sword:      Vec2,
    grab_after: u64,
}

impl Wanderer {
    pub fn new(seed: u64, sword: Vec2, grab_after: u64) -> Self {
        Self { rng: SimRng::new(seed), heading: Vec2::ZERO, sword, grab_after }
    }

    /// Axis input for the coming step.
    pub fn input(&mut self, sim: &Sim) -> Vec2 {
        let tick = sim.clock.current_tick.0;
        let player = sim.player;

        if player.armed {
            let prey = sim
                .snapshots()
                .filter(|s| s.active && s.kind == AgentKind::Patroller)
                .min_by(|a, b| {
                    let da = a.position.distance(player.position);
                    let db = b.position.distance(player.position);
                    da.total_cmp(&db)
                });
            return match prey {
                Some(target) => player.position.direction_to(target.position),
                None => Vec2::ZERO,
            };
        }
        if tick >= self.grab_after {
            return player.position.direction_to(self.sword);
        }
        if tick.is_multiple_of(RETARGET_EVERY) {
            self.heading = Vec2::new(self.rng.gen_range(-1.0..=1.0), self.rng.gen_range(-1.0..=1.0));
        }
        self.heading
    }
}
