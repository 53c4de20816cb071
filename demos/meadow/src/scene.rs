//! Scene description: who is where, loaded from JSON or built in.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use npc_behavior::{AgentConfig, Forager, Patroller, StoragePoint};
use npc_core::{SimConfig, Vec2};
use npc_sim::{Player, Sim, SimBuilder};

/// Everything needed to set up one meadow run.
///
/// Every field is optional in JSON; missing ones fall back to the built-in
/// scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scene {
    pub sim:                   SimConfig,
    pub player:                Player,
    /// Where the sword lies.  Touching it arms the player.
    pub sword:                 Vec2,
    /// Contact distance for the sword and for player/agent collisions.
    pub touch_radius:          f32,
    /// The scripted player wanders until this tick, then goes for the sword.
    pub grab_sword_after_tick: u64,
    pub storage:               StoragePoint,
    pub foragers:              Vec<AgentConfig>,
    pub patrollers:            Vec<AgentConfig>,
}

impl Default for Scene {
    fn default() -> Self {
        let p = Vec2::new;
        Self {
            sim: SimConfig {
                dt_secs:               1.0 / 60.0,
                total_ticks:           3_600, // one minute
                seed:                  42,
                output_interval_ticks: 30,
            },
            player:                Player::new(p(0.0, -10.0)),
            sword:                 p(9.0, 0.0),
            touch_radius:          0.5,
            grab_sword_after_tick: 1_200,
            storage:               StoragePoint::new(p(0.0, 0.0)),
            foragers: vec![
                // Rock field to the north, stone field to the south.
                AgentConfig::with_waypoints(vec![p(-6.0, 4.0), p(-2.0, 6.0), p(2.0, 6.0), p(0.0, 0.5)]),
                AgentConfig::with_waypoints(vec![p(6.0, -4.0), p(2.0, -6.0), p(-2.0, -6.0), p(0.0, -0.5)]),
            ],
            patrollers: vec![AgentConfig::with_waypoints(vec![
                p(8.0, 8.0),
                p(-8.0, 8.0),
                p(-8.0, -8.0),
                p(8.0, -8.0),
            ])],
        }
    }
}

impl Scene {
    /// Read a scene from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene {}", path.display()))?;
        let scene = serde_json::from_str(&text)
            .with_context(|| format!("parsing scene {}", path.display()))?;
        Ok(scene)
    }

    /// Spawn foragers first, then patrollers, in file order.
    pub fn build(&self) -> Result<Sim> {
        anyhow::ensure!(
            self.touch_radius.is_finite() && self.touch_radius > 0.0,
            "touchRadius must be positive, got {}",
            self.touch_radius
        );

        let mut builder = SimBuilder::new(self.sim.clone()).player(self.player);
        for (i, config) in self.foragers.iter().enumerate() {
            builder = builder
                .spawn_forager(Forager::builder(config.clone()).storage(self.storage))
                .with_context(|| format!("forager {i}"))?;
        }
        for (i, config) in self.patrollers.iter().enumerate() {
            builder = builder
                .spawn_patroller(Patroller::builder(config.clone()))
                .with_context(|| format!("patroller {i}"))?;
        }
        Ok(builder.build()?)
    }
}
