//! Collision glue: what happens when the player touches something.

use anyhow::Result;
use npc_behavior::AgentKind;
use npc_core::Vec2;
use npc_sim::{Sim, SimObserver};
use tracing::info;

/// Resolve this step's contacts.
///
/// Touching the sword arms the player.  An armed player takes out any agent
/// it touches; an unarmed player loses the scene on touching a patroller and
/// passes through foragers.
pub fn resolve<O: SimObserver>(sim: &mut Sim, sword: Vec2, radius: f32, observer: &mut O) -> Result<()> {
    if !sim.player.armed && sim.player.position.distance(sword) < radius {
        sim.player.arm();
        info!(tick = sim.clock.current_tick.0, "player picked up the sword");
    }

    let player = sim.player;
    let touched: Vec<_> = sim
        .snapshots()
        .filter(|s| s.active && s.position.distance(player.position) < radius)
        .map(|s| (s.id, s.kind))
        .collect();

    for (agent, kind) in touched {
        if player.armed {
            sim.deactivate(agent, observer)?;
        } else if kind == AgentKind::Patroller {
            sim.declare_defeat(observer);
            break;
        }
    }
    Ok(())
}
