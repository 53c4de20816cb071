//! The player controller.

use npc_behavior::PlayerView;
use npc_core::Vec2;

pub const DEFAULT_PLAYER_SPEED: f32 = 2.5;

/// The player as the scene sees it: where it is and whether it carries a
/// weapon.  Input polling stays with the host, which feeds axis values into
/// [`apply_input`](Self::apply_input).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Player {
    pub position: Vec2,
    /// World units per second at full input deflection.
    pub speed:    f32,
    pub armed:    bool,
}

impl Default for Player {
    fn default() -> Self {
        Self { position: Vec2::ZERO, speed: DEFAULT_PLAYER_SPEED, armed: false }
    }
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self { position, ..Self::default() }
    }

    /// Move by one frame of directional input.
    ///
    /// Each axis is clamped to `[-1, 1]` and applied independently, so a
    /// diagonal input moves faster than a straight one.  Non-finite axis
    /// values count as no input.
    pub fn apply_input(&mut self, axis: Vec2, dt: f32) {
        let step = self.speed * dt;
        self.position.x += clamp_axis(axis.x) * step;
        self.position.y += clamp_axis(axis.y) * step;
    }

    /// Pick up the weapon.  There is no way to drop it again.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// What agents get to see each tick.
    #[inline]
    pub fn view(&self) -> PlayerView {
        PlayerView { position: self.position, armed: self.armed }
    }
}

fn clamp_axis(value: f32) -> f32 {
    if value.is_finite() { value.clamp(-1.0, 1.0) } else { 0.0 }
}
