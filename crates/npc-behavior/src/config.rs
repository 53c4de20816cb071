//! Agent tuning and waypoint configuration.
//!
//! The same option set drives both agent kinds:
//!
//! | Option                  | Default | Meaning                                   |
//! |-------------------------|---------|-------------------------------------------|
//! | `forageSpeed`           | 1.5     | Speed while foraging, patrolling, chasing |
//! | `fleeSpeed`             | 2.0     | Speed while fleeing                       |
//! | `minDistanceToWaypoint` | 0.1     | Arrival threshold                         |
//! | `distanceToPlayer`      | 3.0     | Proximity threshold to the player         |
//! | `waypoints`             | —       | Ordered route, must be non-empty          |

use std::sync::Arc;

use npc_core::Vec2;
use npc_mobility::WaypointSet;

use crate::{BehaviorError, BehaviorResult};

pub const DEFAULT_FORAGE_SPEED: f32 = 1.5;
pub const DEFAULT_FLEE_SPEED: f32 = 2.0;
pub const DEFAULT_MIN_DISTANCE_TO_WAYPOINT: f32 = 0.1;
pub const DEFAULT_DISTANCE_TO_PLAYER: f32 = 3.0;

/// Construction-time configuration for a forager or patroller.
///
/// Deserializes from camelCase JSON with the `serde` feature; every scalar
/// falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AgentConfig {
    pub forage_speed:             f32,
    pub flee_speed:               f32,
    pub min_distance_to_waypoint: f32,
    pub distance_to_player:       f32,
    pub waypoints:                Vec<Vec2>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            forage_speed:             DEFAULT_FORAGE_SPEED,
            flee_speed:               DEFAULT_FLEE_SPEED,
            min_distance_to_waypoint: DEFAULT_MIN_DISTANCE_TO_WAYPOINT,
            distance_to_player:       DEFAULT_DISTANCE_TO_PLAYER,
            waypoints:                Vec::new(),
        }
    }
}

impl AgentConfig {
    /// Default tuning with the given route.
    pub fn with_waypoints(waypoints: Vec<Vec2>) -> Self {
        Self { waypoints, ..Self::default() }
    }

    /// Validate the scalar options.
    pub fn tuning(&self) -> BehaviorResult<Tuning> {
        Ok(Tuning {
            forage_speed:      positive("forageSpeed", self.forage_speed)?,
            flee_speed:        positive("fleeSpeed", self.flee_speed)?,
            arrival_threshold: positive("minDistanceToWaypoint", self.min_distance_to_waypoint)?,
            proximity:         positive("distanceToPlayer", self.distance_to_player)?,
        })
    }

    /// Validate the route and wrap it for sharing.
    pub fn waypoint_set(&self) -> BehaviorResult<Arc<WaypointSet>> {
        Ok(Arc::new(WaypointSet::new(self.waypoints.clone())?))
    }

    /// Validate everything at once.
    pub fn validate(&self) -> BehaviorResult<()> {
        self.tuning()?;
        self.waypoint_set()?;
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> BehaviorResult<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(BehaviorError::InvalidParameter { name, value })
    }
}

/// Validated scalar tuning.  Only obtainable through [`AgentConfig::tuning`],
/// so every field is positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub forage_speed:      f32,
    pub flee_speed:        f32,
    pub arrival_threshold: f32,
    pub proximity:         f32,
}
