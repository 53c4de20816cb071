//! Shared movement state for every agent kind.

use std::sync::Arc;

use npc_core::Vec2;
use npc_mobility::{
    ArrivalLatch, Heading, WaypointSet, closest_waypoint, flee_from, has_arrived, seek_toward,
};

use crate::{PlayerView, Senses, Tuning};

/// An agent's position, route cursor and tuning, plus the seek/flee moves
/// both state machines are built from.
#[derive(Debug, Clone)]
pub struct Navigator {
    position:  Vec2,
    waypoints: Arc<WaypointSet>,
    index:     usize,
    latch:     ArrivalLatch,
    tuning:    Tuning,
}

impl Navigator {
    pub fn new(position: Vec2, waypoints: Arc<WaypointSet>, tuning: Tuning) -> Self {
        Self {
            position,
            waypoints,
            index: 0,
            latch: ArrivalLatch::new(),
            tuning,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Index of the waypoint currently being sought.  Always `< waypoints().len()`.
    #[inline]
    pub fn waypoint_index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn current_target(&self) -> Vec2 {
        self.waypoints.position(self.index)
    }

    #[inline]
    pub fn waypoints(&self) -> &Arc<WaypointSet> {
        &self.waypoints
    }

    #[inline]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn senses(&self, player: &PlayerView) -> Senses {
        Senses::new(self.position, player, self.tuning.proximity)
    }

    /// Retarget to the waypoint nearest `reference` (the player).
    pub fn lock_nearest(&mut self, reference: Vec2) {
        self.index = closest_waypoint(reference, &self.waypoints);
    }

    /// Move on to the next waypoint if the current one has been reached.
    ///
    /// Advancing is level-triggered: the cursor moves every tick the agent
    /// is inside the arrival threshold.  The return value is edge-triggered:
    /// `Some(index)` only for the first tick inside waypoint `index`, so
    /// callers can credit each arrival exactly once.
    pub fn advance_if_arrived(&mut self) -> Option<usize> {
        let threshold = self.tuning.arrival_threshold;
        self.latch.release_if_clear(self.position, &self.waypoints, threshold);
        if !has_arrived(self.position, &self.waypoints, self.index, threshold) {
            return None;
        }
        let reached = self.index;
        self.index = self.waypoints.next_index(reached);
        self.latch.try_consume(reached).then_some(reached)
    }

    /// One tick of seeking the current waypoint at `forage_speed`.
    pub fn seek_current(&mut self, dt: f32) {
        self.position = seek_toward(
            self.position,
            self.current_target(),
            self.tuning.forage_speed,
            dt,
            self.tuning.arrival_threshold,
        );
    }

    /// One tick of moving relative to `threat` while it is within proximity.
    pub fn evade(&mut self, threat: Vec2, speed: f32, dt: f32, heading: Heading) {
        self.position = flee_from(self.position, threat, speed, dt, self.tuning.proximity, heading);
    }
}
