//! Ordered, cyclic waypoint sets and the selection helpers agents use on them.

use npc_core::Vec2;

use crate::{MobilityError, MobilityResult};

/// An ordered, non-empty sequence of waypoint positions.
///
/// Agents never own a `WaypointSet`; they share one through an `Arc` and keep
/// their own cyclic index into it.  Construction rejects empty and non-finite
/// input, so every index in `0..len()` always refers to a usable position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WaypointSet {
    points: Vec<Vec2>,
}

impl WaypointSet {
    /// Validate and wrap `points`.
    ///
    /// # Errors
    ///
    /// [`MobilityError::EmptyWaypoints`] if `points` is empty, or
    /// [`MobilityError::NonFiniteWaypoint`] if any coordinate is NaN/infinite.
    pub fn new(points: Vec<Vec2>) -> MobilityResult<Self> {
        if points.is_empty() {
            return Err(MobilityError::EmptyWaypoints);
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(MobilityError::NonFiniteWaypoint { index });
        }
        Ok(Self { points })
    }

    /// Number of waypoints.  Always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; construction rejects empty input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Position of waypoint `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.  Indices produced by this module never are.
    #[inline]
    pub fn position(&self, index: usize) -> Vec2 {
        self.points[index]
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vec2] {
        &self.points
    }

    /// The index after `index`, wrapping to 0 past the end.
    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.points.len()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WaypointSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let points = Vec::<Vec2>::deserialize(deserializer)?;
        WaypointSet::new(points).map_err(serde::de::Error::custom)
    }
}

/// Index of the waypoint nearest to `reference`.
///
/// Linear scan with a strict `<` comparison, so ties resolve to the lowest
/// index.
pub fn closest_waypoint(reference: Vec2, waypoints: &WaypointSet) -> usize {
    let mut lowest_distance = f32::INFINITY;
    let mut lowest_index = 0;
    for (i, &point) in waypoints.as_slice().iter().enumerate() {
        let distance = reference.distance(point);
        if distance < lowest_distance {
            lowest_distance = distance;
            lowest_index = i;
        }
    }
    lowest_index
}

/// `true` if `position` is strictly inside `threshold` of waypoint `index`.
#[inline]
pub fn has_arrived(position: Vec2, waypoints: &WaypointSet, index: usize, threshold: f32) -> bool {
    position.distance(waypoints.position(index)) < threshold
}

/// Advance the cyclic `index` if `position` has reached waypoint `index`.
///
/// Returns `(index + 1) % len` when the distance is below `threshold`,
/// otherwise `index` unchanged.
pub fn advance_if_arrived(
    position:  Vec2,
    waypoints: &WaypointSet,
    index:     usize,
    threshold: f32,
) -> usize {
    if has_arrived(position, waypoints, index, threshold) {
        waypoints.next_index(index)
    } else {
        index
    }
}

/// Edge-trigger guard for arrival rewards.
///
/// The latch holds the indices of waypoints that were credited and that the
/// agent is still inside.  A held index is not credited again until the agent
/// leaves its threshold, so an agent parked on a single-waypoint route is
/// credited once, while two waypoints closer together than the threshold
/// still count as two arrivals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrivalLatch {
    held: Vec<usize>,
}

impl ArrivalLatch {
    pub const fn new() -> Self {
        Self { held: Vec::new() }
    }

    /// Re-open every held waypoint whose threshold `position` has left.
    pub fn release_if_clear(&mut self, position: Vec2, waypoints: &WaypointSet, threshold: f32) {
        self.held.retain(|&index| has_arrived(position, waypoints, index, threshold));
    }

    /// Try to credit an arrival at waypoint `index`.
    ///
    /// Returns `true` (and holds `index`) if it was open; `false` if this
    /// arrival was already credited.
    pub fn try_consume(&mut self, index: usize) -> bool {
        if self.held.contains(&index) {
            return false;
        }
        self.held.push(index);
        true
    }

    #[inline]
    pub fn is_held(&self, index: usize) -> bool {
        self.held.contains(&index)
    }
}
