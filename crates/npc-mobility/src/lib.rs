//! `npc-mobility` — waypoint selection and per-tick movement primitives.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                          |
//! |--------------|-------------------------------------------------------------------|
//! | [`waypoint`] | `WaypointSet`, `closest_waypoint`, `advance_if_arrived`, `ArrivalLatch` |
//! | [`steering`] | `seek_toward`, `flee_from`, `Heading`                             |
//! | [`error`]    | `MobilityError`, `MobilityResult<T>`                              |
//!
//! # Movement model (continuous, per-tick displacement)
//!
//! Every primitive is a pure function of the current position, a target or
//! threat point, a speed and the step length `dt`:
//!
//! 1. `seek_toward` moves at `speed * dt` along the unit direction to the
//!    target and snaps onto it once inside the arrival threshold.
//! 2. `flee_from` moves along the unit direction away from (or, with
//!    `Heading::Toward`, towards) a threat while it stays inside the
//!    proximity radius, and does nothing otherwise.
//!
//! Agents own their position; the primitives return the new one.

pub mod error;
pub mod steering;
pub mod waypoint;


pub use error::{MobilityError, MobilityResult};
pub use steering::{Heading, flee_from, seek_toward};
pub use waypoint::{ArrivalLatch, WaypointSet, advance_if_arrived, closest_waypoint, has_arrived};
