//! `npc-behavior` — per-agent state machines and their shared plumbing.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`config`]     | `AgentConfig` (tuning + waypoints), `Tuning`                    |
//! | [`context`]    | `TickContext`, `PlayerView` — read-only per-tick inputs         |
//! | [`event`]      | `Event` — what an agent reports back from a tick                |
//! | [`transition`] | `Transition`, `Condition`, `Senses`, `next_mode`                |
//! | [`navigator`]  | `Navigator` — position + waypoint cursor + seek/flee            |
//! | [`stockpile`]  | `Stockpile` (atomic shared counter), `StoragePoint`             |
//! | [`forager`]    | `Forager`, `ForagerState`, `ForagerBuilder`                     |
//! | [`patroller`]  | `Patroller`, `PatrollerState`, `PatrollerBuilder`               |
//! | [`model`]      | `AgentBehavior` trait, `AgentKind`                              |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! Each agent is an explicit per-tick state machine.  A tick runs in three
//! steps:
//!
//! 1. **Entry**: a mode that selects its nearest waypoint does so once, the
//!    first tick after it is entered (`waypoint_locked` in the state payload).
//! 2. **Transition**: the agent's declarative table is scanned for a row
//!    matching the current mode whose [`Condition`] holds.  A match switches
//!    mode and ends the tick without movement.
//! 3. **Action**: otherwise the mode's action runs (seek, flee, chase,
//!    collect, deposit) and mutates the agent's own position and counters.
//!
//! Agents share nothing mutable except the [`Stockpile`], which is updated
//! with an atomic add so concurrent deposits never lose updates.

pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod forager;
pub mod model;
pub mod navigator;
pub mod patroller;
pub mod stockpile;
pub mod transition;

#[cfg(test)]
mod tests;

pub use config::{AgentConfig, Tuning};
pub use context::{PlayerView, TickContext};
pub use error::{BehaviorError, BehaviorResult};
pub use event::Event;
pub use forager::{FORAGER_TRANSITIONS, Forager, ForagerBuilder, ForagerMode, ForagerState};
pub use model::{AgentBehavior, AgentKind};
pub use navigator::Navigator;
pub use patroller::{PATROLLER_TRANSITIONS, Patroller, PatrollerBuilder, PatrollerMode, PatrollerState};
pub use stockpile::{Stockpile, StoragePoint};
pub use transition::{Condition, Senses, Transition, next_mode};
