//! `npc-sim` — scene tick loop for the npc agent-behavior framework.
//!
//! # Step
//!
//! ```text
//! if paused: nothing happens
//! ① Context   — snapshot the Player into one TickContext for all agents.
//! ② Agents    — AgentBehavior::tick for every active agent
//!               (parallel with the `parallel` feature).
//! ③ Report    — forward events to the observer in ascending AgentId order;
//!               snapshot every `output_interval_ticks`.
//! ④ Clock     — advance tick and elapsed time by dt.
//! ```
//!
//! Between steps the host moves the [`Player`], and calls
//! [`Sim::deactivate`] / [`Sim::declare_defeat`] from its collision
//! handling.  Either outcome pauses the scene.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Ticks agents on Rayon's thread pool.                   |
//! | `serde`    | Serde derives on `Player`.                             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use npc_behavior::{AgentConfig, Forager, StoragePoint};
//! use npc_core::{SimConfig, Vec2};
//! use npc_sim::{NoopObserver, Player, SimBuilder};
//!
//! let rocks = AgentConfig::with_waypoints(vec![Vec2::new(0.0, 0.0), Vec2::new(6.0, 0.0)]);
//! let mut sim = SimBuilder::new(SimConfig::default())
//!     .player(Player::new(Vec2::new(0.0, -8.0)))
//!     .spawn_forager(Forager::builder(rocks).storage(StoragePoint::new(Vec2::ZERO)))?
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod player;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use player::Player;
pub use sim::{AgentSnapshot, DECEASED, GameOutcome, Sim};
