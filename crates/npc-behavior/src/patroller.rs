//! Patroller: walks its route, attacks an unarmed player who comes close,
//! and runs once the player is armed.

use std::sync::Arc;

use npc_core::Vec2;
use npc_mobility::{Heading, WaypointSet};
use tracing::trace;

use crate::{
    AgentBehavior, AgentConfig, AgentKind, BehaviorResult, Condition, Event, Navigator,
    TickContext, Transition, next_mode,
};

/// Patroller modes without payload, the keys of [`PATROLLER_TRANSITIONS`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PatrollerMode {
    Patrolling,
    Attacking,
    Fleeing,
}

impl PatrollerMode {
    pub fn name(self) -> &'static str {
        match self {
            PatrollerMode::Patrolling => "Patrolling",
            PatrollerMode::Attacking  => "Attacking",
            PatrollerMode::Fleeing    => "Fleeing",
        }
    }
}

/// Full patroller state; see [`ForagerState`][crate::ForagerState] for the
/// meaning of `waypoint_locked`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PatrollerState {
    Patrolling { waypoint_locked: bool },
    Attacking,
    Fleeing,
}

impl Default for PatrollerState {
    fn default() -> Self {
        PatrollerState::enter(PatrollerMode::Patrolling)
    }
}

impl PatrollerState {
    pub fn enter(mode: PatrollerMode) -> Self {
        match mode {
            PatrollerMode::Patrolling => PatrollerState::Patrolling { waypoint_locked: false },
            PatrollerMode::Attacking  => PatrollerState::Attacking,
            PatrollerMode::Fleeing    => PatrollerState::Fleeing,
        }
    }

    pub fn mode(self) -> PatrollerMode {
        match self {
            PatrollerState::Patrolling { .. } => PatrollerMode::Patrolling,
            PatrollerState::Attacking         => PatrollerMode::Attacking,
            PatrollerState::Fleeing           => PatrollerMode::Fleeing,
        }
    }
}

/// Rows are scanned in order: an armed player beats distance in `Attacking`.
pub const PATROLLER_TRANSITIONS: [Transition<PatrollerMode>; 4] = [
    Transition { from: PatrollerMode::Patrolling, when: Condition::PlayerNear,  to: PatrollerMode::Attacking },
    Transition { from: PatrollerMode::Attacking,  when: Condition::PlayerArmed, to: PatrollerMode::Fleeing },
    Transition { from: PatrollerMode::Attacking,  when: Condition::PlayerClear, to: PatrollerMode::Patrolling },
    Transition { from: PatrollerMode::Fleeing,    when: Condition::PlayerClear, to: PatrollerMode::Patrolling },
];

// ── Patroller ─────────────────────────────────────────────────────────────────

/// A guarding agent.  Build with [`Patroller::builder`].
#[derive(Debug, Clone)]
pub struct Patroller {
    nav:   Navigator,
    state: PatrollerState,
}

impl Patroller {
    pub fn builder(config: AgentConfig) -> PatrollerBuilder {
        PatrollerBuilder::new(config)
    }

    #[inline]
    pub fn state(&self) -> PatrollerState {
        self.state
    }

    #[inline]
    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }
}

impl AgentBehavior for Patroller {
    fn kind(&self) -> AgentKind {
        AgentKind::Patroller
    }

    fn tick(&mut self, ctx: &TickContext) -> Vec<Event> {
        let mut events = Vec::new();

        if self.state == (PatrollerState::Patrolling { waypoint_locked: false }) {
            self.nav.lock_nearest(ctx.player.position);
            self.state = PatrollerState::Patrolling { waypoint_locked: true };
        }

        let current = self.state.mode();
        let senses = self.nav.senses(&ctx.player);
        if let Some(next) = next_mode(&PATROLLER_TRANSITIONS, current, &senses) {
            self.state = PatrollerState::enter(next);
            events.push(Event::ModeChanged { from: current.name(), to: next.name() });
            return events;
        }

        let tuning = *self.nav.tuning();
        match current {
            PatrollerMode::Patrolling => {
                if let Some(reached) = self.nav.advance_if_arrived() {
                    trace!(waypoint = reached, "patroller reached waypoint");
                    events.push(Event::WaypointReached { index: reached });
                }
                self.nav.seek_current(ctx.dt);
            }
            PatrollerMode::Attacking => {
                self.nav.evade(ctx.player.position, tuning.forage_speed, ctx.dt, Heading::Toward);
            }
            // A patroller moves at forage_speed in every mode; flee_speed is
            // read by foragers only.
            PatrollerMode::Fleeing => {
                self.nav.evade(ctx.player.position, tuning.forage_speed, ctx.dt, Heading::Away);
            }
        }
        events
    }

    fn position(&self) -> Vec2 {
        self.nav.position()
    }

    fn state_name(&self) -> &'static str {
        self.state.mode().name()
    }

    fn waypoint_index(&self) -> usize {
        self.nav.waypoint_index()
    }
}

// ── PatrollerBuilder ──────────────────────────────────────────────────────────

/// Fluent builder for [`Patroller`].  The spawn position defaults to the
/// first waypoint.
pub struct PatrollerBuilder {
    config:    AgentConfig,
    spawn:     Option<Vec2>,
    waypoints: Option<Arc<WaypointSet>>,
}

impl PatrollerBuilder {
    pub fn new(config: AgentConfig) -> Self {
        Self { config, spawn: None, waypoints: None }
    }

    pub fn spawn_at(mut self, position: Vec2) -> Self {
        self.spawn = Some(position);
        self
    }

    pub fn shared_waypoints(mut self, waypoints: Arc<WaypointSet>) -> Self {
        self.waypoints = Some(waypoints);
        self
    }

    pub fn build(self) -> BehaviorResult<Patroller> {
        let tuning = self.config.tuning()?;
        let waypoints = match self.waypoints {
            Some(shared) => shared,
            None => self.config.waypoint_set()?,
        };
        let spawn = self.spawn.unwrap_or_else(|| waypoints.position(0));
        Ok(Patroller {
            nav:   Navigator::new(spawn, waypoints, tuning),
            state: PatrollerState::default(),
        })
    }
}
