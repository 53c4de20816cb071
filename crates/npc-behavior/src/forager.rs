//! Forager: collects resources along its route, drops them at a storage
//! point, and runs from the player.

use std::sync::Arc;

use npc_core::Vec2;
use npc_mobility::{Heading, WaypointSet};
use tracing::{debug, trace};

use crate::{
    AgentBehavior, AgentConfig, AgentKind, BehaviorError, BehaviorResult, Condition, Event,
    Navigator, Stockpile, StoragePoint, TickContext, Transition, next_mode,
};

/// Resources granted per waypoint arrival.
pub const RESOURCES_PER_ARRIVAL: u32 = 10;

/// Forager modes without payload, the keys of [`FORAGER_TRANSITIONS`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ForagerMode {
    Foraging,
    Fleeing,
}

impl ForagerMode {
    pub fn name(self) -> &'static str {
        match self {
            ForagerMode::Foraging => "Foraging",
            ForagerMode::Fleeing  => "Fleeing",
        }
    }
}

/// Full forager state.
///
/// `waypoint_locked` records whether the nearest waypoint has been selected
/// since `Foraging` was last entered; it lives in the variant so it cannot
/// outlive the mode it belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ForagerState {
    Foraging { waypoint_locked: bool },
    Fleeing,
}

impl Default for ForagerState {
    fn default() -> Self {
        ForagerState::enter(ForagerMode::Foraging)
    }
}

impl ForagerState {
    /// The state a freshly entered `mode` starts in.
    pub fn enter(mode: ForagerMode) -> Self {
        match mode {
            ForagerMode::Foraging => ForagerState::Foraging { waypoint_locked: false },
            ForagerMode::Fleeing  => ForagerState::Fleeing,
        }
    }

    pub fn mode(self) -> ForagerMode {
        match self {
            ForagerState::Foraging { .. } => ForagerMode::Foraging,
            ForagerState::Fleeing         => ForagerMode::Fleeing,
        }
    }
}

pub const FORAGER_TRANSITIONS: [Transition<ForagerMode>; 2] = [
    Transition { from: ForagerMode::Foraging, when: Condition::PlayerNear,  to: ForagerMode::Fleeing },
    Transition { from: ForagerMode::Fleeing,  when: Condition::PlayerClear, to: ForagerMode::Foraging },
];

// ── Forager ───────────────────────────────────────────────────────────────────

/// A resource-gathering agent.  Build with [`Forager::builder`].
#[derive(Debug, Clone)]
pub struct Forager {
    nav:       Navigator,
    state:     ForagerState,
    resources: u32,
    storage:   StoragePoint,
    stockpile: Stockpile,
}

impl Forager {
    pub fn builder(config: AgentConfig) -> ForagerBuilder {
        ForagerBuilder::new(config)
    }

    #[inline]
    pub fn state(&self) -> ForagerState {
        self.state
    }

    #[inline]
    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    #[inline]
    pub fn held(&self) -> u32 {
        self.resources
    }

    #[inline]
    pub fn storage(&self) -> StoragePoint {
        self.storage
    }

    #[inline]
    pub fn stockpile(&self) -> &Stockpile {
        &self.stockpile
    }

    fn forage(&mut self, dt: f32, events: &mut Vec<Event>) {
        if let Some(reached) = self.nav.advance_if_arrived() {
            self.resources = self.resources.saturating_add(RESOURCES_PER_ARRIVAL);
            trace!(waypoint = reached, held = self.resources, "forager reached waypoint");
            events.push(Event::WaypointReached { index: reached });
            events.push(Event::Collected { amount: RESOURCES_PER_ARRIVAL, held: self.resources });
        }

        self.nav.seek_current(dt);

        if self.resources > 0 && self.storage.in_reach(self.nav.position()) {
            let amount = std::mem::take(&mut self.resources);
            let stockpile_total = self.stockpile.deposit(amount);
            debug!(amount, stockpile_total, "forager deposited resources");
            events.push(Event::Deposited { amount, stockpile_total });
        }
    }
}

impl AgentBehavior for Forager {
    fn kind(&self) -> AgentKind {
        AgentKind::Forager
    }

    fn tick(&mut self, ctx: &TickContext) -> Vec<Event> {
        let mut events = Vec::new();

        if self.state == (ForagerState::Foraging { waypoint_locked: false }) {
            self.nav.lock_nearest(ctx.player.position);
            self.state = ForagerState::Foraging { waypoint_locked: true };
        }

        let current = self.state.mode();
        let senses = self.nav.senses(&ctx.player);
        if let Some(next) = next_mode(&FORAGER_TRANSITIONS, current, &senses) {
            self.state = ForagerState::enter(next);
            events.push(Event::ModeChanged { from: current.name(), to: next.name() });
            return events;
        }

        match current {
            ForagerMode::Foraging => self.forage(ctx.dt, &mut events),
            ForagerMode::Fleeing => {
                let speed = self.nav.tuning().flee_speed;
                self.nav.evade(ctx.player.position, speed, ctx.dt, Heading::Away);
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

    fn resources(&self) -> Option<u32> {
        Some(self.resources)
    }
}

// ── ForagerBuilder ────────────────────────────────────────────────────────────

/// Fluent builder for [`Forager`].
///
/// The storage point and stockpile are required; [`build`](Self::build)
/// fails fast if either is missing.  The spawn position defaults to the
/// first waypoint.
pub struct ForagerBuilder {
    config:    AgentConfig,
    spawn:     Option<Vec2>,
    waypoints: Option<Arc<WaypointSet>>,
    storage:   Option<StoragePoint>,
    stockpile: Option<Stockpile>,
    carrying:  u32,
}

impl ForagerBuilder {
    pub fn new(config: AgentConfig) -> Self {
        Self {
            config,
            spawn:     None,
            waypoints: None,
            storage:   None,
            stockpile: None,
            carrying:  0,
        }
    }

    pub fn spawn_at(mut self, position: Vec2) -> Self {
        self.spawn = Some(position);
        self
    }

    /// Use an already-validated route shared with other agents instead of
    /// `config.waypoints`.
    pub fn shared_waypoints(mut self, waypoints: Arc<WaypointSet>) -> Self {
        self.waypoints = Some(waypoints);
        self
    }

    pub fn storage(mut self, storage: StoragePoint) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn stockpile(mut self, stockpile: Stockpile) -> Self {
        self.stockpile = Some(stockpile);
        self
    }

    /// Start already holding `resources`.
    pub fn carrying(mut self, resources: u32) -> Self {
        self.carrying = resources;
        self
    }

    pub fn build(self) -> BehaviorResult<Forager> {
        let tuning = self.config.tuning()?;
        let waypoints = match self.waypoints {
            Some(shared) => shared,
            None => self.config.waypoint_set()?,
        };
        let storage = self.storage.ok_or(BehaviorError::MissingReference("storage point"))?;
        if !(storage.radius.is_finite() && storage.radius > 0.0) {
            return Err(BehaviorError::InvalidParameter { name: "storage radius", value: storage.radius });
        }
        let stockpile = self.stockpile.ok_or(BehaviorError::MissingReference("stockpile"))?;
        let spawn = self.spawn.unwrap_or_else(|| waypoints.position(0));

        Ok(Forager {
            nav: Navigator::new(spawn, waypoints, tuning),
            state: ForagerState::default(),
            resources: self.carrying,
            storage,
            stockpile,
        })
    }
}
