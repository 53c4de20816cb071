//! The `Sim` struct and its tick loop.

use npc_behavior::{AgentBehavior, AgentKind, Event, Stockpile, TickContext};
use npc_core::{AgentId, SimClock, SimConfig, Vec2};
use tracing::{debug, info};

use crate::{Player, SimError, SimObserver, SimResult};

/// Shown in place of a mode name once an agent has been deactivated.
pub const DECEASED: &str = "Deceased";

/// How a scene ended.  Once set the scene is paused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    /// A patroller was taken out.
    Victory,
    /// The unarmed player was caught.
    Defeat,
}

impl GameOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            GameOutcome::Victory => "victory",
            GameOutcome::Defeat  => "defeat",
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A read-only view of one agent, handed out for snapshots and UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshot {
    pub id:        AgentId,
    pub kind:      AgentKind,
    /// Mode name, or [`DECEASED`].
    pub state:     &'static str,
    pub position:  Vec2,
    pub resources: Option<u32>,
    pub active:    bool,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The scene runner.
///
/// `Sim` owns the player, the agent roster and the shared stockpile, and
/// drives one step per call to [`step`](Self::step):
///
/// 1. **Context**: snapshot the player into a [`TickContext`] shared by
///    every agent, so tick order cannot change what an agent sees.
/// 2. **Agents** (optionally parallel with the `parallel` feature): tick
///    every active agent once.
/// 3. **Report** (sequential, ascending `AgentId` for determinism): forward
///    each agent's events to the observer, then snapshot on the output
///    interval.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (step length, total ticks, seed, …).
    pub config: SimConfig,

    /// Tick counter, elapsed time and the pause flag.
    pub clock: SimClock,

    /// The player.  The host moves it between steps.
    pub player: Player,

    pub(crate) agents:    Vec<Box<dyn AgentBehavior>>,
    pub(crate) active:    Vec<bool>,
    pub(crate) stockpile: Stockpile,
    pub(crate) outcome:   Option<GameOutcome>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run fixed `config.dt_secs` steps until `config.end_tick()` or until
    /// the scene is paused by an outcome.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() && !self.is_paused() {
            self.step(self.config.dt_secs, observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` fixed steps from the current position (ignores
    /// `end_tick`).  Steps taken while paused do nothing.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(self.config.dt_secs, observer)?;
        }
        Ok(())
    }

    /// Advance the scene by one step of `dt` seconds.
    ///
    /// A paused scene is left untouched: no agent ticks, no hooks fire and
    /// the clock stands still.
    pub fn step<O: SimObserver>(&mut self, dt: f32, observer: &mut O) -> SimResult<()> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::Config(format!("dt must be positive, got {dt}")));
        }
        if self.is_paused() {
            return Ok(());
        }

        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let ctx = TickContext::new(now, dt, self.player.view());
        let reports = self.tick_agents(&ctx);
        let ticked = reports.len();

        for (agent, events) in reports {
            if events.is_empty() {
                continue;
            }
            for event in &events {
                if let Event::ModeChanged { from, to } = event {
                    debug!(%agent, from, to, "mode changed");
                }
            }
            observer.on_events(now, agent, &events);
        }

        observer.on_tick_end(now, ticked);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, self);
        }

        self.clock.advance(dt);
        Ok(())
    }

    /// Remove `agent` from play.
    ///
    /// A deactivated agent is never ticked again and reports [`DECEASED`] as
    /// its state.  Deactivating a patroller wins the scene.  Calling this on
    /// an already inactive agent does nothing.
    pub fn deactivate<O: SimObserver>(&mut self, agent: AgentId, observer: &mut O) -> SimResult<()> {
        let slot = self.active.get_mut(agent.index()).ok_or(SimError::UnknownAgent(agent))?;
        if !*slot {
            return Ok(());
        }
        *slot = false;

        let kind = self.agents[agent.index()].kind();
        let now = self.clock.current_tick;
        info!(%agent, %kind, tick = now.0, "agent deactivated");
        observer.on_deactivated(now, agent, kind);

        if kind == AgentKind::Patroller {
            self.settle(GameOutcome::Victory, observer);
        }
        Ok(())
    }

    /// The unarmed player was caught: the scene is lost.
    pub fn declare_defeat<O: SimObserver>(&mut self, observer: &mut O) {
        self.settle(GameOutcome::Defeat, observer);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|&&on| on).count()
    }

    pub fn agent(&self, agent: AgentId) -> SimResult<&dyn AgentBehavior> {
        self.agents
            .get(agent.index())
            .map(|a| a.as_ref())
            .ok_or(SimError::UnknownAgent(agent))
    }

    pub fn is_active(&self, agent: AgentId) -> SimResult<bool> {
        self.active.get(agent.index()).copied().ok_or(SimError::UnknownAgent(agent))
    }

    /// The agent's mode name, or [`DECEASED`] once deactivated.
    pub fn state_name(&self, agent: AgentId) -> SimResult<&'static str> {
        Ok(self.snapshot(agent)?.state)
    }

    pub fn snapshot(&self, agent: AgentId) -> SimResult<AgentSnapshot> {
        let behavior = self.agent(agent)?;
        Ok(describe(agent, behavior, self.active[agent.index()]))
    }

    /// Every agent, active or not, in `AgentId` order.
    pub fn snapshots(&self) -> impl Iterator<Item = AgentSnapshot> + '_ {
        self.agents
            .iter()
            .zip(&self.active)
            .enumerate()
            .map(|(i, (behavior, &active))| describe(AgentId(i as u32), behavior.as_ref(), active))
    }

    #[inline]
    pub fn stockpile(&self) -> &Stockpile {
        &self.stockpile
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.clock.paused
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Tick every active agent and collect its events.
    ///
    /// With the `parallel` Cargo feature, agents tick on Rayon's thread
    /// pool.  Each agent only touches its own state (plus the atomic
    /// stockpile), and the result is ordered by `AgentId` either way.
    fn tick_agents(&mut self, ctx: &TickContext) -> Vec<(AgentId, Vec<Event>)> {
        let agents = &mut self.agents;
        let active = &self.active;

        #[cfg(not(feature = "parallel"))]
        {
            agents
                .iter_mut()
                .zip(active)
                .enumerate()
                .filter_map(|(i, (agent, &on))| on.then(|| (AgentId(i as u32), agent.tick(ctx))))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let mut reports: Vec<(AgentId, Vec<Event>)> = agents
                .par_iter_mut()
                .zip(active.par_iter())
                .enumerate()
                .filter_map(|(i, (agent, &on))| on.then(|| (AgentId(i as u32), agent.tick(ctx))))
                .collect();
            reports.sort_unstable_by_key(|(agent, _)| *agent);
            reports
        }
    }

    /// Record the first outcome and pause the scene.  Later outcomes are
    /// ignored.
    fn settle<O: SimObserver>(&mut self, outcome: GameOutcome, observer: &mut O) {
        if self.outcome.is_some() {
            return;
        }
        self.outcome = Some(outcome);
        self.clock.pause();
        let now = self.clock.current_tick;
        info!(%outcome, tick = now.0, stockpile = self.stockpile.total(), "scene settled");
        observer.on_outcome(now, outcome);
    }
}

fn describe(id: AgentId, behavior: &dyn AgentBehavior, active: bool) -> AgentSnapshot {
    AgentSnapshot {
        id,
        kind:      behavior.kind(),
        state:     if active { behavior.state_name() } else { DECEASED },
        position:  behavior.position(),
        resources: behavior.resources(),
        active,
    }
}
