//! Fluent builder for constructing a [`Sim`].

use npc_behavior::{AgentBehavior, ForagerBuilder, PatrollerBuilder, Stockpile};
use npc_core::{AgentId, SimConfig};

use crate::{Player, Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — step length, total ticks, seed, …
/// - [`Player`] via [`.player(p)`](Self::player)
///
/// # Agents
///
/// | Method                    | Notes                                           |
/// |---------------------------|-------------------------------------------------|
/// | `.spawn_forager(b)?`      | Wires the scene stockpile into the builder      |
/// | `.spawn_patroller(b)?`    |                                                 |
/// | `.agent(a)`               | Any prebuilt [`AgentBehavior`]                  |
///
/// Agents get consecutive `AgentId`s in the order they are added.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .player(Player::new(Vec2::new(0.0, -4.0)))
///     .spawn_forager(Forager::builder(rocks).storage(storage))?
///     .spawn_patroller(Patroller::builder(guard))?
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:    SimConfig,
    player:    Option<Player>,
    stockpile: Stockpile,
    agents:    Vec<Box<dyn AgentBehavior>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            player:    None,
            stockpile: Stockpile::new(),
            agents:    Vec::new(),
        }
    }

    pub fn player(mut self, player: Player) -> Self {
        self.player = Some(player);
        self
    }

    /// The scene's shared stockpile, for wiring agents built elsewhere.
    pub fn stockpile(&self) -> &Stockpile {
        &self.stockpile
    }

    /// The id the next added agent will get.
    pub fn next_id(&self) -> AgentId {
        AgentId(self.agents.len() as u32)
    }

    pub fn agent<A: AgentBehavior>(mut self, agent: A) -> Self {
        self.agents.push(Box::new(agent));
        self
    }

    /// Build a forager that deposits into this scene's stockpile and add it.
    pub fn spawn_forager(self, forager: ForagerBuilder) -> SimResult<Self> {
        let forager = forager.stockpile(self.stockpile.clone()).build()?;
        Ok(self.agent(forager))
    }

    pub fn spawn_patroller(self, patroller: PatrollerBuilder) -> SimResult<Self> {
        let patroller = patroller.build()?;
        Ok(self.agent(patroller))
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate().map_err(|e| SimError::Config(e.to_string()))?;
        let player = self.player.ok_or(SimError::MissingReference("player"))?;
        if !(player.speed.is_finite() && player.speed > 0.0) {
            return Err(SimError::Config(format!(
                "player speed must be positive, got {}",
                player.speed
            )));
        }
        if u32::try_from(self.agents.len()).is_err() {
            return Err(SimError::Config(format!("too many agents: {}", self.agents.len())));
        }

        let active = vec![true; self.agents.len()];
        Ok(Sim {
            clock:     self.config.make_clock(),
            config:    self.config,
            player,
            agents:    self.agents,
            active,
            stockpile: self.stockpile,
            outcome:   None,
        })
    }
}
