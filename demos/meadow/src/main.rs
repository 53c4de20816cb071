//! meadow — headless demo for the npc agent-behavior framework.
//!
//! Two foragers gather rocks and stones into a shared stockpile while a
//! patroller walks the meadow's edge.  A scripted player wanders, picks up
//! the sword and goes after the patroller.
//!
//! ```text
//! meadow [scene.json] [output-dir]
//! ```
//!
//! Without a scene file the built-in scene is used; output goes to
//! `output/meadow` unless a directory is given.  Set `RUST_LOG=debug` to see
//! every mode change and deposit.

mod contacts;
mod scene;
mod script;


use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use npc_behavior::{AgentKind, Event};
use npc_core::{AgentId, Tick};
use npc_output::{CsvWriter, OutputWriter, SimOutputObserver};
use npc_sim::{GameOutcome, Sim, SimObserver};

use scene::Scene;
use script::Wanderer;

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    event_rows:    usize,
    mode_changes:  usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, event_rows: 0, mode_changes: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_events(&mut self, tick: Tick, agent: AgentId, events: &[Event]) {
        self.event_rows += events.len();
        self.mode_changes += events
            .iter()
            .filter(|e| matches!(e, Event::ModeChanged { .. }))
            .count();
        self.inner.on_events(tick, agent, events);
    }

    fn on_snapshot(&mut self, tick: Tick, sim: &Sim) {
        self.snapshot_rows += sim.agent_count();
        self.inner.on_snapshot(tick, sim);
    }

    fn on_deactivated(&mut self, tick: Tick, agent: AgentId, kind: AgentKind) {
        self.event_rows += 1;
        self.inner.on_deactivated(tick, agent, kind);
    }

    fn on_outcome(&mut self, tick: Tick, outcome: GameOutcome) {
        self.event_rows += 1;
        self.inner.on_outcome(tick, outcome);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── Run loop ─────────────────────────────────────────────────────────────────

/// Drive `sim` with the scripted player until the scene ends or settles.
fn play<O: SimObserver>(sim: &mut Sim, scene: &Scene, observer: &mut O) -> Result<()> {
    let dt = sim.config.dt_secs;
    let mut wanderer = Wanderer::new(sim.config.seed, scene.sword, scene.grab_sword_after_tick);

    while sim.clock.current_tick < sim.config.end_tick() && !sim.is_paused() {
        let axis = wanderer.input(sim);
        sim.player.apply_input(axis, dt);
        sim.step(dt, observer)?;
        contacts::resolve(sim, scene.sword, scene.touch_radius, observer)?;
    }
    observer.on_sim_end(sim.clock.current_tick);
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let scene = match args.next() {
        Some(path) => Scene::load(Path::new(&path))?,
        None => Scene::default(),
    };
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("output/meadow"));

    println!("=== meadow — npc agent behaviors ===");
    println!(
        "Foragers: {}  |  Patrollers: {}  |  Ticks: {} × {:.4} s  |  Seed: {}",
        scene.foragers.len(),
        scene.patrollers.len(),
        scene.sim.total_ticks,
        scene.sim.dt_secs,
        scene.sim.seed,
    );
    println!();

    let mut sim = scene.build()?;

    let writer = CsvWriter::new(&out_dir)?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    let t0 = Instant::now();
    play(&mut sim, &scene, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Simulation finished at {} in {:.3} s", sim.clock, elapsed.as_secs_f64());
    println!("  {}/snapshots.csv : {} rows", out_dir.display(), obs.snapshot_rows);
    println!("  {}/events.csv    : {} rows ({} mode changes)", out_dir.display(), obs.event_rows, obs.mode_changes);
    println!();

    println!("{:<8} {:<10} {:<11} {:>8} {:>8} {:>10}", "Agent", "Kind", "State", "x", "y", "Resources");
    println!("{}", "-".repeat(60));
    for s in sim.snapshots() {
        println!(
            "{:<8} {:<10} {:<11} {:>8.2} {:>8.2} {:>10}",
            s.id.0,
            s.kind.as_str(),
            s.state,
            s.position.x,
            s.position.y,
            s.resources.map(|r| r.to_string()).unwrap_or_else(|| "-".into()),
        );
    }
    println!();
    println!("Stockpile: {}", sim.stockpile().total());
    match sim.outcome() {
        Some(GameOutcome::Victory) => println!("Victory!"),
        Some(GameOutcome::Defeat) => println!("Defeat. Restart?"),
        None => println!("Time's up."),
    }

    Ok(())
}
