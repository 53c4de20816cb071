//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use npc_behavior::{AgentKind, Event};
use npc_core::{AgentId, Tick};
use npc_sim::{GameOutcome, Sim, SimObserver};

use crate::row::{EventRow, SnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent snapshots and the event log to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  `run` does this on its own; call it after driving
    /// the sim with `step` or `run_ticks`.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn log(&mut self, row: EventRow) {
        let result = self.writer.write_events(std::slice::from_ref(&row));
        self.store_err(result);
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_events(&mut self, tick: Tick, agent: AgentId, events: &[Event]) {
        let rows: Vec<EventRow> = events
            .iter()
            .map(|e| EventRow {
                tick:   tick.0,
                agent:  Some(agent.0),
                event:  e.as_str(),
                detail: e.to_string(),
            })
            .collect();
        let result = self.writer.write_events(&rows);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, sim: &Sim) {
        let stockpile = sim.stockpile().total();
        let rows: Vec<SnapshotRow> = sim
            .snapshots()
            .map(|s| SnapshotRow {
                tick: tick.0,
                agent: s.id.0,
                kind: s.kind.as_str(),
                state: s.state,
                x: s.position.x,
                y: s.position.y,
                resources: s.resources,
                stockpile,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_deactivated(&mut self, tick: Tick, agent: AgentId, kind: AgentKind) {
        self.log(EventRow {
            tick:   tick.0,
            agent:  Some(agent.0),
            event:  "deactivated",
            detail: kind.as_str().to_owned(),
        });
    }

    fn on_outcome(&mut self, tick: Tick, outcome: GameOutcome) {
        self.log(EventRow {
            tick:   tick.0,
            agent:  None,
            event:  "outcome",
            detail: outcome.as_str().to_owned(),
        });
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
