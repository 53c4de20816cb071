//! `npc-output` — simulation output writers for the npc agent-behavior framework.
//!
//! | Backend | Files created                    |
//! |---------|----------------------------------|
//! | CSV     | `snapshots.csv`, `events.csv`    |
//!
//! `snapshots.csv` has one row per agent every `output_interval_ticks`
//! (`tick,agent,kind,state,x,y,resources,stockpile`); `events.csv` logs mode
//! changes, arrivals, deposits, deactivations and the outcome
//! (`tick,agent,event,detail`).
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `npc_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use npc_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EventRow, SnapshotRow};
pub use writer::OutputWriter;
