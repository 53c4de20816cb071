//! Plain data row types written by output backends.

/// One agent's displayable state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotRow {
    pub tick:      u64,
    pub agent:     u32,
    pub kind:      &'static str,
    /// Mode name, or `"Deceased"`.
    pub state:     &'static str,
    pub x:         f32,
    pub y:         f32,
    /// `None` for kinds that carry nothing.
    pub resources: Option<u32>,
    /// Scene stockpile total at this tick.
    pub stockpile: u64,
}

/// One line of the event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub tick:   u64,
    /// `None` for scene-level events such as the outcome.
    pub agent:  Option<u32>,
    pub event:  &'static str,
    pub detail: String,
}
