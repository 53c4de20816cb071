//! Agent events: what an agent reports back from a tick.

/// Something observable that happened to an agent during its tick.
///
/// Events are returned by [`AgentBehavior::tick`][crate::AgentBehavior::tick]
/// and forwarded by npc-sim to observers (UI text, sprite swaps, CSV logs).
/// Position is not an event; it is read directly after the tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The agent switched mode.  No movement happened this tick.
    ModeChanged {
        from: &'static str,
        to:   &'static str,
    },

    /// The agent reached waypoint `index` (once per arrival, not per tick).
    WaypointReached { index: usize },

    /// A forager collected `amount` resources and now holds `held`.
    Collected { amount: u32, held: u32 },

    /// A forager emptied `amount` resources into the stockpile, bringing it
    /// to `stockpile_total`.
    Deposited { amount: u32, stockpile_total: u64 },
}

impl Event {
    /// Short label, useful for CSV column values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ModeChanged { .. }     => "mode_changed",
            Event::WaypointReached { .. } => "waypoint_reached",
            Event::Collected { .. }       => "collected",
            Event::Deposited { .. }       => "deposited",
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::ModeChanged { from, to } => write!(f, "{from} -> {to}"),
            Event::WaypointReached { index } => write!(f, "waypoint {index}"),
            Event::Collected { amount, held } => write!(f, "+{amount} (holding {held})"),
            Event::Deposited { amount, stockpile_total } => {
                write!(f, "{amount} deposited (stockpile {stockpile_total})")
            }
        }
    }
}
