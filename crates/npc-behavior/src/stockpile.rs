//! The shared resource stockpile and the storage point foragers drop into.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use npc_core::Vec2;

/// Distance from a storage point within which a forager drops its load.
pub const DEFAULT_DROP_RADIUS: f32 = 1.0;

/// Cross-agent resource accumulator.
///
/// Cloning yields another handle to the same counter.  Deposits are a single
/// `fetch_add`, so foragers depositing in the same step (including from
/// different threads under npc-sim's `parallel` feature) never lose updates.
#[derive(Debug, Clone, Default)]
pub struct Stockpile(Arc<AtomicU64>);

impl Stockpile {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stockpile that starts with `total` already stored.
    pub fn with_total(total: u64) -> Self {
        Self(Arc::new(AtomicU64::new(total)))
    }

    /// Add `amount` and return the new total.
    pub fn deposit(&self, amount: u32) -> u64 {
        let amount = u64::from(amount);
        self.0.fetch_add(amount, Ordering::AcqRel) + amount
    }

    /// Current total.
    pub fn total(&self) -> u64 {
        self.0.load(Ordering::Acquire)
    }

    /// `true` if both handles share the same counter.
    pub fn same_as(&self, other: &Stockpile) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A fixed drop-off location for one or more foragers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoragePoint {
    pub position: Vec2,
    /// Drop-off happens strictly inside this distance.
    pub radius:   f32,
}

impl StoragePoint {
    pub fn new(position: Vec2) -> Self {
        Self { position, radius: DEFAULT_DROP_RADIUS }
    }

    #[inline]
    pub fn in_reach(&self, position: Vec2) -> bool {
        position.distance(self.position) < self.radius
    }
}
