//! Agent identifiers.
//!
//! An `AgentId` is the agent's slot in the simulation roster, handed out in
//! spawn order.  The inner integer is `pub`; use `.index()` when indexing a
//! roster `Vec`.

use std::fmt;

/// Index of an agent in the simulation roster, assigned at spawn.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
