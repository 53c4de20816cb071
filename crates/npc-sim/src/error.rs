use npc_behavior::BehaviorError;
use npc_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("missing scene reference: {0}")]
    MissingReference(&'static str),

    #[error("no agent with id {0}")]
    UnknownAgent(AgentId),

    #[error("agent construction failed: {0}")]
    Behavior(#[from] BehaviorError),
}

pub type SimResult<T> = Result<T, SimError>;
