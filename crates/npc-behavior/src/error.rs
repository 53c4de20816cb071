use npc_mobility::MobilityError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BehaviorError {
    #[error("invalid waypoints: {0}")]
    Waypoints(#[from] MobilityError),

    #[error("{name} must be positive and finite, got {value}")]
    InvalidParameter {
        name:  &'static str,
        value: f32,
    },

    #[error("missing required reference: {0}")]
    MissingReference(&'static str),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
