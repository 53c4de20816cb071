use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MobilityError {
    #[error("waypoint set must contain at least one waypoint")]
    EmptyWaypoints,

    #[error("waypoint {index} is not a finite position")]
    NonFiniteWaypoint { index: usize },
}

pub type MobilityResult<T> = Result<T, MobilityError>;
