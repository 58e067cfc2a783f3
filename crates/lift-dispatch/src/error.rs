use lift_core::{ElevatorId, FloorId, SimTime};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ElevatorError {
    #[error("{elevator} is in transit until {arrives_at}")]
    InTransit {
        elevator:   ElevatorId,
        arrives_at: SimTime,
    },

    #[error("{0} has no move in progress")]
    NotMoving(ElevatorId),
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("{floor} is out of range: building has {num_floors} floors")]
    InvalidFloor {
        floor:      FloorId,
        num_floors: u32,
    },

    #[error("building has no elevators")]
    NoElevators,

    #[error("{0} not found")]
    UnknownElevator(ElevatorId),

    #[error("elevator state error: {0}")]
    Elevator(#[from] ElevatorError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
