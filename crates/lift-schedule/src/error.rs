use lift_core::SimTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("call script parse error: {0}")]
    Parse(String),

    #[error("cannot schedule an event at {at}: clock is already at {now}")]
    PastEvent { at: SimTime, now: SimTime },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
