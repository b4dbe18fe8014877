use thiserror::Error;
use tsc_core::{CoreError, Direction};

#[derive(Debug, Error)]
pub enum TrafficError {
    #[error("lane {0} must discharge at least one vehicle per tick")]
    ZeroCapacity(Direction),

    #[error("arrival rate for {direction} must be in [0, 1], got {rate}")]
    InvalidRate { direction: Direction, rate: f64 },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type TrafficResult<T> = Result<T, TrafficError>;
