use thiserror::Error;
use tsc_control::PolicyError;
use tsc_core::CoreError;
use tsc_traffic::TrafficError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Core(#[from] CoreError),

    #[error("traffic setup error: {0}")]
    Traffic(#[from] TrafficError),

    #[error("policy error: {0}")]
    Policy(#[from] PolicyError),
}

pub type SimResult<T> = Result<T, SimError>;
