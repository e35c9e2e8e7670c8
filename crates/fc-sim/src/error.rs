use fc_core::FleetError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("scenario configuration error: {0}")]
    Config(String),

    #[error("fleet index {index} out of range ({count} fleets configured)")]
    UnknownFleet {
        index: usize,
        count: usize,
    },

    #[error(transparent)]
    Fleet(#[from] FleetError),
}

pub type SimResult<T> = Result<T, SimError>;
