//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert `FleetError` into
//! them via `#[from]`, or return it directly.  All validation happens at the
//! entry of an operation, before any state is mutated.

use thiserror::Error;

use crate::{Point, TaskId};

/// The top-level error type for `fc-core` and a common base for sub-crates.
#[derive(Debug, Error, PartialEq)]
pub enum FleetError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("malformed route: {0}")]
    MalformedRoute(String),

    #[error("{0} has already been claimed")]
    TaskAlreadyClaimed(TaskId),

    #[error("{0} not found")]
    TaskNotFound(TaskId),

    #[error("{0} appears more than once in the task set")]
    DuplicateTask(TaskId),
}

/// Shorthand result type for all `fc-*` crates.
pub type FleetResult<T> = Result<T, FleetError>;

/// Reject zero, negative, and non-finite values for a strictly positive
/// parameter such as a speed or an acceleration.
pub fn ensure_positive(name: &str, value: f64) -> FleetResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FleetError::InvalidParameter(format!(
            "{name} must be a positive finite number, got {value}"
        )))
    }
}

/// Reject points with NaN or infinite coordinates.
pub fn ensure_finite_point(name: &str, point: Point) -> FleetResult<Point> {
    if point.is_finite() {
        Ok(point)
    } else {
        Err(FleetError::InvalidParameter(format!(
            "{name} has non-finite coordinates {point:?}"
        )))
    }
}
