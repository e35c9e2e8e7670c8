//! Per-category motion laws.

use fc_core::{FleetError, FleetResult, ensure_positive};

/// Walking pace of a ground collector, m/s.
pub const GROUND_CRUISE_SPEED: f64 = 1.4;
/// Fraction of cruise speed lost per second of walking.
pub const GROUND_FATIGUE_RATE: f64 = 0.0005;
/// Fatigue shed at every waypoint.
pub const GROUND_RECOVERY: f64 = 0.05;
/// Speed floor, m/s.
pub const GROUND_MIN_SPEED: f64 = 0.1;
pub const GROUND_PICKUP_SECS: f64 = 2.0;

pub const AERIAL_MAX_SPEED: f64 = 16.0;
pub const AERIAL_MAX_ACCEL: f64 = 2.0;
pub const AERIAL_PICKUP_SECS: f64 = 4.0;

/// Distance at which a waypoint counts as reached, m.
pub const ARRIVAL_TOLERANCE: f64 = 0.01;

/// The motion law of an agent category.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Scalar speed `cruise_speed · (1 − fatigue)`, floored at `min_speed`.
    /// Fatigue grows by `fatigue_rate` per second of travel (capped at 1) and
    /// drops by `recovery` at every waypoint.
    Ground {
        cruise_speed: f64,
        fatigue_rate: f64,
        recovery:     f64,
        min_speed:    f64,
    },
    /// Velocity vector accelerating toward the next waypoint at up to
    /// `max_accel`, with magnitude capped at `max_speed`.  Starts at rest.
    Aerial {
        max_speed: f64,
        max_accel: f64,
    },
}

impl Category {
    /// The speed an agent of this category sustains on a long leg.  The
    /// event-driven dispatcher uses it as its uniform speed.
    pub fn nominal_speed(&self) -> f64 {
        match *self {
            Category::Ground { cruise_speed, .. } => cruise_speed,
            Category::Aerial { max_speed, .. }    => max_speed,
        }
    }

    pub fn is_aerial(&self) -> bool {
        matches!(self, Category::Aerial { .. })
    }
}

/// Everything the kinematic model needs besides the route and Δt.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionParams {
    pub category:          Category,
    /// Dwell at each task waypoint, seconds.  Zero skips `PickingUp`.
    pub pickup_duration:   f64,
    pub arrival_tolerance: f64,
}

impl MotionParams {
    /// A ground collector walking at `cruise_speed` with default fatigue.
    pub fn ground(cruise_speed: f64) -> Self {
        Self {
            category: Category::Ground {
                cruise_speed,
                fatigue_rate: GROUND_FATIGUE_RATE,
                recovery:     GROUND_RECOVERY,
                min_speed:    GROUND_MIN_SPEED,
            },
            pickup_duration:   GROUND_PICKUP_SECS,
            arrival_tolerance: ARRIVAL_TOLERANCE,
        }
    }

    /// An aerial collector topping out at `max_speed`.
    pub fn aerial(max_speed: f64) -> Self {
        Self {
            category: Category::Aerial {
                max_speed,
                max_accel: AERIAL_MAX_ACCEL,
            },
            pickup_duration:   AERIAL_PICKUP_SECS,
            arrival_tolerance: ARRIVAL_TOLERANCE,
        }
    }

    pub fn with_pickup_duration(mut self, secs: f64) -> Self {
        self.pickup_duration = secs;
        self
    }

    pub fn with_arrival_tolerance(mut self, tolerance: f64) -> Self {
        self.arrival_tolerance = tolerance;
        self
    }

    /// Check every field for a usable value.
    pub fn validate(&self) -> FleetResult<()> {
        match self.category {
            Category::Ground { cruise_speed, fatigue_rate, recovery, min_speed } => {
                ensure_positive("cruise_speed", cruise_speed)?;
                ensure_positive("min_speed", min_speed)?;
                ensure_non_negative("fatigue_rate", fatigue_rate)?;
                ensure_non_negative("recovery", recovery)?;
            }
            Category::Aerial { max_speed, max_accel } => {
                ensure_positive("max_speed", max_speed)?;
                ensure_positive("max_accel", max_accel)?;
            }
        }
        ensure_non_negative("pickup_duration", self.pickup_duration)?;
        ensure_non_negative("arrival_tolerance", self.arrival_tolerance)?;
        Ok(())
    }
}

fn ensure_non_negative(name: &str, value: f64) -> FleetResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FleetError::InvalidParameter(format!(
            "{name} must be a non-negative finite number, got {value}"
        )))
    }
}
