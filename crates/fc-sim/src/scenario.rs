//! Scenario configuration and its fluent builder.

use std::collections::HashSet;

use fc_core::{Capacity, Point, ensure_finite_point};
use fc_dispatch::DispatchParams;
use fc_kinematics::MotionParams;

use crate::{SimError, SimResult};

/// One homogeneous fleet taking part in a comparison.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetSpec {
    pub name:        String,
    pub agent_count: usize,
    pub capacity:    Capacity,
    pub motion:      MotionParams,
}

impl FleetSpec {
    pub fn new(name: impl Into<String>, agent_count: usize, capacity: Capacity, motion: MotionParams) -> Self {
        Self {
            name: name.into(),
            agent_count,
            capacity,
            motion,
        }
    }

    /// Uniform speed used by the event-driven dispatcher: cruise speed for
    /// ground agents, top speed for aerial ones.
    #[inline]
    pub fn dispatch_speed(&self) -> f64 {
        self.motion.category.nominal_speed()
    }

    pub fn dispatch_params(&self, depot: Point) -> DispatchParams {
        DispatchParams {
            speed:    self.dispatch_speed(),
            capacity: self.capacity,
            depot,
        }
    }
}

/// A depot, the task locations of one day, and the fleets to compare on them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub depot:  Point,
    pub tasks:  Vec<Point>,
    pub fleets: Vec<FleetSpec>,
}

impl Scenario {
    /// Check a scenario assembled by hand or deserialized from JSON.
    ///
    /// Rejects non-finite coordinates, invalid motion parameters, a missing
    /// or blank fleet name, and duplicate fleet names.
    pub fn validate(&self) -> SimResult<()> {
        ensure_finite_point("depot", self.depot)?;
        for (i, &task) in self.tasks.iter().enumerate() {
            ensure_finite_point(&format!("task {i}"), task)?;
        }
        if self.fleets.is_empty() {
            return Err(SimError::Config("scenario has no fleets".into()));
        }
        let mut seen = HashSet::new();
        for fleet in &self.fleets {
            if fleet.name.trim().is_empty() {
                return Err(SimError::Config("fleet name must not be blank".into()));
            }
            if !seen.insert(fleet.name.as_str()) {
                return Err(SimError::Config(format!("duplicate fleet name {:?}", fleet.name)));
            }
            fleet.motion.validate()?;
            fleet.dispatch_params(self.depot).validate()?;
        }
        Ok(())
    }

    pub fn fleet_index(&self, name: &str) -> Option<usize> {
        self.fleets.iter().position(|f| f.name == name)
    }
}

/// Fluent builder for [`Scenario`].
///
/// # Example
///
/// ```rust,ignore
/// let scenario = ScenarioBuilder::new(Point::ORIGIN)
///     .tasks(points)
///     .fleet(FleetSpec::new("walkers", 5, Capacity::limited(20)?, MotionParams::ground(1.4)))
///     .fleet(FleetSpec::new("drones", 3, Capacity::limited(1)?, MotionParams::aerial(16.0)))
///     .build()?;
/// ```
pub struct ScenarioBuilder {
    depot:  Point,
    tasks:  Vec<Point>,
    fleets: Vec<FleetSpec>,
}

impl ScenarioBuilder {
    pub fn new(depot: Point) -> Self {
        Self {
            depot,
            tasks:  Vec::new(),
            fleets: Vec::new(),
        }
    }

    pub fn task(mut self, position: Point) -> Self {
        self.tasks.push(position);
        self
    }

    pub fn tasks(mut self, positions: impl IntoIterator<Item = Point>) -> Self {
        self.tasks.extend(positions);
        self
    }

    pub fn fleet(mut self, fleet: FleetSpec) -> Self {
        self.fleets.push(fleet);
        self
    }

    /// Validate everything once and return the scenario.
    pub fn build(self) -> SimResult<Scenario> {
        let scenario = Scenario {
            depot:  self.depot,
            tasks:  self.tasks,
            fleets: self.fleets,
        };
        scenario.validate()?;
        Ok(scenario)
    }
}
