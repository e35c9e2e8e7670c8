//! Frame-by-frame playback of one fleet over its planned routes.

use fc_core::{AgentId, Point, TaskId};
use fc_dispatch::NoopObserver;
use fc_kinematics::{Arrival, Playback, TripStats};
use fc_route::plan_fleet_routes;
use log::debug;

use crate::{Scenario, SimError, SimResult};

/// Callbacks invoked by [`Animation::run`] once per frame.
///
/// Every hook defaults to doing nothing.
///
/// # Example — frame recorder
///
/// ```rust,ignore
/// struct Frames(Vec<(f64, Vec<Point>)>);
///
/// impl PlaybackObserver for Frames {
///     fn on_frame(&mut self, time: f64, positions: &[Point]) {
///         self.0.push((time, positions.to_vec()));
///     }
/// }
/// ```
pub trait PlaybackObserver {
    /// Called after every frame with each agent's position, indexed by
    /// `AgentId`.
    fn on_frame(&mut self, _time: f64, _positions: &[Point]) {}

    /// Called when an agent reaches a task waypoint.
    fn on_pickup(&mut self, _time: f64, _agent: AgentId, _task: TaskId) {}

    /// Called once when the run stops, finished or not.
    fn on_finish(&mut self, _time: f64, _stats: &TripStats) {}
}

impl PlaybackObserver for NoopObserver {}

/// How an [`Animation::run`] ended.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationSummary {
    /// Simulated seconds played so far.
    pub elapsed:  f64,
    /// `false` when `max_time` cut the run short.
    pub finished: bool,
    pub stats:    TripStats,
}

/// A fleet's partitioned routes under kinematic playback.
pub struct Animation {
    fleet:    String,
    time:     f64,
    playback: Playback,
}

impl Animation {
    /// Partition the scenario's tasks over fleet `index`, build one route per
    /// agent and attach the fleet's motion law.
    pub fn for_fleet(scenario: &Scenario, index: usize) -> SimResult<Self> {
        let fleet = scenario.fleets.get(index).ok_or(SimError::UnknownFleet {
            index,
            count: scenario.fleets.len(),
        })?;
        let routes = plan_fleet_routes(
            scenario.depot,
            &scenario.tasks,
            fleet.agent_count,
            fleet.capacity,
        )?;
        let playback = Playback::new(routes, fleet.motion)?;
        debug!("animation for fleet {:?}: {} routes", fleet.name, playback.len());
        Ok(Self {
            fleet:    fleet.name.clone(),
            time:     0.0,
            playback,
        })
    }

    pub fn fleet_name(&self) -> &str {
        &self.fleet
    }

    /// Simulated seconds played so far.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn is_finished(&self) -> bool {
        self.playback.all_done()
    }

    /// Play one frame of `dt` seconds, as measured by the caller.  Unusable
    /// `dt` values leave the animation untouched.
    pub fn step(&mut self, dt: f64) -> Vec<(AgentId, Arrival)> {
        if !(dt.is_finite() && dt > 0.0) {
            return Vec::new();
        }
        self.time += dt;
        self.playback.tick(dt)
    }

    /// Play fixed frames of `dt` until every agent is done or `max_time`
    /// seconds have been played.  The last frame is shortened to land on
    /// `max_time` exactly.
    pub fn run<O: PlaybackObserver>(
        &mut self,
        dt:       f64,
        max_time: f64,
        observer: &mut O,
    ) -> SimResult<AnimationSummary> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::Config(format!("frame time must be positive, got {dt}")));
        }
        if max_time.is_nan() || max_time < 0.0 {
            return Err(SimError::Config(format!("max_time must be non-negative, got {max_time}")));
        }

        while !self.playback.all_done() && self.time < max_time {
            let frame = dt.min(max_time - self.time);
            for (agent, arrival) in self.step(frame) {
                if let Some(task) = arrival.waypoint.task_id() {
                    observer.on_pickup(self.time, agent, task);
                }
            }
            observer.on_frame(self.time, &self.playback.positions());
        }

        let summary = AnimationSummary {
            elapsed:  self.time,
            finished: self.playback.all_done(),
            stats:    self.playback.stats(),
        };
        observer.on_finish(summary.elapsed, &summary.stats);
        debug!(
            "animation for fleet {:?} stopped at {:.2} s (finished: {})",
            self.fleet, summary.elapsed, summary.finished
        );
        Ok(summary)
    }
}
