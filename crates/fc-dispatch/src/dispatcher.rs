//! The event-driven greedy dispatcher.

use fc_core::{
    AgentId, Capacity, FleetResult, Point, TaskId, TaskPool, ensure_finite_point, ensure_positive,
};
use log::{debug, info, trace};

use crate::{DispatchObserver, Fleet, NoopObserver, Segment, SegmentKind, Trajectory};

/// Fleet-wide parameters of one dispatch run.  Agents are homogeneous.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchParams {
    /// Travel speed of every agent, distance units per time unit.
    pub speed:    f64,
    pub capacity: Capacity,
    pub depot:    Point,
}

impl DispatchParams {
    /// Check every field; called once by [`Dispatcher::new`].
    pub fn validate(&self) -> FleetResult<()> {
        ensure_positive("speed", self.speed)?;
        ensure_finite_point("depot", self.depot)?;
        Ok(())
    }
}

/// The capacity-triggered return leg that followed a pickup.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DepotReturn {
    pub distance:    f64,
    pub travel_time: f64,
}

/// One decision made by [`Dispatcher::step`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Assignment {
    pub agent:        AgentId,
    pub task:         TaskId,
    /// Global time at which the agent set off.
    pub start_time:   f64,
    pub distance:     f64,
    pub travel_time:  f64,
    pub depot_return: Option<DepotReturn>,
}

/// Result of a complete run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchOutcome {
    /// Time at which the last leg in flight (pickup or depot return) ends.
    pub completion_time: f64,
    /// Distance summed over all agents.
    pub total_distance:  f64,
    pub agents:          Vec<crate::AgentRecord>,
    /// One trajectory per agent, indexed by `AgentId`.
    pub trajectories:    Vec<Trajectory>,
}

impl DispatchOutcome {
    /// Number of agents that claimed at least one task.
    pub fn agents_used(&self) -> usize {
        self.agents.iter().filter(|a| a.tasks_claimed > 0).count()
    }
}

/// Owns the fleet and task pool of one run and advances them decision by
/// decision.
///
/// # Example
///
/// ```
/// use fc_core::{Capacity, Point, TaskPool};
/// use fc_dispatch::{DispatchParams, Dispatcher, NoopObserver};
///
/// let tasks = TaskPool::from_points(&[Point::new(3.0, 0.0), Point::new(3.0, 4.0)]).unwrap();
/// let params = DispatchParams { speed: 1.0, capacity: Capacity::Unlimited, depot: Point::ORIGIN };
/// let outcome = Dispatcher::new(1, params, tasks).unwrap().run(&mut NoopObserver);
/// assert_eq!(outcome.total_distance, 7.0);
/// ```
pub struct Dispatcher {
    params:       DispatchParams,
    fleet:        Fleet,
    pool:         TaskPool,
    trajectories: Vec<Trajectory>,
    /// Global clock: time of the most recent decision point.
    clock:        f64,
}

impl Dispatcher {
    /// Validate inputs and place `agent_count` idle agents at the depot.
    ///
    /// Nothing is mutated if validation fails.
    pub fn new(agent_count: usize, params: DispatchParams, pool: TaskPool) -> FleetResult<Self> {
        params.validate()?;
        for task in pool.tasks() {
            ensure_finite_point("task position", task.position)?;
        }

        let fleet = Fleet::at_depot(agent_count, params.depot)?;
        let trajectories = fleet
            .agents
            .iter()
            .map(|a| Trajectory::new(a.id, params.depot))
            .collect();

        Ok(Self { params, fleet, pool, trajectories, clock: 0.0 })
    }

    #[inline]
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    #[inline]
    pub fn pool(&self) -> &TaskPool {
        &self.pool
    }

    #[inline]
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// `true` once no further decision can be made.
    pub fn is_finished(&self) -> bool {
        self.pool.is_empty() || self.fleet.is_empty()
    }

    /// Completion time if the run stopped now: the clock plus the longest
    /// leg still in flight.
    pub fn completion_time(&self) -> f64 {
        self.clock + self.fleet.max_time_to_free()
    }

    /// Make one decision: free the earliest agent and give it the nearest task.
    ///
    /// Returns `None` when the pool is exhausted or the fleet is empty.
    pub fn step(&mut self) -> Option<Assignment> {
        if self.is_finished() {
            return None;
        }

        // ── Select and advance ────────────────────────────────────────────
        let agent_id = self.fleet.next_free()?;
        let wait = self.fleet.get(agent_id)?.time_to_free;
        self.clock += wait;
        self.fleet.advance(wait);

        let speed    = self.params.speed;
        let capacity = self.params.capacity;
        let depot    = self.params.depot;
        let clock    = self.clock;

        let agent = self.fleet.get_mut(agent_id)?;
        agent.time_to_free = 0.0;
        let from = agent.position;

        // ── Assign nearest task ───────────────────────────────────────────
        let (task, to, distance) = self.pool.claim_nearest(from)?;
        let travel_time = agent.travel(to, distance, speed);
        agent.load          += 1;
        agent.tasks_claimed += 1;

        let trajectory = &mut self.trajectories[agent_id.index()];
        trajectory.segments.push(Segment {
            start_time: clock,
            end_time:   clock + travel_time,
            from,
            to,
            kind:       SegmentKind::Pickup(task),
        });
        debug!(
            "t={clock:.3}: {agent_id} -> {task} at {to}, {distance:.3} away (load {})",
            agent.load
        );

        // ── Capacity-triggered unload ─────────────────────────────────────
        let mut depot_return = None;
        if capacity.is_full(agent.load) {
            let back = to.distance(depot);
            let back_time = agent.travel(depot, back, speed);
            agent.load = 0;
            trajectory.segments.push(Segment {
                start_time: clock + travel_time,
                end_time:   clock + travel_time + back_time,
                from:       to,
                to:         depot,
                kind:       SegmentKind::Return,
            });
            trace!("{agent_id} full, returning to depot ({back:.3})");
            depot_return = Some(DepotReturn { distance: back, travel_time: back_time });
        }

        Some(Assignment {
            agent: agent_id,
            task,
            start_time: clock,
            distance,
            travel_time,
            depot_return,
        })
    }

    /// Drain the pool, reporting every decision to `observer`.
    pub fn run<O: DispatchObserver>(mut self, observer: &mut O) -> DispatchOutcome {
        while let Some(assignment) = self.step() {
            observer.on_assign(self.clock, &assignment);
            if let Some(ret) = assignment.depot_return {
                let arrival = assignment.start_time + assignment.travel_time + ret.travel_time;
                observer.on_depot_return(assignment.agent, arrival);
            }
        }
        let outcome = self.finish();
        observer.on_finish(outcome.completion_time, outcome.total_distance);
        outcome
    }

    /// Stop here and report the outcome, draining legs still in flight.
    pub fn finish(self) -> DispatchOutcome {
        let completion_time = self.completion_time();
        let total_distance  = self.fleet.total_distance();
        info!(
            "dispatch finished: {} agents, {} tasks left, completion {completion_time:.3}, distance {total_distance:.3}",
            self.fleet.len(),
            self.pool.remaining(),
        );
        DispatchOutcome {
            completion_time,
            total_distance,
            agents: self.fleet.agents,
            trajectories: self.trajectories,
        }
    }
}

/// Run a complete dispatch: `agent_count` agents at `speed` starting from
/// `depot`, servicing every point in `tasks`.
///
/// Zero agents or an empty task set is a well-formed no-op with zero
/// completion time and distance.
///
/// # Errors
///
/// [`fc_core::FleetError::InvalidParameter`] for a non-positive or non-finite
/// speed, or non-finite depot / task coordinates.
pub fn run_dispatch(
    agent_count: usize,
    speed:       f64,
    capacity:    Capacity,
    depot:       Point,
    tasks:       &[Point],
) -> FleetResult<DispatchOutcome> {
    let params = DispatchParams { speed, capacity, depot };
    let dispatcher = Dispatcher::new(agent_count, params, TaskPool::from_points(tasks)?)?;
    Ok(dispatcher.run(&mut NoopObserver))
}
