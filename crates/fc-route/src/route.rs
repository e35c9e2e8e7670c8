//! Ordered waypoint sequences.

use fc_core::{Capacity, Point, TaskId};

/// What an agent does on reaching a waypoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaypointKind {
    /// Unload (or start / finish) at the depot.  No dwell.
    Depot,
    /// Pick up the given task.
    Task(TaskId),
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub position: Point,
    pub kind:     WaypointKind,
}

impl Waypoint {
    #[inline]
    pub fn depot(position: Point) -> Self {
        Self { position, kind: WaypointKind::Depot }
    }

    #[inline]
    pub fn task(id: TaskId, position: Point) -> Self {
        Self { position, kind: WaypointKind::Task(id) }
    }

    /// The task claimed here, if any.
    #[inline]
    pub fn task_id(&self) -> Option<TaskId> {
        match self.kind {
            WaypointKind::Task(id) => Some(id),
            WaypointKind::Depot    => None,
        }
    }
}

/// An ordered list of waypoints.
///
/// Routes produced by [`crate::build_route`] start and end at the depot; a
/// route handed in from elsewhere via [`Route::new`] may have any shape,
/// including none at all (which the kinematic model rejects).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    waypoints: Vec<Waypoint>,
}

impl Route {
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    #[inline]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Waypoint positions in visiting order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.waypoints.iter().map(|w| w.position)
    }

    /// Number of task waypoints.
    pub fn task_count(&self) -> usize {
        self.waypoints.iter().filter(|w| w.task_id().is_some()).count()
    }

    /// Task ids in visiting order.
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.waypoints.iter().filter_map(Waypoint::task_id).collect()
    }

    /// Length of the whole route, closing depot leg included.
    pub fn path_length(&self) -> f64 {
        leg_lengths(&self.waypoints)
    }

    /// Length up to and including the last task waypoint.
    ///
    /// This excludes the trailing depot leg, so it is the figure comparable
    /// with the event-driven dispatcher's distance, which only charges a depot
    /// return when capacity forces one.
    pub fn walk_length(&self) -> f64 {
        match self.waypoints.iter().rposition(|w| w.task_id().is_some()) {
            Some(last) => leg_lengths(&self.waypoints[..=last]),
            None => 0.0,
        }
    }

    /// Runs of task ids between consecutive depot visits, empty runs omitted.
    pub fn batches(&self) -> Vec<Vec<TaskId>> {
        let mut batches = Vec::new();
        let mut current = Vec::new();
        for wp in &self.waypoints {
            match wp.kind {
                WaypointKind::Task(id) => current.push(id),
                WaypointKind::Depot => {
                    if !current.is_empty() {
                        batches.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            batches.push(current);
        }
        batches
    }

    /// `true` if no batch exceeds `capacity`.
    pub fn respects(&self, capacity: Capacity) -> bool {
        match capacity.limit() {
            None        => true,
            Some(limit) => self.batches().iter().all(|b| b.len() <= limit as usize),
        }
    }
}

fn leg_lengths(waypoints: &[Waypoint]) -> f64 {
    waypoints
        .windows(2)
        .map(|w| w[0].position.distance(w[1].position))
        .sum()
}
