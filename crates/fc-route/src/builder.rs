//! Batched greedy route construction.

use fc_core::{Capacity, FleetResult, Point, Task, TaskPool, ensure_finite_point};
use log::debug;

use crate::{Route, Waypoint};

/// Build a route over `tasks` (task `i` gets `TaskId(i)`).
///
/// See [`build_route_for`].
pub fn build_route(depot: Point, tasks: &[Point], capacity: Capacity) -> FleetResult<Route> {
    let tasks: Vec<Task> = TaskPool::from_points(tasks)?.tasks().to_vec();
    build_route_for(depot, &tasks, capacity)
}

/// Build a route over pre-identified tasks, keeping their ids.
///
/// Starting from the depot, repeatedly walks to the nearest outstanding task
/// until a batch of `capacity` tasks (or whatever remains) is collected, then
/// returns to the depot and starts the next batch from there.  The route
/// always ends at the depot; an empty task set yields `[depot]`.
///
/// # Errors
///
/// [`fc_core::FleetError::InvalidParameter`] if the depot or any task has
/// non-finite coordinates, [`fc_core::FleetError::DuplicateTask`] if two
/// tasks share an id.
pub fn build_route_for(depot: Point, tasks: &[Task], capacity: Capacity) -> FleetResult<Route> {
    ensure_finite_point("depot", depot)?;
    for task in tasks {
        ensure_finite_point("task position", task.position)?;
    }

    let mut pool = TaskPool::from_tasks(tasks.to_vec())?;
    let mut waypoints = Vec::with_capacity(pool.remaining() + 2);
    waypoints.push(Waypoint::depot(depot));

    while !pool.is_empty() {
        let mut at = depot;
        for _ in 0..capacity.batch_size(pool.remaining()) {
            let Some((id, position, _)) = pool.claim_nearest(at) else { break };
            waypoints.push(Waypoint::task(id, position));
            at = position;
        }
        waypoints.push(Waypoint::depot(depot));
    }

    let route = Route::new(waypoints);
    debug!(
        "built route: {} tasks in {} batches (capacity {capacity}), length {:.3}",
        route.task_count(),
        route.batches().len(),
        route.path_length(),
    );
    Ok(route)
}
