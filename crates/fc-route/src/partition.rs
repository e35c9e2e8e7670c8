//! Splitting one task set across several agents.

use fc_core::{Capacity, FleetResult, Point, Task, ensure_finite_point, task_id_at};

use crate::{Route, build_route_for};

/// Deal tasks to `agent_count` agents in round-robin order of their distance
/// from the depot (ties by task index).
///
/// Deterministic but not proximity-aware: agent 0 receives the 1st, (n+1)th,
/// (2n+1)th closest tasks and so on.  Zero agents yields no subsets.
pub fn partition_tasks(
    tasks:       &[Point],
    agent_count: usize,
    depot:       Point,
) -> FleetResult<Vec<Vec<Task>>> {
    ensure_finite_point("depot", depot)?;
    for &p in tasks {
        ensure_finite_point("task position", p)?;
    }
    if agent_count == 0 {
        return Ok(Vec::new());
    }

    let mut order: Vec<usize> = (0..tasks.len()).collect();
    order.sort_by(|&a, &b| {
        depot
            .distance(tasks[a])
            .total_cmp(&depot.distance(tasks[b]))
            .then(a.cmp(&b))
    });

    let mut subsets: Vec<Vec<Task>> = vec![Vec::new(); agent_count];
    for (rank, &i) in order.iter().enumerate() {
        subsets[rank % agent_count].push(Task::new(task_id_at(i)?, tasks[i]));
    }
    Ok(subsets)
}

/// Partition `tasks` across `agent_count` agents and route each subset
/// independently.  Agents with no tasks get the one-waypoint route `[depot]`.
pub fn plan_fleet_routes(
    depot:       Point,
    tasks:       &[Point],
    agent_count: usize,
    capacity:    Capacity,
) -> FleetResult<Vec<Route>> {
    partition_tasks(tasks, agent_count, depot)?
        .iter()
        .map(|subset| build_route_for(depot, subset, capacity))
        .collect()
}
