//! Side-by-side dispatch of every fleet in a scenario.

use fc_core::TaskPool;
use fc_dispatch::{Dispatcher, NoopObserver, Trajectory};
use log::info;

use crate::{FleetSpec, Scenario, SimResult};

/// Outcome of dispatching one fleet over the scenario's tasks.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetReport {
    pub name:            String,
    pub agent_count:     usize,
    pub completion_time: f64,
    pub total_distance:  f64,
    /// Agents that claimed at least one task.
    pub agents_used:     usize,
    pub trajectories:    Vec<Trajectory>,
}

/// One report per fleet, in scenario order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    pub reports: Vec<FleetReport>,
}

impl Comparison {
    /// The fleet with the smallest completion time; the earlier fleet wins a
    /// tie.
    pub fn fastest(&self) -> Option<&FleetReport> {
        self.reports
            .iter()
            .reduce(|best, r| if r.completion_time < best.completion_time { r } else { best })
    }

    pub fn report(&self, name: &str) -> Option<&FleetReport> {
        self.reports.iter().find(|r| r.name == name)
    }
}

/// Dispatch every fleet of `scenario` independently.
///
/// Runs share nothing but the read-only scenario, so with the `parallel`
/// feature they execute on Rayon's pool; report order is the same either way.
///
/// # Errors
///
/// Whatever [`Scenario::validate`] rejects.
pub fn compare(scenario: &Scenario) -> SimResult<Comparison> {
    scenario.validate()?;

    #[cfg(not(feature = "parallel"))]
    let reports = scenario
        .fleets
        .iter()
        .map(|fleet| dispatch_fleet(scenario, fleet))
        .collect::<SimResult<Vec<_>>>()?;

    #[cfg(feature = "parallel")]
    let reports = {
        use rayon::prelude::*;

        scenario
            .fleets
            .par_iter()
            .map(|fleet| dispatch_fleet(scenario, fleet))
            .collect::<SimResult<Vec<_>>>()?
    };

    Ok(Comparison { reports })
}

fn dispatch_fleet(scenario: &Scenario, fleet: &FleetSpec) -> SimResult<FleetReport> {
    let dispatcher = Dispatcher::new(
        fleet.agent_count,
        fleet.dispatch_params(scenario.depot),
        TaskPool::from_points(&scenario.tasks)?,
    )?;
    let outcome = dispatcher.run(&mut NoopObserver);
    let agents_used = outcome.agents_used();
    info!(
        "fleet {:?}: {} agents, completion {:.2}, distance {:.2}",
        fleet.name, fleet.agent_count, outcome.completion_time, outcome.total_distance
    );
    Ok(FleetReport {
        name:            fleet.name.clone(),
        agent_count:     fleet.agent_count,
        completion_time: outcome.completion_time,
        total_distance:  outcome.total_distance,
        agents_used,
        trajectories:    outcome.trajectories,
    })
}
