//! Dispatch observer trait for progress reporting and data collection.

use fc_core::AgentId;

use crate::Assignment;

/// Callbacks invoked by [`Dispatcher::run`][crate::Dispatcher::run] at each
/// decision point.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait DispatchObserver {
    /// Called after a task has been claimed by an agent.
    fn on_assign(&mut self, _clock: f64, _assignment: &Assignment) {}

    /// Called when a capacity-triggered depot return is scheduled.  `arrival`
    /// is the global time at which the agent will be back at the depot.
    fn on_depot_return(&mut self, _agent: AgentId, _arrival: f64) {}

    /// Called once after the pool is exhausted.
    fn on_finish(&mut self, _completion_time: f64, _total_distance: f64) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
