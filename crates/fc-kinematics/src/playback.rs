//! `Playback` — a whole fleet stepping along its routes.

use fc_core::{AgentId, FleetResult, Point};
use fc_route::Route;
use log::debug;

use crate::{Arrival, KinematicState, MotionParams, TripStats};

/// One route and one kinematic state per agent, all sharing the same
/// [`MotionParams`].
///
/// `routes[i]` and `states[i]` belong to `AgentId(i)`.
#[derive(Clone, Debug)]
pub struct Playback {
    params: MotionParams,
    routes: Vec<Route>,
    states: Vec<KinematicState>,
}

impl Playback {
    /// Attach one agent to each route.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for bad `params`; `MalformedRoute` if any route is
    /// empty.
    pub fn new(routes: Vec<Route>, params: MotionParams) -> FleetResult<Self> {
        let states = routes
            .iter()
            .map(|route| KinematicState::attach(route, &params))
            .collect::<FleetResult<Vec<_>>>()?;
        debug!("playback attached {} agents", states.len());
        Ok(Self { params, routes, states })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn states(&self) -> &[KinematicState] {
        &self.states
    }

    pub fn state(&self, agent: AgentId) -> Option<&KinematicState> {
        self.states.get(agent.index())
    }

    /// Advance every agent by the same `dt`.  Returns the waypoints reached
    /// during this tick in agent order.
    pub fn tick(&mut self, dt: f64) -> Vec<(AgentId, Arrival)> {
        let params = &self.params;
        self.routes
            .iter()
            .zip(self.states.iter_mut())
            .enumerate()
            .filter_map(|(i, (route, state))| {
                state
                    .advance(route, dt, params)
                    .map(|arrival| (AgentId(i as u32), arrival))
            })
            .collect()
    }

    /// Advance a single agent by the time elapsed since its own last update.
    /// Unknown agents are ignored.
    pub fn tick_agent(&mut self, agent: AgentId, dt: f64) -> Option<Arrival> {
        let i = agent.index();
        let route = self.routes.get(i)?;
        self.states.get_mut(i)?.advance(route, dt, &self.params)
    }

    /// `true` once every agent has reached its final waypoint.
    pub fn all_done(&self) -> bool {
        self.states.iter().all(KinematicState::is_done)
    }

    pub fn positions(&self) -> Vec<Point> {
        self.states.iter().map(|s| s.position).collect()
    }

    /// Fleet-wide totals: summed distance and items, longest elapsed time.
    pub fn stats(&self) -> TripStats {
        let mut total = TripStats::default();
        for state in &self.states {
            total.merge(&state.stats);
        }
        total
    }
}
