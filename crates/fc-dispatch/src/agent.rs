//! Per-agent dispatch state and the fixed-size fleet that owns it.

use fc_core::{AgentId, FleetError, FleetResult, Point};

/// Mutable state of one agent during an event-driven run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentRecord {
    pub id: AgentId,

    /// Where the agent will be once its current leg completes.
    pub position: Point,

    /// Time until the agent can accept its next assignment.  Never negative.
    pub time_to_free: f64,

    /// Total distance travelled, depot legs included.
    pub distance: f64,

    /// Total time spent travelling.
    pub busy_time: f64,

    /// Pickups carried since the last depot visit.
    pub load: u32,

    /// Tasks claimed over the whole run.
    pub tasks_claimed: u32,
}

impl AgentRecord {
    /// An idle, empty agent standing at `depot`.
    pub fn at_depot(id: AgentId, depot: Point) -> Self {
        Self {
            id,
            position:      depot,
            time_to_free:  0.0,
            distance:      0.0,
            busy_time:     0.0,
            load:          0,
            tasks_claimed: 0,
        }
    }

    /// Add a leg of `distance` travelled at `speed` to this agent's books and
    /// move it to `to`.
    pub(crate) fn travel(&mut self, to: Point, distance: f64, speed: f64) -> f64 {
        let travel_time = distance / speed;
        self.time_to_free += travel_time;
        self.busy_time    += travel_time;
        self.distance     += distance;
        self.position      = to;
        travel_time
    }
}

/// An ordered, fixed-size collection of homogeneous agents.
///
/// Indexed by `AgentId`; the length never changes after construction.
#[derive(Clone, Debug, Default)]
pub struct Fleet {
    pub agents: Vec<AgentRecord>,
}

impl Fleet {
    /// `count` agents, all idle at `depot`.
    ///
    /// # Errors
    ///
    /// [`FleetError::InvalidParameter`] if `count` exceeds the `AgentId` range.
    pub fn at_depot(count: usize, depot: Point) -> FleetResult<Self> {
        let agents = (0..count)
            .map(|i| {
                AgentId::from_index(i)
                    .map(|id| AgentRecord::at_depot(id, depot))
                    .ok_or_else(|| {
                        FleetError::InvalidParameter(format!("fleet of {count} agents is too large"))
                    })
            })
            .collect::<FleetResult<Vec<_>>>()?;
        Ok(Self { agents })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&AgentRecord> {
        self.agents.get(id.index())
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: AgentId) -> Option<&mut AgentRecord> {
        self.agents.get_mut(id.index())
    }

    /// The agent that frees up first, lowest id on ties.  `None` for an
    /// empty fleet.
    pub fn next_free(&self) -> Option<AgentId> {
        let mut best: Option<&AgentRecord> = None;
        for agent in &self.agents {
            match best {
                Some(b) if agent.time_to_free >= b.time_to_free => {}
                _ => best = Some(agent),
            }
        }
        best.map(|a| a.id)
    }

    /// Move every agent forward by `dt` in lockstep.
    pub fn advance(&mut self, dt: f64) {
        for agent in &mut self.agents {
            agent.time_to_free = (agent.time_to_free - dt).max(0.0);
        }
    }

    /// Longest outstanding leg across the fleet; `0.0` when all are idle.
    pub fn max_time_to_free(&self) -> f64 {
        self.agents
            .iter()
            .map(|a| a.time_to_free)
            .fold(0.0, f64::max)
    }

    /// Sum of every agent's travelled distance.
    pub fn total_distance(&self) -> f64 {
        self.agents.iter().map(|a| a.distance).sum()
    }
}
