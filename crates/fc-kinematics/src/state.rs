//! Per-agent kinematic state and the single-tick transition.

use fc_core::{FleetError, FleetResult, Point};
use fc_route::{Route, Waypoint, WaypointKind};
use log::trace;

use crate::params::{Category, MotionParams};

/// What an agent is doing right now.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Moving toward `route[route_index + 1]`.
    Traveling,
    /// Dwelling at a task waypoint; position is frozen.
    PickingUp,
    /// Final waypoint reached.  Further ticks are no-ops.
    Done,
}

/// Running totals for one agent's trip.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripStats {
    /// Metres actually travelled.
    pub distance:        f64,
    /// Seconds spent not yet `Done` (travel plus pickup dwell).
    pub elapsed:         f64,
    pub items_collected: u32,
}

impl TripStats {
    /// Fold another agent's totals into these; `elapsed` keeps the maximum.
    pub fn merge(&mut self, other: &TripStats) {
        self.distance        += other.distance;
        self.elapsed          = self.elapsed.max(other.elapsed);
        self.items_collected += other.items_collected;
    }
}

/// Reported whenever a tick lands an agent on a waypoint.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrival {
    /// Index of the waypoint within the route.
    pub index:    usize,
    pub waypoint: Waypoint,
}

impl Arrival {
    #[inline]
    pub fn is_pickup(&self) -> bool {
        matches!(self.waypoint.kind, WaypointKind::Task(_))
    }
}

/// The kinematic state of one agent following one route.
///
/// The route itself is not owned: callers pass the same `&Route` to every
/// [`advance`](Self::advance).  `route_index` is the last waypoint reached.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KinematicState {
    pub position:        Point,
    pub route_index:     usize,
    pub phase:           Phase,
    /// Seconds of pickup dwell left while `PickingUp`.
    pub dwell_remaining: f64,
    /// Scalar speed used on the most recent travel tick.
    pub speed:           f64,
    /// Ground only; stays 0 for aerial agents.
    pub fatigue:         f64,
    /// Aerial only; stays at the origin for ground agents and is zeroed
    /// while hovering for a pickup.
    pub velocity:        Point,
    pub stats:           TripStats,
}

impl KinematicState {
    /// Place an agent on the first waypoint of `route`.
    ///
    /// A single-waypoint route is already `Done`.
    pub fn attach(route: &Route, params: &MotionParams) -> FleetResult<Self> {
        params.validate()?;
        let Some(first) = route.get(0) else {
            return Err(FleetError::MalformedRoute(
                "cannot attach an agent to an empty route".into(),
            ));
        };
        let speed = match params.category {
            Category::Ground { cruise_speed, .. } => cruise_speed,
            Category::Aerial { .. }               => 0.0,
        };
        Ok(Self {
            position:        first.position,
            route_index:     0,
            phase:           if route.len() == 1 { Phase::Done } else { Phase::Traveling },
            dwell_remaining: 0.0,
            speed,
            fatigue:         0.0,
            velocity:        Point::ORIGIN,
            stats:           TripStats::default(),
        })
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// The waypoint currently being approached, if any.
    pub fn target<'r>(&self, route: &'r Route) -> Option<&'r Waypoint> {
        match self.phase {
            Phase::Traveling => route.get(self.route_index + 1),
            _ => None,
        }
    }

    /// Consume `dt` seconds.  Returns the waypoint reached during this tick,
    /// if any.  Non-finite or non-positive `dt` changes nothing.
    ///
    /// A tick that reaches a waypoint ends there: whatever part of `dt` the
    /// arrival did not need is dropped, not carried into the next leg or
    /// dwell.  `stats.elapsed` therefore counts whole ticks, and coarse
    /// frames report a longer trip than fine ones over the same route.
    pub fn advance(&mut self, route: &Route, dt: f64, params: &MotionParams) -> Option<Arrival> {
        if !(dt.is_finite() && dt > 0.0) || self.phase == Phase::Done {
            return None;
        }
        self.stats.elapsed += dt;

        match self.phase {
            Phase::PickingUp => {
                self.dwell_remaining -= dt;
                if self.dwell_remaining <= 0.0 {
                    self.dwell_remaining = 0.0;
                    self.phase = self.after_waypoint(route);
                }
                None
            }
            Phase::Traveling => self.travel(route, dt, params),
            Phase::Done => None,
        }
    }

    // ── Internals ────────────────────────────────────────────────────────────

    fn travel(&mut self, route: &Route, dt: f64, params: &MotionParams) -> Option<Arrival> {
        let Some(target) = route.get(self.route_index + 1).map(|w| w.position) else {
            self.phase = Phase::Done;
            return None;
        };
        let remaining = self.position.distance(target);

        let speed = match params.category {
            Category::Ground { cruise_speed, fatigue_rate, min_speed, .. } => {
                let speed = (cruise_speed * (1.0 - self.fatigue)).max(min_speed);
                self.fatigue = (self.fatigue + fatigue_rate * dt).min(1.0);
                speed
            }
            Category::Aerial { max_speed, max_accel } => {
                // Only the component along the new heading carries over, so a
                // reversal restarts from rest.
                let heading = (target - self.position).normalized();
                let carried = heading * self.velocity.dot(heading).max(0.0);
                let mut v = carried + heading * (max_accel * dt);
                let magnitude = v.length();
                if magnitude > max_speed {
                    v = v * (max_speed / magnitude);
                }
                self.velocity = v;
                v.length()
            }
        };
        self.speed = speed;

        let step = speed * dt;
        if step >= remaining - params.arrival_tolerance {
            self.position = target;
            self.stats.distance += remaining;
            self.route_index += 1;
            Some(self.arrive(route, params))
        } else {
            self.position = self.position.lerp(target, step / remaining);
            self.stats.distance += step;
            None
        }
    }

    fn arrive(&mut self, route: &Route, params: &MotionParams) -> Arrival {
        if let Category::Ground { recovery, .. } = params.category {
            self.fatigue = (self.fatigue - recovery).max(0.0);
        }
        let waypoint = route
            .get(self.route_index)
            .copied()
            .unwrap_or_else(|| Waypoint::depot(self.position));

        match waypoint.kind {
            WaypointKind::Task(_) => {
                self.stats.items_collected += 1;
                if params.pickup_duration > 0.0 {
                    self.dwell_remaining = params.pickup_duration;
                    self.velocity = Point::ORIGIN;
                    self.phase = Phase::PickingUp;
                } else {
                    self.phase = self.after_waypoint(route);
                }
            }
            WaypointKind::Depot => self.phase = self.after_waypoint(route),
        }
        trace!(
            "reached waypoint {} at {} ({:?})",
            self.route_index, self.position, self.phase
        );
        Arrival { index: self.route_index, waypoint }
    }

    fn after_waypoint(&self, route: &Route) -> Phase {
        if self.route_index + 1 >= route.len() {
            Phase::Done
        } else {
            Phase::Traveling
        }
    }
}

/// Pure form of [`KinematicState::advance`]: the state after one tick.
pub fn kinematic_step(
    state:  &KinematicState,
    route:  &Route,
    dt:     f64,
    params: &MotionParams,
) -> KinematicState {
    let mut next = state.clone();
    next.advance(route, dt, params);
    next
}
