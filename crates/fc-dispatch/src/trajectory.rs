//! Timed movement legs recorded by the dispatcher.
//!
//! Every decision the dispatcher makes becomes one or two [`Segment`]s on the
//! owning agent's [`Trajectory`].  Because time is advanced analytically, a
//! trajectory can be sampled at any instant by linear interpolation, which
//! lets a display animate an event-driven run without re-simulating it.

use fc_core::{AgentId, Point, TaskId};

/// Why a leg was travelled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentKind {
    /// Travel to claim the given task.
    Pickup(TaskId),
    /// Capacity-triggered return to the depot.
    Return,
}

/// One straight-line leg with its global start and end times.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub start_time: f64,
    pub end_time:   f64,
    pub from:       Point,
    pub to:         Point,
    pub kind:       SegmentKind,
}

impl Segment {
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }

    /// Interpolated position at `t`, clamped to the segment's endpoints.
    pub fn position_at(&self, t: f64) -> Point {
        if self.end_time <= self.start_time {
            return if t < self.start_time { self.from } else { self.to };
        }
        let ratio = ((t - self.start_time) / self.duration()).clamp(0.0, 1.0);
        self.from.lerp(self.to, ratio)
    }
}

/// The ordered legs travelled by one agent during a dispatch run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trajectory {
    pub agent:    AgentId,
    /// Where the agent stood before its first leg (the depot).
    pub start:    Point,
    pub segments: Vec<Segment>,
}

impl Trajectory {
    pub fn new(agent: AgentId, start: Point) -> Self {
        Self { agent, start, segments: Vec::new() }
    }

    /// Position of the agent at global time `t`.
    ///
    /// Before the first leg the agent is at `start`; between legs it waits
    /// where the previous leg ended; after the last leg it stays put.
    pub fn position_at(&self, t: f64) -> Point {
        let mut resting = self.start;
        for seg in &self.segments {
            if t < seg.start_time {
                return resting;
            }
            if t <= seg.end_time {
                return seg.position_at(t);
            }
            resting = seg.to;
        }
        resting
    }

    /// Tasks whose pickup leg has finished by time `t`, in pickup order.
    pub fn collected_by(&self, t: f64) -> Vec<TaskId> {
        self.segments
            .iter()
            .filter(|s| s.end_time <= t)
            .filter_map(|s| match s.kind {
                SegmentKind::Pickup(task) => Some(task),
                SegmentKind::Return       => None,
            })
            .collect()
    }

    /// Global time at which the last leg ends (`0.0` for an unused agent).
    pub fn end_time(&self) -> f64 {
        self.segments.last().map_or(0.0, |s| s.end_time)
    }

    /// Sum of all leg lengths.
    pub fn distance(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }

    /// Number of pickups on this trajectory.
    pub fn pickups(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s.kind, SegmentKind::Pickup(_)))
            .count()
    }
}
