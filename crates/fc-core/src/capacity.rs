//! Per-agent carrying capacity.
//!
//! The collection domain historically encoded "unlimited" as a capacity of
//! `0`, which is indistinguishable from a misconfigured zero-capacity agent.
//! `Capacity` makes the two cases separate types: `Unlimited`, or
//! `Limited(n)` with `n` guaranteed non-zero by `NonZeroU32`.

use std::num::NonZeroU32;

use crate::{FleetError, FleetResult};

/// How many tasks an agent can hold before it must return to the depot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capacity {
    /// Never forced back to the depot.
    #[default]
    Unlimited,
    /// Must unload after this many pickups.
    Limited(NonZeroU32),
}

impl Capacity {
    /// A finite capacity of `n` tasks.
    ///
    /// # Errors
    ///
    /// `n == 0` is rejected with [`FleetError::InvalidParameter`]; an agent
    /// that can carry nothing can never complete a task.
    pub fn limited(n: u32) -> FleetResult<Self> {
        NonZeroU32::new(n)
            .map(Capacity::Limited)
            .ok_or_else(|| FleetError::InvalidParameter("capacity must be at least 1".into()))
    }

    /// Convert the legacy integer encoding where `0` means unlimited.
    ///
    /// Only for callers that still carry that encoding (e.g. form inputs);
    /// everything downstream sees the explicit variant.
    pub fn from_count(n: u32) -> Self {
        NonZeroU32::new(n).map_or(Capacity::Unlimited, Capacity::Limited)
    }

    /// The finite limit, or `None` when unlimited.
    #[inline]
    pub fn limit(self) -> Option<u32> {
        match self {
            Capacity::Unlimited  => None,
            Capacity::Limited(n) => Some(n.get()),
        }
    }

    /// `true` once `load` has reached the limit.  Always `false` when unlimited.
    #[inline]
    pub fn is_full(self, load: u32) -> bool {
        match self {
            Capacity::Unlimited  => false,
            Capacity::Limited(n) => load >= n.get(),
        }
    }

    /// Number of tasks the next batch takes when `remaining` are outstanding.
    #[inline]
    pub fn batch_size(self, remaining: usize) -> usize {
        match self {
            Capacity::Unlimited  => remaining,
            Capacity::Limited(n) => remaining.min(n.get() as usize),
        }
    }
}

impl std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capacity::Unlimited  => f.write_str("unlimited"),
            Capacity::Limited(n) => write!(f, "{n}"),
        }
    }
}
