//! `fc-sim` — scenario configuration and orchestration for fleetcmp.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`scenario`]  | `FleetSpec`, `Scenario`, `ScenarioBuilder`                    |
//! | [`compare`]   | `compare` — one event-driven dispatch per fleet               |
//! | [`animation`] | `Animation`, `PlaybackObserver` — kinematic playback of routes |
//! | [`error`]     | `SimError`, `SimResult`                                       |
//!
//! # Two views of the same day
//!
//! ```text
//! Scenario ──► compare()          dispatcher per fleet → Comparison (times, distances)
//!          └─► Animation::for_fleet()  partition → routes → Playback → frames
//! ```
//!
//! The comparison answers "which fleet finishes first" analytically; the
//! animation replays one fleet's planned routes under its motion law.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Dispatches the fleets of a comparison on Rayon's pool. |
//! | `serde`    | `Serialize`/`Deserialize` on scenarios and reports.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fc_core::{Capacity, Point};
//! use fc_kinematics::MotionParams;
//! use fc_sim::{Animation, FleetSpec, NoopObserver, ScenarioBuilder, compare};
//!
//! let scenario = ScenarioBuilder::new(Point::ORIGIN)
//!     .tasks(points)
//!     .fleet(FleetSpec::new("walkers", 5, Capacity::limited(20)?, MotionParams::ground(1.4)))
//!     .build()?;
//! let comparison = compare(&scenario)?;
//! let summary = Animation::for_fleet(&scenario, 0)?.run(0.1, 3_600.0, &mut NoopObserver)?;
//! ```

pub mod animation;
pub mod compare;
pub mod error;
pub mod scenario;

#[cfg(test)]
mod tests;

pub use animation::{Animation, AnimationSummary, PlaybackObserver};
pub use compare::{Comparison, FleetReport, compare};
pub use error::{SimError, SimResult};
pub use fc_dispatch::NoopObserver;
pub use scenario::{FleetSpec, Scenario, ScenarioBuilder};
