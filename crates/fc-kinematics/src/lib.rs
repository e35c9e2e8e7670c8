//! `fc-kinematics` — agent motion along precomputed routes.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`params`]   | `Category` (ground / aerial motion law), `MotionParams`         |
//! | [`state`]    | `KinematicState`, `Phase`, `TripStats`, `kinematic_step`        |
//! | [`playback`] | `Playback` — one route + state per agent, ticked together       |
//!
//! # Movement model (straight legs, caller-supplied Δt)
//!
//! 1. [`KinematicState::attach`] places the agent on the first waypoint.
//! 2. Each call to [`KinematicState::advance`] consumes one Δt.  While
//!    `Traveling` the motion law yields a speed; if `speed · Δt` covers the
//!    rest of the leg the agent snaps to the waypoint, otherwise it moves that
//!    fraction of the way.
//! 3. Reaching a task waypoint starts a fixed pickup dwell (`PickingUp`);
//!    depot waypoints are passed straight through.
//! 4. Reaching the final waypoint ends the trip (`Done`).
//!
//! Δt is whatever the caller measured since that agent's last update, so
//! playback stays correct under irregular frame timing.

pub mod params;
pub mod playback;
pub mod state;


pub use params::{Category, MotionParams};
pub use playback::Playback;
pub use state::{Arrival, KinematicState, Phase, TripStats, kinematic_step};
