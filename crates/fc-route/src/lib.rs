//! `fc-route` — explicit waypoint routes for playback.
//!
//! Where `fc-dispatch` advances time analytically, this crate precomputes the
//! ordered list of points an agent visits so a frame-by-frame model can drive
//! it.  Both use the same greedy rule, [`fc_core::TaskPool::nearest_to`].
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`route`]       | `Waypoint`, `WaypointKind`, `Route` and its measurements  |
//! | [`builder`]     | `build_route`, `build_route_for` — batched greedy walks   |
//! | [`partition`]   | `partition_tasks`, `plan_fleet_routes`                    |
//!
//! # Route shape
//!
//! ```text
//! depot, t₁ … t_k, depot, t_{k+1} … t_{2k}, depot, …, depot
//! ```
//!
//! Every run of tasks between two depot visits holds at most `capacity`
//! tasks; with `Capacity::Unlimited` there is exactly one run.

pub mod builder;
pub mod partition;
pub mod route;


pub use builder::{build_route, build_route_for};
pub use partition::{partition_tasks, plan_fleet_routes};
pub use route::{Route, Waypoint, WaypointKind};
