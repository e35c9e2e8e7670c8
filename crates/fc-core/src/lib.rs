//! `fc-core` — foundational types for the `fleetcmp` workspace.
//!
//! This crate is a dependency of every other `fc-*` crate.  It intentionally
//! has no `fc-*` dependencies and minimal external ones (`thiserror` and
//! `rustc-hash`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `TaskId`                                   |
//! | [`geo`]         | `Point`, Euclidean distance, interpolation            |
//! | [`capacity`]    | `Capacity` — `Unlimited` or `Limited(n > 0)`          |
//! | [`task`]        | `Task`, `TaskPool`, the nearest-unclaimed-task rule   |
//! | [`error`]       | `FleetError`, `FleetResult`, parameter checks         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod capacity;
pub mod error;
pub mod geo;
pub mod ids;
pub mod task;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use capacity::Capacity;
pub use error::{FleetError, FleetResult, ensure_finite_point, ensure_positive};
pub use geo::Point;
pub use ids::{AgentId, TaskId};
pub use task::{Task, TaskPool, task_id_at};
