//! `fc-dispatch` — the event-driven task-assignment engine.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                     |
//! |------------------|--------------------------------------------------------------|
//! | [`agent`]        | `AgentRecord`, `Fleet` — per-agent mutable dispatch state    |
//! | [`dispatcher`]   | `Dispatcher`, `DispatchParams`, `run_dispatch`               |
//! | [`trajectory`]   | `Segment`, `Trajectory` — timed legs for playback            |
//! | [`observer`]     | `DispatchObserver`, `NoopObserver`                           |
//!
//! # Decision loop
//!
//! ```text
//! while tasks remain:
//!   ① Select   — agent with the smallest time-to-free (lowest id on ties)
//!   ② Advance  — global clock += that time; every agent's time-to-free -= it
//!   ③ Assign   — nearest outstanding task to the freed agent (lowest id on ties)
//!   ④ Travel   — time-to-free += distance / speed; agent moves to the task
//!   ⑤ Unload   — if the load reached capacity, add the depot leg and reset
//! completion = clock + max remaining time-to-free
//! ```
//!
//! Time is advanced analytically between decision points, so a run costs
//! O(tasks · (agents + tasks)) regardless of the distances involved.

pub mod agent;
pub mod dispatcher;
pub mod observer;
pub mod trajectory;


pub use agent::{AgentRecord, Fleet};
pub use dispatcher::{
    Assignment, DepotReturn, DispatchOutcome, DispatchParams, Dispatcher, run_dispatch,
};
pub use observer::{DispatchObserver, NoopObserver};
pub use trajectory::{Segment, SegmentKind, Trajectory};
