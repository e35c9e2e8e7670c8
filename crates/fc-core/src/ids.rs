//! Agent and task identifiers.
//!
//! `AgentId(i)` is the `i`th agent of a fleet and `TaskId(i)` the `i`th task
//! location handed to a run.  A partitioned subset keeps the ids of the full
//! set, so only agent ids are guaranteed dense.  Task ids also order the
//! nearest-task rule's tie-break, which is why they derive `Ord`.

use std::fmt;

/// Declare a `u32` id newtype that prints as `<label> <n>` (e.g. `task 4`).
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Position in the owning `Vec`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// The id at position `index`, or `None` past `u32::MAX`.
            #[inline]
            pub fn from_index(index: usize) -> Option<Self> {
                u32::try_from(index).ok().map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " {}"), self.0)
            }
        }
    };
}

typed_id! {
    /// An agent's slot within its fleet.  Agents are never added or removed
    /// during a run, so the id is stable.
    pub struct AgentId => "agent";
}

typed_id! {
    /// A task's position in the input list.
    pub struct TaskId => "task";
}
