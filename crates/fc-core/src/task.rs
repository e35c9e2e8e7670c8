//! Tasks and the pool of outstanding pickups.
//!
//! `TaskPool` owns every task of a run.  Tasks are never removed from the
//! backing `Vec`, and an id → slot map finds them in O(1) whether or not ids
//! are dense.  Claiming a task sets its `collected` flag and drops it from
//! the sorted `outstanding` list.
//!
//! [`TaskPool::nearest_to`] is the single greedy rule shared by the
//! event-driven dispatcher and the route constructor.

use rustc_hash::FxHashMap;

use crate::{FleetError, FleetResult, Point, TaskId};

/// A single pickup location.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    pub id:        TaskId,
    pub position:  Point,
    pub collected: bool,
}

impl Task {
    #[inline]
    pub fn new(id: TaskId, position: Point) -> Self {
        Self { id, position, collected: false }
    }
}

/// The set of tasks of one run, with O(1) lookup by id and an ascending list
/// of the tasks still outstanding.
#[derive(Clone, Debug, Default)]
pub struct TaskPool {
    tasks:       Vec<Task>,
    /// `TaskId` → position in `tasks`.  Ids need not be dense: partitioned
    /// subsets keep the ids of the full set.
    slots:       FxHashMap<TaskId, usize>,
    /// Unclaimed tasks and their locations, ascending by id, so a linear scan
    /// with a strict `<` comparison breaks distance ties toward the lowest id.
    outstanding: Vec<(TaskId, Point)>,
}

impl TaskPool {
    /// Build a pool where task `i` sits at `points[i]`.
    ///
    /// # Errors
    ///
    /// [`FleetError::InvalidParameter`] if there are more points than a
    /// `TaskId` can number.
    pub fn from_points(points: &[Point]) -> FleetResult<Self> {
        let tasks = points
            .iter()
            .enumerate()
            .map(|(i, &p)| Ok(Task::new(task_id_at(i)?, p)))
            .collect::<FleetResult<Vec<_>>>()?;
        Self::from_tasks(tasks)
    }

    /// Build a pool from pre-identified tasks (e.g. one partition of a larger
    /// set).  Ids keep their original values; already-collected tasks are not
    /// outstanding.
    ///
    /// # Errors
    ///
    /// [`FleetError::DuplicateTask`] if two tasks share an id.
    pub fn from_tasks(tasks: Vec<Task>) -> FleetResult<Self> {
        let mut slots = FxHashMap::default();
        slots.reserve(tasks.len());
        for (slot, task) in tasks.iter().enumerate() {
            if slots.insert(task.id, slot).is_some() {
                return Err(FleetError::DuplicateTask(task.id));
            }
        }

        let mut outstanding: Vec<(TaskId, Point)> = tasks
            .iter()
            .filter(|t| !t.collected)
            .map(|t| (t.id, t.position))
            .collect();
        outstanding.sort_unstable_by_key(|&(id, _)| id);
        Ok(Self { tasks, slots, outstanding })
    }

    /// Total number of tasks, claimed or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// `true` when no task is outstanding.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outstanding.is_empty()
    }

    /// Number of tasks not yet claimed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.outstanding.len()
    }

    /// Ids of unclaimed tasks in ascending order.
    pub fn outstanding(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.outstanding.iter().map(|&(id, _)| id)
    }

    /// All tasks, claimed or not, in insertion order.
    #[inline]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.slots.get(&id).map(|&slot| &self.tasks[slot])
    }

    /// The outstanding task closest to `from`, ties broken by lowest id.
    ///
    /// O(remaining).  Returns `None` when the pool is exhausted.
    pub fn nearest_to(&self, from: Point) -> Option<TaskId> {
        let mut best: Option<(TaskId, f64)> = None;
        for &(id, position) in &self.outstanding {
            let d = from.distance(position);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((id, d)),
            }
        }
        best.map(|(id, _)| id)
    }

    /// Mark `id` as collected and return its position.
    ///
    /// # Errors
    ///
    /// [`FleetError::TaskAlreadyClaimed`] if the task was claimed before,
    /// [`FleetError::TaskNotFound`] if no such task exists.
    pub fn claim(&mut self, id: TaskId) -> FleetResult<Point> {
        let Some(&slot) = self.slots.get(&id) else {
            return Err(FleetError::TaskNotFound(id));
        };
        let Ok(pos) = self.outstanding.binary_search_by_key(&id, |&(id, _)| id) else {
            return Err(FleetError::TaskAlreadyClaimed(id));
        };
        self.outstanding.remove(pos);

        let task = &mut self.tasks[slot];
        task.collected = true;
        Ok(task.position)
    }

    /// Claim the nearest outstanding task to `from`, returning its id,
    /// position, and distance from `from`.
    pub fn claim_nearest(&mut self, from: Point) -> Option<(TaskId, Point, f64)> {
        let id = self.nearest_to(from)?;
        let position = self.claim(id).ok()?;
        Some((id, position, from.distance(position)))
    }
}

/// The id of the task at input position `index`.
pub fn task_id_at(index: usize) -> FleetResult<TaskId> {
    TaskId::from_index(index).ok_or_else(|| {
        FleetError::InvalidParameter(format!("task index {index} exceeds the id range"))
    })
}
