// In-memory task store with render notifications

use crate::render::Render;
use crate::task::Task;
use chrono::Local;
use tracing::{debug, warn};

/// Ordered collection of tasks and the authority for id assignment
///
/// Ids come from a counter that only moves forward, so a deleted task's id is
/// never handed out again. Every mutation is followed by a render notification
/// to each subscribed [`Render`] collaborator.
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
    renderers: Vec<Box<dyn Render>>,
}

impl TaskStore {
    /// Create an empty store with no renderers attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a render collaborator
    ///
    /// Renderers are notified in registration order.
    pub fn subscribe<R: Render + 'static>(&mut self, renderer: R) {
        self.renderers.push(Box::new(renderer));
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a new task and return a copy of it
    ///
    /// The description is stored as given; emptiness is checked by the caller
    /// (see [`crate::input::validate_description`]).
    pub fn add(&mut self, description: impl Into<String>) -> Task {
        let id = self.next_id;
        self.next_id += 1;

        let task = Task::new(id, description.into(), Local::now());
        self.tasks.push(task.clone());
        debug!(id, count = self.tasks.len(), "add: task appended");

        self.notify();
        task
    }

    /// Remove the task with `id` if present
    ///
    /// Unknown ids are a no-op. Renderers are notified either way. Returns
    /// whether a task was removed.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        let removed = self.tasks.len() != before;
        debug!(id, removed, count = self.tasks.len(), "delete: called");

        self.notify();
        removed
    }

    /// Redraw every renderer from the current state without mutating it
    pub fn refresh(&mut self) {
        self.notify();
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Snapshot of all tasks in insertion order
    pub fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Id the next `add` will assign
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    fn notify(&mut self) {
        for (index, renderer) in self.renderers.iter_mut().enumerate() {
            if let Err(e) = renderer.render(&self.tasks) {
                warn!(renderer = index, error = ?e, "Render failed, continuing");
            }
        }
    }
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("next_id", &self.next_id)
            .field("renderers", &self.renderers.len())
            .finish()
    }
}
