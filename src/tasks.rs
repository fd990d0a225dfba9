use crate::error::{Result, TaskError};
use crate::models::{Priority, Task};
use crate::output::{Style, render_task_table};
use crate::storage::{Storage, Store};
use rusqlite::params;
use std::path::Path;
use tracing::{info, warn};

const SELECT_ALL: &str = "SELECT id, title, priority, done FROM tasks ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, title, priority, done FROM tasks WHERE id = ?1";
const INSERT_TASK: &str = "INSERT INTO tasks (title, priority, done) VALUES (?1, ?2, ?3)";
const TOGGLE_DONE: &str = "UPDATE tasks SET done = NOT done WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// Task operations every front-end works against
pub trait TaskBoard {
    /// Create a task that is not done yet
    fn add(&self, title: &str, priority: Priority) -> Result<Task>;

    fn get_tasks(&self) -> Result<Vec<Task>>;

    /// Look a task up by a user-supplied id; non-numeric ids match nothing
    fn find_by_id(&self, identifier: &str) -> Result<Option<Task>>;

    /// Flip the done flag, returning the task in its new state
    fn mark_task(&self, identifier: &str) -> Result<Task>;

    /// Remove a task, returning what was removed
    fn delete_task(&self, identifier: &str) -> Result<Task>;

    /// Render every task as a console table
    fn list_tasks(&self, style: &Style) -> Result<String> {
        let tasks = self.get_tasks()?;
        Ok(render_task_table(&tasks, style))
    }
}

/// Core business logic
pub struct TaskManager<S: Store = Storage> {
    store: S,
}

impl TaskManager<Storage> {
    /// Open (creating if needed) the database file at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        TaskManager::new(Storage::new(path))
    }
}

impl<S: Store> TaskManager<S> {
    pub fn new(mut store: S) -> Result<Self> {
        store.connect()?;
        Ok(TaskManager { store })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn require(&self, identifier: &str) -> Result<Task> {
        self.find_by_id(identifier)?.ok_or_else(|| {
            warn!(identifier, "task not found");
            TaskError::TaskNotFound(identifier.to_string())
        })
    }
}

impl<S: Store> TaskBoard for TaskManager<S> {
    fn add(&self, title: &str, priority: Priority) -> Result<Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        let outcome = self
            .store
            .execute(INSERT_TASK, params![title, priority.as_str(), false])?;
        info!(id = outcome.last_insert_id, title, "task added");

        Ok(Task {
            id: outcome.last_insert_id,
            title: title.to_string(),
            priority,
            done: false,
        })
    }

    fn get_tasks(&self) -> Result<Vec<Task>> {
        self.store
            .fetchall(SELECT_ALL, params![])?
            .iter()
            .map(Task::try_from)
            .collect()
    }

    fn find_by_id(&self, identifier: &str) -> Result<Option<Task>> {
        let Ok(id) = identifier.trim().parse::<i64>() else {
            return Ok(None);
        };

        self.store
            .fetchall(SELECT_BY_ID, params![id])?
            .first()
            .map(Task::try_from)
            .transpose()
    }

    fn mark_task(&self, identifier: &str) -> Result<Task> {
        let mut task = self.require(identifier)?;

        let outcome = self.store.execute(TOGGLE_DONE, params![task.id])?;
        if outcome.rows_affected == 0 {
            return Err(TaskError::TaskNotFound(identifier.to_string()));
        }

        task.done = !task.done;
        info!(id = task.id, done = task.done, "task toggled");
        Ok(task)
    }

    fn delete_task(&self, identifier: &str) -> Result<Task> {
        let task = self.require(identifier)?;

        let outcome = self.store.execute(DELETE_TASK, params![task.id])?;
        if outcome.rows_affected == 0 {
            return Err(TaskError::TaskNotFound(identifier.to_string()));
        }

        info!(id = task.id, "task deleted");
        Ok(task)
    }
}
