use thiserror::Error;

/// All possible errors in the task tracker
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Task ID not found: {0}")]
    TaskNotFound(String),

    #[error("Task title cannot be empty")]
    EmptyTitle,

    #[error("Invalid priority: {0} (expected low, medium or high)")]
    InvalidPriority(String),

    #[error("Storage is not connected")]
    NotConnected,

    #[error("Column `{0}` missing from row")]
    MissingColumn(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TaskError {
    /// Errors caused by what the user typed rather than by the store
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            TaskError::TaskNotFound(_) | TaskError::EmptyTitle | TaskError::InvalidPriority(_)
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TaskError>;
