pub mod cli;
pub mod cli_handlers;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod output;
pub mod storage;
pub mod tasks;

pub use error::{Result, TaskError};
pub use models::*;
pub use storage::{Outcome, Record, Storage, Store};
pub use tasks::{TaskBoard, TaskManager};
