use crate::models::Priority;
use crate::storage::DEFAULT_DB_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(about = "Personal task tracker")]
#[command(version)]
pub struct Cli {
    /// Path to the task database
    #[arg(long, global = true, env = "TODO_DB", default_value = DEFAULT_DB_FILE)]
    pub db: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the task database if it does not exist
    Init,

    /// Add a new task
    Add {
        /// Task title
        title: String,
        /// Priority: low, medium or high
        #[arg(short, long, default_value = "medium")]
        priority: Priority,
    },

    /// List all tasks
    List {
        /// Print tasks as JSON
        #[arg(long)]
        json: bool,
    },

    /// Toggle a task between done and not done
    #[command(alias = "mark")]
    Toggle {
        /// Task ID
        id: String,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// Task ID
        id: String,
    },

    /// Show a single task
    Show {
        /// Task ID
        id: String,
    },

    /// Interactive numbered menu
    Menu,
}
