use crate::config::Config;
use crate::console::Menu;
use crate::error::{Result, TaskError};
use crate::models::{Priority, Task};
use crate::output::{TASK_ADDED, TASK_DELETED, TASK_UPDATED};
use crate::tasks::{TaskBoard, TaskManager};
use std::io;

/// Handle the init command
pub fn handle_init(config: &Config) -> Result<()> {
    let existed = config.db_path.exists();
    let manager = TaskManager::open(&config.db_path)?;
    drop(manager);

    let style = config.style();
    if existed {
        println!(
            "{}",
            style.notice(&format!(
                "Task database already exists at {}",
                config.db_path.display()
            ))
        );
    } else {
        println!(
            "{}",
            style.success(&format!(
                "Initialized task database at {}",
                config.db_path.display()
            ))
        );
    }
    Ok(())
}

/// Handle the add command
pub fn handle_add(config: &Config, title: &str, priority: Priority) -> Result<()> {
    let manager = TaskManager::open(&config.db_path)?;
    let task = manager.add(title, priority)?;

    let line = format!("{TASK_ADDED} (#{})", task.id);
    println!("{}", config.style().success(&line));
    Ok(())
}

/// Handle the list command
pub fn handle_list(config: &Config, json: bool) -> Result<()> {
    let manager = TaskManager::open(&config.db_path)?;

    if json {
        let tasks = manager.get_tasks()?;
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else {
        println!("{}", manager.list_tasks(&config.style())?);
    }
    Ok(())
}

/// Handle the toggle command
pub fn handle_toggle(config: &Config, id: &str) -> Result<()> {
    let manager = TaskManager::open(&config.db_path)?;
    let task = manager.mark_task(id)?;

    let line = format!("{TASK_UPDATED} #{} is now {}", task.id, task.status_label());
    println!("{}", config.style().success(&line));
    Ok(())
}

/// Handle the delete command
pub fn handle_delete(config: &Config, id: &str) -> Result<()> {
    let manager = TaskManager::open(&config.db_path)?;
    let task = manager.delete_task(id)?;

    let line = format!("{TASK_DELETED} (#{} {})", task.id, task.title);
    println!("{}", config.style().success(&line));
    Ok(())
}

/// Handle the show command
pub fn handle_show(config: &Config, id: &str) -> Result<()> {
    let manager = TaskManager::open(&config.db_path)?;
    let task = manager
        .find_by_id(id)?
        .ok_or_else(|| TaskError::TaskNotFound(id.to_string()))?;

    print_task(&task);
    Ok(())
}

/// Handle the menu command
pub fn handle_menu(config: &Config) -> Result<()> {
    let manager = TaskManager::open(&config.db_path)?;
    run_menu(&manager, config)?;

    let mut storage = manager.into_store();
    storage.close()
}

fn run_menu<B: TaskBoard>(board: &B, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut menu = Menu::new(board, config.style(), stdin.lock(), io::stdout());
    menu.run()
}

fn print_task(task: &Task) {
    println!("[#{}] {}", task.id, task.title);
    println!("Priority:     {}", task.priority);
    println!("Status:       {}", task.status_label());
}
