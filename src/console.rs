//! Interactive numbered-menu front-end.

use crate::error::{Result, TaskError};
use crate::models::Priority;
use crate::output::{
    EMPTY_TITLE, STORAGE_FAILURE, Style, TASK_ADDED, TASK_DELETED, TASK_NOT_FOUND, TASK_UPDATED,
};
use crate::tasks::TaskBoard;
use std::io::{BufRead, Write};
use tracing::error;

/// Line-based menu loop over any task board
pub struct Menu<'a, B, R, W> {
    board: &'a B,
    style: Style,
    input: R,
    output: W,
}

enum Flow {
    Continue,
    Exit,
}

impl<'a, B: TaskBoard, R: BufRead, W: Write> Menu<'a, B, R, W> {
    pub fn new(board: &'a B, style: Style, input: R, output: W) -> Self {
        Menu {
            board,
            style,
            input,
            output,
        }
    }

    /// Run until the user picks `0` or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("\nChoose an option: ")? else {
                self.say_goodbye()?;
                return Ok(());
            };

            if let Flow::Exit = self.process_choice(&choice)? {
                return Ok(());
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn print_menu(&mut self) -> Result<()> {
        let s = self.style;
        writeln!(self.output, "\n{}", s.success("==== TODO APP ===="))?;
        for (key, label) in [
            ("1.", "Add Task"),
            ("2.", "List Tasks"),
            ("3.", "Toggle Complete"),
            ("4.", "Delete Task"),
            ("0.", "Exit"),
        ] {
            writeln!(self.output, "{} {}", s.success(key), s.notice(label))?;
        }
        Ok(())
    }

    fn process_choice(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => self.add_task()?,
            "2" => self.list_tasks()?,
            "3" => self.mark_task()?,
            "4" => self.delete_task()?,
            "0" => {
                self.say_goodbye()?;
                return Ok(Flow::Exit);
            }
            _ => {
                let line = self.style.notice("Invalid option.");
                writeln!(self.output, "{line}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn add_task(&mut self) -> Result<()> {
        let title = self.prompt("Enter task title: ")?.unwrap_or_default();
        let line = self.style.success("Priority: (1) Low (2) Medium (3) High");
        writeln!(self.output, "{line}")?;
        let choice = self.prompt("Select 1-3: ")?.unwrap_or_default();
        let priority = Priority::from_menu_choice(&choice);

        let result = self.board.add(&title, priority).map(|_| ());
        self.report(result, TASK_ADDED)
    }

    fn list_tasks(&mut self) -> Result<()> {
        match self.board.list_tasks(&self.style) {
            Ok(table) => {
                writeln!(self.output, "{table}")?;
                Ok(())
            }
            Err(e) => self.report(Err(e), ""),
        }
    }

    fn mark_task(&mut self) -> Result<()> {
        let id = self.prompt("Enter ID to toggle: ")?.unwrap_or_default();
        let result = self.board.mark_task(&id).map(|_| ());
        self.report(result, TASK_UPDATED)
    }

    fn delete_task(&mut self) -> Result<()> {
        let id = self.prompt("Enter ID to delete: ")?.unwrap_or_default();
        let result = self.board.delete_task(&id).map(|_| ());
        self.report(result, TASK_DELETED)
    }

    fn say_goodbye(&mut self) -> Result<()> {
        let line = self.style.success("Goodbye!");
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Show the outcome of an operation; only IO failures escape the loop
    fn report(&mut self, result: Result<()>, success: &str) -> Result<()> {
        let line = match result {
            Ok(()) => self.style.success(success),
            Err(TaskError::TaskNotFound(_)) => self.style.notice(TASK_NOT_FOUND),
            Err(TaskError::EmptyTitle) => self.style.notice(EMPTY_TITLE),
            Err(e) => {
                error!(error = %e, "menu operation failed");
                self.style.alert(STORAGE_FAILURE)
            }
        };
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Read one trimmed line; `None` at end of input
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        let label = self.style.notice(label);
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
