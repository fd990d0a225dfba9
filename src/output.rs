//! Console styling and task table rendering.

use crate::models::Task;
use colored::{ColoredString, Colorize};

pub const TASK_ADDED: &str = "[+] Task added successfully!";
pub const TASK_UPDATED: &str = "[+] Task status updated.";
pub const TASK_DELETED: &str = "[+] Task deleted successfully.";
pub const TASK_NOT_FOUND: &str = "[!] Task ID not found.";
pub const NO_TASKS: &str = "[!] No tasks found.";
pub const EMPTY_TITLE: &str = "[!] Task title cannot be empty.";
pub const STORAGE_FAILURE: &str = "[!] Storage error, see log for details.";

const ID_WIDTH: usize = 4;
const PRIORITY_WIDTH: usize = 12;
const STATUS_WIDTH: usize = 12;
const TITLE_HEADER: &str = "Task Title";
// Three " | " separators between four columns
const SEPARATOR_WIDTH: usize = 9;

/// Styling policy for console output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn plain() -> Self {
        Style { color: false }
    }

    pub fn colored() -> Self {
        Style { color: true }
    }

    /// Confirmations and headings
    pub fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.bright_green())
    }

    /// Prompts, notices and table cells
    pub fn notice(&self, text: &str) -> String {
        self.paint(text, |t| t.bright_white())
    }

    pub fn alert(&self, text: &str) -> String {
        self.paint(text, |t| t.bright_red())
    }

    fn paint(&self, text: &str, paint: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::colored()
    }
}

/// Render tasks as a fixed-layout table, or the empty notice
pub fn render_task_table(tasks: &[Task], style: &Style) -> String {
    if tasks.is_empty() {
        return format!("\n{}", style.notice(NO_TASKS));
    }

    let id_width = ID_WIDTH;
    let priority_width = PRIORITY_WIDTH;
    let status_width = STATUS_WIDTH;
    let max_title = tasks
        .iter()
        .map(|t| t.title.chars().count())
        .max()
        .unwrap_or(0);
    let title_width = max_title.max(TITLE_HEADER.len()) + 2;

    let header = format!(
        "{:<id_width$} | {:<title_width$} | {:<priority_width$} | {:<status_width$}",
        "ID", TITLE_HEADER, "Priority", "Status"
    );
    let divider =
        "-".repeat(id_width + title_width + priority_width + status_width + SEPARATOR_WIDTH);

    let mut lines = Vec::with_capacity(tasks.len() + 3);
    lines.push(format!("\n{}", style.success(&header)));
    lines.push(style.notice(&divider));

    for task in tasks {
        let status = format!("{:<status_width$}", task.status_label());
        let status = if task.done {
            style.success(&status)
        } else {
            style.alert(&status)
        };

        lines.push(format!(
            "{} | {} | {} | {}",
            style.notice(&format!("{:<id_width$}", task.id)),
            style.notice(&format!("{:<title_width$}", task.title)),
            style.notice(&format!("{:<priority_width$}", task.priority.as_str())),
            status
        ));
    }
    lines.push(style.notice(&divider));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn task(id: i64, title: &str, priority: Priority, done: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            priority,
            done,
        }
    }

    #[test]
    fn test_empty_table() {
        let rendered = render_task_table(&[], &Style::plain());
        assert_eq!(rendered, "\n[!] No tasks found.");
    }

    #[test]
    fn test_table_layout() {
        let tasks = vec![
            task(1, "First Task", Priority::Low, false),
            task(2, "Second Task Done", Priority::High, true),
        ];
        let rendered = render_task_table(&tasks, &Style::plain());
        let lines: Vec<&str> = rendered.lines().collect();

        // Leading blank line, header, divider, two rows, divider
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "");
        assert!(lines[1].starts_with("ID   | Task Title"));

        // title width = 16 + 2
        let expected_width = 4 + 18 + 12 + 12 + 9;
        assert_eq!(lines[2], "-".repeat(expected_width));
        assert_eq!(lines[5], lines[2]);

        assert_eq!(
            lines[3],
            "1    | First Task         | Low          | Not Done    "
        );
        assert!(lines[4].contains("Second Task Done"));
        assert!(lines[4].contains("| Done        "));
    }

    #[test]
    fn test_short_titles_use_header_width() {
        let tasks = vec![task(3, "Tea", Priority::Medium, false)];
        let rendered = render_task_table(&tasks, &Style::plain());
        let divider = rendered.lines().nth(2).unwrap();
        assert_eq!(divider.len(), 4 + 12 + 12 + 12 + 9);
    }

    #[test]
    fn test_plain_style_has_no_escapes() {
        let style = Style::plain();
        assert_eq!(style.success("ok"), "ok");
        assert_eq!(style.alert("bad"), "bad");
        assert_eq!(style.notice("hm"), "hm");
    }
}
