use crate::error::{Result, TaskError};
use crate::storage::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task priority label
///
/// Input is limited to the three standard labels. Rows written by other tools
/// may hold any text, which is kept as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Other(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Other(label) => label,
        }
    }

    /// Decode a stored label; unknown text never fails
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Priority::Low,
            "medium" => Priority::Medium,
            "high" => Priority::High,
            _ => Priority::Other(label.to_string()),
        }
    }

    /// Map a console menu selection (`1`..`3`); anything else falls back to medium.
    pub fn from_menu_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => Priority::Low,
            "3" => Priority::High,
            _ => Priority::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "1" => Ok(Priority::Low),
            "medium" | "2" => Ok(Priority::Medium),
            "high" | "3" => Ok(Priority::High),
            _ => Err(TaskError::InvalidPriority(s.to_string())),
        }
    }
}

impl From<String> for Priority {
    fn from(label: String) -> Self {
        Priority::from_label(&label)
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// A task in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub priority: Priority,
    pub done: bool,
}

impl Task {
    pub fn status_label(&self) -> &'static str {
        if self.done { "Done" } else { "Not Done" }
    }
}

impl TryFrom<&Record> for Task {
    type Error = TaskError;

    fn try_from(record: &Record) -> Result<Self> {
        let priority: String = record.get("priority")?;
        let priority = Priority::from_label(&priority);

        Ok(Task {
            id: record.get("id")?,
            title: record.get("title")?,
            priority,
            done: record.get("done")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parsing() {
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("Medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!(" HIGH ".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("3".parse::<Priority>().unwrap(), Priority::High);
        assert!(matches!(
            "urgent".parse::<Priority>(),
            Err(TaskError::InvalidPriority(ref label)) if label == "urgent"
        ));
    }

    #[test]
    fn test_stored_labels_never_fail() {
        assert_eq!(Priority::from_label("Low"), Priority::Low);
        assert_eq!(Priority::from_label("high"), Priority::High);
        assert_eq!(
            Priority::from_label("Urgent"),
            Priority::Other("Urgent".to_string())
        );
        assert_eq!(Priority::from_label("Urgent").as_str(), "Urgent");
    }

    #[test]
    fn test_other_priority_serializes_as_plain_text() {
        let task = Task {
            id: 2,
            title: "Odd".to_string(),
            priority: Priority::Other("Urgent".to_string()),
            done: false,
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["priority"], "Urgent");

        let back: Task = serde_json::from_value(value).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_menu_choice_defaults_to_medium() {
        assert_eq!(Priority::from_menu_choice("1"), Priority::Low);
        assert_eq!(Priority::from_menu_choice("2"), Priority::Medium);
        assert_eq!(Priority::from_menu_choice("3"), Priority::High);
        assert_eq!(Priority::from_menu_choice(""), Priority::Medium);
        assert_eq!(Priority::from_menu_choice("9"), Priority::Medium);
    }

    #[test]
    fn test_status_label() {
        let mut task = Task {
            id: 1,
            title: "Buy milk".to_string(),
            priority: Priority::Low,
            done: false,
        };
        assert_eq!(task.status_label(), "Not Done");
        task.done = true;
        assert_eq!(task.status_label(), "Done");
    }

    #[test]
    fn test_task_json_shape() {
        let task = Task {
            id: 7,
            title: "Write report".to_string(),
            priority: Priority::High,
            done: true,
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["priority"], "High");
        assert_eq!(value["done"], true);
    }
}
