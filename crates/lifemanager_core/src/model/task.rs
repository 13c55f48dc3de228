//! Task entity.
//!
//! # Invariants
//! - `todo <-> done` is the only status transition.
//! - A missing `due_date` means "no deadline", never a default date.

use super::record::{present, Collection, Entity};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    Done,
}

impl TaskStatus {
    pub fn is_done(self) -> bool {
        self == Self::Done
    }

    /// Returns the opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Todo => Self::Done,
            Self::Done => Self::Todo,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Creates an open task with medium priority and no deadline.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            due_date: None,
        }
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }
}

/// Partial task update.
///
/// `due_date: Some(None)` clears the deadline; `None` leaves it as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TaskPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default, deserialize_with = "present")]
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// Patch that only sets the status.
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Entity for Task {
    const COLLECTION: Collection = Collection::Tasks;
    type Patch = TaskPatch;

    fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskPatch, TaskPriority, TaskStatus};
    use crate::model::record::Entity;
    use chrono::NaiveDate;

    #[test]
    fn patch_json_distinguishes_null_from_absent_due_date() {
        let keep: TaskPatch = serde_json::from_str(r#"{"status":"done"}"#).unwrap();
        assert_eq!(keep.due_date, None);
        assert_eq!(keep.status, Some(TaskStatus::Done));

        let clear: TaskPatch = serde_json::from_str(r#"{"dueDate":null}"#).unwrap();
        assert_eq!(clear.due_date, Some(None));
    }

    #[test]
    fn patch_rejects_unknown_fields() {
        let result = serde_json::from_str::<TaskPatch>(r#"{"colour":"red"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn apply_patch_touches_only_present_fields() {
        let due = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let mut task = Task::new("file taxes")
            .with_priority(TaskPriority::High)
            .with_due_date(due);

        task.apply_patch(TaskPatch::status(TaskStatus::Done));

        assert_eq!(task.title, "file taxes");
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.due_date, Some(due));
        assert!(task.is_done());
        assert_eq!(task.status.toggled(), TaskStatus::Todo);
    }
}
