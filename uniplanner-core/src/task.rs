//! Task model for the recommendation engine.
//!
//! Tasks arrive as immutable snapshots from the persistence layer; the engine
//! never mutates them, it only derives new sequences.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Academic task category. Affects the base weight used in scoring and
/// workload estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Exam,
    Project,
    Assignment,
    Other,
}

impl TaskKind {
    /// Fixed grading-impact weight: exams outrank projects outrank
    /// assignments outrank everything else.
    pub fn weight(&self) -> f64 {
        match self {
            TaskKind::Exam => 3.0,
            TaskKind::Project => 2.0,
            TaskKind::Assignment => 1.5,
            TaskKind::Other => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Exam => "exam",
            TaskKind::Project => "project",
            TaskKind::Assignment => "assignment",
            TaskKind::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "exam" => Some(TaskKind::Exam),
            "project" => Some(TaskKind::Project),
            "assignment" => Some(TaskKind::Assignment),
            "other" => Some(TaskKind::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TaskStatus::Pending),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

/// Core task type.
///
/// Note: kept small + serializable. Field names mirror the snapshot contract
/// so scored tasks marshal back out without re-mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,

    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub due_date: NaiveDate,
    pub status: TaskStatus,

    /// Course the task belongs to, if any.
    pub course_id: Option<String>,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: TaskKind,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            due_date,
            status: TaskStatus::Pending,
            course_id: None,
        }
    }

    pub fn with_course(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = Some(course_id.into());
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}
