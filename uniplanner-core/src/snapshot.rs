//! Wire-layer snapshot contracts.
//!
//! The API layer hands the engine loosely-typed task and course records
//! (string enums, string dates). `Snapshot::from_records` is the checked
//! boundary that turns them into typed model values or rejects the whole
//! batch with a single structured error. Partial acceptance would produce a
//! misleading recommendation, so there is no per-record skipping.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::course::Course;
use crate::task::{Task, TaskKind, TaskStatus};

/// Validation failure for one snapshot conversion. The first offending
/// record aborts the batch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("task {id}: {reason}")]
    MalformedTask { id: String, reason: String },

    #[error("task {id}: invalid due_date {value:?} (expected YYYY-MM-DD)")]
    InvalidDueDate { id: String, value: String },

    #[error("invalid evaluation date {value:?} (expected YYYY-MM-DD)")]
    InvalidToday { value: String },

    #[error("course {id}: {reason}")]
    MalformedCourse { id: String, reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type SnapshotResult<T> = std::result::Result<T, SnapshotError>;

/// Raw task record as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub due_date: String,
    pub status: String,
    #[serde(default)]
    pub course_id: Option<String>,
}

impl TaskRecord {
    /// Field-level invariants. Date parsing is checked separately so the
    /// error can carry the offending value.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("id must be non-empty".to_string());
        }
        if self.title.trim().is_empty() {
            return Err("title must be non-empty".to_string());
        }
        if TaskKind::parse(&self.kind).is_none() {
            return Err(format!(
                "unknown type {:?} (expected exam|project|assignment|other)",
                self.kind
            ));
        }
        if TaskStatus::parse(&self.status).is_none() {
            return Err(format!(
                "unknown status {:?} (expected pending|completed)",
                self.status
            ));
        }
        Ok(())
    }
}

/// Raw course record as supplied by the caller, keyed externally by course id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub name: String,
    /// Signed on the wire so a negative value is reportable rather than a
    /// deserialization failure.
    pub credit_weight: i64,
}

impl CourseRecord {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must be non-empty".to_string());
        }
        if self.credit_weight < 1 {
            return Err(format!(
                "credit_weight must be a positive integer, got {}",
                self.credit_weight
            ));
        }
        if self.credit_weight > i64::from(u32::MAX) {
            return Err(format!(
                "credit_weight must be at most {}, got {}",
                u32::MAX,
                self.credit_weight
            ));
        }
        Ok(())
    }
}

/// Typed, validated view of one student's tasks and courses.
///
/// A dangling `course_id` is deliberately NOT an error here: course metadata
/// gaps are common and scoring falls back to the baseline credit weight.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub courses: BTreeMap<String, Course>,
}

impl Snapshot {
    pub fn from_records(
        tasks: &[TaskRecord],
        courses: &BTreeMap<String, CourseRecord>,
    ) -> SnapshotResult<Self> {
        let mut typed_courses = BTreeMap::new();
        for (id, record) in courses {
            record
                .validate()
                .map_err(|reason| SnapshotError::MalformedCourse {
                    id: id.clone(),
                    reason,
                })?;
            // validate() already bounded the weight.
            let credit_weight = u32::try_from(record.credit_weight).unwrap_or(u32::MAX);
            typed_courses.insert(
                id.clone(),
                Course::new(id.clone(), record.name.clone(), credit_weight),
            );
        }

        let mut typed_tasks = Vec::with_capacity(tasks.len());
        for record in tasks {
            record
                .validate()
                .map_err(|reason| SnapshotError::MalformedTask {
                    id: record.id.clone(),
                    reason,
                })?;
            let due_date = parse_iso_date(&record.due_date).ok_or_else(|| {
                SnapshotError::InvalidDueDate {
                    id: record.id.clone(),
                    value: record.due_date.clone(),
                }
            })?;
            // validate() already vetted both enum strings.
            let kind = TaskKind::parse(&record.kind).unwrap_or(TaskKind::Other);
            let status = TaskStatus::parse(&record.status).unwrap_or(TaskStatus::Pending);

            let mut task = Task::new(record.id.clone(), record.title.clone(), kind, due_date)
                .with_status(status);
            task.course_id = record.course_id.clone();
            typed_tasks.push(task);
        }

        Ok(Self {
            tasks: typed_tasks,
            courses: typed_courses,
        })
    }
}

/// Parse the caller-supplied evaluation date.
pub fn parse_today(value: &str) -> SnapshotResult<NaiveDate> {
    parse_iso_date(value).ok_or_else(|| SnapshotError::InvalidToday {
        value: value.to_string(),
    })
}

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, kind: &str, due: &str, status: &str) -> TaskRecord {
        TaskRecord {
            id: id.to_string(),
            title: format!("task {id}"),
            kind: kind.to_string(),
            due_date: due.to_string(),
            status: status.to_string(),
            course_id: None,
        }
    }

    #[test]
    fn task_record_json_shape_is_stable() {
        let rec = TaskRecord {
            id: "t1".to_string(),
            title: "Calculus midterm".to_string(),
            kind: "exam".to_string(),
            due_date: "2025-05-02".to_string(),
            status: "pending".to_string(),
            course_id: Some("MATH240".to_string()),
        };
        rec.validate().unwrap();

        let json = serde_json::to_string(&rec).unwrap();
        // Key names and enum casing are part of the caller contract.
        assert!(json.contains("\"type\":\"exam\""));
        assert!(json.contains("\"due_date\":\"2025-05-02\""));
        assert!(json.contains("\"status\":\"pending\""));
        assert!(json.contains("\"course_id\":\"MATH240\""));

        let back: TaskRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn missing_course_id_defaults_to_none() {
        let json = r#"{"id":"t9","title":"Read ch. 4","type":"other",
                       "due_date":"2025-05-20","status":"pending"}"#;
        let rec: TaskRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.course_id, None);
    }

    #[test]
    fn unknown_kind_rejects_batch() {
        let err = Snapshot::from_records(
            &[record("t1", "quiz", "2025-05-02", "pending")],
            &BTreeMap::new(),
        )
        .unwrap_err();
        assert!(matches!(err, SnapshotError::MalformedTask { ref id, .. } if id == "t1"));
    }

    #[test]
    fn unknown_status_rejects_batch() {
        let err = Snapshot::from_records(
            &[record("t2", "exam", "2025-05-02", "done")],
            &BTreeMap::new(),
        )
        .unwrap_err();
        assert!(matches!(err, SnapshotError::MalformedTask { ref id, .. } if id == "t2"));
    }

    #[test]
    fn unparseable_due_date_rejects_batch() {
        let err = Snapshot::from_records(
            &[record("t3", "exam", "05/02/2025", "pending")],
            &BTreeMap::new(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            SnapshotError::InvalidDueDate {
                id: "t3".to_string(),
                value: "05/02/2025".to_string(),
            }
        );
    }

    #[test]
    fn non_positive_credit_weight_rejects_batch() {
        let mut courses = BTreeMap::new();
        courses.insert(
            "C1".to_string(),
            CourseRecord {
                name: "Algorithms".to_string(),
                credit_weight: 0,
            },
        );
        let err = Snapshot::from_records(&[], &courses).unwrap_err();
        assert!(matches!(err, SnapshotError::MalformedCourse { ref id, .. } if id == "C1"));
    }

    #[test]
    fn oversized_credit_weight_rejects_batch() {
        let mut courses = BTreeMap::new();
        courses.insert(
            "C1".to_string(),
            CourseRecord {
                name: "Algorithms".to_string(),
                credit_weight: 4_294_967_299,
            },
        );
        let err = Snapshot::from_records(&[], &courses).unwrap_err();
        assert!(matches!(err, SnapshotError::MalformedCourse { ref id, .. } if id == "C1"));

        // The largest representable weight converts without truncation.
        let mut at_limit = BTreeMap::new();
        at_limit.insert(
            "C1".to_string(),
            CourseRecord {
                name: "Algorithms".to_string(),
                credit_weight: i64::from(u32::MAX),
            },
        );
        let snap = Snapshot::from_records(&[], &at_limit).unwrap();
        assert_eq!(snap.courses["C1"].credit_weight, u32::MAX);
    }

    #[test]
    fn dangling_course_reference_is_not_an_error() {
        let snap = Snapshot::from_records(
            &[TaskRecord {
                course_id: Some("GHOST101".to_string()),
                ..record("t4", "assignment", "2025-05-05", "pending")
            }],
            &BTreeMap::new(),
        )
        .unwrap();
        assert_eq!(snap.tasks.len(), 1);
        assert_eq!(snap.tasks[0].course_id.as_deref(), Some("GHOST101"));
    }

    #[test]
    fn valid_records_convert_to_typed_values() {
        let mut courses = BTreeMap::new();
        courses.insert(
            "CS201".to_string(),
            CourseRecord {
                name: "Data Structures".to_string(),
                credit_weight: 4,
            },
        );
        let snap = Snapshot::from_records(
            &[record("t5", "project", "2025-05-12", "completed")],
            &courses,
        )
        .unwrap();

        assert_eq!(snap.tasks[0].kind, TaskKind::Project);
        assert_eq!(snap.tasks[0].status, TaskStatus::Completed);
        assert_eq!(snap.courses["CS201"].credit_weight, 4);
    }

    #[test]
    fn parse_today_rejects_garbage() {
        assert!(parse_today("2025-05-01").is_ok());
        assert!(parse_today("yesterday").is_err());
        assert!(parse_today("2025-13-40").is_err());
    }
}
