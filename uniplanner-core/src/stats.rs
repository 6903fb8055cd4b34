//! Pending-work summary statistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scoring::days_until_due;
use crate::task::{Task, TaskKind, TaskStatus};
use crate::workload::effort_units;

/// Pending-task counts per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KindCounts {
    pub exams: usize,
    pub projects: usize,
    pub assignments: usize,
    pub other: usize,
}

/// The soonest-due pending task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextDue {
    pub title: String,
    pub due_date: NaiveDate,
    pub days_until_due: i64,
}

/// One-shot summary of a task snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    /// Share of tasks completed, 0..=100. Zero when there are no tasks.
    pub completion_pct: f64,
    pub pending_effort_units: f64,
    pub pending_by_kind: KindCounts,
    pub next_due: Option<NextDue>,
}

pub fn summarize_tasks(tasks: &[Task], today: NaiveDate) -> TaskStats {
    let total = tasks.len();
    let completed = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    let pending = total - completed;

    let completion_pct = if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    };

    let mut by_kind = KindCounts::default();
    let mut effort = 0.0;
    for task in tasks.iter().filter(|t| t.status == TaskStatus::Pending) {
        effort += effort_units(task);
        match task.kind {
            TaskKind::Exam => by_kind.exams += 1,
            TaskKind::Project => by_kind.projects += 1,
            TaskKind::Assignment => by_kind.assignments += 1,
            TaskKind::Other => by_kind.other += 1,
        }
    }

    let next_due = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Pending)
        .min_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| a.id.cmp(&b.id)))
        .map(|t| NextDue {
            title: t.title.clone(),
            due_date: t.due_date,
            days_until_due: days_until_due(t, today),
        });

    TaskStats {
        total,
        pending,
        completed,
        completion_pct,
        pending_effort_units: effort,
        pending_by_kind: by_kind,
        next_due,
    }
}
