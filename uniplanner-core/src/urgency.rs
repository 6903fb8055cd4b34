//! Near-term and overdue classification.
//!
//! The two buckets are disjoint: overdue tasks never show up as "urgent",
//! they get their own list so the caller can surface them differently.

use chrono::{Duration, NaiveDate};

use crate::task::{Task, TaskStatus};

/// Pending tasks due within `[today, today + window_days]` inclusive,
/// soonest first, ties by ascending id. A window of 0 keeps only tasks due
/// today; a window past the end of the calendar saturates instead of
/// overflowing.
pub fn urgent(tasks: &[Task], today: NaiveDate, window_days: i64) -> Vec<Task> {
    let cutoff = Duration::try_days(window_days)
        .and_then(|window| today.checked_add_signed(window))
        .unwrap_or(NaiveDate::MAX);
    let mut out: Vec<Task> = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Pending)
        .filter(|t| t.due_date >= today && t.due_date <= cutoff)
        .cloned()
        .collect();
    out.sort_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| a.id.cmp(&b.id)));
    out
}

/// Pending tasks whose due date has already passed, oldest first.
pub fn overdue(tasks: &[Task], today: NaiveDate) -> Vec<Task> {
    let mut out: Vec<Task> = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Pending && t.due_date < today)
        .cloned()
        .collect();
    out.sort_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| a.id.cmp(&b.id)));
    out
}
