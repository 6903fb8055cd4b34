//! Priority scoring.
//!
//! score = urgency_term * kind_weight + credit_weight * CREDIT_WEIGHT_FACTOR
//!
//! Urgency dominates near a deadline, kind scales it, and the credit term
//! keeps far-out tasks from heavy courses above zero. Deterministic and
//! side-effect free; the evaluation date always comes from the caller.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::course::Course;
use crate::task::Task;

/// Days ahead over which the urgency term decays to zero.
pub const URGENCY_HORIZON_DAYS: i64 = 10;

/// Multiplier applied to a course's credit weight.
pub const CREDIT_WEIGHT_FACTOR: f64 = 2.0;

/// Credit weight assumed when a task is unbound or its course is unknown.
pub const BASELINE_CREDIT_WEIGHT: u32 = 1;

/// Signed days from `today` to the task's due date. Negative when overdue.
pub fn days_until_due(task: &Task, today: NaiveDate) -> i64 {
    (task.due_date - today).num_days()
}

/// Urgency term in `0..=URGENCY_HORIZON_DAYS`. Overdue tasks clamp to the
/// maximum: being further overdue never lowers (or raises) urgency.
pub fn urgency_term(days_until_due: i64) -> f64 {
    (URGENCY_HORIZON_DAYS - days_until_due.clamp(0, URGENCY_HORIZON_DAYS)) as f64
}

/// Priority score for one task. Always finite.
pub fn score(task: &Task, credit_weight: u32, today: NaiveDate) -> f64 {
    let urgency = urgency_term(days_until_due(task, today));
    urgency * task.kind.weight() + f64::from(credit_weight) * CREDIT_WEIGHT_FACTOR
}

/// Resolve the credit weight for a task's course, falling back to the
/// baseline when the task is unbound or references an unknown course.
pub fn credit_weight_for(task: &Task, courses: &BTreeMap<String, Course>) -> u32 {
    task.course_id
        .as_deref()
        .and_then(|id| courses.get(id))
        .map(|course| course.credit_weight)
        .unwrap_or(BASELINE_CREDIT_WEIGHT)
}
