//! Ranking pipeline: filter pending, score, order, truncate.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::scoring::{credit_weight_for, days_until_due, score};
use crate::task::{Task, TaskStatus};

/// A task with its computed priority. Built fresh per evaluation, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    #[serde(flatten)]
    pub task: Task,
    pub score: f64,
    pub days_until_due: i64,
}

/// Rank pending tasks, highest score first, truncated to `limit`.
///
/// Ties break by earlier due date, then ascending task id, so repeated runs
/// over the same snapshot produce the same order. A limit of 0 yields an
/// empty sequence.
pub fn rank(
    tasks: &[Task],
    courses: &BTreeMap<String, Course>,
    today: NaiveDate,
    limit: usize,
) -> Vec<ScoredTask> {
    let mut scored: Vec<ScoredTask> = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Pending)
        .map(|t| {
            let credit = credit_weight_for(t, courses);
            ScoredTask {
                score: score(t, credit, today),
                days_until_due: days_until_due(t, today),
                task: t.clone(),
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.task.due_date.cmp(&b.task.due_date))
            .then_with(|| a.task.id.cmp(&b.task.id))
    });
    scored.truncate(limit);
    scored
}
