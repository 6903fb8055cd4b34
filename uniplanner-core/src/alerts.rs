//! Deadline alert projection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scoring::days_until_due;
use crate::task::{Task, TaskStatus};

/// Variant order doubles as sort order: critical alerts come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Critical,
    High,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AlertPolicy {
    /// Due within this many days (or overdue) is critical.
    pub critical_within_days: i64,
    /// Due within this many days is worth an alert at all.
    pub high_within_days: i64,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            critical_within_days: 1,
            high_within_days: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadlineAlert {
    pub task_id: String,
    pub severity: AlertSeverity,
    pub message: String,
    pub due_date: NaiveDate,
}

/// Project pending tasks into deadline alerts, most pressing first.
/// Completed tasks and tasks outside the alert window emit nothing.
pub fn deadline_alerts(tasks: &[Task], today: NaiveDate, policy: AlertPolicy) -> Vec<DeadlineAlert> {
    let mut out = Vec::new();
    for task in tasks {
        if task.status == TaskStatus::Completed {
            continue;
        }
        let days = days_until_due(task, today);
        if days > policy.high_within_days {
            continue;
        }
        let severity = if days <= policy.critical_within_days {
            AlertSeverity::Critical
        } else {
            AlertSeverity::High
        };
        out.push(DeadlineAlert {
            task_id: task.id.clone(),
            severity,
            message: alert_message(&task.title, days),
            due_date: task.due_date,
        });
    }
    out.sort_by(|a, b| {
        a.severity
            .cmp(&b.severity)
            .then_with(|| a.due_date.cmp(&b.due_date))
            .then_with(|| a.task_id.cmp(&b.task_id))
    });
    out
}

fn alert_message(title: &str, days_until_due: i64) -> String {
    match days_until_due {
        d if d < -1 => format!("{title} is overdue by {} days", -d),
        -1 => format!("{title} is overdue by 1 day"),
        0 => format!("{title} is due today"),
        1 => format!("{title} is due tomorrow"),
        d => format!("{title} is due in {d} days"),
    }
}
