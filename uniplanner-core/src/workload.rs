//! Effort estimation and workload aggregation.
//!
//! Two views of the same pending effort: by ISO week of the due date
//! (bounded forward horizon, sparse, chronological) and by course
//! (heaviest first).

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::task::{Task, TaskStatus};

/// Base effort units every pending task contributes.
pub const WORKLOAD_BASE_UNITS: f64 = 2.0;

/// Bucket label for tasks not bound to a known course.
pub const UNASSIGNED_COURSE_LABEL: &str = "unassigned";

/// One week's aggregated load, labeled `YYYY-Www`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekLoad {
    pub week: String,
    pub units: f64,
}

/// One course's aggregated load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseLoad {
    pub course: String,
    pub units: f64,
}

/// Effort estimate for one task: base units plus its kind weight, so exams
/// and projects weigh more than routine work.
pub fn effort_units(task: &Task) -> f64 {
    WORKLOAD_BASE_UNITS + task.kind.weight()
}

/// Aggregate pending effort per ISO week, from the current week through
/// `horizon_weeks` whole weeks ahead (inclusive). Weeks with nothing due
/// are omitted; the result is chronological. A horizon past the end of the
/// calendar saturates instead of overflowing.
pub fn weekly_load(tasks: &[Task], today: NaiveDate, horizon_weeks: i64) -> Vec<WeekLoad> {
    let first = week_start(today);
    let last = Duration::try_weeks(horizon_weeks)
        .and_then(|span| first.checked_add_signed(span))
        .unwrap_or(NaiveDate::MAX);

    // Keyed by week start so ordering is by date, not labels.
    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for task in tasks.iter().filter(|t| t.status == TaskStatus::Pending) {
        let start = week_start(task.due_date);
        if start < first || start > last {
            continue;
        }
        *buckets.entry(start).or_insert(0.0) += effort_units(task);
    }

    buckets
        .into_iter()
        .map(|(start, units)| WeekLoad {
            week: week_label(start),
            units,
        })
        .collect()
}

/// Aggregate pending effort per course name, heaviest first, ties by name.
/// Tasks that are unbound (or reference an unknown course) group under
/// [`UNASSIGNED_COURSE_LABEL`].
pub fn course_load(tasks: &[Task], courses: &BTreeMap<String, Course>) -> Vec<CourseLoad> {
    let mut buckets: BTreeMap<String, f64> = BTreeMap::new();
    for task in tasks.iter().filter(|t| t.status == TaskStatus::Pending) {
        let name = task
            .course_id
            .as_deref()
            .and_then(|id| courses.get(id))
            .map(|course| course.name.clone())
            .unwrap_or_else(|| UNASSIGNED_COURSE_LABEL.to_string());
        *buckets.entry(name).or_insert(0.0) += effort_units(task);
    }

    let mut out: Vec<CourseLoad> = buckets
        .into_iter()
        .map(|(course, units)| CourseLoad { course, units })
        .collect();
    out.sort_by(|a, b| b.units.total_cmp(&a.units).then_with(|| a.course.cmp(&b.course)));
    out
}

/// Monday of the ISO week containing `date`.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// ISO week label, e.g. `2025-W18`. The ISO year can differ from the
/// calendar year around January 1st.
fn week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}
