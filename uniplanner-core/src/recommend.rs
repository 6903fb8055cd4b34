//! Recommendation facade.
//!
//! The one entry point the API layer calls. All three payload components are
//! computed from the same immutable snapshot and evaluation date, so they
//! always reflect one consistent view. Pure: identical inputs produce an
//! identical payload.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::pipeline::{rank, ScoredTask};
use crate::snapshot::{
    parse_today, CourseRecord, Snapshot, SnapshotError, SnapshotResult, TaskRecord,
};
use crate::task::Task;
use crate::urgency::urgent;
use crate::workload::{weekly_load, WeekLoad};

pub const DEFAULT_TOP_N: i64 = 5;
pub const DEFAULT_URGENT_WINDOW_DAYS: i64 = 3;
pub const DEFAULT_WORKLOAD_HORIZON_WEEKS: i64 = 4;

/// Tuning knobs for one recommendation call.
///
/// Signed fields so out-of-range caller input is reportable through
/// `validate` instead of failing at the serialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendConfig {
    pub top_n: i64,
    pub urgent_window_days: i64,
    pub workload_horizon_weeks: i64,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            urgent_window_days: DEFAULT_URGENT_WINDOW_DAYS,
            workload_horizon_weeks: DEFAULT_WORKLOAD_HORIZON_WEEKS,
        }
    }
}

impl RecommendConfig {
    /// Zero is legal everywhere (it shrinks the corresponding output);
    /// negatives are not.
    pub fn validate(&self) -> Result<(), String> {
        if self.top_n < 0 {
            return Err(format!("top_n must be non-negative, got {}", self.top_n));
        }
        if self.urgent_window_days < 0 {
            return Err(format!(
                "urgent_window_days must be non-negative, got {}",
                self.urgent_window_days
            ));
        }
        if self.workload_horizon_weeks < 0 {
            return Err(format!(
                "workload_horizon_weeks must be non-negative, got {}",
                self.workload_horizon_weeks
            ));
        }
        Ok(())
    }
}

/// Response payload for one recommendation call. Transient; the caller
/// marshals it straight out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub priority_tasks: Vec<ScoredTask>,
    pub urgent_tasks: Vec<Task>,
    pub weekly_workload: Vec<WeekLoad>,
}

/// Produce the recommendation payload from typed, already-validated values.
pub fn recommend(
    tasks: &[Task],
    courses: &BTreeMap<String, Course>,
    today: NaiveDate,
    config: &RecommendConfig,
) -> SnapshotResult<RecommendationResult> {
    config
        .validate()
        .map_err(|reason| SnapshotError::InvalidConfig { reason })?;

    Ok(RecommendationResult {
        priority_tasks: rank(tasks, courses, today, config.top_n as usize),
        urgent_tasks: urgent(tasks, today, config.urgent_window_days),
        weekly_workload: weekly_load(tasks, today, config.workload_horizon_weeks),
    })
}

/// Wire-level entry point: validate raw records and the evaluation date,
/// then compute. Any malformed record rejects the whole batch; a partial
/// payload would be worse than none.
pub fn recommend_records(
    tasks: &[TaskRecord],
    courses: &BTreeMap<String, CourseRecord>,
    today: &str,
    config: &RecommendConfig,
) -> SnapshotResult<RecommendationResult> {
    let snapshot = Snapshot::from_records(tasks, courses)?;
    let today = parse_today(today)?;
    recommend(&snapshot.tasks, &snapshot.courses, today, config)
}
