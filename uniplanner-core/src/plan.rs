//! Study-plan generation.
//!
//! Takes the top of the ranking and packs it into consecutive days, greedily
//! filling each day up to the chosen intensity's capacity. The plan is a
//! suggestion for working through the backlog in priority order; it does not
//! reshuffle tasks to optimize against due dates.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::pipeline::rank;
use crate::task::Task;
use crate::workload::effort_units;

/// How many top-ranked tasks a plan draws from.
pub const PLAN_TASK_LIMIT: usize = 10;

/// Daily effort budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyIntensity {
    Intensive,
    Moderate,
    Light,
}

impl StudyIntensity {
    /// Effort units one day at this intensity can absorb.
    pub fn daily_units(&self) -> f64 {
        match self {
            StudyIntensity::Intensive => 6.0,
            StudyIntensity::Moderate => 4.0,
            StudyIntensity::Light => 2.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StudyIntensity::Intensive => "intensive",
            StudyIntensity::Moderate => "moderate",
            StudyIntensity::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "intensive" => Some(StudyIntensity::Intensive),
            "moderate" => Some(StudyIntensity::Moderate),
            "light" => Some(StudyIntensity::Light),
            _ => None,
        }
    }
}

/// One day of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyDay {
    pub date: NaiveDate,
    /// Task titles in priority order.
    pub tasks: Vec<String>,
    pub units: f64,
}

/// Pack the top-ranked pending tasks into study days starting at `today`.
///
/// A task that fits the current day's remaining capacity joins it; otherwise
/// the day closes and the task opens the next day. A task larger than a full
/// day still gets a day to itself rather than being dropped.
pub fn study_plan(
    tasks: &[Task],
    courses: &BTreeMap<String, Course>,
    today: NaiveDate,
    intensity: StudyIntensity,
) -> Vec<StudyDay> {
    let ranked = rank(tasks, courses, today, PLAN_TASK_LIMIT);
    let capacity = intensity.daily_units();

    let mut days: Vec<StudyDay> = Vec::new();
    let mut current = StudyDay {
        date: today,
        tasks: Vec::new(),
        units: 0.0,
    };

    for scored in &ranked {
        let effort = effort_units(&scored.task);
        if current.units + effort > capacity && !current.tasks.is_empty() {
            let next_date = current.date + Duration::days(1);
            days.push(current);
            current = StudyDay {
                date: next_date,
                tasks: Vec::new(),
                units: 0.0,
            };
        }
        current.tasks.push(scored.task.title.clone());
        current.units += effort;
    }
    if !current.tasks.is_empty() {
        days.push(current);
    }
    days
}
