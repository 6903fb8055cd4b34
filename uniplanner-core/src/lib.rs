//! uniplanner-core: pure prioritization and workload engine for UniPlanner.
//!
//! The crate performs no I/O, reads no clock, and keeps no state between
//! calls. Callers hand it an immutable snapshot of tasks and courses plus an
//! evaluation date; it hands back freshly derived rankings, classifications,
//! and aggregates.

pub mod task;
pub mod course;
pub mod snapshot;
pub mod scoring;
pub mod pipeline;
pub mod urgency;
pub mod workload;
pub mod stats;
pub mod plan;
pub mod alerts;
pub mod recommend;

pub use task::{Task, TaskKind, TaskStatus};
pub use course::Course;
pub use snapshot::{CourseRecord, Snapshot, SnapshotError, SnapshotResult, TaskRecord};
pub use scoring::{credit_weight_for, days_until_due, score, urgency_term};
pub use pipeline::{rank, ScoredTask};
pub use urgency::{overdue, urgent};
pub use workload::{course_load, effort_units, weekly_load, CourseLoad, WeekLoad};
pub use stats::{summarize_tasks, KindCounts, NextDue, TaskStats};
pub use plan::{study_plan, StudyDay, StudyIntensity};
pub use alerts::{deadline_alerts, AlertPolicy, AlertSeverity, DeadlineAlert};
pub use recommend::{
    recommend, recommend_records, RecommendConfig, RecommendationResult,
};
