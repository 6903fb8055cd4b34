use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use uniplanner_core::{
    course_load, deadline_alerts, overdue, recommend, recommend_records, study_plan,
    summarize_tasks, AlertPolicy, CourseRecord, RecommendConfig, Snapshot, SnapshotError,
    StudyIntensity, TaskRecord,
};

fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("sample-data")
        .join(name)
}

fn load_sample() -> (Vec<TaskRecord>, BTreeMap<String, CourseRecord>) {
    let tasks: Vec<TaskRecord> =
        serde_json::from_str(&std::fs::read_to_string(sample_path("tasks.json")).unwrap())
            .unwrap();
    let courses: BTreeMap<String, CourseRecord> =
        serde_json::from_str(&std::fs::read_to_string(sample_path("courses.json")).unwrap())
            .unwrap();
    (tasks, courses)
}

fn eval_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
}

#[test]
fn sample_snapshot_validates_cleanly() {
    let (tasks, courses) = load_sample();
    let snap = Snapshot::from_records(&tasks, &courses).unwrap();
    assert_eq!(snap.tasks.len(), 12);
    assert_eq!(snap.courses.len(), 4);
}

#[test]
fn default_payload_over_sample_data() {
    let (tasks, courses) = load_sample();
    let result =
        recommend_records(&tasks, &courses, "2025-05-01", &RecommendConfig::default()).unwrap();

    // The imminent midterm leads; the overdue lab is close behind on maxed
    // urgency despite the lighter kind weight.
    let top_ids: Vec<&str> = result
        .priority_tasks
        .iter()
        .map(|s| s.task.id.as_str())
        .collect();
    assert_eq!(top_ids, vec!["t01", "t03", "t02", "t04", "t05"]);

    for pair in result.priority_tasks.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    // Urgent holds only upcoming work inside the window; the overdue lab is
    // classified separately.
    let urgent_ids: Vec<&str> = result.urgent_tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(urgent_ids, vec!["t01", "t05", "t04"]);

    let weeks: Vec<&str> = result
        .weekly_workload
        .iter()
        .map(|w| w.week.as_str())
        .collect();
    assert_eq!(
        weeks,
        vec!["2025-W18", "2025-W19", "2025-W20", "2025-W21", "2025-W22"]
    );
    assert_eq!(result.weekly_workload[0].units, 15.0);
    assert_eq!(result.weekly_workload[1].units, 14.0);
}

#[test]
fn completed_tasks_stay_out_of_every_component() {
    let (tasks, courses) = load_sample();
    let result =
        recommend_records(&tasks, &courses, "2025-05-01", &RecommendConfig::default()).unwrap();

    assert!(result.priority_tasks.iter().all(|s| s.task.id != "t09"));
    assert!(result.urgent_tasks.iter().all(|t| t.id != "t09"));
    // The completed worksheet's week (W17) contributes no bucket at all.
    assert!(result.weekly_workload.iter().all(|w| w.week != "2025-W17"));
}

#[test]
fn payload_is_stable_across_repeated_calls() {
    let (tasks, courses) = load_sample();
    let a = recommend_records(&tasks, &courses, "2025-05-01", &RecommendConfig::default()).unwrap();
    let b = recommend_records(&tasks, &courses, "2025-05-01", &RecommendConfig::default()).unwrap();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn dangling_course_reference_scores_at_baseline() {
    let (tasks, courses) = load_sample();
    let snap = Snapshot::from_records(&tasks, &courses).unwrap();
    let result = recommend(
        &snap.tasks,
        &snap.courses,
        eval_date(),
        &RecommendConfig {
            top_n: 20,
            ..RecommendConfig::default()
        },
    )
    .unwrap();

    let orphan = result
        .priority_tasks
        .iter()
        .find(|s| s.task.id == "t11")
        .expect("task with unknown course still ranks");
    // urgency 5 * kind 1.0 + baseline credit 1 * 2.0
    assert_eq!(orphan.score, 7.0);
}

#[test]
fn overdue_classification_catches_the_late_lab() {
    let (tasks, courses) = load_sample();
    let snap = Snapshot::from_records(&tasks, &courses).unwrap();
    let late: Vec<String> = overdue(&snap.tasks, eval_date())
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(late, vec!["t03"]);
}

#[test]
fn course_load_ranks_heaviest_course_first() {
    let (tasks, courses) = load_sample();
    let snap = Snapshot::from_records(&tasks, &courses).unwrap();
    let load = course_load(&snap.tasks, &snap.courses);

    assert_eq!(load[0].course, "Data Structures");
    assert_eq!(load[0].units, 11.0);
    assert_eq!(load[1].course, "Linear Algebra");
    // Unbound and unknown-course tasks pool at the bottom bucket.
    assert_eq!(load.last().unwrap().course, "unassigned");
    assert_eq!(load.last().unwrap().units, 6.0);
}

#[test]
fn stats_summarize_the_sample_snapshot() {
    let (tasks, courses) = load_sample();
    let snap = Snapshot::from_records(&tasks, &courses).unwrap();
    let s = summarize_tasks(&snap.tasks, eval_date());

    assert_eq!(s.total, 12);
    assert_eq!(s.pending, 11);
    assert_eq!(s.completed, 1);
    assert!((s.completion_pct - 100.0 / 12.0).abs() < 1e-9);

    let next = s.next_due.unwrap();
    assert_eq!(next.title, "Binary search tree lab");
    assert_eq!(next.days_until_due, -2);
}

#[test]
fn study_plan_starts_today_and_covers_the_top_of_the_ranking() {
    let (tasks, courses) = load_sample();
    let snap = Snapshot::from_records(&tasks, &courses).unwrap();
    let plan = study_plan(&snap.tasks, &snap.courses, eval_date(), StudyIntensity::Moderate);

    assert_eq!(plan[0].date, eval_date());
    assert_eq!(plan[0].tasks, vec!["Linear Algebra midterm"]);
    let total_tasks: usize = plan.iter().map(|d| d.tasks.len()).sum();
    assert_eq!(total_tasks, 10);
    for pair in plan.windows(2) {
        assert!(pair[1].date > pair[0].date);
    }
}

#[test]
fn alerts_cover_overdue_and_imminent_work() {
    let (tasks, courses) = load_sample();
    let snap = Snapshot::from_records(&tasks, &courses).unwrap();
    let alerts = deadline_alerts(&snap.tasks, eval_date(), AlertPolicy::default());

    let ids: Vec<&str> = alerts.iter().map(|a| a.task_id.as_str()).collect();
    assert_eq!(ids, vec!["t03", "t01", "t05", "t04"]);
    assert_eq!(alerts[0].message, "Binary search tree lab is overdue by 2 days");
}

#[test]
fn corrupted_record_rejects_the_whole_batch() {
    let (mut tasks, courses) = load_sample();
    tasks[4].status = "in_progress".to_string();

    let err =
        recommend_records(&tasks, &courses, "2025-05-01", &RecommendConfig::default()).unwrap_err();
    assert!(matches!(err, SnapshotError::MalformedTask { ref id, .. } if id == "t05"));
}
