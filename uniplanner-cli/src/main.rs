use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use uniplanner_core::{
    course_load, deadline_alerts, overdue, recommend, study_plan, summarize_tasks, urgent,
    weekly_load, AlertPolicy, CourseRecord, Snapshot, StudyIntensity, TaskRecord,
};

mod config;

#[derive(Parser, Debug)]
#[command(name = "uniplanner", version, about = "UniPlanner task prioritization CLI")]
struct Cli {
    /// Tasks snapshot (JSON array). Defaults to the configured path.
    #[arg(long, global = true)]
    tasks: Option<PathBuf>,

    /// Courses snapshot (JSON map). Defaults to the configured path.
    #[arg(long, global = true)]
    courses: Option<PathBuf>,

    /// Evaluation date (YYYY-MM-DD). Defaults to the local current date.
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full payload: top priorities, urgent tasks, weekly workload
    Recommend {
        /// Override the configured number of priority tasks
        #[arg(long)]
        top_n: Option<i64>,

        /// Emit the raw JSON payload instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Pending tasks due within the urgency window
    Urgent {
        /// Override the configured window (days)
        #[arg(long)]
        window: Option<i64>,
    },

    /// Pending tasks whose due date has already passed
    Overdue,

    /// Estimated effort per ISO week and per course
    Workload,

    /// Snapshot summary statistics
    Stats,

    /// Greedy study plan over the top-ranked tasks
    Plan {
        /// intensive, moderate, or light
        #[arg(long, default_value = "moderate")]
        intensity: String,
    },

    /// Deadline alerts for imminent and overdue work
    Alerts,

    /// Manage ~/.uniplanner/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,

    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let cfg = config::load_config()?;

    // Config management needs no snapshot.
    if let Command::Config { command } = &cli.command {
        return match command {
            ConfigCommand::Init => config::init_config(),
            ConfigCommand::Show => config::show_config(&cfg),
        };
    }

    let snapshot = load_snapshot(&cli, &cfg)?;
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    debug!(
        "evaluating {} tasks / {} courses at {}",
        snapshot.tasks.len(),
        snapshot.courses.len(),
        today
    );

    match cli.command {
        Command::Recommend { top_n, json } => run_recommend(&snapshot, today, &cfg, top_n, json),
        Command::Urgent { window } => run_urgent(&snapshot, today, &cfg, window),
        Command::Overdue => run_overdue(&snapshot, today),
        Command::Workload => run_workload(&snapshot, today, &cfg),
        Command::Stats => run_stats(&snapshot, today),
        Command::Plan { intensity } => run_plan(&snapshot, today, &intensity),
        Command::Alerts => run_alerts(&snapshot, today),
        Command::Config { .. } => unreachable!("handled above"),
    }
}

fn load_snapshot(cli: &Cli, cfg: &config::Config) -> Result<Snapshot> {
    let tasks_path = cli
        .tasks
        .clone()
        .unwrap_or_else(|| PathBuf::from(&cfg.data.tasks_file));
    let courses_path = cli
        .courses
        .clone()
        .unwrap_or_else(|| PathBuf::from(&cfg.data.courses_file));

    let tasks: Vec<TaskRecord> = read_json(&tasks_path)?;
    let courses: BTreeMap<String, CourseRecord> = read_json(&courses_path)?;
    debug!(
        "loaded {} task records from {}",
        tasks.len(),
        tasks_path.display()
    );

    let snapshot = Snapshot::from_records(&tasks, &courses).context("validate snapshot")?;
    Ok(snapshot)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

fn run_recommend(
    snapshot: &Snapshot,
    today: NaiveDate,
    cfg: &config::Config,
    top_n: Option<i64>,
    json: bool,
) -> Result<()> {
    let mut engine_cfg = cfg.recommend.engine_config();
    if let Some(n) = top_n {
        engine_cfg.top_n = n;
    }

    let result = recommend(&snapshot.tasks, &snapshot.courses, today, &engine_cfg)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("# Recommendations for {today}\n");

    println!("## Top priorities\n");
    if result.priority_tasks.is_empty() {
        println!("(nothing pending)");
    }
    for (i, s) in result.priority_tasks.iter().enumerate() {
        println!(
            "{}. [{}] {} | due {} ({}) | score {:.1}",
            i + 1,
            s.task.kind.as_str(),
            s.task.title,
            s.task.due_date,
            describe_days(s.days_until_due),
            s.score
        );
    }

    println!("\n## Urgent (next {} days)\n", engine_cfg.urgent_window_days);
    if result.urgent_tasks.is_empty() {
        println!("(none)");
    }
    for t in &result.urgent_tasks {
        println!("- {} | {}", t.due_date, t.title);
    }

    println!("\n## Weekly workload\n");
    if result.weekly_workload.is_empty() {
        println!("(nothing due in the horizon)");
    }
    for w in &result.weekly_workload {
        println!("- {} | {:.1} units", w.week, w.units);
    }

    Ok(())
}

fn run_urgent(
    snapshot: &Snapshot,
    today: NaiveDate,
    cfg: &config::Config,
    window: Option<i64>,
) -> Result<()> {
    let window = window.unwrap_or(cfg.recommend.urgent_window_days);
    if window < 0 {
        bail!("window must be non-negative, got {window}");
    }

    let tasks = urgent(&snapshot.tasks, today, window);
    println!("# Urgent tasks (next {window} days)\n");
    if tasks.is_empty() {
        println!("(none)");
    }
    for t in &tasks {
        println!("- {} | [{}] {}", t.due_date, t.kind.as_str(), t.title);
    }
    Ok(())
}

fn run_overdue(snapshot: &Snapshot, today: NaiveDate) -> Result<()> {
    let tasks = overdue(&snapshot.tasks, today);
    println!("# Overdue tasks\n");
    if tasks.is_empty() {
        println!("(none)");
    }
    for t in &tasks {
        println!(
            "- {} | [{}] {} ({})",
            t.due_date,
            t.kind.as_str(),
            t.title,
            describe_days((t.due_date - today).num_days())
        );
    }
    Ok(())
}

fn run_workload(snapshot: &Snapshot, today: NaiveDate, cfg: &config::Config) -> Result<()> {
    let horizon = cfg.recommend.workload_horizon_weeks;
    if horizon < 0 {
        bail!("workload_horizon_weeks must be non-negative, got {horizon}");
    }

    println!("# Workload\n");

    println!("## By week (horizon {horizon} weeks)\n");
    let weekly = weekly_load(&snapshot.tasks, today, horizon);
    if weekly.is_empty() {
        println!("(nothing due in the horizon)");
    }
    for w in &weekly {
        println!("- {} | {:.1} units", w.week, w.units);
    }

    println!("\n## By course\n");
    let per_course = course_load(&snapshot.tasks, &snapshot.courses);
    if per_course.is_empty() {
        println!("(nothing pending)");
    }
    for c in &per_course {
        println!("- {} | {:.1} units", c.course, c.units);
    }
    Ok(())
}

fn run_stats(snapshot: &Snapshot, today: NaiveDate) -> Result<()> {
    let s = summarize_tasks(&snapshot.tasks, today);
    println!("# Task stats\n");
    println!("Total:      {}", s.total);
    println!("Pending:    {}", s.pending);
    println!("Completed:  {} ({:.1}%)", s.completed, s.completion_pct);
    println!("Pending effort: {:.1} units", s.pending_effort_units);
    println!(
        "Pending by kind: {} exams, {} projects, {} assignments, {} other",
        s.pending_by_kind.exams,
        s.pending_by_kind.projects,
        s.pending_by_kind.assignments,
        s.pending_by_kind.other
    );
    match &s.next_due {
        Some(next) => println!(
            "Next due:   {} | {} ({})",
            next.due_date,
            next.title,
            describe_days(next.days_until_due)
        ),
        None => println!("Next due:   (nothing pending)"),
    }
    Ok(())
}

fn run_plan(snapshot: &Snapshot, today: NaiveDate, intensity: &str) -> Result<()> {
    let Some(intensity) = StudyIntensity::parse(intensity) else {
        bail!("unknown intensity {intensity:?} (expected intensive|moderate|light)");
    };

    let plan = study_plan(&snapshot.tasks, &snapshot.courses, today, intensity);
    println!(
        "# Study plan ({}, {:.1} units/day)\n",
        intensity.as_str(),
        intensity.daily_units()
    );
    if plan.is_empty() {
        println!("(nothing pending)");
    }
    for day in &plan {
        println!("## {} | {:.1} units\n", day.date, day.units);
        for title in &day.tasks {
            println!("- {title}");
        }
        println!();
    }
    Ok(())
}

fn run_alerts(snapshot: &Snapshot, today: NaiveDate) -> Result<()> {
    let alerts = deadline_alerts(&snapshot.tasks, today, AlertPolicy::default());
    println!("# Deadline alerts\n");
    if alerts.is_empty() {
        println!("(none)");
    }
    for a in &alerts {
        println!("- [{:?}] {}", a.severity, a.message);
    }
    Ok(())
}

fn describe_days(days: i64) -> String {
    match days {
        d if d < -1 => format!("{} days overdue", -d),
        -1 => "1 day overdue".to_string(),
        0 => "due today".to_string(),
        1 => "in 1 day".to_string(),
        d => format!("in {d} days"),
    }
}
