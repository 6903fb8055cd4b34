use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use uniplanner_core::recommend::{
    DEFAULT_TOP_N, DEFAULT_URGENT_WINDOW_DAYS, DEFAULT_WORKLOAD_HORIZON_WEEKS,
};
use uniplanner_core::RecommendConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data: DataSection,
    pub recommend: RecommendSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSection {
    /// JSON array of task records.
    pub tasks_file: String,
    /// JSON map of course id to course record.
    pub courses_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendSection {
    pub top_n: i64,
    pub urgent_window_days: i64,
    pub workload_horizon_weeks: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataSection {
                tasks_file: "sample-data/tasks.json".to_string(),
                courses_file: "sample-data/courses.json".to_string(),
            },
            recommend: RecommendSection {
                top_n: DEFAULT_TOP_N,
                urgent_window_days: DEFAULT_URGENT_WINDOW_DAYS,
                workload_horizon_weeks: DEFAULT_WORKLOAD_HORIZON_WEEKS,
            },
        }
    }
}

impl RecommendSection {
    pub fn engine_config(&self) -> RecommendConfig {
        RecommendConfig {
            top_n: self.top_n,
            urgent_window_days: self.urgent_window_days,
            workload_horizon_weeks: self.workload_horizon_weeks,
        }
    }
}

pub fn uniplanner_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".uniplanner"))
}

pub fn ensure_uniplanner_home() -> Result<PathBuf> {
    let dir = uniplanner_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_uniplanner_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let cfg = Config::default();
    save_config(&cfg)?;
    println!("Wrote {}", p.display());
    Ok(())
}

pub fn show_config(cfg: &Config) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    print!("{s}");
    Ok(())
}
