//! Shared test utilities for progress and session tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use galaxycode::Session;
use galaxycode::config::Config;
use galaxycode::progress::{FixedClock, ProgressModel};
use galaxycode::store::KvStore;
use tempfile::TempDir;

/// Day D used by the scenario tests
pub fn day_d() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 6).expect("valid date")
}

/// Creates a temporary directory holding a progress database path
pub fn create_data_dir() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("progress.db");
    (temp_dir, db_path)
}

pub fn open_store(path: &Path) -> KvStore {
    KvStore::open(path, None).expect("Failed to open store")
}

/// Progress model on a file-backed store with a clock fixed at noon of `day`
pub fn open_model(path: &Path, day: NaiveDate) -> (Arc<FixedClock>, ProgressModel) {
    let clock = Arc::new(FixedClock::at(day, 12));
    let model = ProgressModel::load(open_store(path), clock.clone(), Default::default());
    (clock, model)
}

/// Config pointing at `db_path` with a short grading delay
pub fn test_config(db_path: &Path) -> Config {
    let mut config = Config::default();
    config.storage.path = Some(db_path.to_path_buf());
    config.playground.submission_delay_ms = 5;
    config
}

pub fn open_session(config: &Config, fragment: Option<&str>) -> Session {
    let store = KvStore::open(&config.storage_path(), config.storage.quota())
        .expect("Failed to open store");
    let clock = Arc::new(FixedClock::at(day_d(), 12));
    Session::new(store, clock, config, fragment)
}
