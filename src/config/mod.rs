//! Configuration loading and management

mod io;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::progress::ProgressOptions;
use crate::router::PageId;
use crate::store::DEFAULT_QUOTA_BYTES;

/// Main configuration structure (`~/.galaxycode/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub progress: ProgressSettings,

    #[serde(default)]
    pub navigation: NavigationSettings,

    #[serde(default)]
    pub playground: PlaygroundSettings,
}

/// Where and how much progress data is stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Database file; defaults to `~/.galaxycode/progress.db`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Upper bound on stored bytes, 0 disables the check
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: usize,
}

fn default_quota_bytes() -> usize {
    DEFAULT_QUOTA_BYTES
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: None,
            quota_bytes: default_quota_bytes(),
        }
    }
}

impl StorageSettings {
    pub fn quota(&self) -> Option<usize> {
        (self.quota_bytes > 0).then_some(self.quota_bytes)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressSettings {
    /// Failed attempts also count as activity (moves `lastActivity`)
    #[serde(default)]
    pub failed_attempts_update_activity: bool,
}

impl ProgressSettings {
    pub fn options(&self) -> ProgressOptions {
        ProgressOptions {
            failed_attempts_update_activity: self.failed_attempts_update_activity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationSettings {
    /// Page shown when no valid fragment is given
    #[serde(default = "default_home_page")]
    pub home_page: PageId,
}

fn default_home_page() -> PageId {
    PageId::Home
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            home_page: default_home_page(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaygroundSettings {
    /// Simulated processing time before a submission is graded
    #[serde(default = "default_submission_delay_ms")]
    pub submission_delay_ms: u64,
}

fn default_submission_delay_ms() -> u64 {
    2000
}

impl Default for PlaygroundSettings {
    fn default() -> Self {
        Self {
            submission_delay_ms: default_submission_delay_ms(),
        }
    }
}
