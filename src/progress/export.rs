//! Human-readable progress export

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::record::ProgressRecord;
use super::stats::percent;
use crate::catalog;

/// Default file name for exports
pub const EXPORT_FILE_NAME: &str = "learning-progress.json";

/// Exported progress: the record itself plus an export timestamp and totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    #[serde(flatten)]
    pub progress: ProgressRecord,
    pub exported_at: DateTime<FixedOffset>,
    pub completed_count: usize,
    pub successful_count: usize,
    pub success_rate: u32,
    pub total_challenges: usize,
}

impl ExportDocument {
    pub fn new(record: &ProgressRecord, exported_at: DateTime<FixedOffset>) -> Self {
        let completed_count = record.completed_count();
        let successful_count = record.successful_count();
        Self {
            progress: record.clone(),
            exported_at,
            completed_count,
            successful_count,
            success_rate: percent(successful_count, completed_count),
            total_challenges: catalog::total(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
