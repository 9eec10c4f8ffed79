//! Progress record and its persisted forms
//!
//! [`ProgressRecord`] is the canonical in-memory and on-disk shape. Data read
//! back from storage goes through [`StoredRecord`] first, which accepts the
//! older layouts (boolean entries, date-only timestamps) and drops anything
//! that no longer resolves to a known challenge or achievement.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::achievements::AchievementId;
use super::timestamp::parse_timestamp;
use crate::catalog::{self, Category};

/// Result of the latest attempt at one challenge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEntry {
    pub title: String,
    pub category: Category,
    pub success: bool,
    /// Missing for entries migrated from the boolean layout
    pub completed_at: Option<DateTime<FixedOffset>>,
}

/// Everything persisted about the learner's progress
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub completed_challenges: BTreeMap<String, CompletionEntry>,
    pub achievements: BTreeSet<String>,
    pub streak: u32,
    pub last_activity: Option<DateTime<FixedOffset>>,
}

impl ProgressRecord {
    /// Challenges attempted at least once
    pub fn completed_count(&self) -> usize {
        self.completed_challenges.len()
    }

    /// Challenges whose latest attempt succeeded
    pub fn successful_count(&self) -> usize {
        self.completed_challenges.values().filter(|e| e.success).count()
    }

    pub fn is_successful(&self, challenge_id: &str) -> bool {
        self.completed_challenges
            .get(challenge_id)
            .is_some_and(|e| e.success)
    }

    /// Successful challenges in `category`
    pub fn successful_in(&self, category: Category) -> usize {
        self.completed_challenges
            .values()
            .filter(|e| e.success && e.category == category)
            .count()
    }

    pub fn has_achievement(&self, id: AchievementId) -> bool {
        self.achievements.contains(id.as_str())
    }
}

/// Loosely typed view of a persisted record
///
/// Entries are kept as raw JSON so that one bad entry does not discard the
/// rest of the record.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoredRecord {
    #[serde(default)]
    completed_challenges: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    achievements: Vec<serde_json::Value>,
    #[serde(default)]
    streak: Option<serde_json::Number>,
    #[serde(default)]
    last_activity: Option<String>,
}

/// One persisted entry, in either layout
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Flag(bool),
    Detailed {
        success: bool,
        #[serde(default, rename = "completedAt")]
        completed_at: Option<String>,
    },
}

impl StoredRecord {
    /// Normalize into the canonical record, logging everything dropped
    pub(crate) fn into_record(self) -> ProgressRecord {
        let mut record = ProgressRecord::default();

        for (id, value) in self.completed_challenges {
            let Some(descriptor) = catalog::challenge(&id) else {
                tracing::warn!("Dropping progress for unknown challenge '{}'", id);
                continue;
            };

            let (success, completed_at) = match serde_json::from_value::<StoredEntry>(value) {
                Ok(StoredEntry::Flag(success)) => (success, None),
                Ok(StoredEntry::Detailed {
                    success,
                    completed_at,
                }) => (success, completed_at.as_deref().and_then(parse_logged)),
                Err(e) => {
                    tracing::warn!("Dropping malformed progress entry '{}': {}", id, e);
                    continue;
                }
            };

            record.completed_challenges.insert(
                id,
                CompletionEntry {
                    title: descriptor.title.to_string(),
                    category: descriptor.category,
                    success,
                    completed_at,
                },
            );
        }

        for value in self.achievements {
            match value.as_str().and_then(AchievementId::from_str) {
                Some(id) => {
                    record.achievements.insert(id.as_str().to_string());
                }
                None => tracing::warn!("Dropping unknown achievement {}", value),
            }
        }

        record.streak = self.streak.as_ref().map(streak_from_number).unwrap_or(0);
        record.last_activity = self.last_activity.as_deref().and_then(parse_logged);
        record
    }
}

fn parse_logged(s: &str) -> Option<DateTime<FixedOffset>> {
    let parsed = parse_timestamp(s);
    if parsed.is_none() {
        tracing::warn!("Ignoring unparseable timestamp '{}'", s);
    }
    parsed
}

/// Streaks written by other clients may be floats or negative
fn streak_from_number(n: &serde_json::Number) -> u32 {
    if let Some(v) = n.as_u64() {
        return u32::try_from(v).unwrap_or(u32::MAX);
    }
    match n.as_f64() {
        Some(v) if v.is_finite() && v > 0.0 => v.min(u32::MAX as f64) as u32,
        _ => 0,
    }
}
