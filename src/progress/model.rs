//! Progress model - owns the record and every mutation of it
//!
//! The record is written through to the store after each mutation. A failed
//! write is logged and the in-memory state is kept, so the session carries on.

use std::sync::Arc;

use chrono::NaiveDate;

use super::achievements::{Achievement, evaluate};
use super::clock::Clock;
use super::export::ExportDocument;
use super::record::{CompletionEntry, ProgressRecord, StoredRecord};
use super::stats::ProgressStats;
use super::streaks::{StreakUpdate, advance_streak};
use crate::catalog;
use crate::store::KvStore;

/// Storage key of the progress record
pub const PROGRESS_KEY: &str = "userProgress";

/// Policy knobs for the progress model
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressOptions {
    /// Let failed attempts move `lastActivity` as well
    pub failed_attempts_update_activity: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error("Unknown challenge '{id}'{hint}", hint = did_you_mean(.suggestion))]
    UnknownChallenge {
        id: String,
        suggestion: Option<&'static str>,
    },

    #[error("Invalid progress data: {0}")]
    InvalidImport(#[from] serde_json::Error),
}

fn did_you_mean(suggestion: &Option<&'static str>) -> String {
    suggestion
        .map(|s| format!(" (did you mean '{}'?)", s))
        .unwrap_or_default()
}

/// Something that happened while recording a completion
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    Recorded { challenge_id: String, success: bool },
    StreakExtended { count: u32 },
    StreakStarted { previous: u32 },
    AchievementUnlocked(&'static Achievement),
}

/// Result of [`ProgressModel::record_completion`]
#[derive(Debug, Clone)]
pub struct CompletionOutcome {
    pub events: Vec<ProgressEvent>,
    /// Whether the updated record reached the store
    pub persisted: bool,
}

impl CompletionOutcome {
    pub fn unlocked(&self) -> impl Iterator<Item = &'static Achievement> + '_ {
        self.events.iter().filter_map(|e| match e {
            ProgressEvent::AchievementUnlocked(a) => Some(*a),
            _ => None,
        })
    }
}

pub struct ProgressModel {
    store: KvStore,
    clock: Arc<dyn Clock>,
    options: ProgressOptions,
    record: ProgressRecord,
}

impl ProgressModel {
    /// Load the record from `store`, falling back to an empty record when
    /// nothing usable is stored.
    ///
    /// Achievements earned by the stored data but missing from it (older
    /// layouts) are unlocked and written back.
    pub fn load(store: KvStore, clock: Arc<dyn Clock>, options: ProgressOptions) -> Self {
        let record = match store.get::<StoredRecord>(PROGRESS_KEY) {
            Some(stored) => stored.into_record(),
            None => {
                tracing::debug!("No stored progress, starting with an empty record");
                ProgressRecord::default()
            }
        };

        let mut model = Self {
            store,
            clock,
            options,
            record,
        };
        if !model.unlock_achievements().is_empty() {
            model.persist();
        }
        model
    }

    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Record the result of an attempt at `challenge_id`.
    ///
    /// On success the streak is advanced from the previous last activity,
    /// then the last activity is moved to now and achievements are
    /// re-evaluated. The record is persisted in every case.
    pub fn record_completion(
        &mut self,
        challenge_id: &str,
        success: bool,
    ) -> Result<CompletionOutcome, ProgressError> {
        let descriptor =
            catalog::challenge(challenge_id).ok_or_else(|| ProgressError::UnknownChallenge {
                id: challenge_id.to_string(),
                suggestion: catalog::suggest(challenge_id),
            })?;

        let now = self.clock.now();
        let mut events = vec![ProgressEvent::Recorded {
            challenge_id: descriptor.id.to_string(),
            success,
        }];

        if success {
            let previous = self.record.streak;
            let last_day = self.last_activity_day();
            let (streak, update) = advance_streak(previous, last_day, self.clock.date_of(&now));
            self.record.streak = streak;
            match update {
                StreakUpdate::Extended => events.push(ProgressEvent::StreakExtended { count: streak }),
                StreakUpdate::Started => events.push(ProgressEvent::StreakStarted { previous }),
                StreakUpdate::SameDay => {}
            }
        }

        self.record.completed_challenges.insert(
            descriptor.id.to_string(),
            CompletionEntry {
                title: descriptor.title.to_string(),
                category: descriptor.category,
                success,
                completed_at: Some(now),
            },
        );

        if success || self.options.failed_attempts_update_activity {
            self.record.last_activity = Some(now);
        }

        if success {
            events.extend(
                self.unlock_achievements()
                    .into_iter()
                    .map(ProgressEvent::AchievementUnlocked),
            );
        }

        tracing::debug!(
            "Recorded {} for '{}' (streak {})",
            if success { "success" } else { "failure" },
            challenge_id,
            self.record.streak
        );

        let persisted = self.persist();
        Ok(CompletionOutcome { events, persisted })
    }

    /// Clear all progress. Returns whether the cleared record was persisted.
    pub fn reset(&mut self) -> bool {
        self.record = ProgressRecord::default();
        tracing::info!("Progress reset");
        self.persist()
    }

    pub fn statistics(&self) -> ProgressStats {
        ProgressStats::compute(&self.record, self.clock.as_ref())
    }

    pub fn export(&self) -> ExportDocument {
        ExportDocument::new(&self.record, self.clock.now())
    }

    /// Replace the record with one read from an export file or a bare record.
    /// Returns whether the imported record was persisted.
    pub fn import(&mut self, text: &str) -> Result<bool, ProgressError> {
        let stored: StoredRecord = serde_json::from_str(text)?;
        self.record = stored.into_record();
        self.unlock_achievements();
        tracing::info!(
            "Imported progress with {} completed challenges",
            self.record.completed_count()
        );
        Ok(self.persist())
    }

    /// Latest attempts, most recent first. Entries without a timestamp come last.
    pub fn recent_activity(&self, limit: usize) -> Vec<(&str, &CompletionEntry)> {
        let mut entries: Vec<_> = self
            .record
            .completed_challenges
            .iter()
            .map(|(id, entry)| (id.as_str(), entry))
            .collect();
        entries.sort_by(|a, b| b.1.completed_at.cmp(&a.1.completed_at));
        entries.truncate(limit);
        entries
    }

    /// Local calendar date of the last activity
    pub fn last_activity_day(&self) -> Option<NaiveDate> {
        self.record.last_activity.map(|ts| self.clock.date_of(&ts))
    }

    /// Merge every newly earned achievement into the record
    fn unlock_achievements(&mut self) -> Vec<&'static Achievement> {
        let unlocked: Vec<_> = evaluate(&self.record, self.clock.as_ref())
            .into_iter()
            .map(Achievement::get)
            .collect();
        for achievement in &unlocked {
            self.record.achievements.insert(achievement.id.as_str().to_string());
            tracing::info!("Achievement unlocked: {}", achievement.name);
        }
        unlocked
    }

    fn persist(&self) -> bool {
        self.store.set(PROGRESS_KEY, &self.record)
    }
}
