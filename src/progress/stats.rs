//! Derived progress statistics

use serde::Serialize;

use super::achievements::ACHIEVEMENTS;
use super::clock::Clock;
use super::record::ProgressRecord;
use super::streaks::current_streak;
use crate::catalog::{self, Category};

/// Per-category progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    pub category: Category,
    /// Successfully completed challenges in this category
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
}

/// Summary computed from the progress record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    /// Challenges attempted at least once
    pub completed: usize,
    pub successful: usize,
    /// Successful share of completed challenges, rounded percent
    pub success_rate: u32,
    pub total_challenges: usize,
    /// Successful share of the whole catalog, rounded percent
    pub overall_progress: u32,
    pub categories: Vec<CategoryProgress>,
    pub current_streak: u32,
    pub achievements_unlocked: usize,
    pub achievements_total: usize,
}

impl ProgressStats {
    pub fn compute(record: &ProgressRecord, clock: &dyn Clock) -> Self {
        let completed = record.completed_count();
        let successful = record.successful_count();
        let total_challenges = catalog::total();

        let categories = Category::all()
            .iter()
            .map(|&category| {
                let total = catalog::in_category(category).count();
                let done = catalog::in_category(category)
                    .filter(|c| record.is_successful(c.id))
                    .count();
                CategoryProgress {
                    category,
                    completed: done,
                    total,
                    percent: percent(done, total),
                }
            })
            .collect();

        let last_day = record.last_activity.map(|ts| clock.date_of(&ts));

        Self {
            completed,
            successful,
            success_rate: percent(successful, completed),
            total_challenges,
            overall_progress: percent(successful, total_challenges),
            categories,
            current_streak: current_streak(record.streak, last_day, clock.today()),
            achievements_unlocked: record.achievements.len(),
            achievements_total: ACHIEVEMENTS.len(),
        }
    }
}

/// `part` as a rounded percentage of `whole`, 0 when `whole` is 0
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 * 100.0) / whole as f64).round() as u32
}
