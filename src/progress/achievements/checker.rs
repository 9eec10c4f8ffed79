//! Achievement checking logic
//!
//! Every check is a pure function of the progress record; calendar days come
//! from the session's [`Clock`]. A check only
//! reports ids that are not unlocked yet, so evaluating twice in a row yields
//! nothing the second time.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::definitions::AchievementId;
use crate::catalog::{self, Category};
use crate::progress::clock::Clock;
use crate::progress::record::ProgressRecord;

/// Successful completions needed on a single day for Speed Demon
const SPEED_DEMON_PER_DAY: usize = 5;

/// Minimum completed challenges for Perfect Score
const PERFECT_SCORE_MIN: usize = 3;

/// Ids whose unlock condition holds for `record` and that are not unlocked yet
pub fn evaluate(record: &ProgressRecord, clock: &dyn Clock) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();
    newly_unlocked.extend(check_completion_achievements(record));
    newly_unlocked.extend(check_streak_achievements(record));
    newly_unlocked.extend(check_category_achievements(record));
    newly_unlocked.extend(check_pace_achievements(record, clock));
    newly_unlocked.retain(|id| !record.achievements.contains(id.as_str()));
    newly_unlocked.sort();
    newly_unlocked
}

/// First Steps, Perfect Score, Completionist
fn check_completion_achievements(record: &ProgressRecord) -> Vec<AchievementId> {
    let mut unlocked = Vec::new();
    let completed = record.completed_count();
    let successful = record.successful_count();

    if successful >= 1 {
        unlocked.push(AchievementId::FirstChallenge);
    }

    if completed >= PERFECT_SCORE_MIN && successful == completed {
        unlocked.push(AchievementId::PerfectScore);
    }

    if catalog::CHALLENGES.iter().all(|c| record.is_successful(c.id)) {
        unlocked.push(AchievementId::Completionist);
    }

    unlocked
}

fn check_streak_achievements(record: &ProgressRecord) -> Vec<AchievementId> {
    let milestones = [(3, AchievementId::Streak3), (7, AchievementId::Streak7)];

    milestones
        .into_iter()
        .filter(|(threshold, _)| record.streak >= *threshold)
        .map(|(_, id)| id)
        .collect()
}

/// Explorer, Web Master
fn check_category_achievements(record: &ProgressRecord) -> Vec<AchievementId> {
    let mut unlocked = Vec::new();

    let every_category = catalog::populated_categories()
        .into_iter()
        .all(|cat| record.successful_in(cat) > 0);
    if every_category {
        unlocked.push(AchievementId::AllCategories);
    }

    if catalog::in_category(Category::Web).all(|c| record.is_successful(c.id)) {
        unlocked.push(AchievementId::WebMaster);
    }

    unlocked
}

/// Speed Demon: several successes on the same calendar day
fn check_pace_achievements(record: &ProgressRecord, clock: &dyn Clock) -> Vec<AchievementId> {
    let mut per_day: HashMap<NaiveDate, usize> = HashMap::new();
    for entry in record.completed_challenges.values().filter(|e| e.success) {
        if let Some(at) = entry.completed_at {
            *per_day.entry(clock.date_of(&at)).or_default() += 1;
        }
    }

    if per_day.values().any(|count| *count >= SPEED_DEMON_PER_DAY) {
        vec![AchievementId::SpeedDemon]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::record::CompletionEntry;
    use crate::progress::clock::FixedClock;
    use chrono::{DateTime, Duration, FixedOffset};

    /// Clock whose local zone is a fixed offset
    struct ZoneClock(FixedOffset);

    impl Clock for ZoneClock {
        fn now(&self) -> DateTime<FixedOffset> {
            at("2024-01-10T12:00:00Z").with_timezone(&self.0)
        }

        fn date_of(&self, ts: &DateTime<FixedOffset>) -> NaiveDate {
            ts.with_timezone(&self.0).date_naive()
        }
    }

    fn check(record: &ProgressRecord) -> Vec<AchievementId> {
        evaluate(record, &FixedClock::new(at("2024-01-10T12:00:00Z")))
    }

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn complete(record: &mut ProgressRecord, id: &str, success: bool, when: DateTime<FixedOffset>) {
        let c = catalog::challenge(id).unwrap();
        record.completed_challenges.insert(
            id.to_string(),
            CompletionEntry {
                title: c.title.to_string(),
                category: c.category,
                success,
                completed_at: Some(when),
            },
        );
    }

    fn unlock_all(record: &mut ProgressRecord, ids: &[AchievementId]) {
        for id in ids {
            record.achievements.insert(id.as_str().to_string());
        }
    }

    #[test]
    fn test_empty_record_unlocks_nothing() {
        assert!(check(&ProgressRecord::default()).is_empty());
    }

    #[test]
    fn test_failed_attempt_alone_unlocks_nothing() {
        let mut record = ProgressRecord::default();
        complete(&mut record, "js-basics", false, at("2024-01-01T10:00:00Z"));
        assert!(check(&record).is_empty());
    }

    #[test]
    fn test_first_success() {
        let mut record = ProgressRecord::default();
        complete(&mut record, "js-basics", true, at("2024-01-01T10:00:00Z"));
        assert_eq!(check(&record), vec![AchievementId::FirstChallenge]);
    }

    #[test]
    fn test_second_evaluation_is_empty() {
        let mut record = ProgressRecord::default();
        complete(&mut record, "js-basics", true, at("2024-01-01T10:00:00Z"));
        record.streak = 7;

        let first = check(&record);
        assert!(first.contains(&AchievementId::Streak3));
        assert!(first.contains(&AchievementId::Streak7));

        unlock_all(&mut record, &first);
        assert!(check(&record).is_empty());
    }

    #[test]
    fn test_perfect_score_needs_three_clean_results() {
        let mut record = ProgressRecord::default();
        let t = at("2024-01-01T10:00:00Z");
        complete(&mut record, "js-basics", true, t);
        complete(&mut record, "py-basics", true, t);
        assert!(!check(&record).contains(&AchievementId::PerfectScore));

        complete(&mut record, "java-basics", false, t);
        assert!(!check(&record).contains(&AchievementId::PerfectScore));

        complete(&mut record, "java-basics", true, t);
        assert!(check(&record).contains(&AchievementId::PerfectScore));
    }

    #[test]
    fn test_web_master_and_explorer() {
        let mut record = ProgressRecord::default();
        let mut t = at("2024-01-01T10:00:00Z");
        complete(&mut record, "html-basics", true, t);
        complete(&mut record, "css-basics", true, t);
        let found = check(&record);
        assert!(found.contains(&AchievementId::WebMaster));
        assert!(!found.contains(&AchievementId::AllCategories));

        for id in ["js-basics", "py-basics", "java-basics", "cpp-basics"] {
            t += Duration::days(1);
            complete(&mut record, id, true, t);
        }
        let found = check(&record);
        assert!(found.contains(&AchievementId::AllCategories));
        assert!(found.contains(&AchievementId::Completionist));
        assert!(!found.contains(&AchievementId::SpeedDemon));
    }

    #[test]
    fn test_speed_demon_counts_one_calendar_day() {
        let mut record = ProgressRecord::default();
        let ids = ["js-basics", "py-basics", "java-basics", "cpp-basics", "html-basics"];
        for (hour, id) in ids.iter().enumerate() {
            let when = at("2024-01-01T08:00:00Z") + Duration::hours(hour as i64);
            complete(&mut record, id, true, when);
        }
        assert!(check(&record).contains(&AchievementId::SpeedDemon));

        // Moving one success to another day breaks the condition
        complete(&mut record, "html-basics", true, at("2024-01-02T08:00:00Z"));
        assert!(!check(&record).contains(&AchievementId::SpeedDemon));
    }

    #[test]
    fn test_speed_demon_uses_local_days() {
        // 17:00Z to 21:00Z is one UTC day but spans midnight at +05:00
        let mut record = ProgressRecord::default();
        let ids = ["js-basics", "py-basics", "java-basics", "cpp-basics", "html-basics"];
        for (hour, id) in ids.iter().enumerate() {
            let when = at("2024-01-01T15:00:00Z") + Duration::hours(hour as i64 + 2);
            complete(&mut record, id, true, when);
        }
        assert!(check(&record).contains(&AchievementId::SpeedDemon));

        let plus_five = ZoneClock(FixedOffset::east_opt(5 * 3600).unwrap());
        assert!(!evaluate(&record, &plus_five).contains(&AchievementId::SpeedDemon));
    }
}
