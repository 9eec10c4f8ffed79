//! Daily streak tracking
//!
//! A streak counts consecutive local calendar days with at least one
//! successful completion. Only the first success of a day can move it.

use chrono::NaiveDate;

/// How a successful completion changed the streak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakUpdate {
    /// Already counted today
    SameDay,
    /// Last success was yesterday
    Extended,
    /// No prior success, or a gap of more than one day
    Started,
}

/// Apply one successful completion on `today` to a streak whose last
/// activity fell on `last_day`. Must be computed before the last activity is
/// overwritten.
pub fn advance_streak(current: u32, last_day: Option<NaiveDate>, today: NaiveDate) -> (u32, StreakUpdate) {
    let Some(last_day) = last_day else {
        return (1, StreakUpdate::Started);
    };

    // A zero streak has no success to build on, whatever the last activity was
    if current == 0 {
        return (1, StreakUpdate::Started);
    }

    match (today - last_day).num_days() {
        ..=0 => (current, StreakUpdate::SameDay),
        1 => (current.saturating_add(1), StreakUpdate::Extended),
        _ => (1, StreakUpdate::Started),
    }
}

/// Check if a streak is still alive (activity today or yesterday)
pub fn is_active(last_day: Option<NaiveDate>, today: NaiveDate) -> bool {
    last_day.is_some_and(|day| (today - day).num_days() <= 1)
}

/// Streak as it should be displayed on `today`: a lapsed streak shows as 0
pub fn current_streak(streak: u32, last_day: Option<NaiveDate>, today: NaiveDate) -> u32 {
    if is_active(last_day, today) { streak } else { 0 }
}

/// Human-friendly distance of `day` from `today`
pub fn relative_day(day: NaiveDate, today: NaiveDate) -> String {
    match (today - day).num_days() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        n @ 2..=6 => format!("{} days ago", n),
        _ => day.format("%Y-%m-%d").to_string(),
    }
}
