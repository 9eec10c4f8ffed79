//! Progress command implementations

use anyhow::Result;

use galaxycode::Session;
use galaxycode::progress::achievements::ACHIEVEMENTS;
use galaxycode::progress::{CompletionOutcome, ProgressEvent, relative_day};

use super::confirm;

/// Show progress statistics
pub async fn stats_command(session: &Session, json: bool) -> Result<()> {
    let stats = session.progress().statistics();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!(
        "Completed:     {} of {} ({}% overall)",
        stats.successful, stats.total_challenges, stats.overall_progress
    );
    println!(
        "Success rate:  {}% ({} of {} attempted)",
        stats.success_rate, stats.successful, stats.completed
    );
    println!("Streak:        {} day(s)", stats.current_streak);
    println!(
        "Achievements:  {}/{}",
        stats.achievements_unlocked, stats.achievements_total
    );

    println!("\nCategories:");
    for cat in &stats.categories {
        if cat.total == 0 {
            continue;
        }
        println!(
            "  {:<12} {}/{} ({}%)",
            cat.category.label(),
            cat.completed,
            cat.total,
            cat.percent
        );
    }

    Ok(())
}

/// Record a completion directly, without grading
pub async fn record_command(session: &mut Session, id: &str, success: bool) -> Result<()> {
    let outcome = session.progress_mut().record_completion(id, success)?;
    print_outcome(&outcome);
    Ok(())
}

/// Print the events of a recorded completion
pub fn print_outcome(outcome: &CompletionOutcome) {
    for event in &outcome.events {
        match event {
            ProgressEvent::Recorded {
                challenge_id,
                success,
            } => {
                let result = if *success { "success" } else { "failed attempt" };
                println!("Recorded {} for {}", result, challenge_id);
            }
            ProgressEvent::StreakExtended { count } => {
                println!("Streak extended: {} days", count);
            }
            ProgressEvent::StreakStarted { previous } if *previous > 1 => {
                println!("New streak started (previous streak: {} days)", previous);
            }
            ProgressEvent::StreakStarted { .. } => {
                println!("Streak started");
            }
            ProgressEvent::AchievementUnlocked(a) => {
                println!("{} Achievement unlocked: {} - {}", a.icon, a.name, a.description);
            }
        }
    }

    if !outcome.persisted {
        eprintln!("Warning: progress could not be saved");
    }
}

/// List all achievements
pub async fn achievements_command(session: &Session) -> Result<()> {
    let record = session.progress().record();

    println!(
        "Achievements ({}/{}):\n",
        record.achievements.len(),
        ACHIEVEMENTS.len()
    );

    for achievement in ACHIEVEMENTS {
        let unlocked = record.has_achievement(achievement.id);
        println!(
            "  [{}] {} {} - {}",
            if unlocked { "x" } else { " " },
            achievement.icon,
            achievement.name,
            achievement.description
        );
    }

    Ok(())
}

/// Show the most recent attempts
pub async fn activity_command(session: &Session, limit: usize) -> Result<()> {
    let progress = session.progress();
    let entries = progress.recent_activity(limit);

    if entries.is_empty() {
        println!("No activity yet.");
        return Ok(());
    }

    let today = progress.clock().today();
    for (id, entry) in entries {
        let when = entry
            .completed_at
            .map(|ts| relative_day(progress.clock().date_of(&ts), today))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<12} {:<6} {:<20} {}",
            when,
            if entry.success { "done" } else { "failed" },
            entry.title,
            id
        );
    }

    Ok(())
}

/// Clear all progress after confirmation
pub async fn reset_command(session: &mut Session, yes: bool) -> Result<()> {
    if !yes && !confirm("Reset all progress? This cannot be undone.")? {
        println!("Cancelled.");
        return Ok(());
    }

    if session.progress_mut().reset() {
        println!("Progress reset.");
    } else {
        eprintln!("Warning: progress was cleared but could not be saved");
    }

    Ok(())
}
