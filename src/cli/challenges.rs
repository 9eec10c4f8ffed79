//! Challenge command implementations

use anyhow::{Context, Result, bail};
use std::path::Path;

use galaxycode::Session;
use galaxycode::catalog::{self, CHALLENGES, Category};
use galaxycode::progress::ProgressError;

use super::progress::print_outcome;

/// List challenges, optionally restricted to one category
pub async fn challenges_command(session: &Session, category: Option<String>) -> Result<()> {
    let filter = match category {
        Some(name) => match Category::from_str(&name) {
            Some(c) => Some(c),
            None => bail!(
                "Unknown category '{}'. Known categories: {}",
                name,
                Category::all().iter().map(|c| c.as_str()).collect::<Vec<_>>().join(", ")
            ),
        },
        None => None,
    };

    let record = session.progress().record();
    let challenges: Vec<_> = CHALLENGES
        .iter()
        .filter(|c| filter.is_none_or(|f| c.category == f))
        .collect();

    if challenges.is_empty() {
        println!("No challenges found.");
        return Ok(());
    }

    println!("Challenges ({}):\n", challenges.len());

    for challenge in challenges {
        let status = match record.completed_challenges.get(challenge.id) {
            Some(entry) if entry.success => "done",
            Some(_) => "failed",
            None => "open",
        };
        println!(
            "  [{:<6}] {:<12} {:<20} {}",
            status,
            challenge.id,
            challenge.title,
            challenge.category.label()
        );
    }

    Ok(())
}

/// Show one challenge
pub async fn show_command(session: &Session, id: &str) -> Result<()> {
    let challenge = catalog::challenge(id).ok_or_else(|| ProgressError::UnknownChallenge {
        id: id.to_string(),
        suggestion: catalog::suggest(id),
    })?;

    println!("ID:            {}", challenge.id);
    println!("Title:         {}", challenge.title);
    println!("Category:      {}", challenge.category.label());
    println!("Language:      {}", challenge.language);

    if let Some(entry) = session.progress().record().completed_challenges.get(challenge.id) {
        println!(
            "Status:        {}",
            if entry.success { "completed" } else { "attempted" }
        );
    }

    println!("\nDescription:");
    println!("  {}", challenge.description);
    println!("\nRequirements:");
    println!("  {}", challenge.requirements);
    println!("\nStarter code:");
    for line in challenge.starter_code().lines() {
        println!("  {}", line);
    }

    Ok(())
}

/// Grade the contents of `file` against challenge `id` and record the result
pub async fn submit_command(session: &mut Session, id: &str, file: &Path) -> Result<()> {
    let code = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read solution: {}", file.display()))?;

    println!("Processing submission...");
    let Some(result) = session.submit_and_wait(id, &code).await? else {
        println!("Submission cancelled.");
        return Ok(());
    };

    println!("{}", result.grade.message());
    print_outcome(&result.completion);

    Ok(())
}
