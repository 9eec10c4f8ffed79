//! Export and import command implementations

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use galaxycode::Session;
use galaxycode::progress::EXPORT_FILE_NAME;

/// Write the progress export document to `output`
pub async fn export_command(session: &Session, output: Option<PathBuf>) -> Result<()> {
    let output = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
    let document = session.progress().export();

    std::fs::write(&output, document.to_json_pretty()?)
        .with_context(|| format!("Failed to write export: {}", output.display()))?;

    println!(
        "Exported {} completed challenge(s) to {}",
        document.completed_count,
        output.display()
    );
    Ok(())
}

/// Replace progress with the contents of an export file
pub async fn import_command(session: &mut Session, file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read import file: {}", file.display()))?;

    let persisted = session
        .progress_mut()
        .import(&text)
        .with_context(|| format!("Failed to import {}", file.display()))?;

    let record = session.progress().record();
    println!(
        "Imported {} completed challenge(s), {} achievement(s)",
        record.completed_count(),
        record.achievements.len()
    );
    if !persisted {
        eprintln!("Warning: imported progress could not be saved");
    }
    Ok(())
}
