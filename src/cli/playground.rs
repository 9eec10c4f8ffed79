//! Playground command implementations

use anyhow::{Context, Result, bail};
use std::path::Path;

use galaxycode::Session;
use galaxycode::catalog::{LANGUAGES, LibrarySection, library_section, starter_template};

/// List template languages, or print the starter template of one
pub async fn templates_command(language: Option<String>) -> Result<()> {
    let Some(language) = language else {
        println!("Languages ({}):\n", LANGUAGES.len());
        for lang in LANGUAGES {
            println!("  {}", lang);
        }
        return Ok(());
    };

    let language = language.to_ascii_lowercase();
    if !LANGUAGES.contains(&language.as_str()) {
        bail!(
            "Unknown language '{}'. Known languages: {}",
            language,
            LANGUAGES.join(", ")
        );
    }

    println!("{}", starter_template(&language));
    Ok(())
}

/// List library templates, or load one into the playground draft
pub async fn library_command(session: &Session, section: Option<String>, load: Option<String>) -> Result<()> {
    if let Some(id) = load {
        let template = session.playground().load_template(&id)?;
        println!("Loaded template: {} ({})", template.name, template.language);
        return Ok(());
    }

    let sections: Vec<LibrarySection> = match section {
        Some(name) => match LibrarySection::from_str(&name) {
            Some(s) => vec![s],
            None => bail!(
                "Unknown section '{}'. Known sections: {}",
                name,
                LibrarySection::all().iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ")
            ),
        },
        None => LibrarySection::all().to_vec(),
    };

    for section in sections {
        println!("{}:", section.label());
        for template in library_section(section) {
            println!(
                "  {:<14} {:<18} {} ({})",
                template.id, template.name, template.description, template.language
            );
        }
        println!();
    }

    Ok(())
}

/// Save a file as a playground snippet
pub async fn snippet_save_command(session: &Session, language: &str, file: &Path) -> Result<()> {
    let code = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read snippet: {}", file.display()))?;

    let saved = session.playground().save(language, &code)?;
    println!("Code saved successfully as {}", saved.name);
    Ok(())
}

/// List saved snippets, oldest first
pub async fn snippet_list_command(session: &Session) -> Result<()> {
    let saved = session.playground().saved();

    if saved.is_empty() {
        println!("No saved snippets.");
        return Ok(());
    }

    println!("Saved snippets ({}):\n", saved.len());
    for (index, snippet) in saved.iter().enumerate() {
        println!(
            "  {:>3}. {:<22} {:<12} {} line(s), {}",
            index + 1,
            snippet.name,
            snippet.language,
            snippet.code.lines().count(),
            snippet.timestamp.format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}

/// Print the current draft, or replace or clear it
pub async fn draft_command(session: &Session, set: Option<&Path>, clear: bool) -> Result<()> {
    let playground = session.playground();

    if clear {
        playground.clear_draft();
        println!("Draft cleared.");
        return Ok(());
    }

    if let Some(file) = set {
        let code = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read draft: {}", file.display()))?;
        if !playground.save_draft(&code) {
            eprintln!("Warning: draft could not be saved");
        }
        return Ok(());
    }

    match playground.draft() {
        Some(code) => println!("{}", code),
        None => println!("No draft."),
    }
    Ok(())
}
