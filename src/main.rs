use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "galaxycode")]
#[command(about = "GalaxyCode - coding challenges, progress and achievements")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.galaxycode/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the progress database (overrides storage.path)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Page to start on, as a URL fragment (e.g. #challenges)
    #[arg(short, long, global = true)]
    page: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show progress statistics
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List challenges with their completion state
    Challenges {
        /// Only show challenges of this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Show a challenge with its requirements and starter code
    Show {
        /// Challenge ID (e.g. js-basics)
        id: String,
    },

    /// Grade a solution file and record the result
    Submit {
        /// Challenge ID
        id: String,
        /// File containing the solution
        file: PathBuf,
    },

    /// Record a completion without grading
    Record {
        /// Challenge ID
        id: String,
        /// Record a failed attempt instead of a success
        #[arg(long)]
        failed: bool,
    },

    /// List achievements and which are unlocked
    Achievements,

    /// Show recent activity
    Activity {
        /// Number of entries to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Clear all progress
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Export progress as JSON
    Export {
        /// Output file (defaults to learning-progress.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import progress from an exported JSON file
    Import {
        /// Exported progress file
        file: PathBuf,
    },

    /// Navigate to a page and show the navigation state
    Navigate {
        /// Page ID, with or without a leading #
        page: String,
    },

    /// List pages
    Pages,

    /// List template languages or print a starter template
    Templates {
        /// Language key (e.g. python)
        language: Option<String>,
    },

    /// Browse the template library
    Library {
        /// Only show this section (basics, algorithms, data_structures, web, games)
        #[arg(long)]
        section: Option<String>,
        /// Load a template into the playground draft
        #[arg(long)]
        load: Option<String>,
    },

    /// Save and list playground snippets
    Snippet {
        #[command(subcommand)]
        action: SnippetAction,
    },

    /// Convert a number between bases
    Convert {
        /// Number to convert
        value: String,
        /// Base of the input (2-36)
        #[arg(long, default_value = "10")]
        from: u32,
        /// Base of the output (2-36)
        #[arg(long, default_value = "2")]
        to: u32,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum SnippetAction {
    /// Save a file as a snippet
    Save {
        /// Language key of the code
        #[arg(short, long, default_value = "javascript")]
        language: String,
        /// File containing the code
        file: PathBuf,
    },

    /// List saved snippets
    List,

    /// Show the playground draft, or replace or clear it
    Draft {
        /// Replace the draft with the contents of this file
        #[arg(long)]
        set: Option<PathBuf>,
        /// Clear the draft
        #[arg(long, conflicts_with = "set")]
        clear: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let command = cli.command.unwrap_or(Commands::Stats { json: false });

    // Commands that need no session
    match command {
        Commands::Init { force } => {
            return cli::init::init_command(cli.config, force).await;
        }
        Commands::Convert { value, from, to } => {
            return cli::convert::convert_command(&value, from, to).await;
        }
        Commands::Templates { language } => {
            return cli::playground::templates_command(language).await;
        }
        _ => {}
    }

    let mut session = cli::open_session(cli.config.as_deref(), cli.data, cli.page.as_deref())?;

    match command {
        Commands::Stats { json } => {
            cli::progress::stats_command(&session, json).await?;
        }
        Commands::Challenges { category } => {
            cli::challenges::challenges_command(&session, category).await?;
        }
        Commands::Show { id } => {
            cli::challenges::show_command(&session, &id).await?;
        }
        Commands::Submit { id, file } => {
            cli::challenges::submit_command(&mut session, &id, &file).await?;
        }
        Commands::Record { id, failed } => {
            cli::progress::record_command(&mut session, &id, !failed).await?;
        }
        Commands::Achievements => {
            cli::progress::achievements_command(&session).await?;
        }
        Commands::Activity { limit } => {
            cli::progress::activity_command(&session, limit).await?;
        }
        Commands::Reset { yes } => {
            cli::progress::reset_command(&mut session, yes).await?;
        }
        Commands::Export { output } => {
            cli::transfer::export_command(&session, output).await?;
        }
        Commands::Import { file } => {
            cli::transfer::import_command(&mut session, &file).await?;
        }
        Commands::Navigate { page } => {
            cli::navigate::navigate_command(&mut session, &page).await?;
        }
        Commands::Pages => {
            cli::navigate::pages_command(&session).await?;
        }
        Commands::Library { section, load } => {
            cli::playground::library_command(&session, section, load).await?;
        }
        Commands::Snippet { action } => match action {
            SnippetAction::Save { language, file } => {
                cli::playground::snippet_save_command(&session, &language, &file).await?;
            }
            SnippetAction::List => {
                cli::playground::snippet_list_command(&session).await?;
            }
            SnippetAction::Draft { set, clear } => {
                cli::playground::draft_command(&session, set.as_deref(), clear).await?;
            }
        },
        Commands::Init { .. } | Commands::Convert { .. } | Commands::Templates { .. } => {}
    }

    Ok(())
}
