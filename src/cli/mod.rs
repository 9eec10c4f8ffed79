//! CLI command implementations

pub mod challenges;
pub mod convert;
pub mod init;
pub mod navigate;
pub mod playground;
pub mod progress;
pub mod transfer;

use anyhow::Result;
use std::path::{Path, PathBuf};

use galaxycode::Session;
use galaxycode::config::Config;

/// Load the config and open a session on it. `data` overrides the
/// configured database location.
pub fn open_session(config_path: Option<&Path>, data: Option<PathBuf>, page: Option<&str>) -> Result<Session> {
    let mut config = Config::load(config_path)?;
    if let Some(data) = data {
        config.storage.path = Some(data);
    }
    Session::open(&config, page)
}

/// Ask a yes/no question on stdin, defaulting to no
pub fn confirm(prompt: &str) -> Result<bool> {
    println!("{} [y/N]", prompt);
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}
