//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

/// Written above the serialized settings by [`Config::save_to_file`]
const CONFIG_HEADER: &str = "# GalaxyCode configuration\n\
# Missing keys fall back to their defaults. storage.quota_bytes = 0 disables the quota.\n\n";

impl Config {
    /// Get the global config directory path (~/.galaxycode/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".galaxycode")
    }

    /// Get the global config file path (~/.galaxycode/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load an explicitly given config file, or the global one.
    ///
    /// A missing global config is not an error: defaults are used. An
    /// explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let global_path = Self::global_config_path();
        if global_path.exists() {
            Self::from_file(&global_path)
        } else {
            tracing::debug!("No config at {}, using defaults", global_path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to a file with atomic write and file locking.
    ///
    /// 1. Exclusive lock prevents concurrent writers
    /// 2. Atomic write (temp file + rename) prevents a half-written config
    /// 3. Parent directory is created if needed
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let body = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        let content = format!("{}{}", CONFIG_HEADER, body);

        // Lock a sibling file; the config itself is replaced by rename
        let lock_path = path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        // Blocks while another process is saving
        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire config lock")?;

        // Readers never see a half-written config
        let temp_path = path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write config content")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync config file")?;

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

        // lock_file drop releases the lock
        Ok(())
    }

    /// Progress database location
    pub fn storage_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(|| Self::global_config_dir().join("progress.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::PageId;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg").join("config.toml");

        let mut config = Config::default();
        config.navigation.home_page = PageId::Challenges;
        config.playground.submission_delay_ms = 10;
        config.storage.path = Some(dir.path().join("progress.db"));
        config.save_to_file(&path).unwrap();

        assert_eq!(Config::from_file(&path).unwrap(), config);
        assert!(!path.with_extension("toml.tmp").exists());

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# GalaxyCode configuration"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[progress]\nfailed_attempts_update_activity = true\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(config.progress.failed_attempts_update_activity);
        assert_eq!(config.navigation.home_page, PageId::Home);
        assert_eq!(config.storage.quota(), Some(crate::store::DEFAULT_QUOTA_BYTES));
        assert_eq!(config.playground.submission_delay_ms, 2000);
    }

    #[test]
    fn test_zero_quota_disables_limit() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nquota_bytes = 0\n").unwrap();
        assert_eq!(Config::from_file(&path).unwrap().storage.quota(), None);
    }

    #[test]
    fn test_invalid_home_page_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[navigation]\nhome_page = \"lobby\"\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
