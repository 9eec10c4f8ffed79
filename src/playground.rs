//! Code playground storage
//!
//! The draft being edited is kept under `playgroundCode` and rewritten on
//! every change; explicitly saved snippets accumulate under
//! `savedPlaygroundCodes`, oldest first.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::catalog::{self, LANGUAGES, LibraryTemplate};
use crate::progress::Clock;
use crate::store::{KvStore, StoreError};

/// Storage key of the current draft
pub const DRAFT_KEY: &str = "playgroundCode";

/// Storage key of the saved snippet list
pub const SAVED_CODES_KEY: &str = "savedPlaygroundCodes";

#[derive(Debug, thiserror::Error)]
pub enum PlaygroundError {
    #[error("Please enter some code to save")]
    EmptyCode,

    #[error("Unknown language '{0}'")]
    UnknownLanguage(String),

    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A snippet saved from the playground
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCode {
    pub code: String,
    pub language: String,
    pub timestamp: DateTime<FixedOffset>,
    pub name: String,
}

pub struct Playground {
    store: KvStore,
    clock: Arc<dyn Clock>,
}

impl Playground {
    pub fn new(store: KvStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn draft(&self) -> Option<String> {
        self.store.get(DRAFT_KEY)
    }

    pub fn save_draft(&self, code: &str) -> bool {
        self.store.set(DRAFT_KEY, code)
    }

    /// Drop the draft, as when switching the playground language
    pub fn clear_draft(&self) -> bool {
        self.store.remove(DRAFT_KEY)
    }

    /// Replace the draft with a library template
    pub fn load_template(&self, id: &str) -> Result<&'static LibraryTemplate, PlaygroundError> {
        let template =
            catalog::library_template(id).ok_or_else(|| PlaygroundError::UnknownTemplate(id.to_string()))?;
        self.store.try_set(DRAFT_KEY, template.code)?;
        tracing::debug!("Loaded template '{}' into the playground", id);
        Ok(template)
    }

    /// Append `code` to the saved snippets, named after today's date
    pub fn save(&self, language: &str, code: &str) -> Result<SavedCode, PlaygroundError> {
        if code.trim().is_empty() {
            return Err(PlaygroundError::EmptyCode);
        }
        if !LANGUAGES.contains(&language) {
            return Err(PlaygroundError::UnknownLanguage(language.to_string()));
        }

        let timestamp = self.clock.now();
        let saved = SavedCode {
            code: code.to_string(),
            language: language.to_string(),
            timestamp,
            name: format!("Playground_{}", timestamp.format("%Y-%m-%d")),
        };

        let mut codes = self.saved();
        codes.push(saved.clone());
        self.store.try_set(SAVED_CODES_KEY, &codes)?;
        Ok(saved)
    }

    /// Saved snippets, oldest first
    pub fn saved(&self) -> Vec<SavedCode> {
        self.store.get(SAVED_CODES_KEY).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::FixedClock;
    use chrono::{Duration, NaiveDate};

    fn setup() -> (KvStore, Arc<FixedClock>, Playground) {
        let store = KvStore::open_in_memory(None).unwrap();
        let clock = Arc::new(FixedClock::at(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(), 10));
        let playground = Playground::new(store.clone(), clock.clone());
        (store, clock, playground)
    }

    #[test]
    fn test_draft_round_trip_and_clear() {
        let (_, _, playground) = setup();
        assert_eq!(playground.draft(), None);

        assert!(playground.save_draft("print('hi')"));
        assert_eq!(playground.draft().as_deref(), Some("print('hi')"));

        assert!(playground.clear_draft());
        assert_eq!(playground.draft(), None);
    }

    #[test]
    fn test_saved_snippets_accumulate() {
        let (store, clock, playground) = setup();
        let first = playground.save("python", "print(1)").unwrap();
        assert_eq!(first.name, "Playground_2024-02-14");

        clock.advance(Duration::days(1));
        playground.save("javascript", "console.log(2)").unwrap();

        let saved = playground.saved();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0], first);
        assert_eq!(saved[1].name, "Playground_2024-02-15");

        let raw: serde_json::Value = serde_json::from_str(&store.get_raw(SAVED_CODES_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(raw[1]["language"], "javascript");
        assert!(raw[1]["timestamp"].is_string());
    }

    #[test]
    fn test_save_rejects_empty_code_and_unknown_language() {
        let (_, _, playground) = setup();
        assert!(matches!(playground.save("python", "  "), Err(PlaygroundError::EmptyCode)));
        assert!(matches!(
            playground.save("cobol", "DISPLAY 'HI'"),
            Err(PlaygroundError::UnknownLanguage(_))
        ));
        assert!(playground.saved().is_empty());
    }

    #[test]
    fn test_load_template_replaces_draft() {
        let (_, _, playground) = setup();
        playground.save_draft("old");

        let template = playground.load_template("bubble-sort").unwrap();
        assert_eq!(template.name, "Bubble Sort");
        assert_eq!(playground.draft().as_deref(), Some(template.code));

        assert!(matches!(
            playground.load_template("quicksort"),
            Err(PlaygroundError::UnknownTemplate(_))
        ));
        assert_eq!(playground.draft().as_deref(), Some(template.code));
    }

    #[test]
    fn test_save_over_quota_keeps_list() {
        let store = KvStore::open_in_memory(Some(200)).unwrap();
        let clock = Arc::new(FixedClock::at(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(), 10));
        let playground = Playground::new(store, clock);

        playground.save("python", "x = 1").unwrap();
        let err = playground.save("python", &"y".repeat(300)).unwrap_err();
        assert!(matches!(err, PlaygroundError::Store(StoreError::QuotaExceeded { .. })));
        assert_eq!(playground.saved().len(), 1);
    }
}
