//! Application session
//!
//! A [`Session`] is the single owner of the store, the progress model and the
//! router for one run of the application. Grading a submission is the only
//! deferred work: it runs on a tokio task after the configured playground
//! delay and is aborted when the user navigates away before it finishes.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::task::JoinHandle;

use crate::catalog;
use crate::config::Config;
use crate::grader::{self, GradeError, GradeOutcome};
use crate::playground::Playground;
use crate::progress::{Clock, CompletionOutcome, ProgressError, ProgressModel, SystemClock};
use crate::router::{NavigationError, PageId, Router, Transition};
use crate::store::KvStore;

/// Storage key of the pages seen across runs
pub const VISITED_PAGES_KEY: &str = "visitedPages";

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Progress(#[from] ProgressError),

    #[error(transparent)]
    Grade(#[from] GradeError),

    #[error("Grading task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// A graded and recorded submission
#[derive(Debug, Clone)]
pub struct SubmissionResult {
    pub grade: GradeOutcome,
    pub completion: CompletionOutcome,
}

struct PendingSubmission {
    challenge_id: &'static str,
    handle: JoinHandle<Result<GradeOutcome, GradeError>>,
}

pub struct Session {
    store: KvStore,
    progress: ProgressModel,
    router: Router,
    playground: Playground,
    submission_delay: Duration,
    pending: Option<PendingSubmission>,
}

impl Session {
    /// Open the configured store and start on the page named by `fragment`
    pub fn open(config: &Config, fragment: Option<&str>) -> Result<Self> {
        let path = config.storage_path();
        let store = KvStore::open(&path, config.storage.quota())
            .with_context(|| format!("Failed to open progress store: {}", path.display()))?;
        tracing::debug!("Opened progress store at {}", path.display());

        Ok(Self::new(store, Arc::new(SystemClock), config, fragment))
    }

    pub fn new(store: KvStore, clock: Arc<dyn Clock>, config: &Config, fragment: Option<&str>) -> Self {
        let progress = ProgressModel::load(store.clone(), clock.clone(), config.progress.options());
        let playground = Playground::new(store.clone(), clock);

        let mut router = Router::new(fragment, config.navigation.home_page);
        let remembered: Vec<String> = store.get(VISITED_PAGES_KEY).unwrap_or_default();
        router.restore_visited(remembered.iter().filter_map(|id| PageId::from_str(id)));

        let session = Self {
            store,
            progress,
            router,
            playground,
            submission_delay: Duration::from_millis(config.playground.submission_delay_ms),
            pending: None,
        };
        session.persist_visited();
        session
    }

    pub fn progress(&self) -> &ProgressModel {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut ProgressModel {
        &mut self.progress
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn playground(&self) -> &Playground {
        &self.playground
    }

    pub fn store(&self) -> &KvStore {
        &self.store
    }

    /// Navigate by page identifier. Leaving the current page drops any
    /// submission still being graded.
    pub fn navigate_to(&mut self, page_id: &str) -> Result<Transition, NavigationError> {
        let transition = self.router.navigate_to(page_id)?;
        self.after_navigation(transition);
        Ok(transition)
    }

    /// React to an external fragment change
    pub fn handle_fragment_change(&mut self, fragment: &str) -> Result<Transition, NavigationError> {
        let transition = self.router.handle_fragment_change(fragment)?;
        self.after_navigation(transition);
        Ok(transition)
    }

    fn after_navigation(&mut self, transition: Transition) {
        if transition.changed() {
            self.cancel_submission();
            self.persist_visited();
        }
    }

    fn persist_visited(&self) -> bool {
        self.store.set(VISITED_PAGES_KEY, self.router.visited())
    }

    /// Start grading `code` for `challenge_id` after the playground delay.
    ///
    /// A submission that is still pending is replaced.
    pub fn submit(&mut self, challenge_id: &str, code: &str) -> Result<(), SubmitError> {
        let challenge =
            catalog::challenge(challenge_id).ok_or_else(|| ProgressError::UnknownChallenge {
                id: challenge_id.to_string(),
                suggestion: catalog::suggest(challenge_id),
            })?;
        if code.trim().is_empty() {
            return Err(GradeError::EmptySubmission.into());
        }

        self.cancel_submission();

        let delay = self.submission_delay;
        let code = code.to_string();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            grader::grade(challenge, &code)
        });

        tracing::debug!("Submission for '{}' pending ({:?})", challenge.id, delay);
        self.pending = Some(PendingSubmission {
            challenge_id: challenge.id,
            handle,
        });
        Ok(())
    }

    pub fn has_pending_submission(&self) -> bool {
        self.pending.is_some()
    }

    /// Challenge of the submission being graded, if any
    pub fn pending_challenge(&self) -> Option<&'static str> {
        self.pending.as_ref().map(|p| p.challenge_id)
    }

    /// Wait for the pending submission and record its result.
    ///
    /// Returns `Ok(None)` when nothing is pending or the grading task was
    /// cancelled.
    pub async fn finish_submission(&mut self) -> Result<Option<SubmissionResult>, SubmitError> {
        let Some(pending) = self.pending.take() else {
            return Ok(None);
        };

        let grade = match pending.handle.await {
            Ok(result) => result?,
            Err(e) if e.is_cancelled() => {
                tracing::debug!("Submission for '{}' was cancelled", pending.challenge_id);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let completion = self.progress.record_completion(grade.challenge_id, grade.success)?;
        Ok(Some(SubmissionResult { grade, completion }))
    }

    /// Submit and wait for the result
    pub async fn submit_and_wait(
        &mut self,
        challenge_id: &str,
        code: &str,
    ) -> Result<Option<SubmissionResult>, SubmitError> {
        self.submit(challenge_id, code)?;
        self.finish_submission().await
    }

    /// Abort the pending submission. Returns whether one was pending.
    pub fn cancel_submission(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                pending.handle.abort();
                tracing::info!("Cancelled pending submission for '{}'", pending.challenge_id);
                true
            }
            None => false,
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::FixedClock;
    use chrono::NaiveDate;

    const ADD: &str = "function add(a, b) { return a + b; }";

    fn config(delay_ms: u64) -> Config {
        let mut config = Config::default();
        config.playground.submission_delay_ms = delay_ms;
        config
    }

    fn session_with(store: KvStore, delay_ms: u64) -> Session {
        let clock = Arc::new(FixedClock::at(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(), 12));
        Session::new(store, clock, &config(delay_ms), None)
    }

    #[tokio::test]
    async fn test_submission_is_graded_and_recorded() {
        let mut session = session_with(KvStore::open_in_memory(None).unwrap(), 5);

        let result = session.submit_and_wait("js-basics", ADD).await.unwrap().unwrap();
        assert!(result.grade.success);
        assert!(result.completion.persisted);
        assert!(session.progress().record().is_successful("js-basics"));
        assert_eq!(session.progress().record().streak, 1);
        assert!(!session.has_pending_submission());
    }

    #[tokio::test]
    async fn test_failed_submission_is_recorded_as_failure() {
        let mut session = session_with(KvStore::open_in_memory(None).unwrap(), 5);

        let result = session
            .submit_and_wait("js-basics", "console.log('hi')")
            .await
            .unwrap()
            .unwrap();
        assert!(!result.grade.success);
        let entry = &session.progress().record().completed_challenges["js-basics"];
        assert!(!entry.success);
        assert_eq!(session.progress().record().streak, 0);
    }

    #[tokio::test]
    async fn test_empty_and_unknown_submissions_are_rejected() {
        let mut session = session_with(KvStore::open_in_memory(None).unwrap(), 5);

        assert!(matches!(
            session.submit("js-basics", "   \n"),
            Err(SubmitError::Grade(GradeError::EmptySubmission))
        ));
        assert!(matches!(
            session.submit("js-basic", ADD),
            Err(SubmitError::Progress(ProgressError::UnknownChallenge {
                suggestion: Some("js-basics"),
                ..
            }))
        ));
        assert!(!session.has_pending_submission());
    }

    #[tokio::test]
    async fn test_navigating_away_cancels_submission() {
        let mut session = session_with(KvStore::open_in_memory(None).unwrap(), 60_000);
        session.navigate_to("challenges").unwrap();

        session.submit("js-basics", ADD).unwrap();
        assert_eq!(session.pending_challenge(), Some("js-basics"));

        session.navigate_to("#progress").unwrap();
        assert!(!session.has_pending_submission());
        assert!(session.finish_submission().await.unwrap().is_none());
        assert_eq!(session.progress().record().completed_count(), 0);
    }

    #[tokio::test]
    async fn test_same_page_and_invalid_navigation_keep_submission() {
        let mut session = session_with(KvStore::open_in_memory(None).unwrap(), 60_000);
        session.navigate_to("challenges").unwrap();
        session.submit("py-basics", "def factorial(n):\n    return 1").unwrap();

        session.handle_fragment_change("#challenges").unwrap();
        assert!(session.navigate_to("#nowhere").is_err());
        assert_eq!(session.router().active(), PageId::Challenges);
        assert!(session.has_pending_submission());

        assert!(session.cancel_submission());
        assert!(!session.cancel_submission());
    }

    #[tokio::test]
    async fn test_visited_pages_persist_across_sessions() {
        let store = KvStore::open_in_memory(None).unwrap();
        {
            let mut session = session_with(store.clone(), 5);
            session.navigate_to("compiler").unwrap();
        }

        let session = session_with(store.clone(), 5);
        let visited: Vec<PageId> = session.router().visited().iter().copied().collect();
        assert_eq!(visited, vec![PageId::Home, PageId::Compiler]);
        assert_eq!(
            store.get::<Vec<String>>(VISITED_PAGES_KEY),
            Some(vec!["home".to_string(), "compiler".to_string()])
        );
    }
}
