//! One-shot country directory loader.

use crate::domain::entities::{CountryOption, CountryRecord};
use crate::domain::repositories::{CountryRepository, DirectoryError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tracing::{error, info, warn};

/// Load state of the directory as seen by readers.
#[derive(Debug, Clone)]
pub enum DirectoryState {
    Loading,
    Ready(Arc<[CountryRecord]>),
    Failed(DirectoryError),
}

impl DirectoryState {
    /// `true` once the load has either produced countries or failed.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DirectoryState::Loading)
    }

    /// Loaded countries; empty while loading or after a failure.
    pub fn records(&self) -> &[CountryRecord] {
        match self {
            DirectoryState::Ready(records) => records,
            _ => &[],
        }
    }

    /// `loading`, `ready` or `failed`.
    pub fn status(&self) -> &'static str {
        match self {
            DirectoryState::Loading => "loading",
            DirectoryState::Ready(_) => "ready",
            DirectoryState::Failed(_) => "failed",
        }
    }

    pub fn error(&self) -> Option<&DirectoryError> {
        match self {
            DirectoryState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Selector rows for the loaded countries.
    pub fn options(&self) -> Vec<CountryOption> {
        self.records().iter().map(CountryRecord::to_option).collect()
    }
}

/// Holds the country list for the lifetime of the form.
///
/// The list is requested exactly once, in the background, bounded by a
/// timeout and never retried. Readers observe [`DirectoryState`] without
/// blocking; a terminal state is never replaced. Dropping the directory
/// aborts a load that is still in flight.
#[derive(Debug)]
pub struct CountryDirectory {
    state: Arc<watch::Sender<DirectoryState>>,
    load: Option<AbortHandle>,
}

impl CountryDirectory {
    /// Starts loading from `repository` on the current tokio runtime.
    ///
    /// Returns immediately with the directory in [`DirectoryState::Loading`].
    pub fn spawn<R>(repository: Arc<R>, timeout: Duration) -> Self
    where
        R: CountryRepository + ?Sized + 'static,
    {
        let (tx, _) = watch::channel(DirectoryState::Loading);
        let state = Arc::new(tx);
        let publisher = Arc::clone(&state);

        let task = tokio::spawn(async move {
            let result = match tokio::time::timeout(timeout, repository.fetch_all()).await {
                Ok(result) => result,
                Err(_) => Err(DirectoryError::Timeout(timeout)),
            };

            let next = match result {
                Ok(records) => {
                    info!(count = records.len(), "Country directory loaded");
                    metrics::counter!("country_directory_loads_total", "outcome" => "ready")
                        .increment(1);
                    DirectoryState::Ready(records.into())
                }
                Err(e) => {
                    error!(error = %e, "Failed to load country directory");
                    metrics::counter!("country_directory_loads_total", "outcome" => e.kind())
                        .increment(1);
                    DirectoryState::Failed(e)
                }
            };

            publish_terminal(&publisher, next);
        });

        Self {
            state,
            load: Some(task.abort_handle()),
        }
    }

    /// A directory that is already loaded with `records`.
    pub fn ready(records: Vec<CountryRecord>) -> Self {
        let (tx, _) = watch::channel(DirectoryState::Ready(records.into()));

        Self {
            state: Arc::new(tx),
            load: None,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> DirectoryState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<DirectoryState> {
        self.state.subscribe()
    }

    /// Waits until the load finishes, fails or is cancelled.
    pub async fn wait(&self) -> DirectoryState {
        let mut rx = self.state.subscribe();

        match rx.wait_for(DirectoryState::is_terminal).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        }
    }

    /// Aborts an in-flight load.
    ///
    /// Returns `true` if the load was still running and the state moved to
    /// [`DirectoryError::Cancelled`]; `false` if it had already finished.
    pub fn cancel(&self) -> bool {
        if let Some(load) = &self.load {
            load.abort();
        }

        let cancelled = publish_terminal(
            &self.state,
            DirectoryState::Failed(DirectoryError::Cancelled),
        );
        if cancelled {
            warn!("Country directory load cancelled");
        }

        cancelled
    }

    /// Whether `code` belongs to the loaded list.
    pub fn contains(&self, code: &str) -> bool {
        self.state.borrow().records().iter().any(|r| r.code == code)
    }
}

impl Drop for CountryDirectory {
    fn drop(&mut self) {
        if let Some(load) = &self.load {
            load.abort();
        }
    }
}

/// Replaces `Loading` with `next`; leaves terminal states untouched.
fn publish_terminal(state: &watch::Sender<DirectoryState>, next: DirectoryState) -> bool {
    state.send_if_modified(move |current| {
        if current.is_terminal() {
            false
        } else {
            *current = next;
            true
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DEFAULT_FLAG_BASE;
    use crate::domain::repositories::MockCountryRepository;
    use async_trait::async_trait;

    struct SlowRepository {
        delay: Duration,
    }

    #[async_trait]
    impl CountryRepository for SlowRepository {
        async fn fetch_all(&self) -> Result<Vec<CountryRecord>, DirectoryError> {
            tokio::time::sleep(self.delay).await;
            Ok(vec![CountryRecord::new("Poland", "PL", DEFAULT_FLAG_BASE)])
        }
    }

    fn poland() -> CountryRecord {
        CountryRecord::new("Poland", "PL", DEFAULT_FLAG_BASE)
    }

    #[tokio::test]
    async fn test_spawn_loads_records() {
        let mut repo = MockCountryRepository::new();
        repo.expect_fetch_all()
            .times(1)
            .returning(|| Ok(vec![poland()]));

        let directory = CountryDirectory::spawn(Arc::new(repo), Duration::from_secs(5));
        let state = directory.wait().await;

        assert_eq!(state.status(), "ready");
        assert_eq!(state.records(), &[poland()]);
        assert_eq!(
            state.records()[0].flag_url,
            "https://flagcdn.com/w80/pl.png"
        );
        assert!(directory.contains("PL"));
        assert!(!directory.contains("DE"));
    }

    #[tokio::test]
    async fn test_failure_leaves_list_empty() {
        let mut repo = MockCountryRepository::new();
        repo.expect_fetch_all()
            .times(1)
            .returning(|| Err(DirectoryError::Status(503)));

        let directory = CountryDirectory::spawn(Arc::new(repo), Duration::from_secs(5));
        let state = directory.wait().await;

        assert_eq!(state.status(), "failed");
        assert_eq!(state.error(), Some(&DirectoryError::Status(503)));
        assert!(state.records().is_empty());
        assert!(state.options().is_empty());
    }

    #[tokio::test]
    async fn test_ready_but_empty_is_not_failure() {
        let mut repo = MockCountryRepository::new();
        repo.expect_fetch_all().times(1).returning(|| Ok(vec![]));

        let directory = CountryDirectory::spawn(Arc::new(repo), Duration::from_secs(5));
        let state = directory.wait().await;

        assert_eq!(state.status(), "ready");
        assert!(state.error().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_starts_in_loading_state() {
        let repo = SlowRepository {
            delay: Duration::from_secs(3),
        };

        let directory = CountryDirectory::spawn(Arc::new(repo), Duration::from_secs(10));

        assert_eq!(directory.state().status(), "loading");
        assert!(directory.state().records().is_empty());

        let state = directory.wait().await;
        assert_eq!(state.status(), "ready");
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_fails_with_timeout() {
        let repo = SlowRepository {
            delay: Duration::from_secs(60),
        };

        let directory = CountryDirectory::spawn(Arc::new(repo), Duration::from_secs(2));
        let state = directory.wait().await;

        assert_eq!(
            state.error(),
            Some(&DirectoryError::Timeout(Duration::from_secs(2)))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_in_flight_load() {
        let repo = SlowRepository {
            delay: Duration::from_secs(60),
        };

        let directory = CountryDirectory::spawn(Arc::new(repo), Duration::from_secs(120));

        assert!(directory.cancel());
        assert_eq!(directory.state().error(), Some(&DirectoryError::Cancelled));

        tokio::time::sleep(Duration::from_secs(90)).await;
        assert_eq!(directory.state().error(), Some(&DirectoryError::Cancelled));
    }

    #[tokio::test]
    async fn test_cancel_after_completion_keeps_state() {
        let directory = CountryDirectory::ready(vec![poland()]);

        assert!(!directory.cancel());
        assert_eq!(directory.state().status(), "ready");
    }

    #[tokio::test]
    async fn test_subscribers_see_terminal_state() {
        let mut repo = MockCountryRepository::new();
        repo.expect_fetch_all()
            .times(1)
            .returning(|| Ok(vec![poland()]));

        let directory = CountryDirectory::spawn(Arc::new(repo), Duration::from_secs(5));
        let mut rx = directory.subscribe();

        let state = rx.wait_for(DirectoryState::is_terminal).await.unwrap().clone();
        assert_eq!(state.options().len(), 1);
        assert_eq!(state.options()[0].label, "Poland");
    }
}
