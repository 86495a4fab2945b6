use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::{
    FetchOutcome, FetchState, LoadRejection, Repository, RepositoryFetcher,
    UserRepositoriesRequest,
};

/// Drives the repository fetch of a user and owns the state a presentation layer observes.
///
/// A presentation layer may only trigger [`RepositoryFetchController::load`] and read
/// [`RepositoryFetchController::is_in_progress`], [`RepositoryFetchController::repositories`]
/// and [`RepositoryFetchController::outcome`].
pub struct RepositoryFetchController {
    fetcher: Arc<dyn RepositoryFetcher>,
    state: FetchState,
}

impl RepositoryFetchController {
    /// Creates a new `RepositoryFetchController` instance with the given fetcher.
    pub fn new(fetcher: Arc<dyn RepositoryFetcher>) -> Self {
        Self {
            fetcher,
            state: FetchState::default(),
        }
    }

    /// Fetches the repositories of `username`, keeps the non-fork ones and orders them by stars.
    ///
    /// Fetch failures are logged and recorded in the returned outcome; the previously stored
    /// repositories are kept in that case. A blank username or a concurrent call is rejected
    /// without any request being issued.
    pub async fn load(&self, username: &str) -> Result<FetchOutcome, LoadRejection> {
        if username.trim().is_empty() {
            debug!("Ignoring fetch request for a blank username");
            return Err(LoadRejection::EmptyInput);
        }
        let Some(_in_progress) = self.state.begin_fetch() else {
            warn!("Fetch already in progress, ignoring request for {username}");
            return Err(LoadRejection::AlreadyInProgress);
        };

        let request = UserRepositoriesRequest::new(username);
        info!("Processing request: {request}");
        let outcome = match self.fetcher.fetch(&request).await {
            Ok(response) => {
                let repositories = response.into_curated_repositories();
                info!(
                    "Fetched {} repositories for {username}",
                    repositories.len()
                );
                self.state.replace_repositories(repositories.clone()).await;
                FetchOutcome::Succeeded(repositories)
            }
            Err(e) => {
                error!("Failed to fetch repositories for {username}: {e}");
                FetchOutcome::Failed(e)
            }
        };
        self.state.set_last_outcome(outcome.clone()).await;

        Ok(outcome)
    }

    /// Whether a fetch is running.
    pub fn is_in_progress(&self) -> bool {
        self.state.is_in_progress()
    }

    /// Retrieves the repositories of the last successful fetch.
    pub async fn repositories(&self) -> Vec<Repository> {
        self.state.get_repositories().await
    }

    /// Retrieves the current fetch outcome.
    pub async fn outcome(&self) -> FetchOutcome {
        self.state.get_outcome().await
    }
}
