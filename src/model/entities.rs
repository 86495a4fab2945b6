use std::{
    fmt::Display,
    ops::Deref,
    sync::atomic::{AtomicBool, Ordering},
};

use serde::Deserialize;
use tokio::sync::RwLock;

use super::FetcherError;

/// The identifier of a repository.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepositoryId(pub u64);

impl Deref for RepositoryId {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The name of a repository.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(pub String);

impl Deref for RepositoryName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The number of stars a repository has.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StarsCounter(pub u32);

impl Deref for StarsCounter {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for StarsCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A GitHub repository as reported by the users API.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// The unique identifier of the repository.
    id: RepositoryId,

    /// The name of the repository.
    name: RepositoryName,

    /// The number of stars the repository has.
    #[serde(rename = "stargazers_count")]
    total_stars: StarsCounter,

    /// The primary language, absent when GitHub reports none.
    #[serde(default)]
    language: Option<String>,

    /// The web address of the repository.
    #[serde(rename = "html_url")]
    url: String,

    /// Whether the repository is a fork of another one.
    #[serde(rename = "fork")]
    is_fork: bool,
}

impl Repository {
    /// Creates a new `Repository` instance.
    pub fn new(
        id: u64,
        name: &str,
        total_stars: u32,
        language: Option<&str>,
        url: &str,
        is_fork: bool,
    ) -> Self {
        Self {
            id: RepositoryId(id),
            name: RepositoryName(name.to_string()),
            total_stars: StarsCounter(total_stars),
            language: language.map(str::to_string),
            url: url.to_string(),
            is_fork,
        }
    }

    /// Retrieves the repository identifier.
    pub fn id(&self) -> RepositoryId {
        self.id
    }

    /// Retrieves the repository name.
    pub fn name(&self) -> &RepositoryName {
        &self.name
    }

    /// Retrieves the total stars of the repository.
    pub fn total_stars(&self) -> StarsCounter {
        self.total_stars
    }

    /// Retrieves the primary language of the repository, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Retrieves the web address of the repository.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether the repository is a fork.
    pub fn is_fork(&self) -> bool {
        self.is_fork
    }

    #[cfg(test)]
    /// Creates a dummy non-fork `Repository` for testing purposes.
    pub(crate) fn dummy(id: u64, name: &str, total_stars: u32) -> Self {
        Self::new(
            id,
            name,
            total_stars,
            Some("Rust"),
            &format!("https://github.com/octocat/{name}"),
            false,
        )
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repository: {}, Stars: {}, Language: {}",
            self.name,
            self.total_stars,
            self.language.as_deref().unwrap_or("—")
        )
    }
}

/// The observable outcome of the repository fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchOutcome {
    /// No fetch has completed yet.
    #[default]
    NotStarted,

    /// A fetch is running.
    InProgress,

    /// The last fetch succeeded with the curated repositories.
    Succeeded(Vec<Repository>),

    /// The last fetch failed.
    Failed(FetcherError),
}

impl Display for FetchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchOutcome::NotStarted => write!(f, "NotStarted"),
            FetchOutcome::InProgress => write!(f, "InProgress"),
            FetchOutcome::Succeeded(repositories) => {
                write!(f, "Succeeded: repositories={}", repositories.len())
            }
            FetchOutcome::Failed(error) => write!(f, "Failed: {error}"),
        }
    }
}

/// The state owned by the fetch controller
#[derive(Debug, Default)]
pub struct FetchState {
    /// Set while a fetch is running
    in_progress: AtomicBool,

    /// The outcome of the last completed fetch
    last_outcome: RwLock<FetchOutcome>,

    /// The repositories of the last successful fetch
    repositories: RwLock<Vec<Repository>>,
}

impl FetchState {
    /// Claims the in-progress flag, returning `None` if it is already held.
    ///
    /// The flag is released when the returned guard is dropped.
    pub fn begin_fetch(&self) -> Option<InProgressGuard<'_>> {
        self.in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InProgressGuard {
                flag: &self.in_progress,
            })
    }

    /// Whether a fetch is running.
    pub fn is_in_progress(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    /// Records the outcome of a completed fetch.
    pub async fn set_last_outcome(&self, outcome: FetchOutcome) {
        let mut last_outcome = self.last_outcome.write().await;
        *last_outcome = outcome;
    }

    /// Retrieves the current outcome, `InProgress` while the flag is held.
    pub async fn get_outcome(&self) -> FetchOutcome {
        if self.is_in_progress() {
            return FetchOutcome::InProgress;
        }
        let last_outcome = self.last_outcome.read().await;
        last_outcome.to_owned()
    }

    /// Replaces the stored repositories in full.
    pub async fn replace_repositories(&self, repositories: Vec<Repository>) {
        let mut current_repositories = self.repositories.write().await;
        *current_repositories = repositories;
    }

    /// Retrieves the stored repositories.
    pub async fn get_repositories(&self) -> Vec<Repository> {
        let repositories = self.repositories.read().await;
        repositories.to_owned()
    }
}

/// Holds the in-progress flag of a [`FetchState`] and resets it on drop.
#[derive(Debug)]
pub struct InProgressGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InProgressGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
