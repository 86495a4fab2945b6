use crate::{FetcherError, Response, UserRepositoriesRequest};

/// A trait for fetching repository data from the API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryFetcher: Sync + Send {
    /// Fetches and decodes the repositories of a user, in API order.
    async fn fetch(&self, request: &UserRepositoriesRequest) -> Result<Response, FetcherError>;
}
