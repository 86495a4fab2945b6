use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Fetcher error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetcherError {
    /// Transport error (connection, DNS, timeout, body read)
    #[error("Transport error: {0}")]
    Transport(String),
    /// Decoding error
    #[error("Decoding error: {0}")]
    Decode(String),
}

/// Reasons for a load trigger to be ignored without touching the state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadRejection {
    /// The username is blank once trimmed.
    #[error("Username is empty")]
    EmptyInput,
    /// Another load is still running.
    #[error("A fetch is already in progress")]
    AlreadyInProgress,
}
