use std::fmt::Display;

/// A request listing the public repositories of a GitHub user.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct UserRepositoriesRequest {
    /// The username, kept exactly as typed.
    pub(crate) username: String,
}

impl UserRepositoriesRequest {
    /// Creates a new `UserRepositoriesRequest` for the given username.
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
        }
    }

    /// Retrieves the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The API path of the request. The username is neither trimmed nor escaped.
    pub fn path(&self) -> String {
        format!("/users/{}/repos", self.username)
    }
}

impl Display for UserRepositoriesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserRepositoriesRequest: username={}", self.username)
    }
}
