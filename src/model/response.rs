use super::Repository;

/// A response containing the repositories of a user, in API order.
#[derive(Debug, PartialEq, Eq)]
pub struct Response {
    /// Retrieved repositories
    pub(crate) repositories: Vec<Repository>,

    /// The HTTP status code returned by the API
    pub(crate) status: u16,
}

impl Response {
    /// Creates a new `Response` instance with the given repositories.
    pub fn new(repositories: Vec<Repository>, status: u16) -> Self {
        Self {
            repositories,
            status,
        }
    }

    /// Retrieves the list of repositories.
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// Retrieves the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Drops forks and orders the remaining repositories by stars, most starred first.
    ///
    /// Repositories with the same number of stars keep their API order.
    pub fn into_curated_repositories(self) -> Vec<Repository> {
        let mut repositories = self
            .repositories
            .into_iter()
            .filter(|repository| !repository.is_fork())
            .collect::<Vec<_>>();
        repositories.sort_by(|a, b| b.total_stars().cmp(&a.total_stars()));

        repositories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fork(id: u64, name: &str, total_stars: u32) -> Repository {
        Repository::new(
            id,
            name,
            total_stars,
            None,
            &format!("https://github.com/octocat/{name}"),
            true,
        )
    }

    #[test]
    fn curated_repositories_exclude_forks() {
        let response = Response::new(
            vec![
                Repository::dummy(1, "repository-1", 1),
                fork(2, "fork-1", 100),
                Repository::dummy(3, "repository-2", 2),
                fork(4, "fork-2", 0),
            ],
            200,
        );

        let repositories = response.into_curated_repositories();

        assert_eq!(
            vec![
                Repository::dummy(3, "repository-2", 2),
                Repository::dummy(1, "repository-1", 1),
            ],
            repositories
        );
    }

    #[test]
    fn curated_repositories_are_sorted_by_descending_stars() {
        let response = Response::new(
            vec![
                Repository::dummy(1, "repository-1", 3),
                Repository::dummy(2, "repository-2", 42),
                Repository::dummy(3, "repository-3", 0),
                Repository::dummy(4, "repository-4", 7),
            ],
            200,
        );

        let repositories = response.into_curated_repositories();

        let stars = repositories
            .iter()
            .map(|repository| *repository.total_stars())
            .collect::<Vec<_>>();
        assert_eq!(vec![42, 7, 3, 0], stars);
    }

    #[test]
    fn curated_repositories_keep_api_order_on_ties() {
        let response = Response::new(
            vec![
                Repository::dummy(1, "a", 10),
                Repository::dummy(2, "c", 5),
                Repository::dummy(3, "b", 10),
                Repository::dummy(4, "d", 5),
            ],
            200,
        );

        let repositories = response.into_curated_repositories();

        let names = repositories
            .iter()
            .map(|repository| repository.name().as_str())
            .collect::<Vec<_>>();
        assert_eq!(vec!["a", "b", "c", "d"], names);
    }

    #[test]
    fn curated_repositories_of_forks_only_is_empty() {
        let response = Response::new(vec![fork(1, "fork-1", 1)], 200);

        assert!(response.into_curated_repositories().is_empty());
    }
}
