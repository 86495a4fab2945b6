use std::sync::Arc;

use anyhow::anyhow;
use clap::Parser;
use log::{debug, info};

use github_repositories::{
    DEFAULT_USER_AGENT, FetchOutcome, GITHUB_REST_ENDPOINT, Repository, RepositoryFetchController,
    RestFetcher, RestFetcherConfig, StdResult,
};

/// Command line arguments for the GitHub repositories lister
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// GitHub username whose repositories are listed
    username: String,

    /// Base URL of the GitHub REST API
    #[arg(short, long, env = "GITHUB_API_ENDPOINT", default_value = GITHUB_REST_ENDPOINT)]
    endpoint: String,

    /// Value of the User-Agent header sent to the API
    #[arg(short, long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
}

impl From<&Args> for RestFetcherConfig {
    fn from(args: &Args) -> Self {
        Self {
            endpoint: args.endpoint.to_owned(),
            user_agent: args.user_agent.to_owned(),
        }
    }
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let fetcher = Arc::new(RestFetcher::try_new((&args).into())?);
    let controller = RepositoryFetchController::new(fetcher);
    info!("Fetching repositories of {}", args.username);
    match controller.load(&args.username).await? {
        FetchOutcome::Failed(e) => return Err(anyhow!(e)),
        outcome => debug!("Fetch outcome: {outcome}"),
    }
    print_repositories(&controller.repositories().await);

    Ok(())
}

fn print_repositories(repositories: &[Repository]) {
    if repositories.is_empty() {
        println!("No repositories found");
        return;
    }
    for repository in repositories {
        println!(
            "{}\tStars: {}\t{}",
            repository.name(),
            repository.total_stars(),
            repository.language().unwrap_or("—")
        );
    }
}
