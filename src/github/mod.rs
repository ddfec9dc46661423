pub mod github_client;
mod handler;
mod link;
pub mod response;

use anyhow::{Context, Result};
use github_client::GithubClient;

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    NothingToDelete,
    Deleted(usize),
}

/// Lists every repository owned by the account, then deletes them one by one
/// in listing order. The first failure aborts the run and leaves the
/// remaining repositories untouched.
pub async fn purge(client: &GithubClient) -> Result<Outcome> {
    log::debug!("listing repositories owned by {}", client.account());

    let repositories = client
        .user()
        .owned_repositories()
        .await
        .context("Cannot list the owned repositories")?;

    if repositories.is_empty() {
        log::warn!("Found 0 repositories to delete.");
        return Ok(Outcome::NothingToDelete);
    }

    for repository in &repositories {
        client
            .repo(&repository.name)
            .delete()
            .await
            .with_context(|| format!("Cannot delete repository {}", repository.name))?;
    }

    Ok(Outcome::Deleted(repositories.len()))
}
