use crate::github::github_client::GithubClient;
use anyhow::Result;

pub struct RepositoryHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> RepositoryHandler<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        RepositoryHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub async fn delete(&self) -> Result<()> {
        self.client.delete_repository(&self.owner, &self.repo).await?;

        Ok(())
    }
}
