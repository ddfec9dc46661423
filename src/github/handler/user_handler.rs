use crate::github::{github_client::GithubClient, response::RepositoryRef};
use anyhow::Result;

pub struct UserHandler<'a> {
    client: &'a GithubClient,
}

impl<'a> UserHandler<'a> {
    pub fn new(client: &'a GithubClient) -> Self {
        UserHandler { client }
    }

    /// Follows the `next` links until the listing is exhausted. Any failing
    /// page discards everything gathered so far.
    pub async fn owned_repositories(&self) -> Result<Vec<RepositoryRef>> {
        let mut repositories = Vec::new();
        let mut next = Some(self.client.owned_repositories_url());
        let mut pages = 0;

        while let Some(uri) = next {
            let page = self.client.get_repository_page(&uri).await?;

            repositories.extend(page.repositories);
            next = page.next;
            pages += 1;
        }

        log::debug!(
            "listed {} repositories across {} pages",
            repositories.len(),
            pages
        );

        Ok(repositories)
    }
}
