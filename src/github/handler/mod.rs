pub mod repository_handler;
pub mod user_handler;

use super::github_client::GithubClient;
use repository_handler::RepositoryHandler;
use user_handler::UserHandler;

impl GithubClient {
    /// Endpoints scoped to the authenticated user.
    pub fn user(&self) -> UserHandler {
        UserHandler::new(self)
    }

    /// A repository owned by the authenticated account.
    pub fn repo(&self, name: impl Into<String>) -> RepositoryHandler {
        RepositoryHandler::new(self, self.account(), name)
    }
}
