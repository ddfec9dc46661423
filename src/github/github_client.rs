use super::{
    link,
    response::repository_response::{self, RepositoryRef},
};
use crate::{
    config::Credentials,
    http::{Error, Headers, HttpClient, ResponseHandler},
};
use reqwest::{
    header::{ACCEPT, LINK},
    Method, StatusCode,
};

pub const GITHUB_API_URL: &str = "https://api.github.com";

/// One page of the owned repositories listing.
pub struct RepositoryPage {
    pub repositories: Vec<RepositoryRef>,
    pub next: Option<String>,
}

pub struct GithubClient {
    http: HttpClient,
    base_url: String,
    credentials: Credentials,
}

impl GithubClient {
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        GithubClient {
            http: HttpClient::new(),
            base_url,
            credentials,
        }
    }

    pub fn account(&self) -> &str {
        self.credentials.account()
    }

    pub(super) fn owned_repositories_url(&self) -> String {
        format!(
            "{}/user/repos?affiliation=owner&per_page=100",
            self.base_url
        )
    }

    pub(super) fn repository_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}", self.base_url, owner, repo)
    }

    pub(super) async fn get_repository_page(&self, uri: &str) -> Result<RepositoryPage, Error> {
        log::info!("GET {}", uri);

        let response = self
            .http
            .get(uri)
            .default_headers(self.credentials.token())
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .expect_status(Method::GET, StatusCode::OK)?;

        let next = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(link::next_link);

        let body = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseText { cause })?;

        let repositories =
            repository_response::parse_page(&body).map_err(|cause| Error::MalformedResponse {
                url: uri.to_owned(),
                cause,
            })?;

        log::debug!(
            "page returned {} repositories, next page: {:?}",
            repositories.len(),
            next
        );

        Ok(RepositoryPage { repositories, next })
    }

    pub(super) async fn delete_repository(&self, owner: &str, repo: &str) -> Result<(), Error> {
        let uri = self.repository_url(owner, repo);

        log::info!("DELETE {}", uri);

        self.http
            .delete(uri.as_str())
            .default_headers(self.credentials.token())
            .send()
            .await?
            .expect_status(Method::DELETE, StatusCode::NO_CONTENT)?;

        Ok(())
    }
}
