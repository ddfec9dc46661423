use reqwest::{
    header::{AUTHORIZATION, USER_AGENT},
    Client, Method, RequestBuilder, Response, StatusCode,
};
use std::ops::Deref;
use thiserror::Error;

const USER_AGENT_NAME: &str = "repo-purge";

#[derive(Clone, Default)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn default_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: &str) -> RequestBuilder {
        self.header(AUTHORIZATION, format!("token {}", token))
            .header(USER_AGENT, USER_AGENT_NAME)
    }
}

pub trait ResponseHandler: Sized {
    /// Accepts the response only when it carries exactly `expected`.
    fn expect_status(self, method: Method, expected: StatusCode) -> Result<Self, Error>;
}

impl ResponseHandler for Response {
    fn expect_status(self, method: Method, expected: StatusCode) -> Result<Self, Error> {
        let found = self.status();

        if found != expected {
            return Err(Error::UnexpectedStatus {
                method: method.to_string(),
                url: self.url().to_string(),
                expected: expected.as_u16(),
                found: found.as_u16(),
            });
        }

        Ok(self)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{method} {url}: expected response code {expected}, found {found}")]
    UnexpectedStatus {
        method: String,
        url: String,
        expected: u16,
        found: u16,
    },
    #[error("Failed to send request")]
    Request {
        #[from]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseText {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response from {url}")]
    MalformedResponse {
        url: String,
        #[source]
        cause: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use mockito::Server;

    #[tokio::test]
    async fn should_send_default_headers() -> Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .match_header("authorization", "token t0k")
            .match_header("user-agent", "repo-purge")
            .with_status(200)
            .create_async()
            .await;

        let response = HttpClient::new()
            .get(server.url())
            .default_headers("t0k")
            .send()
            .await?;

        mock.assert_async().await;
        assert_eq!(response.status(), StatusCode::OK);

        Ok(())
    }

    #[tokio::test]
    async fn should_accept_expected_status() -> Result<()> {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("DELETE", "/")
            .with_status(204)
            .create_async()
            .await;

        let response = HttpClient::new().delete(server.url()).send().await?;

        assert!(response
            .expect_status(Method::DELETE, StatusCode::NO_CONTENT)
            .is_ok());

        Ok(())
    }

    #[tokio::test]
    async fn should_reject_any_other_status() -> Result<()> {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("DELETE", "/")
            .with_status(200)
            .create_async()
            .await;

        let response = HttpClient::new().delete(server.url()).send().await?;

        match response.expect_status(Method::DELETE, StatusCode::NO_CONTENT) {
            Err(err @ Error::UnexpectedStatus { .. }) => {
                assert_eq!(
                    err.to_string(),
                    format!(
                        "DELETE {}/: expected response code 204, found 200",
                        server.url()
                    )
                );
            }
            other => panic!("unexpected result: {:?}", other.map(|r| r.status())),
        }

        Ok(())
    }
}
