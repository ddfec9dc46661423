mod config;
mod github;
mod http;
mod logger;

use anyhow::{Context, Result};
use config::Credentials;
use github::{
    github_client::{GithubClient, GITHUB_API_URL},
    Outcome,
};
use std::env;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logger::init()?;

    if let Outcome::Deleted(count) = run(|name| env::var(name).ok(), GITHUB_API_URL).await? {
        log::info!("Deleted {} repositories", count);
    }

    log::info!("FIN");

    Ok(())
}

async fn run<F>(lookup: F, api_url: &str) -> Result<Outcome>
where
    F: Fn(&str) -> Option<String>,
{
    // no client exists until both credentials are present
    let credentials = Credentials::from_lookup(lookup).context("Cannot load credentials")?;
    let client = GithubClient::with_base_url(credentials, api_url);

    github::purge(&client).await
}
