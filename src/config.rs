use std::fmt;
use thiserror::Error;

const GITHUB_USER: &str = "GITHUB_USER";
const GITHUB_TOKEN: &str = "GITHUB_TOKEN";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{name} must be defined")]
    Missing { name: &'static str },
}

/// Account and token the whole run acts on behalf of.
#[derive(Clone)]
pub struct Credentials {
    account: String,
    token: String,
}

impl Credentials {
    pub fn new(account: impl Into<String>, token: impl Into<String>) -> Self {
        Credentials {
            account: account.into(),
            token: token.into(),
        }
    }

    /// Reads `GITHUB_USER` and `GITHUB_TOKEN` through `lookup`, normally the
    /// process environment. Absent and empty values are both rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Credentials, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(Error::Missing { name })
        };

        let account = required(GITHUB_USER)?;
        let token = required(GITHUB_TOKEN)?;

        Ok(Credentials::new(account, token))
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account", &self.account)
            .field("token", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |name| vars.get(name).cloned()
    }

    #[test]
    fn should_load_credentials() {
        let credentials =
            Credentials::from_lookup(lookup(&[("GITHUB_USER", "alice"), ("GITHUB_TOKEN", "t0k")]))
                .unwrap();

        assert_eq!(credentials.account(), "alice");
        assert_eq!(credentials.token(), "t0k");
    }

    #[test]
    fn should_fail_when_user_is_missing() {
        let err = Credentials::from_lookup(lookup(&[("GITHUB_TOKEN", "t0k")])).unwrap_err();

        assert_eq!(err, Error::Missing { name: "GITHUB_USER" });
        assert_eq!(err.to_string(), "GITHUB_USER must be defined");
    }

    #[test]
    fn should_fail_when_token_is_missing() {
        let err = Credentials::from_lookup(lookup(&[("GITHUB_USER", "alice")])).unwrap_err();

        assert_eq!(err, Error::Missing { name: "GITHUB_TOKEN" });
    }

    #[test]
    fn should_treat_empty_values_as_missing() {
        let err =
            Credentials::from_lookup(lookup(&[("GITHUB_USER", ""), ("GITHUB_TOKEN", "t0k")]))
                .unwrap_err();
        assert_eq!(err, Error::Missing { name: "GITHUB_USER" });

        let err =
            Credentials::from_lookup(lookup(&[("GITHUB_USER", "alice"), ("GITHUB_TOKEN", "")]))
                .unwrap_err();
        assert_eq!(err, Error::Missing { name: "GITHUB_TOKEN" });
    }

    #[test]
    fn should_not_leak_token_in_debug_output() {
        let credentials = Credentials::new("alice", "secret");

        let rendered = format!("{:?}", credentials);

        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("secret"));
    }
}
