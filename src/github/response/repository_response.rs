use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub name: String,
}

impl RepositoryRef {
    pub fn new(name: impl Into<String>) -> Self {
        RepositoryRef { name: name.into() }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RepositoryEntry {
    Named { name: String },
    Other(serde_json::Value),
}

/// Parses a listing page. The body has to be a JSON array; entries without a
/// string `name` are skipped instead of failing the page.
pub fn parse_page(body: &str) -> Result<Vec<RepositoryRef>, serde_json::Error> {
    let entries: Vec<RepositoryEntry> = serde_json::from_str(body)?;

    let repositories = entries
        .into_iter()
        .filter_map(|entry| match entry {
            RepositoryEntry::Named { name } => Some(RepositoryRef::new(name)),
            RepositoryEntry::Other(value) => {
                log::warn!("skipping repository entry without a name: {}", value);
                None
            }
        })
        .collect();

    Ok(repositories)
}
