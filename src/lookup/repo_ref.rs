use crate::error::{PulseError, Result};
use serde::{Deserialize, Serialize};

const URL_PREFIXES: [&str; 4] = [
    "https://github.com/",
    "http://github.com/",
    "https://www.github.com/",
    "github.com/",
];

/// A repository reference typed by a user. `name` is `None` when only an
/// owner was given and a repository still has to be picked for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    pub owner: String,
    pub name: Option<String>,
}

impl RepoRef {
    /// Accepts `owner/repo`, a GitHub URL (optionally ending in `.git`), or a bare
    /// username. `owner/` with an empty repository part is treated as a username.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(PulseError::InvalidRepoInput("input is empty".to_string()));
        }

        if !input.contains('/') {
            return Ok(Self {
                owner: input.to_string(),
                name: None,
            });
        }

        let mut path = input;
        for prefix in URL_PREFIXES {
            if let Some(rest) = path.strip_prefix(prefix) {
                path = rest;
                break;
            }
        }
        let path = path.strip_suffix(".git").unwrap_or(path);

        let mut parts = path.split('/');
        match (parts.next(), parts.next()) {
            (Some(owner), Some(name)) if !owner.is_empty() => Ok(Self {
                owner: owner.to_string(),
                name: (!name.is_empty()).then(|| name.to_string()),
            }),
            _ => Err(PulseError::InvalidRepoInput(format!(
                "'{input}' is not of the form owner/repo"
            ))),
        }
    }

    pub fn slug(&self) -> String {
        match &self.name {
            Some(name) => format!("{}/{}", self.owner, name),
            None => self.owner.clone(),
        }
    }
}
