use crate::error::Result;
use crate::model::{CommitDay, RepoListing, RepoSnapshot};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Read a JSON document from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_document<T: DeserializeOwned>(path: Option<&Path>) -> Result<T> {
    let raw = match path {
        Some(p) if p != Path::new("-") => {
            log::debug!("reading {}", p.display());
            std::fs::read_to_string(p)?
        }
        _ => {
            log::debug!("reading stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

/// Accepted shapes for momentum input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MomentumInput {
    Counts(Vec<u32>),
    Days(Vec<CommitDay>),
    Wrapped { days: Vec<CommitDay> },
    Snapshot(RepoSnapshot),
}

/// Accepted shapes for a repository list: a bare array or the `{ owner, repos }`
/// document produced by the user-repos endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RepoListInput {
    Bare(Vec<RepoListing>),
    Wrapped {
        #[serde(default)]
        owner: Option<String>,
        repos: Vec<RepoListing>,
    },
}

impl RepoListInput {
    pub fn into_parts(self) -> (Option<String>, Vec<RepoListing>) {
        match self {
            Self::Bare(repos) => (None, repos),
            Self::Wrapped { owner, repos } => (owner, repos),
        }
    }
}
