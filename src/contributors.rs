use crate::model::{CommitRecord, Contributor};
use std::collections::HashMap;

pub const DEFAULT_TOP_CONTRIBUTORS: usize = 5;

/// Most active commit authors, highest count first. Commits without an author
/// login are not attributed to anyone.
pub fn top_contributors(commits: &[CommitRecord], limit: usize) -> Vec<Contributor> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for login in commits.iter().filter_map(|c| c.author.as_deref()) {
        let login = login.trim();
        if login.is_empty() {
            continue;
        }
        *counts.entry(login).or_insert(0) += 1;
    }

    let mut ranked: Vec<Contributor> = counts
        .into_iter()
        .map(|(login, commits)| Contributor {
            login: login.to_string(),
            commits,
        })
        .collect();
    ranked.sort_by(|a, b| b.commits.cmp(&a.commits).then_with(|| a.login.cmp(&b.login)));
    ranked.truncate(limit);
    ranked
}
