use crate::model::RepoListing;
use std::cmp::Ordering;

fn by_recent_update(a: &RepoListing, b: &RepoListing) -> Ordering {
    b.updated_at.cmp(&a.updated_at)
}

fn by_stars_then_update(a: &RepoListing, b: &RepoListing) -> Ordering {
    b.stars.cmp(&a.stars).then_with(|| by_recent_update(a, b))
}

/// The repository to show for a user: the most-starred non-fork, ties broken by
/// most recent update. Falls back to the most recently updated repository when
/// every entry is a fork.
pub fn best_repo(repos: &[RepoListing]) -> Option<&RepoListing> {
    repos
        .iter()
        .filter(|r| !r.fork)
        .min_by(|a, b| by_stars_then_update(a, b))
        .or_else(|| repos.iter().min_by(|a, b| by_recent_update(a, b)))
}

/// Public repositories ordered for a picker: non-forks first, then stars, then
/// most recent update.
pub fn rank_repos(repos: &[RepoListing]) -> Vec<RepoListing> {
    let mut ranked: Vec<RepoListing> = repos.iter().filter(|r| !r.private).cloned().collect();
    ranked.sort_by(|a, b| a.fork.cmp(&b.fork).then_with(|| by_stars_then_update(a, b)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn listing(name: &str, stars: u64, day: u32, fork: bool) -> RepoListing {
        RepoListing {
            name: name.to_string(),
            description: String::new(),
            stars,
            language: String::new(),
            updated_at: Some(Utc.with_ymd_and_hms(2024, 5, day, 0, 0, 0).unwrap()),
            fork,
            private: false,
        }
    }

    #[test]
    fn best_repo_prefers_stars_over_forks() {
        let repos = vec![
            listing("forked-giant", 900, 20, true),
            listing("small", 3, 25, false),
            listing("popular-old", 40, 1, false),
            listing("popular-new", 40, 10, false),
        ];
        assert_eq!(best_repo(&repos).map(|r| r.name.as_str()), Some("popular-new"));
    }

    #[test]
    fn best_repo_falls_back_to_recent_fork() {
        let repos = vec![listing("a", 5, 2, true), listing("b", 1, 9, true)];
        assert_eq!(best_repo(&repos).map(|r| r.name.as_str()), Some("b"));
        assert!(best_repo(&[]).is_none());
    }

    #[test]
    fn rank_puts_forks_last_and_hides_private() {
        let mut secret = listing("secret", 100, 1, false);
        secret.private = true;
        let repos = vec![
            listing("fork", 50, 3, true),
            listing("low", 1, 3, false),
            secret,
            listing("high", 10, 3, false),
        ];
        let names: Vec<_> = rank_repos(&repos).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["high", "low", "fork"]);
    }
}
