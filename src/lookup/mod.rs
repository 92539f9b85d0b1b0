pub mod exec;
pub mod rank;
pub mod repo_ref;

pub use rank::{best_repo, rank_repos};
pub use repo_ref::RepoRef;
