use super::{best_repo, rank_repos, RepoRef};
use crate::input::{read_document, RepoListInput};
use crate::model::{PickOutput, RepoListing, SCHEMA_VERSION};
use anyhow::Context;
use chrono::Utc;
use console::style;
use std::path::Path;

pub fn resolve(input: &str, json: bool) -> anyhow::Result<()> {
    let repo = RepoRef::parse(input).context("Failed to resolve repository input")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&repo)?);
    } else {
        let kind = if repo.name.is_some() { "repository" } else { "user" };
        println!("{} {}", style(kind).bold(), repo.slug());
    }
    Ok(())
}

pub fn pick(owner: Option<String>, input: Option<&Path>, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let doc: RepoListInput = read_document(input).context("Failed to read repository list")?;
    let (listed_owner, repos) = doc.into_parts();
    let owner = owner.or(listed_owner);

    let ranked = rank_repos(&repos);
    let best = best_repo(&repos).cloned();
    match &best {
        Some(b) => log::info!("picked {} out of {} repositories", b.name, repos.len()),
        None => log::warn!("no repositories to pick from"),
    }

    if json {
        let output = PickOutput {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            owner,
            best,
            repos: ranked,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if ndjson {
        for repo in &ranked {
            println!("{}", serde_json::to_string(repo)?);
        }
    } else {
        output_table(owner.as_deref(), best.as_ref(), &ranked);
    }

    Ok(())
}

fn output_table(owner: Option<&str>, best: Option<&RepoListing>, ranked: &[RepoListing]) {
    let Some(best) = best else {
        match owner {
            Some(o) => println!("No public repositories found for user {o}"),
            None => println!("No repositories to pick from"),
        }
        return;
    };

    let prefix = owner.map(|o| format!("{o}/")).unwrap_or_default();
    println!("{} {}{}", style("Best repository:").bold(), prefix, style(&best.name).green());
    println!("{}", "─".repeat(60));
    println!(
        "{:<32} {:>7} {:<12} {}",
        style("Name").bold(),
        style("Stars").bold(),
        style("Language").bold(),
        style("Fork").bold()
    );
    for repo in ranked {
        let language = if repo.language.is_empty() { "Unknown" } else { &repo.language };
        println!(
            "{:<32} {:>7} {:<12} {}",
            repo.name,
            repo.stars,
            language,
            if repo.fork { "yes" } else { "" }
        );
    }
}
