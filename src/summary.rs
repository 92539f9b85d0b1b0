use crate::config::Settings;
use crate::contributors::top_contributors;
use crate::error::Result;
use crate::input::read_document;
use crate::model::{RepoSnapshot, SummaryOutput, SCHEMA_VERSION};
use crate::momentum::{daily_counts, momentum};
use crate::render::{intensity_bar, sparkline};
use anyhow::Context;
use chrono::Utc;
use console::style;
use std::path::Path;

pub fn exec(settings: &Settings, input: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let snapshot: RepoSnapshot = read_document(input).context("Failed to read repository snapshot")?;
    let summary = compute_summary(&snapshot, settings).context("Failed to compute activity summary")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        output_report(&summary)?;
    }

    Ok(())
}

/// Everything the dashboard card and the home-screen widget render for one repository.
pub fn compute_summary(snapshot: &RepoSnapshot, settings: &Settings) -> Result<SummaryOutput> {
    let events = snapshot.events();
    let histogram = settings
        .bucketer
        .bucket(&events, snapshot.repo.created_at, settings.now);
    let daily = daily_counts(&events, settings.now, settings.days)?;
    let curve = momentum(daily.iter().map(|d| d.count), settings.decay);

    Ok(SummaryOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repo: snapshot.repo.clone(),
        owner: snapshot.owner.clone(),
        total_commits: snapshot
            .repo
            .commits
            .unwrap_or(snapshot.commits.len() as u64),
        commits: histogram.into_buckets(),
        daily,
        momentum: curve,
        top_contributors: top_contributors(&snapshot.commits, settings.top),
    })
}

fn output_report(summary: &SummaryOutput) -> anyhow::Result<()> {
    let repo = &summary.repo;
    println!("{}", style(format!("{}/{}", repo.owner, repo.name)).bold());
    if !repo.description.is_empty() {
        println!("{}", style(&repo.description).dim());
    }
    println!("{}", "─".repeat(50));

    let language = if repo.language.is_empty() { "Unknown" } else { &repo.language };
    println!(
        "★ {}  ⑂ {}  issues {}  {}",
        style(repo.stars).yellow(),
        style(repo.forks).cyan(),
        repo.issues,
        language
    );
    println!("Total commits: {}", style(summary.total_commits).cyan());

    let counts: Vec<f64> = summary.commits.iter().map(|b| b.count as f64).collect();
    println!("\n{}", style("Activity").bold());
    println!("{}", style(sparkline(&counts)).green());

    println!("\n{} (last {} days)", style("Momentum").bold(), summary.daily.len());
    println!("{}", style(sparkline(&summary.momentum)).cyan());

    if !summary.top_contributors.is_empty() {
        println!("\n{}", style("Top contributors").bold());
        let max = summary.top_contributors[0].commits as u64;
        for c in &summary.top_contributors {
            println!(
                "  {:<24} {} {:>4}",
                c.login,
                style(intensity_bar(c.commits as u64, max, 16)).green(),
                c.commits
            );
        }
    }

    Ok(())
}
