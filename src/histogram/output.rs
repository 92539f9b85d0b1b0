use super::Histogram;
use crate::model::{HistogramOutput, RepoInfo, SCHEMA_VERSION};
use crate::render::{intensity_bar, sparkline};
use anyhow::Result;
use chrono::Utc;
use console::style;

const ROWS: usize = 12;

pub fn output_json(histogram: &Histogram, repo: &RepoInfo) -> Result<()> {
    let output = HistogramOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository: format!("{}/{}", repo.owner, repo.name),
        window: histogram.window(),
        bucket_width_secs: histogram.width().num_milliseconds() as f64 / 1000.0,
        buckets: histogram.buckets().to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(histogram: &Histogram) -> Result<()> {
    for bucket in histogram.buckets() {
        println!("{}", serde_json::to_string(bucket)?);
    }
    Ok(())
}

pub fn output_chart(histogram: &Histogram, repo: &RepoInfo) -> Result<()> {
    let window = histogram.window();
    println!(
        "{} {}",
        style("Commit Activity").bold(),
        style(format!("{}/{}", repo.owner, repo.name)).cyan()
    );
    println!(
        "{} → {}",
        style(window.start.format("%Y-%m-%d %H:%M")).dim(),
        style(window.end.format("%Y-%m-%d %H:%M")).dim()
    );
    println!("{}", "─".repeat(50));

    if histogram.total() == 0 {
        println!("No commits in window");
        return Ok(());
    }

    let counts: Vec<f64> = histogram.buckets().iter().map(|b| b.count as f64).collect();
    println!("{}", style(sparkline(&counts)).green());
    println!();

    // At most ROWS table rows.
    let per_row = histogram.buckets().len().div_ceil(ROWS).max(1);
    let rows: Vec<(String, u64)> = histogram
        .buckets()
        .chunks(per_row)
        .map(|chunk| {
            let label = chunk[0].bucket_start.format("%Y-%m-%d").to_string();
            (label, chunk.iter().map(|b| b.count as u64).sum())
        })
        .collect();
    let max = rows.iter().map(|(_, c)| *c).max().unwrap_or(0);

    for (label, count) in &rows {
        println!("{label} {} {:>4}", style(intensity_bar(*count, max, 20)).green(), count);
    }

    println!("\nTotal commits in window: {}", style(histogram.total()).cyan());
    Ok(())
}
