use super::DecayRate;
use crate::model::{CommitDay, MomentumOutput, SCHEMA_VERSION};
use crate::render::sparkline;
use anyhow::Result;
use chrono::Utc;
use console::style;
use serde::Serialize;

#[derive(Serialize)]
struct MomentumPoint<'a> {
    #[serde(flatten)]
    day: &'a CommitDay,
    momentum: f64,
}

pub fn output_json(days: &[CommitDay], series: &[f64], decay: DecayRate) -> Result<()> {
    let output = MomentumOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        decay_rate: decay.get(),
        days: days.to_vec(),
        momentum: series.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(days: &[CommitDay], series: &[f64]) -> Result<()> {
    for (day, momentum) in days.iter().zip(series) {
        let point = MomentumPoint {
            day,
            momentum: *momentum,
        };
        println!("{}", serde_json::to_string(&point)?);
    }
    Ok(())
}

pub fn output_curve(days: &[CommitDay], series: &[f64]) -> Result<()> {
    if series.is_empty() {
        println!("No data to display");
        return Ok(());
    }

    println!("{}", style("Commit Momentum").bold());
    println!("{}", "─".repeat(50));

    if let (Some(first), Some(last)) = (
        days.first().and_then(|d| d.date),
        days.last().and_then(|d| d.date),
    ) {
        println!("{} → {}", style(first).dim(), style(last).dim());
    }

    println!("{}", style(sparkline(series)).cyan());

    let peak = series.iter().copied().fold(0.0f64, f64::max);
    let total: u64 = days.iter().map(|d| d.count as u64).sum();
    let latest = series[series.len() - 1];

    println!("\nCommits: {}", style(total).cyan());
    println!("Peak momentum: {}", style(format!("{peak:.2}")).green());
    println!("Current momentum: {}", style(format!("{latest:.2}")).yellow());
    Ok(())
}
