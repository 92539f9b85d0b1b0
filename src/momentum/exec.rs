use super::{daily_counts, momentum, output_curve, output_json, output_ndjson};
use crate::config::Settings;
use crate::input::{read_document, MomentumInput};
use crate::model::CommitDay;
use anyhow::Context;
use std::path::Path;

pub fn exec(settings: &Settings, input: Option<&Path>, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let input: MomentumInput = read_document(input).context("Failed to read daily commit counts")?;
    let days = into_days(input, settings).context("Failed to build daily series")?;

    let series = momentum(days.iter().map(|d| d.count), settings.decay);
    log::info!("computed momentum over {} days", series.len());

    if json {
        output_json(&days, &series, settings.decay)?;
    } else if ndjson {
        output_ndjson(&days, &series)?;
    } else {
        output_curve(&days, &series)?;
    }

    Ok(())
}

fn into_days(input: MomentumInput, settings: &Settings) -> crate::error::Result<Vec<CommitDay>> {
    Ok(match input {
        MomentumInput::Counts(counts) => counts
            .into_iter()
            .map(|count| CommitDay { date: None, count })
            .collect(),
        MomentumInput::Days(days) | MomentumInput::Wrapped { days } => days,
        MomentumInput::Snapshot(snapshot) => daily_counts(&snapshot.events(), settings.now, settings.days)?,
    })
}
