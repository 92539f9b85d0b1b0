use super::{output_chart, output_json, output_ndjson};
use crate::config::Settings;
use crate::input::read_document;
use crate::model::RepoSnapshot;
use anyhow::Context;
use std::path::Path;

pub fn exec(settings: &Settings, input: Option<&Path>, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let snapshot: RepoSnapshot = read_document(input).context("Failed to read repository snapshot")?;

    let events = snapshot.events();
    log::info!(
        "bucketing {} of {} commits for {}/{}",
        events.len(),
        snapshot.commits.len(),
        snapshot.repo.owner,
        snapshot.repo.name
    );

    let histogram = settings
        .bucketer
        .bucket(&events, snapshot.repo.created_at, settings.now);

    if json {
        output_json(&histogram, &snapshot.repo)?;
    } else if ndjson {
        output_ndjson(&histogram)?;
    } else {
        output_chart(&histogram, &snapshot.repo)?;
    }

    Ok(())
}
