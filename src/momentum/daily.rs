use crate::error::{PulseError, Result};
use crate::model::{CommitDay, CommitEvent};
use chrono::{DateTime, Days, Utc};

pub const DEFAULT_DAYS: u32 = 30;

/// Zero-filled per-day counts for the `days` UTC calendar days ending with the
/// day of `now`, oldest first. Events on other days are ignored.
pub fn daily_counts(events: &[CommitEvent], now: DateTime<Utc>, days: u32) -> Result<Vec<CommitDay>> {
    if days == 0 {
        return Err(PulseError::InvalidDayCount(days));
    }

    let today = now.date_naive();
    let first = today
        .checked_sub_days(Days::new(u64::from(days - 1)))
        .ok_or_else(|| PulseError::InvalidDate(format!("{days} days before {today}")))?;

    let mut series: Vec<CommitDay> = first
        .iter_days()
        .take(days as usize)
        .map(|date| CommitDay {
            date: Some(date),
            count: 0,
        })
        .collect();

    for event in events {
        let offset = (event.timestamp.date_naive() - first).num_days();
        if let Some(day) = usize::try_from(offset).ok().and_then(|i| series.get_mut(i)) {
            day.count = day.count.saturating_add(event.count);
        }
    }

    Ok(series)
}
