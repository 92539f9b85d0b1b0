use crate::error::{PulseError, Result};
use crate::model::{CommitEvent, HistogramBucket, TimeWindow};
use chrono::{DateTime, TimeDelta, Utc};
use std::num::NonZeroUsize;

pub const DEFAULT_BUCKETS: usize = 96;
pub const DEFAULT_LOOKBACK_DAYS: i64 = 180;

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Splits a look-back window into a fixed number of equal-width buckets and
/// counts commits into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucketer {
    buckets: NonZeroUsize,
    lookback: TimeDelta,
}

impl Default for Bucketer {
    fn default() -> Self {
        Self {
            buckets: NonZeroUsize::new(DEFAULT_BUCKETS).unwrap_or(NonZeroUsize::MIN),
            lookback: TimeDelta::days(DEFAULT_LOOKBACK_DAYS),
        }
    }
}

impl Bucketer {
    pub fn new(buckets: usize, lookback: TimeDelta) -> Result<Self> {
        let buckets = NonZeroUsize::new(buckets).ok_or(PulseError::InvalidBucketCount(buckets))?;
        if lookback < TimeDelta::zero() {
            return Err(PulseError::InvalidLookback(format!(
                "look-back must not be negative, got {lookback}"
            )));
        }
        Ok(Self { buckets, lookback })
    }

    pub fn buckets(&self) -> usize {
        self.buckets.get()
    }

    pub fn lookback(&self) -> TimeDelta {
        self.lookback
    }

    pub fn window(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> TimeWindow {
        TimeWindow::lookback(created_at, now, self.lookback)
    }

    /// Build the histogram for a repository created at `created_at`, as seen at `now`.
    ///
    /// Events outside the window are dropped. A zero-width window (repository
    /// created at or after `now`) yields all-zero buckets starting at the
    /// window start.
    pub fn bucket(&self, events: &[CommitEvent], created_at: DateTime<Utc>, now: DateTime<Utc>) -> Histogram {
        let window = self.window(created_at, now);
        let n = self.buckets.get();

        if window.is_degenerate() {
            log::debug!(
                "degenerate window {} .. {}, emitting {n} empty buckets",
                window.start,
                window.end
            );
            return Histogram {
                window,
                width: TimeDelta::zero(),
                buckets: vec![
                    HistogramBucket {
                        bucket_start: window.start,
                        count: 0,
                    };
                    n
                ],
            };
        }

        let total_nanos = to_nanos(window.width());
        let width_nanos = total_nanos / n as i128;
        let mut counts = vec![0u32; n];
        let mut dropped = 0usize;

        for event in events {
            if !window.contains(&event.timestamp) {
                dropped += 1;
                continue;
            }
            // floor(offset / (total / n)) without truncating the divisor.
            let offset = to_nanos(event.timestamp - window.start);
            let index = (offset * n as i128 / total_nanos) as usize;
            counts[index] = counts[index].saturating_add(event.count);
        }

        if dropped > 0 {
            log::debug!("dropped {dropped} of {} commits outside the window", events.len());
        }

        let buckets = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBucket {
                bucket_start: window.start + from_nanos(width_nanos * i as i128),
                count,
            })
            .collect();

        Histogram {
            window,
            width: from_nanos(width_nanos),
            buckets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    window: TimeWindow,
    width: TimeDelta,
    buckets: Vec<HistogramBucket>,
}

impl Histogram {
    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Width of every bucket; zero for a degenerate window.
    pub fn width(&self) -> TimeDelta {
        self.width
    }

    pub fn buckets(&self) -> &[HistogramBucket] {
        &self.buckets
    }

    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|b| b.count as u64).sum()
    }

    pub fn into_buckets(self) -> Vec<HistogramBucket> {
        self.buckets
    }
}

fn to_nanos(delta: TimeDelta) -> i128 {
    delta.num_seconds() as i128 * NANOS_PER_SEC + delta.subsec_nanos() as i128
}

fn from_nanos(nanos: i128) -> TimeDelta {
    let secs = (nanos.div_euclid(NANOS_PER_SEC)) as i64;
    let rest = (nanos.rem_euclid(NANOS_PER_SEC)) as i64;
    TimeDelta::seconds(secs) + TimeDelta::nanoseconds(rest)
}
