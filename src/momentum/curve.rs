use crate::error::{PulseError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DECAY_RATE: f64 = 0.95;

/// Per-day multiplicative decay, strictly between 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DecayRate(f64);

impl DecayRate {
    pub fn new(rate: f64) -> Result<Self> {
        if rate > 0.0 && rate < 1.0 {
            Ok(Self(rate))
        } else {
            Err(PulseError::InvalidDecayRate(rate))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for DecayRate {
    fn default() -> Self {
        Self(DEFAULT_DECAY_RATE)
    }
}

impl TryFrom<f64> for DecayRate {
    type Error = PulseError;

    fn try_from(rate: f64) -> Result<Self> {
        Self::new(rate)
    }
}

impl From<DecayRate> for f64 {
    fn from(rate: DecayRate) -> Self {
        rate.0
    }
}

/// Decayed cumulative momentum over chronologically ordered daily counts.
///
/// Each day's count is added before the value is recorded; decay is applied
/// afterwards and only carries into the following day.
pub fn momentum<I>(counts: I, rate: DecayRate) -> Vec<f64>
where
    I: IntoIterator<Item = u32>,
{
    let counts = counts.into_iter();
    let mut series = Vec::with_capacity(counts.size_hint().0);
    let mut current = 0.0f64;

    for count in counts {
        current += count as f64;
        series.push(current);
        current *= rate.get();
    }

    series
}

/// Scale a series into `0..=1` by its maximum. All-zero input stays all zero.
pub fn normalize(series: &[f64]) -> Vec<f64> {
    let max = series.iter().copied().fold(0.0f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; series.len()];
    }
    series.iter().map(|v| v / max).collect()
}
