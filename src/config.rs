use crate::cli::CommonArgs;
use crate::contributors::DEFAULT_TOP_CONTRIBUTORS;
use crate::error::{PulseError, Result};
use crate::histogram::{Bucketer, DEFAULT_BUCKETS, DEFAULT_LOOKBACK_DAYS};
use crate::momentum::{DecayRate, DEFAULT_DAYS, DEFAULT_DECAY_RATE};
use crate::util::{parse_instant, parse_lookback};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = ".repopulse.toml";

/// Settings loaded from `.repopulse.toml`.
///
/// Resolution order: CLI flags, then the config file, then defaults.
///
/// ```
/// use repopulse::config::PulseConfig;
///
/// let config = PulseConfig::from_toml("[histogram]\nbuckets = 48\n").unwrap();
/// assert_eq!(config.histogram.buckets, 48);
/// assert_eq!(config.momentum.decay_rate, 0.95);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PulseConfig {
    #[serde(default)]
    pub histogram: HistogramConfig,
    #[serde(default)]
    pub momentum: MomentumConfig,
    #[serde(default)]
    pub contributors: ContributorsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramConfig {
    #[serde(default = "default_buckets")]
    pub buckets: usize,
    #[serde(default = "default_lookback_days")]
    pub lookback_days: i64,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            buckets: default_buckets(),
            lookback_days: default_lookback_days(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumConfig {
    #[serde(default = "default_decay_rate")]
    pub decay_rate: f64,
    /// Number of trailing days fed into the curve when it is derived from raw commits.
    #[serde(default = "default_days")]
    pub days: u32,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            decay_rate: default_decay_rate(),
            days: default_days(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributorsConfig {
    #[serde(default = "default_top")]
    pub top: usize,
}

impl Default for ContributorsConfig {
    fn default() -> Self {
        Self { top: default_top() }
    }
}

fn default_buckets() -> usize {
    DEFAULT_BUCKETS
}

fn default_lookback_days() -> i64 {
    DEFAULT_LOOKBACK_DAYS
}

fn default_decay_rate() -> f64 {
    DEFAULT_DECAY_RATE
}

fn default_days() -> u32 {
    DEFAULT_DAYS
}

fn default_top() -> usize {
    DEFAULT_TOP_CONTRIBUTORS
}

impl PulseConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `explicit` if given (it must exist), otherwise `.repopulse.toml` in
    /// the working directory when present, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            log::debug!("loading config from {}", path.display());
            return Self::from_file(path);
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            log::debug!("loading config from {DEFAULT_CONFIG_FILE}");
            return Self::from_file(local);
        }

        Ok(Self::default())
    }
}

/// Validated parameters for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bucketer: Bucketer,
    pub decay: DecayRate,
    pub days: u32,
    pub top: usize,
    pub now: DateTime<Utc>,
}

impl Settings {
    pub fn resolve(config: &PulseConfig, common: &CommonArgs) -> Result<Self> {
        let now = match common.now.as_deref() {
            Some(raw) => parse_instant(raw, Utc::now())?,
            None => Utc::now(),
        };

        let lookback = match common.lookback.as_deref() {
            Some(raw) => parse_lookback(raw)?,
            None => TimeDelta::try_days(config.histogram.lookback_days).ok_or_else(|| {
                PulseError::InvalidLookback(format!("{} days", config.histogram.lookback_days))
            })?,
        };

        let buckets = common.buckets.unwrap_or(config.histogram.buckets);
        let bucketer = Bucketer::new(buckets, lookback)?;
        let decay = DecayRate::new(common.decay.unwrap_or(config.momentum.decay_rate))?;

        let days = common.days.unwrap_or(config.momentum.days);
        if days == 0 {
            return Err(PulseError::InvalidDayCount(days));
        }

        let top = common.top.unwrap_or(config.contributors.top);

        log::debug!(
            "settings: buckets={buckets} lookback={lookback} decay={} days={days} top={top} now={now}",
            decay.get()
        );

        Ok(Self {
            bucketer,
            decay,
            days,
            top,
            now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args() -> CommonArgs {
        CommonArgs::default()
    }

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(PulseConfig::from_toml("").unwrap(), PulseConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = PulseConfig::from_toml(
            r#"
            [momentum]
            decay_rate = 0.8

            [contributors]
            top = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.momentum.decay_rate, 0.8);
        assert_eq!(config.momentum.days, 30);
        assert_eq!(config.contributors.top, 3);
        assert_eq!(config.histogram, HistogramConfig::default());
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        assert!(matches!(
            PulseConfig::from_toml("[histogram]\nbuckets = \"many\""),
            Err(PulseError::Config(_))
        ));
    }

    #[test]
    fn flags_override_config() {
        let config = PulseConfig::from_toml("[histogram]\nbuckets = 48\nlookback_days = 30").unwrap();
        let mut common = args();
        common.buckets = Some(12);
        common.now = Some("2024-01-31".to_string());
        let settings = Settings::resolve(&config, &common).unwrap();
        assert_eq!(settings.bucketer.buckets(), 12);
        assert_eq!(settings.bucketer.lookback(), TimeDelta::days(30));
        assert_eq!(settings.now.to_rfc3339(), "2024-01-31T00:00:00+00:00");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut common = args();
        common.decay = Some(1.0);
        assert!(matches!(
            Settings::resolve(&PulseConfig::default(), &common),
            Err(PulseError::InvalidDecayRate(_))
        ));

        let mut common = args();
        common.buckets = Some(0);
        assert!(Settings::resolve(&PulseConfig::default(), &common).is_err());

        let mut common = args();
        common.lookback = Some("eventually".to_string());
        assert!(matches!(
            Settings::resolve(&PulseConfig::default(), &common),
            Err(PulseError::InvalidLookback(_))
        ));
    }
}
