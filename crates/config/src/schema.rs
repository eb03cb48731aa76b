use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;
use tracing::warn;

/// Root configuration structure parsed from `sysmon.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Poll cadence preset.
    pub interval: IntervalPreset,
    /// Number of CPU samples kept for the trend window.
    pub window_capacity: usize,
    /// Maximum entries in the published process list.
    pub max_processes: usize,
    /// Process list ordering.
    pub process_sort: ProcessSort,
    /// Case-insensitive substring filter on process names; empty = no filter.
    pub process_filter: String,
    /// Snapshot sink format for the binary.
    pub output: OutputFormat,
    /// Chart presentation hints, validated here but consumed downstream.
    pub chart: ChartConfig,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: IntervalPreset::Normal,
            window_capacity: 20,
            max_processes: 5,
            process_sort: ProcessSort::Name,
            process_filter: String::new(),
            output: OutputFormat::Text,
            chart: ChartConfig::default(),
        }
    }
}

impl MonitorConfig {
    /// Clamp out-of-range values to the documented limits.
    ///
    /// Bad settings warn and fall back to the nearest valid value; they are
    /// never fatal.
    pub fn normalize(&mut self) {
        if self.window_capacity == 0 {
            warn!("window_capacity must be at least 1; clamping");
            self.window_capacity = 1;
        }
        if self.max_processes == 0 {
            warn!("max_processes must be at least 1; clamping");
            self.max_processes = 1;
        }
        if !(ChartConfig::MIN_HEIGHT..=ChartConfig::MAX_HEIGHT).contains(&self.chart.height) {
            let clamped = self
                .chart
                .height
                .clamp(ChartConfig::MIN_HEIGHT, ChartConfig::MAX_HEIGHT);
            warn!(
                "chart.height {} outside {}–{}; clamping to {clamped}",
                self.chart.height,
                ChartConfig::MIN_HEIGHT,
                ChartConfig::MAX_HEIGHT
            );
            self.chart.height = clamped;
        }
    }
}

/// Poll cadence presets exposed in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IntervalPreset {
    /// 2 seconds.
    Fast,
    /// 4 seconds.
    #[default]
    Normal,
    /// 8 seconds.
    Slow,
}

impl IntervalPreset {
    pub fn seconds(self) -> f64 {
        match self {
            Self::Fast => 2.0,
            Self::Normal => 4.0,
            Self::Slow => 8.0,
        }
    }

    pub fn duration(self) -> Duration {
        Duration::from_secs_f64(self.seconds())
    }

    /// Snap an arbitrary requested interval to the nearest preset.
    pub fn from_seconds(secs: f64) -> Self {
        [Self::Fast, Self::Normal, Self::Slow]
            .into_iter()
            .min_by(|a, b| {
                let da = (a.seconds() - secs).abs();
                let db = (b.seconds() - secs).abs();
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(Self::Normal)
    }
}

// Accepts either a preset name (`"fast"`) or a number of seconds; numbers
// snap to the nearest preset and unknown names fall back to the default,
// so a hand-edited config never fails to load over this field.
impl<'de> Deserialize<'de> for IntervalPreset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Seconds(f64),
            Name(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Seconds(secs) => Self::from_seconds(secs),
            Raw::Name(name) => match name.as_str() {
                "fast" => Self::Fast,
                "normal" => Self::Normal,
                "slow" => Self::Slow,
                other => {
                    warn!("unknown interval preset '{other}'; using 'normal'");
                    Self::Normal
                }
            },
        })
    }
}

/// How the process list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProcessSort {
    #[default]
    Name,
    Pid,
}

/// Snapshot sink format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable log line per tick.
    #[default]
    Text,
    /// One JSON object per tick on stdout.
    Json,
}

/// Trend-chart hints for a presentation consumer. The monitor only range
/// checks them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Draw the background grid.
    pub grid_visible: bool,
    /// Chart height in logical points.
    pub height: f64,
}

impl ChartConfig {
    pub const MIN_HEIGHT: f64 = 100.0;
    pub const MAX_HEIGHT: f64 = 300.0;
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            grid_visible: true,
            height: 200.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = MonitorConfig::default();
        assert_eq!(config.interval, IntervalPreset::Normal);
        assert_eq!(config.window_capacity, 20);
        assert_eq!(config.max_processes, 5);
        assert_eq!(config.chart.height, 200.0);
        assert!(config.chart.grid_visible);
    }

    #[test]
    fn interval_snaps_to_nearest_preset() {
        assert_eq!(IntervalPreset::from_seconds(2.4), IntervalPreset::Fast);
        assert_eq!(IntervalPreset::from_seconds(5.0), IntervalPreset::Normal);
        assert_eq!(IntervalPreset::from_seconds(7.9), IntervalPreset::Slow);
        assert_eq!(IntervalPreset::from_seconds(100.0), IntervalPreset::Slow);
    }

    #[test]
    fn interval_parses_name_or_seconds() {
        let config: MonitorConfig = toml::from_str("interval = \"fast\"").unwrap();
        assert_eq!(config.interval, IntervalPreset::Fast);

        let config: MonitorConfig = toml::from_str("interval = 8.0").unwrap();
        assert_eq!(config.interval, IntervalPreset::Slow);

        let config: MonitorConfig = toml::from_str("interval = \"warp\"").unwrap();
        assert_eq!(config.interval, IntervalPreset::Normal);
    }

    #[test]
    fn normalize_clamps_out_of_range_values() {
        let mut config = MonitorConfig {
            window_capacity: 0,
            max_processes: 0,
            ..MonitorConfig::default()
        };
        config.chart.height = 1000.0;
        config.normalize();
        assert_eq!(config.window_capacity, 1);
        assert_eq!(config.max_processes, 1);
        assert_eq!(config.chart.height, 300.0);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: MonitorConfig = toml::from_str(
            r#"
            window_capacity = 40

            [chart]
            grid_visible = false
            "#,
        )
        .unwrap();
        assert_eq!(config.window_capacity, 40);
        assert!(!config.chart.grid_visible);
        assert_eq!(config.chart.height, 200.0);
        assert_eq!(config.interval, IntervalPreset::Normal);
    }
}
