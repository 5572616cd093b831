//! Defines the tuning knobs of a frame monitor.

use getset::CopyGetters;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    severity::{FpsThresholds, FrameTimeThresholds},
    types::{ConfigError, Result},
};

/// Configuration of a [`FrameMonitor`](crate::monitor::FrameMonitor).
///
/// The defaults mirror a 30 fps target: sixty frames of history, a baseline
/// of 30 frames per second and a 33.3 ms frame budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, CopyGetters, TypedBuilder)]
pub struct MonitorConfig {
    /// Number of recent frames the rolling statistics cover.
    #[getset(get_copy = "pub")]
    #[builder(default = 60)]
    sample_capacity: usize,
    /// Anticipated frame rate, the baseline the fps sums are centered on.
    #[getset(get_copy = "pub")]
    #[builder(default = 30.0)]
    expected_fps: f32,
    /// Anticipated frame time in milliseconds, the baseline the cpu and gpu
    /// sums are centered on.
    #[getset(get_copy = "pub")]
    #[builder(default = 33.3)]
    expected_frame_time_ms: f32,
    /// Severity levels for the frame-rate readout.
    #[getset(get_copy = "pub")]
    #[builder(default)]
    fps_thresholds: FpsThresholds,
    /// Severity levels for the cpu and gpu readouts.
    #[getset(get_copy = "pub")]
    #[builder(default)]
    frame_time_thresholds: FrameTimeThresholds,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl MonitorConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.sample_capacity == 0 {
            return Err(ConfigError::InvalidSampleCapacity);
        }
        if !self.expected_fps.is_finite() || !self.expected_frame_time_ms.is_finite() {
            return Err(ConfigError::NonFiniteExpected);
        }
        self.fps_thresholds.validate()?;
        self.frame_time_thresholds.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_default_config_is_valid() {
        let config = MonitorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sample_capacity(), 60);
        assert_eq!(config.expected_fps(), 30.0);
        assert_eq!(config.expected_frame_time_ms(), 33.3);
    }

    #[test]
    fn a_zero_history_is_rejected() {
        let config = MonitorConfig::builder().sample_capacity(0).build();
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::InvalidSampleCapacity
        );
    }

    #[test]
    fn non_finite_baselines_are_rejected() {
        let config = MonitorConfig::builder().expected_fps(f32::NAN).build();
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::NonFiniteExpected
        );
    }

    #[test]
    fn a_custom_target_builds() {
        let config = MonitorConfig::builder()
            .sample_capacity(120)
            .expected_fps(144.0)
            .expected_frame_time_ms(6.9)
            .build();
        assert!(config.validate().is_ok());
        assert_eq!(config.sample_capacity(), 120);
    }
}
