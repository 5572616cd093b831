//! Classification of performance readings into the levels an overlay colors
//! by.

use std::fmt::Formatter;

use serde::{Deserialize, Serialize};

use crate::types::{ConfigError, Result};

/// How concerning a reading is.
///
/// Ordered from healthy to worst, so the overall state of several signals is
/// simply their maximum.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// The signal meets its target.
    Good,
    /// The signal is degraded but tolerable.
    Caution,
    /// The signal is below the acceptable floor.
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The frame-rate levels at which a reading flips between severities.
///
/// Frame rates are judged higher-is-better: at or above `good` is healthy, at
/// or above `caution` still tolerable, anything below that critical. A `NaN`
/// reading compares false against both levels and is reported
/// [`Severity::Critical`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FpsThresholds {
    /// At or above this the reading is `Good`.
    pub good: f32,
    /// At or above this the reading is `Caution`, below it `Critical`.
    pub caution: f32,
}

impl Default for FpsThresholds {
    fn default() -> Self {
        Self {
            good: 60.0,
            caution: 30.0,
        }
    }
}

impl FpsThresholds {
    /// Classify a frame-rate reading.
    pub fn classify(&self, fps: f32) -> Severity {
        if fps >= self.good {
            Severity::Good
        } else if fps >= self.caution {
            Severity::Caution
        } else {
            Severity::Critical
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.good.is_finite()
            || !self.caution.is_finite()
            || self.caution <= 0.0
            || self.good <= self.caution
        {
            return Err(ConfigError::InvalidFpsThresholds);
        }
        Ok(())
    }
}

/// The frame-time levels at which a reading flips between severities.
///
/// Frame times are judged lower-is-better: at or below `good` is healthy, at
/// or below `caution` still tolerable, anything above that critical. A `NaN`
/// reading is reported [`Severity::Critical`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameTimeThresholds {
    /// At or below this the reading is `Good`.
    pub good_ms: f32,
    /// At or below this the reading is `Caution`, above it `Critical`.
    pub caution_ms: f32,
}

impl Default for FrameTimeThresholds {
    fn default() -> Self {
        // The frame budgets of a 60 fps and a 30 fps target.
        Self {
            good_ms: 16.6,
            caution_ms: 33.3,
        }
    }
}

impl FrameTimeThresholds {
    /// Classify a frame-time reading in milliseconds.
    pub fn classify(&self, frame_time_ms: f32) -> Severity {
        if frame_time_ms <= self.good_ms {
            Severity::Good
        } else if frame_time_ms <= self.caution_ms {
            Severity::Caution
        } else {
            Severity::Critical
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.good_ms.is_finite()
            || !self.caution_ms.is_finite()
            || self.good_ms <= 0.0
            || self.caution_ms <= self.good_ms
        {
            return Err(ConfigError::InvalidFrameTimeThresholds);
        }
        Ok(())
    }
}
