use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};

/// Multiplier on the standard deviation that widens the rolling mean into a
/// confidence band.
///
/// The band edges stand in for the slow-to-compute order statistics of the
/// window: under a roughly normal sample distribution, [`Self::P99`] bounds
/// about 99% of frames and [`Self::P99_9`] about 99.9%.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display)]
pub struct ZScore(f32);

impl ZScore {
    /// Covers roughly 99% of the samples of a normally distributed signal.
    pub const P99: Self = Self(2.58);

    /// Covers roughly 99.9% of the samples of a normally distributed signal.
    pub const P99_9: Self = Self(3.29);

    /// Create a custom multiplier.
    ///
    /// # Errors
    /// Rejects non-finite and negative values.
    pub fn new(multiplier: f32) -> Result<Self> {
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(ConfigError::InvalidZScore);
        }
        Ok(Self(multiplier))
    }

    /// The raw multiplier.
    pub fn multiplier(&self) -> f32 {
        self.0
    }

    /// Upper edge of the band, `mean + z * std_dev`.
    pub fn upper_bound(&self, mean: f32, std_dev: f32) -> f32 {
        mean + self.0 * std_dev
    }

    /// Lower edge of the band, `mean - z * std_dev`, clamped to zero as the
    /// tracked signals cannot be negative.
    pub fn lower_bound(&self, mean: f32, std_dev: f32) -> f32 {
        (mean - self.0 * std_dev).max(0.0)
    }
}
