//! Preformatted number strings for allocation-free readout updates.
//!
//! Formatting a float on every refresh churns short-lived strings. An overlay
//! renders from lookup tables built once at startup instead, one for whole
//! numbers and one for numbers with a single decimal.

use crate::types::{ConfigError, Result};

/// Cached decimal strings for a contiguous range of integers.
#[derive(Debug, Clone)]
pub struct IntTextCache {
    min: i32,
    max: i32,
    entries: Box<[String]>,
}

impl IntTextCache {
    /// Cache the decimal representation of every integer in `min..=max`.
    ///
    /// # Errors
    /// Rejects an empty range.
    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min > max {
            return Err(ConfigError::EmptyTextCacheRange);
        }
        let entries = (min..=max).map(|value| value.to_string()).collect();
        Ok(Self { min, max, entries })
    }

    /// The cached text for `value`.
    ///
    /// Out-of-range values clamp to the nearest end of the range, so a lookup
    /// never allocates.
    pub fn get(&self, value: i32) -> &str {
        let clamped = value.clamp(self.min, self.max);
        let index = clamped.abs_diff(self.min) as usize;
        &self.entries[index]
    }
}

/// Cached one-decimal strings for a contiguous range of tenths.
#[derive(Debug, Clone)]
pub struct TenthsTextCache {
    min_tenths: i32,
    max_tenths: i32,
    entries: Box<[String]>,
}

impl TenthsTextCache {
    /// Cache `min..=max` in steps of one tenth, formatted with one decimal.
    ///
    /// The bounds round to the nearest tenth first, so `new(0.0, 100.0)`
    /// caches the 1001 strings `"0.0"` through `"100.0"`.
    ///
    /// # Errors
    /// Rejects a non-finite or empty range.
    pub fn new(min: f32, max: f32) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::EmptyTextCacheRange);
        }
        let min_tenths = to_tenths(min);
        let max_tenths = to_tenths(max);
        if min_tenths > max_tenths {
            return Err(ConfigError::EmptyTextCacheRange);
        }
        let entries = (min_tenths..=max_tenths)
            .map(|tenths| format!("{:.1}", f64::from(tenths) / 10.0))
            .collect();
        Ok(Self {
            min_tenths,
            max_tenths,
            entries,
        })
    }

    /// The cached text for `value`, rounded to the nearest tenth.
    ///
    /// Out-of-range values clamp to the nearest end of the range, so a lookup
    /// never allocates. A `NaN` rounds to zero before clamping.
    pub fn get(&self, value: f32) -> &str {
        let tenths = to_tenths(value).clamp(self.min_tenths, self.max_tenths);
        let index = tenths.abs_diff(self.min_tenths) as usize;
        &self.entries[index]
    }
}

/// Nearest whole number of tenths, computed in `f64` so the halves of the
/// binary representation of values like `33.3` round predictably.
fn to_tenths(value: f32) -> i32 {
    (f64::from(value) * 10.0).round() as i32
}
