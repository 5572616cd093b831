//! Decides when the on-screen numbers are refreshed, decoupling the display
//! rate from the render rate.

use getset::CopyGetters;
use tracing::trace;

use crate::types::{ConfigError, Result};

/// Statistics over the frames that elapsed between two display refreshes.
///
/// These are smoothed over the whole interval rather than taken from a single
/// frame, so a readout updating a few times per second stays legible.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
pub struct RefreshStats {
    /// Frame rate averaged over the refresh interval.
    #[getset(get_copy = "pub")]
    fps: f32,
    /// Average time per frame over the refresh interval, in milliseconds.
    #[getset(get_copy = "pub")]
    frame_time_ms: f32,
}

/// Accumulates frame deltas and fires a fixed number of times per second.
#[derive(Debug, Clone)]
pub struct RefreshTrigger {
    /// Wall-clock time that must accumulate before the next refresh.
    interval_seconds: f32,
    /// Time accumulated since the last refresh.
    elapsed_seconds: f32,
    /// Frames seen since the last refresh.
    frame_count: u32,
}

impl RefreshTrigger {
    /// Create a trigger firing `updates_per_second` times each second.
    ///
    /// # Errors
    /// Rejects a rate below one update per second.
    pub fn new(updates_per_second: u32) -> Result<Self> {
        if updates_per_second == 0 {
            return Err(ConfigError::InvalidRefreshRate);
        }
        Ok(Self {
            interval_seconds: 1.0 / updates_per_second as f32,
            elapsed_seconds: 0.0,
            frame_count: 0,
        })
    }

    /// Register one rendered frame.
    ///
    /// Returns the smoothed interval statistics once more than one interval
    /// of wall-clock time has accumulated, `None` otherwise. Firing resets
    /// the accumulation, so a single long frame yields exactly one refresh.
    pub fn register_frame(&mut self, frame_delta_seconds: f32) -> Option<RefreshStats> {
        self.elapsed_seconds += frame_delta_seconds;
        self.frame_count += 1;
        if self.elapsed_seconds <= self.interval_seconds {
            return None;
        }

        let fps = self.frame_count as f32 / self.elapsed_seconds;
        let frame_time_ms = self.elapsed_seconds / self.frame_count as f32 * 1_000.0;
        trace!(fps, frame_time_ms, "display refresh due");

        self.elapsed_seconds = 0.0;
        self.frame_count = 0;
        Some(RefreshStats { fps, frame_time_ms })
    }
}
