#![doc = include_str!("../README.md")]

mod config;
mod monitor;
mod refresh_trigger;
mod severity;
mod stat_buffer;
mod text_cache;
mod trace;
mod types;
mod utils;

pub use config::MonitorConfig;
pub use monitor::{FpsMetrics, FrameMonitor, FrameTimeMetrics};
pub use refresh_trigger::{RefreshStats, RefreshTrigger};
pub use severity::{FpsThresholds, FrameTimeThresholds, Severity};
pub use stat_buffer::StatBuffer;
pub use text_cache::{IntTextCache, TenthsTextCache};
pub use trace::load_frame_trace_from_csv;
pub use types::{ConfigError, FrameSample, Result, ZScore};

/// Exports everything the user needs to drive a frame monitor.
pub mod prelude {
    pub use crate::{
        config::MonitorConfig,
        monitor::{FpsMetrics, FrameMonitor, FrameTimeMetrics},
        refresh_trigger::{RefreshStats, RefreshTrigger},
        severity::{FpsThresholds, FrameTimeThresholds, Severity},
        stat_buffer::StatBuffer,
        text_cache::{IntTextCache, TenthsTextCache},
        trace::load_frame_trace_from_csv,
        types::{ConfigError, FrameSample, Result, ZScore},
    };
}

// Pulled in by the benchmarks; `unused_crate_dependencies` cannot see that
// from the library test target.
#[cfg(test)]
use criterion as _;
