//! The frame monitor, tying the rolling windows of the tracked signals
//! together behind one sampling call.

use getset::CopyGetters;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    config::MonitorConfig,
    severity::Severity,
    stat_buffer::StatBuffer,
    types::{FrameSample, Result, ZScore},
};

/// Overlay-ready summary of the recent frame-rate history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, CopyGetters)]
pub struct FpsMetrics {
    /// The most recent instantaneous reading.
    #[getset(get_copy = "pub")]
    current: f32,
    /// Mean over the rolling window.
    #[getset(get_copy = "pub")]
    average: f32,
    /// Estimated frame rate of the worst 1% of frames.
    #[getset(get_copy = "pub")]
    one_percent_low: f32,
    /// Estimated frame rate of the worst 0.1% of frames.
    #[getset(get_copy = "pub")]
    zero_point_one_percent_low: f32,
}

/// Overlay-ready summary of one frame-time signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, CopyGetters)]
pub struct FrameTimeMetrics {
    /// The most recent instantaneous reading, in milliseconds.
    #[getset(get_copy = "pub")]
    current_ms: f32,
    /// Mean over the rolling window, in milliseconds.
    #[getset(get_copy = "pub")]
    average_ms: f32,
    /// Estimated duration of the worst 1% of frames, in milliseconds.
    #[getset(get_copy = "pub")]
    one_percent_high_ms: f32,
    /// Estimated duration of the worst 0.1% of frames, in milliseconds.
    #[getset(get_copy = "pub")]
    zero_point_one_percent_high_ms: f32,
}

/// Rolling statistics over the most recent frames of a running render loop.
///
/// One buffer each tracks the frame rate, the cpu frame time and the gpu
/// frame time. Recording a frame is `O(1)` and allocation free; the summaries
/// are derived on read and reading them changes nothing.
///
/// The 1% and 0.1% figures are z-score estimates of the tail of a roughly
/// normal sample distribution, which makes them cheap to maintain. They are
/// not exact order statistics of the window.
#[derive(Debug, Clone)]
pub struct FrameMonitor {
    config: MonitorConfig,
    fps: StatBuffer<f32>,
    cpu_time_ms: StatBuffer<f32>,
    gpu_time_ms: StatBuffer<f32>,
    last_sample: Option<FrameSample>,
}

impl FrameMonitor {
    /// Create a monitor from `config`.
    ///
    /// # Errors
    /// Returns an error when the configuration is inconsistent.
    pub fn new(config: MonitorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            fps: StatBuffer::new(config.sample_capacity(), config.expected_fps())?,
            cpu_time_ms: StatBuffer::new(
                config.sample_capacity(),
                config.expected_frame_time_ms(),
            )?,
            gpu_time_ms: StatBuffer::new(
                config.sample_capacity(),
                config.expected_frame_time_ms(),
            )?,
            config,
            last_sample: None,
        })
    }

    /// Record one frame in all three windows.
    pub fn sample(&mut self, sample: FrameSample) {
        trace!(?sample, "record frame");
        self.fps.push(sample.fps());
        self.cpu_time_ms.push(sample.cpu_time_ms());
        self.gpu_time_ms.push(sample.gpu_time_ms());
        self.last_sample = Some(sample);
    }

    /// Frame-rate summary with 1% and 0.1% low estimates.
    ///
    /// The low estimates are `mean - z * std_dev` clamped to zero, with `z`
    /// of [`ZScore::P99`] and [`ZScore::P99_9`] respectively.
    pub fn fps(&self) -> FpsMetrics {
        let mean = self.fps.mean();
        let std_dev = self.fps.std_dev();
        FpsMetrics {
            current: self.last_sample.map_or(0.0, |sample| sample.fps()),
            average: mean,
            one_percent_low: ZScore::P99.lower_bound(mean, std_dev),
            zero_point_one_percent_low: ZScore::P99_9.lower_bound(mean, std_dev),
        }
    }

    /// Cpu-time summary with 1% and 0.1% high estimates.
    ///
    /// The high estimates are `mean + z * std_dev`, with `z` of
    /// [`ZScore::P99`] and [`ZScore::P99_9`] respectively.
    pub fn cpu_time(&self) -> FrameTimeMetrics {
        Self::frame_time_metrics(
            &self.cpu_time_ms,
            self.last_sample.map_or(0.0, |sample| sample.cpu_time_ms()),
        )
    }

    /// Gpu-time summary with 1% and 0.1% high estimates.
    pub fn gpu_time(&self) -> FrameTimeMetrics {
        Self::frame_time_metrics(
            &self.gpu_time_ms,
            self.last_sample.map_or(0.0, |sample| sample.gpu_time_ms()),
        )
    }

    /// Severity of the latest frame-rate reading, the value an overlay colors
    /// its fps readout by.
    pub fn fps_severity(&self) -> Severity {
        self.config
            .fps_thresholds()
            .classify(self.last_sample.map_or(0.0, |sample| sample.fps()))
    }

    /// Severity of the latest cpu-time reading.
    pub fn cpu_severity(&self) -> Severity {
        self.config
            .frame_time_thresholds()
            .classify(self.last_sample.map_or(0.0, |sample| sample.cpu_time_ms()))
    }

    /// Severity of the latest gpu-time reading.
    pub fn gpu_severity(&self) -> Severity {
        self.config
            .frame_time_thresholds()
            .classify(self.last_sample.map_or(0.0, |sample| sample.gpu_time_ms()))
    }

    /// Worst of the three per-signal severities.
    pub fn overall_severity(&self) -> Severity {
        self.fps_severity()
            .max(self.cpu_severity())
            .max(self.gpu_severity())
    }

    /// Forget all recorded frames, e.g. after a scene change or a poisoned
    /// non-finite sample.
    pub fn reset(&mut self) {
        self.fps.clear();
        self.cpu_time_ms.clear();
        self.gpu_time_ms.clear();
        self.last_sample = None;
    }

    /// Number of frames currently inside the rolling windows.
    pub fn sampled_frames(&self) -> usize {
        self.fps.len()
    }

    /// The configuration the monitor runs with.
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    fn frame_time_metrics(buffer: &StatBuffer<f32>, current_ms: f32) -> FrameTimeMetrics {
        let mean = buffer.mean();
        let std_dev = buffer.std_dev();
        FrameTimeMetrics {
            current_ms,
            average_ms: mean,
            one_percent_high_ms: ZScore::P99.upper_bound(mean, std_dev),
            zero_point_one_percent_high_ms: ZScore::P99_9.upper_bound(mean, std_dev),
        }
    }
}
