use getset::CopyGetters;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// One frame worth of performance readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, CopyGetters, TypedBuilder)]
pub struct FrameSample {
    /// Instantaneous frame rate derived from the wall-clock frame delta.
    #[getset(get_copy = "pub")]
    fps: f32,
    /// Main-thread time spent on the frame, in milliseconds.
    #[getset(get_copy = "pub")]
    cpu_time_ms: f32,
    /// Render-thread and device time spent on the frame, in milliseconds.
    #[getset(get_copy = "pub")]
    gpu_time_ms: f32,
}

impl FrameSample {
    /// Build a sample from a wall-clock frame delta in seconds.
    ///
    /// The instantaneous frame rate is the reciprocal of the delta. A delta
    /// that is not strictly positive yields a frame rate of zero rather than
    /// an infinity that would poison the rolling sums.
    pub fn from_frame_delta(frame_delta_seconds: f32, cpu_time_ms: f32, gpu_time_ms: f32) -> Self {
        let fps = if frame_delta_seconds > 0.0 {
            frame_delta_seconds.recip()
        } else {
            0.0
        };
        Self {
            fps,
            cpu_time_ms,
            gpu_time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::utils::tests::round;

    #[test]
    fn a_sixtieth_of_a_second_is_sixty_frames_per_second() {
        let sample = FrameSample::from_frame_delta(1.0 / 60.0, 12.4, 9.8);
        assert_eq!(round(f64::from(sample.fps()), 3), 60.0);
        assert_eq!(sample.cpu_time_ms(), 12.4);
        assert_eq!(sample.gpu_time_ms(), 9.8);
    }

    #[test_case(0.0)]
    #[test_case(-0.25)]
    #[test_case(f32::NAN)]
    fn a_delta_without_duration_reads_as_zero_frames_per_second(delta: f32) {
        let sample = FrameSample::from_frame_delta(delta, 1.0, 1.0);
        assert_eq!(sample.fps(), 0.0);
    }

    #[test]
    fn the_builder_and_the_delta_constructor_agree() {
        let built = FrameSample::builder()
            .fps(64.0)
            .cpu_time_ms(18.0)
            .gpu_time_ms(14.0)
            .build();
        // 1/64 s is exactly representable, so the reciprocal is exact.
        let derived = FrameSample::from_frame_delta(0.015625, 18.0, 14.0);
        assert_eq!(built, derived);
    }
}
