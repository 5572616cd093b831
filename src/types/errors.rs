/// Describes the misconfigurations that are rejected when setting up a
/// monitor or one of its parts.
#[derive(thiserror::Error, Debug, Clone, Copy, Eq, PartialEq)]
#[allow(missing_docs, reason = "The error messages are descriptive enough")]
pub enum ConfigError {
    #[error("The sample capacity must be at least one.")]
    InvalidSampleCapacity,

    #[error("An expected baseline must be a finite number.")]
    NonFiniteExpected,

    #[error("The refresh rate must be at least one update per second.")]
    InvalidRefreshRate,

    #[error("Frame-rate thresholds must be finite, positive and ordered good above caution.")]
    InvalidFpsThresholds,

    #[error("Frame-time thresholds must be finite, positive and ordered good below caution.")]
    InvalidFrameTimeThresholds,

    #[error("A z-score multiplier must be finite and non-negative.")]
    InvalidZScore,

    #[error("The text cache range contains no entries.")]
    EmptyTextCacheRange,
}

/// This is defined as a convenience.
pub type Result<T> = std::result::Result<T, ConfigError>;
