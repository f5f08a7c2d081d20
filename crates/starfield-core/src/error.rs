use thiserror::Error;

/// Rejected tuning values in a [`crate::StarfieldConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must lie in (0, 1], got {value}")]
    FactorOutOfRange { field: &'static str, value: f32 },
    #[error("min_scale must lie in (0, 1), got {0}")]
    MinScaleOutOfRange(f32),
    #[error("star color must not be empty")]
    EmptyColor,
}
