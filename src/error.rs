use thiserror::Error;

/// Rejected propeller options. Values are never clamped into range.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed options: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{option}` must be a finite number, got {value}")]
    NotFinite { option: &'static str, value: f64 },
    #[error("`{option}` must not be negative, got {value}")]
    Negative { option: &'static str, value: f64 },
    #[error("`inertia` must be in [0, 1), got {0}")]
    InertiaOutOfRange(f64),
    #[error("`stepTransitionEasing` must name a CSS timing function")]
    EmptyEasing,
}
