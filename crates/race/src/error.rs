use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RaceError {
    #[error("speed {0} is outside 1..=100")]
    SpeedOutOfRange(u8),

    #[error("input of {len} values exceeds the animation limit of {limit}")]
    TooLargeToAnimate { len: usize, limit: usize },

    #[error("value range {min}..={max} is empty")]
    InvalidValueRange { min: i32, max: i32 },

    #[error("input length {len} is outside {min}..={max}")]
    InvalidLength { len: usize, min: usize, max: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
