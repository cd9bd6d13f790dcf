use crate::error::RaceError;
use crate::input::InputSpec;
use crate::speed::Speed;

/// Inputs longer than this are only benchmarked, never animated.
pub const DEFAULT_VISUALIZATION_LIMIT: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceConfig {
    pub visualization_limit: usize,
    pub default_speed: Speed,
    pub input: InputSpec,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            visualization_limit: DEFAULT_VISUALIZATION_LIMIT,
            default_speed: Speed::DEFAULT,
            input: InputSpec::default(),
        }
    }
}

impl RaceConfig {
    /// Checks the race settings. `input` is checked where values are
    /// generated, since a race may run on data from anywhere.
    pub fn validate(&self) -> Result<(), RaceError> {
        if self.visualization_limit == 0 {
            return Err(RaceError::InvalidConfig("visualization limit must be positive"));
        }
        Ok(())
    }
}
