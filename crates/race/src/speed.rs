use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::error::RaceError;

/// Animation speed dial position, `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed(u8);

impl Speed {
    pub const MIN: Speed = Speed(1);
    pub const MAX: Speed = Speed(100);
    pub const DEFAULT: Speed = Speed(80);

    pub fn new(value: u8) -> Result<Self, RaceError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RaceError::SpeedOutOfRange(value))
        }
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Position of the dial mapped onto `0.0..=1.0`.
    #[inline]
    pub fn normalized(self) -> f64 {
        f64::from(self.0 - 1) / 99.0
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The speed control shared by the UI and every throttle of a race.
///
/// Clones observe the same value. Drivers only read it; writes come from
/// the user-facing control and may land at any point during a race.
#[derive(Debug, Clone)]
pub struct SpeedDial {
    value: Arc<AtomicU8>,
}

impl SpeedDial {
    pub fn new(speed: Speed) -> Self {
        Self {
            value: Arc::new(AtomicU8::new(speed.get())),
        }
    }

    pub fn get(&self) -> Speed {
        Speed(self.value.load(Ordering::Relaxed))
    }

    pub fn set(&self, speed: Speed) {
        self.value.store(speed.get(), Ordering::Relaxed);
    }
}

impl Default for SpeedDial {
    fn default() -> Self {
        Self::new(Speed::DEFAULT)
    }
}
