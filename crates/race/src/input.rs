use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::RaceError;

pub const MIN_LEN: usize = 10;
pub const MAX_LEN: usize = 100_000;

/// Shape of a generated input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSpec {
    pub len: usize,
    pub min: i32,
    pub max: i32,
}

impl Default for InputSpec {
    fn default() -> Self {
        Self {
            len: 100,
            min: 1,
            max: 1000,
        }
    }
}

impl InputSpec {
    pub fn validate(&self) -> Result<(), RaceError> {
        if !(MIN_LEN..=MAX_LEN).contains(&self.len) {
            return Err(RaceError::InvalidLength {
                len: self.len,
                min: MIN_LEN,
                max: MAX_LEN,
            });
        }
        if self.min > self.max {
            return Err(RaceError::InvalidValueRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Uniform values in `spec.min..=spec.max`.
pub fn generate<R: Rng + ?Sized>(spec: &InputSpec, rng: &mut R) -> Result<Vec<i32>, RaceError> {
    spec.validate()?;
    Ok((0..spec.len)
        .map(|_| rng.random_range(spec.min..=spec.max))
        .collect())
}

/// Like [`generate`], reproducible for a given `seed`.
pub fn generate_seeded(spec: &InputSpec, seed: u64) -> Result<Vec<i32>, RaceError> {
    generate(spec, &mut StdRng::seed_from_u64(seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_values_in_range() {
        let spec = InputSpec::default();
        let values = generate_seeded(&spec, 7).unwrap();
        assert_eq!(values.len(), 100);
        assert!(values.iter().all(|v| (1..=1000).contains(v)));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let spec = InputSpec::default();
        assert_eq!(generate_seeded(&spec, 42).unwrap(), generate_seeded(&spec, 42).unwrap());
    }

    #[test]
    fn rejects_bad_specs() {
        let short = InputSpec {
            len: 9,
            ..InputSpec::default()
        };
        assert_eq!(
            generate_seeded(&short, 1),
            Err(RaceError::InvalidLength {
                len: 9,
                min: MIN_LEN,
                max: MAX_LEN
            })
        );

        let inverted = InputSpec {
            min: 10,
            max: 1,
            ..InputSpec::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(RaceError::InvalidValueRange { min: 10, max: 1 })
        );
    }

    #[test]
    fn single_value_range() {
        let spec = InputSpec {
            len: 10,
            min: 7,
            max: 7,
        };
        assert_eq!(generate_seeded(&spec, 3).unwrap(), vec![7; 10]);
    }
}
