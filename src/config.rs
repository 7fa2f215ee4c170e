//! Numeric and tape model of the virtual machine

use anyhow::anyhow;

use crate::error::ExecutionError;

/// Run parameters of a program.
///
/// A `Config` is built once and only read afterwards. Every cell mutation
/// goes through [`Config::clamp_high`] or [`Config::clamp_low`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    tape_len: usize,
    is_looped: bool,
    max_number: i64,
    has_minus: bool,
    has_overload: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tape_len: 30_000,
            is_looped: true,
            max_number: 256,
            has_minus: false,
            has_overload: true,
        }
    }
}

impl Config {
    /// Create a validated config.
    ///
    /// * `tape_len` number of cells, must be positive
    /// * `is_looped` whether the pointer wraps at the tape ends
    /// * `max_number` number of cell variants, must be greater than 1 and
    ///   small enough for the signed range `2 * max_number` to fit an `i64`
    /// * `has_minus` signed cells (`-max_number..max_number`)
    /// * `has_overload` wrap on overflow instead of failing
    pub fn new(
        tape_len: usize,
        is_looped: bool,
        max_number: i64,
        has_minus: bool,
        has_overload: bool,
    ) -> anyhow::Result<Self> {
        if tape_len == 0 {
            return Err(anyhow!("Tape length must be positive."));
        }
        if max_number < 2 {
            return Err(anyhow!(
                "Cell must have at least two variants, got {}.",
                max_number
            ));
        }
        if max_number > i64::MAX / 2 {
            return Err(anyhow!(
                "Cell must have at most {} variants, got {}.",
                i64::MAX / 2,
                max_number
            ));
        }

        Ok(Config {
            tape_len,
            is_looped,
            max_number,
            has_minus,
            has_overload,
        })
    }

    pub fn tape_len(&self) -> usize {
        self.tape_len
    }

    pub fn is_looped(&self) -> bool {
        self.is_looped
    }

    pub fn max_number(&self) -> i64 {
        self.max_number
    }

    pub fn has_minus(&self) -> bool {
        self.has_minus
    }

    pub fn has_overload(&self) -> bool {
        self.has_overload
    }

    /// Largest value a cell can hold
    pub fn maximum(&self) -> i64 {
        self.max_number - 1
    }

    /// Smallest value a cell can hold
    pub fn minimum(&self) -> i64 {
        if self.has_minus {
            -self.max_number
        } else {
            0
        }
    }

    /// Bring a value that may exceed the maximum back into the cell range.
    pub fn clamp_high(&self, value: i64) -> Result<i64, ExecutionError> {
        if value <= self.maximum() {
            return Ok(value);
        }

        if !self.has_overload {
            return Err(ExecutionError::ValueTooHigh {
                value,
                maximum: self.maximum(),
            });
        }

        Ok(self.wrap(value))
    }

    /// Bring a value that may be below the minimum back into the cell range.
    pub fn clamp_low(&self, value: i64) -> Result<i64, ExecutionError> {
        if value >= self.minimum() {
            return Ok(value);
        }

        if !self.has_overload {
            return Err(ExecutionError::ValueTooLow {
                value,
                minimum: self.minimum(),
            });
        }

        Ok(self.wrap(value))
    }

    fn wrap(&self, value: i64) -> i64 {
        if self.has_minus {
            self.minimum() + (value - self.max_number).rem_euclid(self.max_number * 2)
        } else {
            value.rem_euclid(self.max_number)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_number: i64, has_minus: bool, has_overload: bool) -> Config {
        Config::new(10, true, max_number, has_minus, has_overload).unwrap()
    }

    #[test]
    fn bounds() {
        let unsigned = config(256, false, true);
        assert_eq!(unsigned.maximum(), 255);
        assert_eq!(unsigned.minimum(), 0);

        let signed = config(256, true, true);
        assert_eq!(signed.maximum(), 255);
        assert_eq!(signed.minimum(), -256);
    }

    #[test]
    fn rejects_invalid_params() {
        assert!(Config::new(0, true, 256, false, true).is_err());
        assert!(Config::new(10, true, 1, false, true).is_err());
        assert!(Config::new(10, true, i64::MAX / 2 + 1, true, true).is_err());
        assert!(Config::new(10, true, i64::MAX, false, true).is_err());
    }

    #[test]
    fn largest_signed_range_wraps() {
        let config = config(i64::MAX / 2, true, true);
        assert_eq!(config.clamp_low(config.minimum() - 1).unwrap(), config.maximum());
        assert_eq!(config.clamp_high(config.maximum() + 1).unwrap(), config.minimum());
    }

    #[test]
    fn unsigned_wraparound() {
        let config = config(256, false, true);
        assert_eq!(config.clamp_high(255).unwrap(), 255);
        assert_eq!(config.clamp_high(256).unwrap(), 0);
        assert_eq!(config.clamp_low(-1).unwrap(), 255);
    }

    #[test]
    fn signed_wraparound() {
        let config = config(256, true, true);
        assert_eq!(config.clamp_high(256).unwrap(), -256);
        assert_eq!(config.clamp_low(-257).unwrap(), 255);
        assert_eq!(config.clamp_low(-256).unwrap(), -256);
    }

    #[test]
    fn increment_closure() {
        for max_number in [2, 3, 10, 256] {
            let config = config(max_number, false, true);
            let mut value = 0;
            for _ in 0..max_number {
                value = config.clamp_high(value + 1).unwrap();
            }
            assert_eq!(value, 0);
        }
    }

    #[test]
    fn overflow_disabled() {
        let config = config(256, false, false);
        assert_eq!(
            config.clamp_high(256),
            Err(ExecutionError::ValueTooHigh {
                value: 256,
                maximum: 255
            })
        );
        assert_eq!(
            config.clamp_low(-1),
            Err(ExecutionError::ValueTooLow {
                value: -1,
                minimum: 0
            })
        );
    }
}
