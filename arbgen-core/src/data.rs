//! Core data types for arbgen test data generation.

use std::fmt;

use crate::error::{ArbgenError, Result};

/// Default number of retries allowed by `such_that` after the first attempt.
pub const DEFAULT_RETRY_BUDGET: usize = 100;

/// Longest string produced by the built-in `String` strategy.
pub const STRING_MAX_LEN: usize = 256;

/// First printable ASCII code point (space).
pub const PRINTABLE_START: u8 = 32;

/// Last printable ASCII code point (tilde).
pub const PRINTABLE_END: u8 = 126;

/// Inclusive numeric interval `[start, end]`.
///
/// Construction checks `start <= end`; an interval that cannot be
/// ordered (a NaN bound) is rejected as well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T> Interval<T>
where
    T: PartialOrd + fmt::Debug,
{
    /// Create a new interval, rejecting `start > end`.
    pub fn new(start: T, end: T) -> Result<Self> {
        match start.partial_cmp(&end) {
            Some(std::cmp::Ordering::Less) | Some(std::cmp::Ordering::Equal) => {
                Ok(Interval { start, end })
            }
            Some(std::cmp::Ordering::Greater) => Err(ArbgenError::invalid_argument(
                "choose",
                format!(
                    "interval [{start:?}, {end:?}] of type `{}` has start greater than end",
                    std::any::type_name::<T>()
                ),
            )),
            None => Err(ArbgenError::invalid_argument(
                "choose",
                format!(
                    "interval [{start:?}, {end:?}] of type `{}` has unordered bounds",
                    std::any::type_name::<T>()
                ),
            )),
        }
    }
}

impl<T: Copy> Interval<T> {
    /// Lower bound.
    pub fn start(&self) -> T {
        self.start
    }

    /// Upper bound (inclusive).
    pub fn end(&self) -> T {
        self.end
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Configuration for a generation context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Retries allowed by `such_that` after the first attempt.
    pub retry_budget: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            retry_budget: DEFAULT_RETRY_BUDGET,
        }
    }
}

impl Config {
    /// Create a new config with the given `such_that` retry budget.
    pub fn with_retry_budget(mut self, retries: usize) -> Self {
        self.retry_budget = retries;
        self
    }
}
