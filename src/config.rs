//! Sizing parameters for a [`ProbingTable`](crate::ProbingTable).

use crate::error::{Error, InvalidLoadFactors, ZeroMinCapacity};
use snafu::ensure;

/// The default initial table capacity.
pub const DEFAULT_CAPACITY: usize = 10;

/// The load factor above which an insert doubles the table.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.7;

/// The load factor below which an erase halves the table.
///
/// Must be at most half of [`DEFAULT_MAX_LOAD_FACTOR`] so that a grow never lands the
/// table in shrink territory.
pub const DEFAULT_MIN_LOAD_FACTOR: f64 = 0.2;

/// The smallest capacity a shrink will ever produce.
pub const DEFAULT_MIN_CAPACITY: usize = 1;

/// Capacity and load-factor bounds for a table.
///
/// # Examples
///
/// ```
/// use probetable::{Config, ProbingTable};
///
/// let config = Config::default()
///     .with_initial_capacity(64)
///     .with_max_load_factor(0.5)
///     .with_min_load_factor(0.1);
/// let table: ProbingTable<u32, &str> = ProbingTable::with_config(config).unwrap();
/// assert_eq!(table.capacity(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub(crate) initial_capacity: usize,
    pub(crate) max_load_factor: f64,
    pub(crate) min_load_factor: f64,
    pub(crate) min_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            min_load_factor: DEFAULT_MIN_LOAD_FACTOR,
            min_capacity: DEFAULT_MIN_CAPACITY,
        }
    }
}

impl Config {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of slots the table starts with.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the load factor above which an insert doubles the table.
    pub fn with_max_load_factor(mut self, max: f64) -> Self {
        self.max_load_factor = max;
        self
    }

    /// Sets the load factor below which an erase halves the table.
    ///
    /// Zero disables shrinking.
    pub fn with_min_load_factor(mut self, min: f64) -> Self {
        self.min_load_factor = min;
        self
    }

    /// Sets the capacity below which the table never shrinks.
    pub fn with_min_capacity(mut self, capacity: usize) -> Self {
        self.min_capacity = capacity;
        self
    }

    /// The initial capacity, raised to the minimum capacity if it is smaller.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity.max(self.min_capacity)
    }

    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    pub fn min_load_factor(&self) -> f64 {
        self.min_load_factor
    }

    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Checks that the bounds can be honored together.
    ///
    /// `max_load_factor` must lie in `(0, 1]` and `min_load_factor` in `[0, max / 2]`.
    pub fn validate(&self) -> Result<(), Error> {
        let (min, max) = (self.min_load_factor, self.max_load_factor);
        // written so that NaN fails every comparison
        ensure!(
            max > 0.0 && max <= 1.0 && min >= 0.0 && min * 2.0 <= max,
            InvalidLoadFactors { min, max }
        );
        ensure!(self.min_capacity >= 1, ZeroMinCapacity);
        Ok(())
    }
}
