//! Errors reported by the tables in this crate.

use snafu::Snafu;

/// The error type for fallible table operations.
///
/// Lookups through [`ProbingTable::find`](crate::ProbingTable::find) and friends report
/// absence with `Option`; only the operations that are documented to fail return this type.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility = "pub(crate)")]
pub enum Error {
    /// An indexed lookup was made for a key that is not in the table.
    #[snafu(display("Key not found"))]
    KeyNotFound,

    /// A slot index past the end of the backing array was requested.
    #[snafu(display("Slot index {} is out of range for capacity {}", index, capacity))]
    SlotOutOfRange { index: usize, capacity: usize },

    /// The load factor bounds cannot be satisfied together.
    #[snafu(display(
        "Invalid load factors: min {} and max {} must satisfy 0 <= 2 * min <= max <= 1 and max > 0",
        min,
        max
    ))]
    InvalidLoadFactors { min: f64, max: f64 },

    /// A table must always keep at least one slot.
    #[snafu(display("Minimum capacity must be at least 1"))]
    ZeroMinCapacity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Error::KeyNotFound.to_string(), "Key not found");
        assert_eq!(
            Error::SlotOutOfRange {
                index: 12,
                capacity: 10
            }
            .to_string(),
            "Slot index 12 is out of range for capacity 10"
        );
        assert_eq!(
            Error::ZeroMinCapacity.to_string(),
            "Minimum capacity must be at least 1"
        );
    }
}
