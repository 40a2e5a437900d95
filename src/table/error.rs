//! The error type for the table generators.

use thiserror::Error;

use super::Axis;

/// Errors returned by the table fill functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    /// A fixed parameter lies outside the range of its axis.
    #[error("fixed {axis} = {value} is outside {}..={}", .axis.min(), .axis.max())]
    FixedOutOfRange {
        /// The axis the parameter ranges over.
        axis: Axis,
        /// The rejected value.
        value: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_the_axis_and_value() {
        let error = TableError::FixedOutOfRange {
            axis: Axis::L,
            value: 101,
        };
        assert_eq!(error.to_string(), "fixed L = 101 is outside 0..=100");
    }
}
