//! Errors produced when building rules and automata.
//!
//! Once an automaton has been constructed, stepping it cannot fail, so these
//! are the only error types in the crate.

use thiserror::Error;

/// Result type returned by fallible rule routines.
pub type RuleResult<T> = Result<T, RuleError>;
/// Result type returned by fallible constructors of rows, grids, and automata.
pub type ConstructionResult<T> = Result<T, ConstructionError>;

/// Error encountered while decoding, encoding, or parsing a rule.
#[allow(missing_docs)]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// Rule number is not in the range `0..=255`.
    #[error("rule number {0} is out of range; expected a value from 0 to 255")]
    OutOfRange(i64),
    /// Bit sequence does not contain exactly 8 bits.
    #[error("expected 8 rule bits; got {0}")]
    WrongBitCount(usize),
    /// Bit sequence contains something other than 0 or 1.
    #[error("rule bit #{index} is {value}; expected 0 or 1")]
    NonBinaryBit { index: usize, value: u8 },
    /// Rule string could not be understood.
    #[error("unrecognized rule {0:?}")]
    BadRuleString(String),
}

/// Error encountered while constructing a row, grid, or automaton from
/// caller-supplied cell states.
#[allow(missing_docs)]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// Row has no cells.
    #[error("row must contain at least one cell")]
    EmptyRow,
    /// Grid has no rows.
    #[error("grid must contain at least one row")]
    EmptyGrid,
    /// Grid rows have no cells.
    #[error("grid rows must contain at least one cell")]
    EmptyGridRow,
    /// Grid rows are not all the same width.
    #[error("grid row {row} has {got} cells; expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// Grid has more cells than can be addressed.
    #[error("grid of {height}x{width} cells is too large")]
    TooLarge { height: usize, width: usize },
    /// A position lies outside the grid.
    #[error("position {pos:?} is outside grid of size {size:?}")]
    OutOfBounds {
        pos: (usize, usize),
        size: (usize, usize),
    },
    /// Flat cell data does not match the requested dimensions.
    #[error("expected {expected} cells; got {got}")]
    WrongFlatLength { expected: usize, got: usize },
    /// A cell state is something other than 0 or 1.
    #[error("cell #{index} has state {value}; expected 0 or 1")]
    NonBinaryCell { index: usize, value: u8 },
    /// Two grids that must share a shape do not.
    #[error("grid sizes differ: {0:?} vs {1:?}")]
    SizeMismatch((usize, usize), (usize, usize)),
}
