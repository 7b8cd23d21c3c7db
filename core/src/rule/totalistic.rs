//! Life-like rules: 2-state totalistic rules over the Moore neighborhood,
//! written in `B/S` notation.
//!
//! ```
//! use cellsim_core::rule::totalistic::{MooreTotalistic2D, LIFE};
//!
//! let highlife: MooreTotalistic2D = "B36/S23".parse().unwrap();
//! assert_eq!("B36/S23", highlife.to_string());
//! assert_eq!(LIFE, MooreTotalistic2D::default());
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::errors::{RuleError, RuleResult};

lazy_static! {
    /// Regex matching a Life-like rule string, such as `B3/S23`.
    static ref BS_RULE_REGEX: Regex = Regex::new(r"^[Bb]([0-8]*)/?[Ss]([0-8]*)$").unwrap();
}

/// A 2-state totalistic 2D range-1 Moore-neighborhood rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MooreTotalistic2D {
    birth: [u8; 9],
    survival: [u8; 9],
}
impl Default for MooreTotalistic2D {
    fn default() -> Self {
        LIFE
    }
}

impl MooreTotalistic2D {
    /// Returns the next state of a cell, given its current state and the
    /// number of live cells among its 8 neighbors.
    ///
    /// A dead cell is born if `live_neighbors` is a birth count; a live cell
    /// dies unless `live_neighbors` is a survival count; otherwise the cell
    /// keeps its state. Counts above 8 match no condition, so the result is
    /// always dead.
    pub fn transition(&self, state: u8, live_neighbors: usize) -> u8 {
        let conditions = if state == 0 {
            &self.birth
        } else {
            &self.survival
        };
        conditions.get(live_neighbors).copied().unwrap_or(0)
    }
}

impl FromStr for MooreTotalistic2D {
    type Err = RuleError;

    fn from_str(s: &str) -> RuleResult<Self> {
        let s = s.trim();
        let captures = BS_RULE_REGEX
            .captures(s)
            .ok_or_else(|| RuleError::BadRuleString(s.to_owned()))?;
        let mut conditions = [[0; 9]; 2];
        for i in 0..2 {
            // Capture group 0 is the whole match.
            for ch in captures[i + 1].chars() {
                if let Some(n) = ch.to_digit(10) {
                    conditions[i][n as usize] = 1;
                }
            }
        }
        Ok(Self {
            birth: conditions[0],
            survival: conditions[1],
        })
    }
}
impl fmt::Display for MooreTotalistic2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for i in 0..=8 {
            if self.birth[i] != 0_u8 {
                write!(f, "{}", i)?;
            }
        }
        write!(f, "/S")?;
        for i in 0..=8 {
            if self.survival[i] != 0_u8 {
                write!(f, "{}", i)?;
            }
        }
        Ok(())
    }
}

/// Conway's Game of Life (`B3/S23`).
pub const LIFE: MooreTotalistic2D = MooreTotalistic2D {
    birth: [0, 0, 0, 1, 0, 0, 0, 0, 0],
    survival: [0, 0, 1, 1, 0, 0, 0, 0, 0],
};
