//! Elementary and Life-like cellular automaton simulation backend.
//!
//! Two automata are provided:
//!
//! - [`LinearAutomaton`](sim::LinearAutomaton), a 1D elementary automaton
//!   whose rule is given by a Wolfram rule number from 0 to 255;
//! - [`PlaneAutomaton`](sim::PlaneAutomaton), Conway's Game of Life on a
//!   toroidal grid.
//!
//! Both own their cells and advance one synchronous generation per call to
//! `step()`. The 2D automaton reports which cells changed in each generation
//! so that a frontend can redraw only those.
//!
//! ```
//! use cellsim_core::prelude::*;
//!
//! let table = RuleTable::from_rule_number(90).unwrap();
//! let mut row = LinearAutomaton::new(Row::single_center(7).unwrap(), table);
//! assert_eq!("..#.#..", row.step().to_string());
//!
//! let blinker = Grid::with_live_cells(5, 5, vec![(2, 1), (2, 2), (2, 3)]).unwrap();
//! let mut life = PlaneAutomaton::new(blinker);
//! assert_eq!(vec![(1, 2), (2, 1), (2, 3), (3, 2)], life.step());
//! ```

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

mod automaton;
pub mod config;
pub mod driver;
pub mod errors;
pub mod grid;
pub mod math;
pub mod rule;
pub mod sim;

pub mod traits {
    //! Traits that need to be in scope to use automata generically.
    pub use crate::sim::{AsSimulate, Simulate};
}

pub mod prelude {
    //! Everything needed to build and run automata.
    pub use crate::traits::*;

    pub use crate::automaton::Automaton;
    pub use crate::config::SimConfig;
    pub use crate::driver::{Driver, RuleChoice};
    pub use crate::errors::{ConstructionError, ConstructionResult, RuleError, RuleResult};
    pub use crate::grid::{changed_cells, Grid, Pos, Row};
    pub use crate::rule::{ElementaryRule, MooreTotalistic2D, RuleTable, LIFE};
    pub use crate::sim::{LinearAutomaton, PlaneAutomaton};
}

pub use automaton::Automaton;

#[cfg(test)]
mod tests;
