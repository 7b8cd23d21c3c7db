//! 2D Life-like cellular automaton on a toroidal grid.

use itertools::Itertools;
use log::{debug, trace};

use super::Simulate;
use crate::errors::ConstructionResult;
use crate::grid::{diff_same_size, Grid, Pos};
use crate::rule::{MooreTotalistic2D, LIFE};

/// 2D cellular automaton: a rectangular grid of cells evolved under a
/// Life-like rule, with both axes wrapping around.
///
/// The rule is Conway's Game of Life unless another one is given with
/// [`PlaneAutomaton::with_rule()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneAutomaton {
    grid: Grid,
    rule: MooreTotalistic2D,
    generations: u64,
}
impl PlaneAutomaton {
    /// Constructs a Game of Life automaton from an initial grid.
    pub fn new(initial: Grid) -> Self {
        debug!(
            "New plane automaton of size {:?} with rule {}",
            initial.size(),
            LIFE,
        );
        Self {
            grid: initial,
            rule: LIFE,
            generations: 0,
        }
    }
    /// Constructs a Game of Life automaton from a list of rows, rejecting an
    /// empty or ragged grid and non-binary states.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> ConstructionResult<Self> {
        Ok(Self::new(Grid::from_rows(rows)?))
    }
    /// Replaces the rule used for all future generations.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn with_rule(mut self, rule: MooreTotalistic2D) -> Self {
        self.rule = rule;
        self
    }

    /// Returns the current generation.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    /// Returns the rule.
    pub fn rule(&self) -> &MooreTotalistic2D {
        &self.rule
    }
    /// Returns the number of generations that have been computed.
    pub fn generation(&self) -> u64 {
        self.generations
    }

    /// Advances the grid by one generation and returns the positions of all
    /// cells that changed state, in row-major order.
    ///
    /// Every cell reads its neighbors from the previous generation.
    pub fn step(&mut self) -> Vec<Pos> {
        let (height, width) = self.grid.size();
        let prev = &self.grid;
        let rule = &self.rule;
        let next = prev
            .iter_enumerated()
            .map(|(pos, state)| rule.transition(state, prev.live_neighbors(pos)))
            .collect_vec();
        let next = Grid::from_valid(height, width, next);
        let changed = diff_same_size(&self.grid, &next);
        self.grid = next;
        self.generations += 1;
        trace!(
            "Plane automaton reached generation {} with {} changed cells",
            self.generations,
            changed.len(),
        );
        changed
    }
}
impl Simulate for PlaneAutomaton {
    fn ndim(&self) -> usize {
        2
    }
    fn population(&self) -> usize {
        self.grid.population()
    }
    fn generation_count(&self) -> u64 {
        self.generations
    }
    fn advance(&mut self, gens: u64) {
        for _ in 0..gens {
            self.step();
        }
    }
}
