//! 1D elementary cellular automaton on a cyclic row.

use log::{debug, trace};

use super::Simulate;
use crate::errors::ConstructionResult;
use crate::grid::Row;
use crate::math::{wrap_next, wrap_prev};
use crate::rule::RuleTable;

/// Elementary cellular automaton: a single row of cells evolved under a fixed
/// neighborhood rule table, with the ends of the row wrapping around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearAutomaton {
    row: Row,
    table: RuleTable,
    generations: u64,
}
impl LinearAutomaton {
    /// Constructs an automaton from an initial row and a rule table.
    pub fn new(initial: Row, table: impl Into<RuleTable>) -> Self {
        let table = table.into();
        debug!(
            "New linear automaton of width {} with rule {}",
            initial.len(),
            table.rule_number(),
        );
        Self {
            row: initial,
            table,
            generations: 0,
        }
    }
    /// Constructs an automaton from raw initial cell states, rejecting an
    /// empty row or non-binary states.
    pub fn from_cells(cells: Vec<u8>, table: impl Into<RuleTable>) -> ConstructionResult<Self> {
        Ok(Self::new(Row::new(cells)?, table))
    }

    /// Returns the current generation.
    pub fn row(&self) -> &Row {
        &self.row
    }
    /// Returns the rule table.
    pub fn table(&self) -> &RuleTable {
        &self.table
    }
    /// Returns the number of cells in the row.
    pub fn len(&self) -> usize {
        self.row.len()
    }
    /// Always returns `false`; rows are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
    /// Returns the number of generations that have been computed.
    pub fn generation(&self) -> u64 {
        self.generations
    }

    /// Advances the row by one generation and returns the new row.
    ///
    /// Every cell reads its neighborhood from the previous generation.
    pub fn step(&mut self) -> &Row {
        let cells = self.row.cells();
        let len = cells.len();
        let next = (0..len)
            .map(|i| {
                let left = cells[wrap_prev(i, len)];
                let right = cells[wrap_next(i, len)];
                self.table.get(left, cells[i], right)
            })
            .collect();
        self.row = Row::from_valid(next);
        self.generations += 1;
        trace!("Linear automaton reached generation {}", self.generations);
        &self.row
    }

    /// Returns the current row followed by the next `gens` generations,
    /// advancing the automaton as it goes.
    pub fn history(&mut self, gens: usize) -> Vec<Row> {
        let mut ret = Vec::with_capacity(gens + 1);
        ret.push(self.row.clone());
        for _ in 0..gens {
            ret.push(self.step().clone());
        }
        ret
    }
}
impl Simulate for LinearAutomaton {
    fn ndim(&self) -> usize {
        1
    }
    fn population(&self) -> usize {
        self.row.population()
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
