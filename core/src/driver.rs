//! Caller-side policy for running automata: picking a rule, generating random
//! initial states, and recording a fixed number of generations.
//!
//! Nothing in here is needed to simulate an automaton; it is the part of a
//! frontend that decides *what* to simulate. A frontend that wants different
//! behavior (e.g. rejecting bad rule input outright) can build automata
//! directly instead.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SimConfig;
use crate::errors::ConstructionResult;
use crate::grid::{Grid, Pos, Row};
use crate::rule::ElementaryRule;
use crate::sim::{LinearAutomaton, PlaneAutomaton};

/// Rule number substituted when custom rule input can't be used.
pub const FALLBACK_RULE: u8 = 0;

/// How to pick an elementary rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleChoice {
    /// A uniformly random rule from 0 to 255.
    Random,
    /// A rule typed in by the user, such as `"30"` or `"W110"`.
    Custom(String),
}
impl Default for RuleChoice {
    fn default() -> Self {
        Self::Random
    }
}

/// Result of running a 1D automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearRun {
    /// Rule that was used.
    pub rule: ElementaryRule,
    /// Initial row followed by every subsequent generation.
    pub history: Vec<Row>,
}

/// Result of running a 2D automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneRun {
    /// Initial grid.
    pub initial: Grid,
    /// Cells that changed in each generation, in order.
    pub changes: Vec<Vec<Pos>>,
    /// Grid after the last generation.
    pub last: Grid,
}

/// Picks rules and initial states and runs automata, using a single random
/// number generator so that seeded runs are reproducible.
#[derive(Debug)]
pub struct Driver {
    config: SimConfig,
    rng: StdRng,
}
impl Default for Driver {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
impl Driver {
    /// Constructs a driver, seeding its random number generator from the
    /// config (or from system entropy if there is no seed).
    pub fn new(config: SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Returns the config.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Returns the custom rule offered to the user before they type one in,
    /// taken from the config.
    pub fn default_choice(&self) -> RuleChoice {
        RuleChoice::Custom(self.config.default_rule.to_string())
    }

    /// Picks a rule number.
    ///
    /// Custom input that is not a number from 0 to 255 is replaced by
    /// [`FALLBACK_RULE`], with a warning.
    pub fn choose_rule(&mut self, choice: &RuleChoice) -> ElementaryRule {
        match choice {
            RuleChoice::Random => ElementaryRule::from(self.rng.gen::<u8>()),
            RuleChoice::Custom(s) => s.parse().unwrap_or_else(|e| {
                warn!("{}", e);
                warn!("Enter a rule between 0 and 255 or choose a random rule");
                ElementaryRule::from(FALLBACK_RULE)
            }),
        }
    }

    /// Returns a row of uniformly random cells, as wide as the config says.
    pub fn random_row(&mut self) -> ConstructionResult<Row> {
        let rng = &mut self.rng;
        Row::new((0..self.config.width).map(|_| rng.gen::<bool>() as u8).collect())
    }

    /// Returns a grid of random cells, sized according to the config, where
    /// each cell is alive with probability `density`.
    pub fn random_grid(&mut self) -> ConstructionResult<Grid> {
        let SimConfig {
            height,
            width,
            density,
            ..
        } = self.config;
        let p = if density.is_nan() {
            0.0
        } else {
            density.max(0.0).min(1.0)
        };
        let rng = &mut self.rng;
        let data = (0..height * width)
            .map(|_| rng.gen_bool(p) as u8)
            .collect();
        Grid::from_flat(height, width, data)
    }

    /// Picks a rule and a random initial row, then records the configured
    /// number of generations.
    pub fn run_linear(&mut self, choice: &RuleChoice) -> ConstructionResult<LinearRun> {
        let rule = self.choose_rule(choice);
        let mut automaton = LinearAutomaton::new(self.random_row()?, rule);
        let history = automaton.history(self.config.generations);
        debug!(
            "Ran rule {} for {} generations",
            rule,
            automaton.generation(),
        );
        Ok(LinearRun { rule, history })
    }

    /// Runs Conway's Game of Life from a random initial grid for the
    /// configured number of generations.
    pub fn run_plane(&mut self) -> ConstructionResult<PlaneRun> {
        let initial = self.random_grid()?;
        let mut automaton = PlaneAutomaton::new(initial.clone());
        let changes: Vec<Vec<Pos>> = (0..self.config.generations)
            .map(|_| automaton.step())
            .collect();
        debug!(
            "Ran {} for {} generations; final population {}",
            automaton.rule(),
            automaton.generation(),
            automaton.grid().population(),
        );
        Ok(PlaneRun {
            initial,
            changes,
            last: automaton.grid().clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(seed: u64) -> SimConfig {
        SimConfig {
            generations: 20,
            ..SimConfig::default().with_size(12, 16).with_seed(seed)
        }
    }

    #[test]
    fn test_choose_custom_rule() {
        // Show the fallback warnings when run with `--nocapture`.
        let _ = simple_logger::init_with_level(log::Level::Warn);
        let mut driver = Driver::new(small_config(1));
        let custom = |s: &str| RuleChoice::Custom(s.to_owned());
        assert_eq!(30, driver.choose_rule(&custom("30")).number());
        assert_eq!(110, driver.choose_rule(&custom("W110")).number());
        for &bad in &["abc", "", "256", "-3", "3.5"] {
            assert_eq!(
                FALLBACK_RULE,
                driver.choose_rule(&custom(bad)).number(),
                "choosing {:?}",
                bad,
            );
        }
    }

    #[test]
    fn test_default_choice_uses_config() {
        let mut driver = Driver::new(small_config(5));
        let choice = driver.default_choice();
        assert_eq!(RuleChoice::Custom("106".to_owned()), choice);
        assert_eq!(106, driver.choose_rule(&choice).number());

        let config = SimConfig {
            default_rule: 30,
            ..small_config(5)
        };
        let mut driver = Driver::new(config);
        let choice = driver.default_choice();
        let run = driver.run_linear(&choice).unwrap();
        assert_eq!(30, run.rule.number());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let run = |seed| {
            let mut driver = Driver::new(small_config(seed));
            (
                driver.run_linear(&RuleChoice::Random).unwrap(),
                driver.run_plane().unwrap(),
            )
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_linear_run_shape() {
        let mut driver = Driver::new(small_config(7));
        let run = driver
            .run_linear(&RuleChoice::Custom("90".to_owned()))
            .unwrap();
        assert_eq!(90, run.rule.number());
        assert_eq!(21, run.history.len());
        assert!(run.history.iter().all(|row| row.len() == 16));
    }

    #[test]
    fn test_plane_run_changes_replay() {
        let mut driver = Driver::new(small_config(9));
        let run = driver.run_plane().unwrap();
        assert_eq!(20, run.changes.len());
        // Flipping every changed cell in order must reproduce the last grid.
        let mut cells = run.initial.flat_data().to_vec();
        for changed in &run.changes {
            for &(h, w) in changed {
                cells[h * 16 + w] ^= 1;
            }
        }
        assert_eq!(run.last, Grid::from_flat(12, 16, cells).unwrap());
    }

    #[test]
    fn test_random_grid_density_extremes() {
        let mut config = small_config(3);
        config.density = 0.0;
        assert_eq!(0, Driver::new(config.clone()).random_grid().unwrap().population());
        config.density = 1.0;
        assert_eq!(
            12 * 16,
            Driver::new(config).random_grid().unwrap().population()
        );
    }

    #[test]
    fn test_empty_config_is_rejected() {
        let mut driver = Driver::new(SimConfig::default().with_size(0, 0).with_seed(0));
        assert!(driver.random_row().is_err());
        assert!(driver.random_grid().is_err());
    }
}
