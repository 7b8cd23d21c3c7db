//! Settings for driving a simulation.

/// Dimensions, run length, and randomness settings used by a
/// [`Driver`](crate::driver::Driver).
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Number of cells in a row (1D) or columns in the grid (2D).
    pub width: usize,
    /// Number of rows in the grid (2D only).
    pub height: usize,
    /// Number of generations to record in a run.
    pub generations: usize,
    /// Rule offered for custom entry; see
    /// [`Driver::default_choice()`](crate::driver::Driver::default_choice).
    pub default_rule: u8,
    /// Probability that a cell in a random 2D grid starts alive.
    pub density: f64,
    /// Seed for random initial states and random rules. `None` seeds from
    /// system entropy.
    pub seed: Option<u64>,
}
impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 150,
            generations: 150,
            default_rule: 106, // looks cool
            density: 0.5,
            seed: None,
        }
    }
}
impl SimConfig {
    /// Returns the config with a fixed seed, for reproducible runs.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    /// Returns the config with different dimensions.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn with_size(mut self, height: usize, width: usize) -> Self {
        self.height = height;
        self.width = width;
        self
    }
}
