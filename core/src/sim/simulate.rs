/// Dimension-independent automaton simulation methods.
pub trait Simulate {
    /// Returns the number of dimensions of the underlying automaton.
    fn ndim(&self) -> usize;
    /// Returns the number of live cells in the simulation.
    fn population(&self) -> usize;
    /// Returns the number of generations that have elapsed in the simulation.
    fn generation_count(&self) -> u64;
    /// Steps forward in the simulation by the given number of generations.
    fn advance(&mut self, gens: u64);
}

/// A proxy trait for `Simulate`.
///
/// To avoid re-implementing all of the above methods of `Simulate`, we
/// instead only have to re-implement these two methods of `AsSimulate`.
pub trait AsSimulate {
    /// Convert to an immutable Simulate trait object.
    fn as_sim(&self) -> &dyn Simulate;
    /// Convert to a mutable Simulate trait object.
    fn as_sim_mut(&mut self) -> &mut dyn Simulate;
}

impl<T> Simulate for T
where
    T: AsSimulate,
{
    fn ndim(&self) -> usize {
        self.as_sim().ndim()
    }
    fn population(&self) -> usize {
        self.as_sim().population()
    }
    fn generation_count(&self) -> u64 {
        self.as_sim().generation_count()
    }
    fn advance(&mut self, gens: u64) {
        self.as_sim_mut().advance(gens);
    }
}
