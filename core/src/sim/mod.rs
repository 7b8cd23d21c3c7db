//! Automata and the algorithms that advance them.

mod linear;
mod plane;
mod simulate;

pub use linear::LinearAutomaton;
pub use plane::PlaneAutomaton;
pub use simulate::{AsSimulate, Simulate};
