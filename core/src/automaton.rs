//! High-level CA interface.

use crate::sim::{AsSimulate, LinearAutomaton, PlaneAutomaton, Simulate};

/// Cellular automaton of either dimensionality.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Automaton {
    Linear(LinearAutomaton),
    Plane(PlaneAutomaton),
}
impl From<LinearAutomaton> for Automaton {
    fn from(a: LinearAutomaton) -> Self {
        Self::Linear(a)
    }
}
impl From<PlaneAutomaton> for Automaton {
    fn from(a: PlaneAutomaton) -> Self {
        Self::Plane(a)
    }
}
impl AsSimulate for Automaton {
    fn as_sim(&self) -> &dyn Simulate {
        match self {
            Self::Linear(a) => a,
            Self::Plane(a) => a,
        }
    }
    fn as_sim_mut(&mut self) -> &mut dyn Simulate {
        match self {
            Self::Linear(a) => a,
            Self::Plane(a) => a,
        }
    }
}
impl Automaton {
    /// Returns the 1D automaton, if this is one.
    pub fn as_linear(&self) -> Option<&LinearAutomaton> {
        match self {
            Self::Linear(a) => Some(a),
            Self::Plane(_) => None,
        }
    }
    /// Returns the 2D automaton, if this is one.
    pub fn as_plane(&self) -> Option<&PlaneAutomaton> {
        match self {
            Self::Linear(_) => None,
            Self::Plane(a) => Some(a),
        }
    }
}
