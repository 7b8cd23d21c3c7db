//! Everything related to the description of a cellular automaton rule,
//! primarily the transition function.
//!
//! Elementary rules live in [`elementary`]; Life-like 2D rules live in
//! [`totalistic`].

pub mod elementary;
pub mod totalistic;

pub use elementary::{
    build_table, decode, encode, ElementaryRule, Neighborhood, RuleBits, RuleTable,
    NEIGHBORHOOD_ORDER,
};
pub use totalistic::*;
