//! Elementary (1D, radius-1, 2-state) rules, identified by Wolfram rule
//! numbers.
//!
//! A rule number's 8-bit big-endian expansion assigns one output bit to each
//! neighborhood, starting at `(1, 1, 1)` and counting down to `(0, 0, 0)`.

use lazy_static::lazy_static;
use regex::Regex;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::errors::{RuleError, RuleResult};

/// Number of distinct neighborhoods in an elementary automaton.
pub const NEIGHBORHOOD_COUNT: usize = 8;

/// Rule number expanded into bits, most significant bit first.
pub type RuleBits = [u8; NEIGHBORHOOD_COUNT];

/// Neighborhood of a single cell, as `(left, center, right)`.
pub type Neighborhood = (u8, u8, u8);

/// Neighborhoods in the order that rule bits are assigned to them.
pub const NEIGHBORHOOD_ORDER: [Neighborhood; NEIGHBORHOOD_COUNT] = [
    (1, 1, 1),
    (1, 1, 0),
    (1, 0, 1),
    (1, 0, 0),
    (0, 1, 1),
    (0, 1, 0),
    (0, 0, 1),
    (0, 0, 0),
];

lazy_static! {
    /// Regex matching a rule number with an optional `W` or `Rule` prefix.
    static ref RULE_NUMBER_REGEX: Regex =
        Regex::new(r"^(?i:w|rule\s*)?(-?\d+)$").unwrap();
}

/// Expands a rule number into exactly 8 bits, most significant bit first.
///
/// Numbers outside `0..=255` are rejected rather than truncated.
pub fn decode(rule_number: i64) -> RuleResult<RuleBits> {
    let n = u8::try_from(rule_number).map_err(|_| RuleError::OutOfRange(rule_number))?;
    Ok(expand(n))
}

fn expand(n: u8) -> RuleBits {
    let mut bits = [0; NEIGHBORHOOD_COUNT];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (n >> (NEIGHBORHOOD_COUNT - 1 - i)) & 1;
    }
    bits
}

/// Reassembles a rule number from 8 bits, most significant bit first.
pub fn encode(bits: &[u8]) -> RuleResult<u8> {
    check_bits(bits)?;
    Ok(bits.iter().fold(0, |acc, &bit| (acc << 1) | bit))
}

/// Builds a neighborhood lookup table from 8 bits, assigning them in order
/// to the neighborhoods in [`NEIGHBORHOOD_ORDER`].
pub fn build_table(bits: &[u8]) -> RuleResult<RuleTable> {
    check_bits(bits)?;
    Ok(table_from_checked_bits(bits))
}

fn table_from_checked_bits(bits: &[u8]) -> RuleTable {
    let mut outputs = [0; NEIGHBORHOOD_COUNT];
    for (&nbhd, &bit) in NEIGHBORHOOD_ORDER.iter().zip(bits) {
        outputs[nbhd_index(nbhd)] = bit;
    }
    RuleTable { outputs }
}

fn check_bits(bits: &[u8]) -> RuleResult<()> {
    if bits.len() != NEIGHBORHOOD_COUNT {
        return Err(RuleError::WrongBitCount(bits.len()));
    }
    match bits.iter().position(|&b| b > 1) {
        Some(index) => Err(RuleError::NonBinaryBit {
            index,
            value: bits[index],
        }),
        None => Ok(()),
    }
}

/// Returns the index of a neighborhood in a `RuleTable`, reading the
/// neighborhood as a 3-bit binary number.
fn nbhd_index((l, c, r): Neighborhood) -> usize {
    ((l as usize & 1) << 2) | ((c as usize & 1) << 1) | (r as usize & 1)
}

/// Lookup table from each of the 8 neighborhoods to a cell's next state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RuleTable {
    /// Output for each neighborhood, indexed by the neighborhood read as a
    /// binary number.
    outputs: [u8; NEIGHBORHOOD_COUNT],
}
impl RuleTable {
    /// Decodes a rule number and builds its table.
    pub fn from_rule_number(rule_number: i64) -> RuleResult<Self> {
        build_table(&decode(rule_number)?)
    }
    /// Returns the next state of a cell with the given neighborhood.
    pub fn get(&self, left: u8, center: u8, right: u8) -> u8 {
        self.outputs[nbhd_index((left, center, right))]
    }
    /// Returns an iterator over every neighborhood and its output, in the
    /// canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Neighborhood, u8)> + '_ {
        NEIGHBORHOOD_ORDER
            .iter()
            .map(move |&nbhd| (nbhd, self.outputs[nbhd_index(nbhd)]))
    }
    /// Returns the bits of the table in canonical order.
    pub fn bits(&self) -> RuleBits {
        let mut bits = [0; NEIGHBORHOOD_COUNT];
        for (bit, (_, output)) in bits.iter_mut().zip(self.iter()) {
            *bit = output;
        }
        bits
    }
    /// Returns the rule number that produces this table.
    pub fn rule_number(&self) -> u8 {
        self.outputs
            .iter()
            .enumerate()
            .fold(0, |acc, (i, &bit)| acc | (bit << i))
    }
}

/// An elementary rule: a rule number together with its lookup table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ElementaryRule {
    number: u8,
    table: RuleTable,
}
impl ElementaryRule {
    /// Constructs the rule with the given number, rejecting numbers outside
    /// `0..=255`.
    pub fn new(rule_number: i64) -> RuleResult<Self> {
        let table = RuleTable::from_rule_number(rule_number)?;
        Ok(Self {
            number: table.rule_number(),
            table,
        })
    }
    /// Returns the rule number.
    pub fn number(&self) -> u8 {
        self.number
    }
    /// Returns the lookup table.
    pub fn table(&self) -> &RuleTable {
        &self.table
    }
}
impl From<u8> for ElementaryRule {
    fn from(n: u8) -> Self {
        Self {
            number: n,
            table: table_from_checked_bits(&expand(n)),
        }
    }
}
impl From<ElementaryRule> for RuleTable {
    fn from(rule: ElementaryRule) -> Self {
        rule.table
    }
}
impl fmt::Display for ElementaryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.number)
    }
}
impl FromStr for ElementaryRule {
    type Err = RuleError;

    fn from_str(s: &str) -> RuleResult<Self> {
        let s = s.trim();
        let captures = RULE_NUMBER_REGEX
            .captures(s)
            .ok_or_else(|| RuleError::BadRuleString(s.to_owned()))?;
        // Too many digits to fit in an i64 is still just out of range.
        let n = captures[1]
            .parse::<i64>()
            .map_err(|_| RuleError::OutOfRange(i64::MAX))?;
        Self::new(n)
    }
}
