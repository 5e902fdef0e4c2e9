//! Coin-flip state for one board.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StackboardError};
use crate::stack::{Slot, Stack};

/// Which pair of functions a coin controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoinPair {
    /// Hero and inferior (A/D).
    Outer,
    /// The middle pair (B/C).
    Inner,
}

impl CoinPair {
    pub fn for_slot(slot: Slot) -> Self {
        if slot.is_outer() {
            CoinPair::Outer
        } else {
            CoinPair::Inner
        }
    }

    pub fn slots(self) -> [Slot; 2] {
        match self {
            CoinPair::Outer => [Slot::A, Slot::D],
            CoinPair::Inner => [Slot::B, Slot::C],
        }
    }
}

impl fmt::Display for CoinPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinPair::Outer => f.write_str("outer"),
            CoinPair::Inner => f.write_str("inner"),
        }
    }
}

impl FromStr for CoinPair {
    type Err = StackboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "outer" => Ok(CoinPair::Outer),
            "inner" | "middle" => Ok(CoinPair::Inner),
            _ => Err(StackboardError::unknown_coin(s)),
        }
    }
}

/// The two independent coins of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinState {
    pub outer_flipped: bool,
    pub middle_flipped: bool,
}

impl CoinState {
    /// Starting coins for a freshly instantiated board.
    ///
    /// The outer coin starts unflipped. The inner coin starts flipped when C
    /// carries the savior flag (jumper stacks), which puts C on the top row.
    pub fn initial(stack: &Stack) -> Self {
        Self {
            outer_flipped: false,
            middle_flipped: stack.is_jumper(),
        }
    }

    pub fn is_flipped(&self, pair: CoinPair) -> bool {
        match pair {
            CoinPair::Outer => self.outer_flipped,
            CoinPair::Inner => self.middle_flipped,
        }
    }

    pub fn toggle(&mut self, pair: CoinPair) {
        match pair {
            CoinPair::Outer => self.outer_flipped = !self.outer_flipped,
            CoinPair::Inner => self.middle_flipped = !self.middle_flipped,
        }
    }

    /// Copy with one coin toggled.
    pub fn toggled(mut self, pair: CoinPair) -> Self {
        self.toggle(pair);
        self
    }
}
