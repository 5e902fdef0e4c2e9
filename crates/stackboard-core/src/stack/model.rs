//! Stack domain model.
//!
//! A stack is the four functions of a personality type placed into the
//! fixed slots A (hero) through D (inferior), annotated with rank and with
//! the savior/demon flag chosen by the variant.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::table::PersonalityType;
use crate::error::{Result, StackboardError};
use crate::function::CognitiveFunction;

/// Slot identity within a stack. Rank is fixed per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    A,
    B,
    C,
    D,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::A, Slot::B, Slot::C, Slot::D];

    /// 1 for A through 4 for D.
    pub fn rank(self) -> u8 {
        match self {
            Slot::A => 1,
            Slot::B => 2,
            Slot::C => 3,
            Slot::D => 4,
        }
    }

    pub fn index(self) -> usize {
        usize::from(self.rank() - 1)
    }

    /// Whether the slot belongs to the outer (A/D) pair.
    pub fn is_outer(self) -> bool {
        matches!(self, Slot::A | Slot::D)
    }
}

/// Which of the two middle functions a type variant favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// B is savior, C is demon.
    #[default]
    Standard,
    /// C is savior, B is demon.
    Jumper,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::Jumper => "jumper",
        }
    }

    /// Savior flag for a slot under this variant.
    ///
    /// A is always savior and D never is; only B and C depend on the variant.
    pub fn is_savior(self, slot: Slot) -> bool {
        match (slot, self) {
            (Slot::A, _) => true,
            (Slot::D, _) => false,
            (Slot::B, Variant::Standard) | (Slot::C, Variant::Jumper) => true,
            (Slot::B, Variant::Jumper) | (Slot::C, Variant::Standard) => false,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = StackboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Variant::Standard),
            "jumper" => Ok(Variant::Jumper),
            _ => Err(StackboardError::unknown_variant(s)),
        }
    }
}

/// Per-slot record of an instantiated stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackFunction {
    #[serde(rename = "slotId")]
    pub slot: Slot,
    pub code: CognitiveFunction,
    pub rank: u8,
    pub is_savior: bool,
}

/// An instantiated stack for one (type, variant) pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stack {
    pub personality_type: PersonalityType,
    pub variant: Variant,
    functions: [StackFunction; 4],
}

impl Stack {
    /// Builds the stack for a known type.
    ///
    /// Total over all 16 types. The static table is checked against the
    /// pairing invariants in debug builds.
    pub fn for_type(personality_type: PersonalityType, variant: Variant) -> Self {
        let codes = personality_type.functions();
        let functions = Slot::ALL.map(|slot| StackFunction {
            slot,
            code: codes[slot.index()],
            rank: slot.rank(),
            is_savior: variant.is_savior(slot),
        });
        let stack = Self {
            personality_type,
            variant,
            functions,
        };
        debug_assert!(
            stack.validate().is_ok(),
            "stack table entry for {personality_type} is malformed"
        );
        stack
    }

    pub fn get(&self, slot: Slot) -> &StackFunction {
        &self.functions[slot.index()]
    }

    pub fn functions(&self) -> &[StackFunction; 4] {
        &self.functions
    }

    pub fn hero(&self) -> &StackFunction {
        self.get(Slot::A)
    }

    pub fn inferior(&self) -> &StackFunction {
        self.get(Slot::D)
    }

    pub fn saviors(&self) -> impl Iterator<Item = &StackFunction> {
        self.functions.iter().filter(|f| f.is_savior)
    }

    /// Whether C rather than B carries the savior flag.
    pub fn is_jumper(&self) -> bool {
        self.get(Slot::C).is_savior
    }

    /// Checks distinctness, the A/D and B/C opposite pairs, and the savior rule.
    pub fn validate(&self) -> Result<()> {
        let codes: HashSet<_> = self.functions.iter().map(|f| f.code).collect();
        if codes.len() != 4 {
            return Err(StackboardError::malformed_stack(format!(
                "{} contains duplicate functions",
                self.personality_type
            )));
        }

        for (x, y) in [(Slot::A, Slot::D), (Slot::B, Slot::C)] {
            let (fx, fy) = (self.get(x).code, self.get(y).code);
            if fx.opposite() != fy {
                return Err(StackboardError::malformed_stack(format!(
                    "{}: {:?}={} and {:?}={} are not opposites",
                    self.personality_type, x, fx, y, fy
                )));
            }
        }

        let saviors: Vec<Slot> = self.saviors().map(|f| f.slot).collect();
        if saviors != [Slot::A, Slot::B] && saviors != [Slot::A, Slot::C] {
            return Err(StackboardError::malformed_stack(format!(
                "{}: savior slots {:?} must be A with exactly one of B/C",
                self.personality_type, saviors
            )));
        }

        Ok(())
    }
}
