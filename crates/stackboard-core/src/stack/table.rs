//! The 16 base personality types and their function stacks.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{Result, StackboardError};
use crate::function::CognitiveFunction::{self, *};

/// One of the 16 base personality types, keyed by its 4-letter code.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum PersonalityType {
    INFP,
    INFJ,
    ENFP,
    ENFJ,
    INTP,
    INTJ,
    ENTP,
    ENTJ,
    ISFP,
    ISFJ,
    ESFP,
    ESFJ,
    ISTP,
    ISTJ,
    ESTP,
    ESTJ,
}

impl PersonalityType {
    /// Parses a type code, ignoring ASCII case and surrounding whitespace.
    pub fn parse(code: &str) -> Result<Self> {
        Self::from_str(code.trim()).map_err(|_| StackboardError::unknown_type(code))
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// The ordered (A, B, C, D) functions for this type.
    pub fn functions(self) -> [CognitiveFunction; 4] {
        match self {
            Self::INFP => [Fi, Ne, Si, Te],
            Self::INFJ => [Ni, Fe, Ti, Se],
            Self::ENFP => [Ne, Fi, Te, Si],
            Self::ENFJ => [Fe, Ni, Se, Ti],
            Self::INTP => [Ti, Ne, Si, Fe],
            Self::INTJ => [Ni, Te, Fi, Se],
            Self::ENTP => [Ne, Ti, Fe, Si],
            Self::ENTJ => [Te, Ni, Se, Fi],
            Self::ISFP => [Fi, Se, Ni, Te],
            Self::ISFJ => [Si, Fe, Ti, Ne],
            Self::ESFP => [Se, Fi, Te, Ni],
            Self::ESFJ => [Fe, Si, Ne, Ti],
            Self::ISTP => [Ti, Se, Ni, Fe],
            Self::ISTJ => [Si, Te, Fi, Ne],
            Self::ESTP => [Se, Ti, Fe, Ni],
            Self::ESTJ => [Te, Si, Ne, Fi],
        }
    }
}
