//! Cognitive function domain model.
//!
//! The eight functions are fixed constants. Each is a letter (F, T, N, S)
//! paired with an attitude (introverted or extraverted).

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{Result, StackboardError};

/// Orientation of a function, taken from the trailing `i`/`e` of its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attitude {
    Introverted,
    Extraverted,
}

impl Attitude {
    /// The other attitude.
    pub fn flipped(self) -> Self {
        match self {
            Attitude::Introverted => Attitude::Extraverted,
            Attitude::Extraverted => Attitude::Introverted,
        }
    }
}

/// Whether a function judges (F/T) or perceives (N/S).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKind {
    Decider,
    Observer,
}

/// The leading letter of a function code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum FunctionLetter {
    F,
    T,
    N,
    S,
}

impl FunctionLetter {
    pub fn kind(self) -> FunctionKind {
        match self {
            FunctionLetter::F | FunctionLetter::T => FunctionKind::Decider,
            FunctionLetter::N | FunctionLetter::S => FunctionKind::Observer,
        }
    }

    /// F↔T, N↔S.
    pub fn flipped(self) -> Self {
        match self {
            FunctionLetter::F => FunctionLetter::T,
            FunctionLetter::T => FunctionLetter::F,
            FunctionLetter::N => FunctionLetter::S,
            FunctionLetter::S => FunctionLetter::N,
        }
    }
}

/// One of the eight cognitive functions.
///
/// Parsing accepts any ASCII casing (`"Fi"`, `"fi"`, `"FI"`) since type
/// tables and query strings are not consistent about it.
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
    AsRefStr,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum CognitiveFunction {
    Fi,
    Fe,
    Ti,
    Te,
    Ni,
    Ne,
    Si,
    Se,
}

impl CognitiveFunction {
    /// Parses a two-character function code.
    pub fn parse(code: &str) -> Result<Self> {
        Self::from_str(code.trim()).map_err(|_| StackboardError::unknown_function(code))
    }

    /// Builds the function with the given letter and attitude.
    pub fn from_parts(letter: FunctionLetter, attitude: Attitude) -> Self {
        use Attitude::*;
        use FunctionLetter::*;
        match (letter, attitude) {
            (F, Introverted) => Self::Fi,
            (F, Extraverted) => Self::Fe,
            (T, Introverted) => Self::Ti,
            (T, Extraverted) => Self::Te,
            (N, Introverted) => Self::Ni,
            (N, Extraverted) => Self::Ne,
            (S, Introverted) => Self::Si,
            (S, Extraverted) => Self::Se,
        }
    }

    /// All eight functions in table order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn letter(self) -> FunctionLetter {
        match self {
            Self::Fi | Self::Fe => FunctionLetter::F,
            Self::Ti | Self::Te => FunctionLetter::T,
            Self::Ni | Self::Ne => FunctionLetter::N,
            Self::Si | Self::Se => FunctionLetter::S,
        }
    }

    pub fn attitude(self) -> Attitude {
        match self {
            Self::Fi | Self::Ti | Self::Ni | Self::Si => Attitude::Introverted,
            Self::Fe | Self::Te | Self::Ne | Self::Se => Attitude::Extraverted,
        }
    }

    pub fn kind(self) -> FunctionKind {
        self.letter().kind()
    }

    pub fn is_introverted(self) -> bool {
        self.attitude() == Attitude::Introverted
    }

    /// The function this one is paired against in a stack.
    ///
    /// Flips both the letter and the attitude, so Fi↔Te, Fe↔Ti, Ne↔Si and
    /// Ni↔Se. Applying it twice yields the original function.
    pub fn opposite(self) -> Self {
        Self::from_parts(self.letter().flipped(), self.attitude().flipped())
    }

    /// Long label, e.g. "Introverted Feeling".
    pub fn full_name(self) -> &'static str {
        match self {
            Self::Fi => "Introverted Feeling",
            Self::Fe => "Extraverted Feeling",
            Self::Ti => "Introverted Thinking",
            Self::Te => "Extraverted Thinking",
            Self::Ni => "Introverted Intuition",
            Self::Ne => "Extraverted Intuition",
            Self::Si => "Introverted Sensing",
            Self::Se => "Extraverted Sensing",
        }
    }
}

/// Attitude of a function code (`"Fi"` → introverted).
pub fn attitude(code: &str) -> Result<Attitude> {
    Ok(CognitiveFunction::parse(code)?.attitude())
}

/// Kind of a function code (`"Ne"` → observer).
pub fn kind(code: &str) -> Result<FunctionKind> {
    Ok(CognitiveFunction::parse(code)?.kind())
}

/// Opposite of a function code (`"Fi"` → `Te`).
pub fn opposite(code: &str) -> Result<CognitiveFunction> {
    Ok(CognitiveFunction::parse(code)?.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_eight_functions() {
        assert_eq!(CognitiveFunction::all().count(), 8);
    }

    #[test]
    fn test_opposite_is_an_involution_without_fixed_points() {
        for f in CognitiveFunction::all() {
            assert_eq!(f.opposite().opposite(), f);
            assert_ne!(f.opposite(), f);
        }
    }

    #[test]
    fn test_opposite_pairs() {
        use CognitiveFunction::*;
        assert_eq!(Fi.opposite(), Te);
        assert_eq!(Fe.opposite(), Ti);
        assert_eq!(Ne.opposite(), Si);
        assert_eq!(Ni.opposite(), Se);
    }

    #[test]
    fn test_opposite_flips_attitude_and_kind_is_kept() {
        for f in CognitiveFunction::all() {
            assert_ne!(f.attitude(), f.opposite().attitude());
            assert_eq!(f.kind(), f.opposite().kind());
        }
    }

    #[test]
    fn test_code_lookups() {
        assert_eq!(attitude("Fi").unwrap(), Attitude::Introverted);
        assert_eq!(attitude("Se").unwrap(), Attitude::Extraverted);
        assert_eq!(kind("Te").unwrap(), FunctionKind::Decider);
        assert_eq!(kind("Ni").unwrap(), FunctionKind::Observer);
        assert_eq!(opposite("fe").unwrap(), CognitiveFunction::Ti);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(CognitiveFunction::parse("NE").unwrap(), CognitiveFunction::Ne);
        assert_eq!(CognitiveFunction::parse(" si ").unwrap(), CognitiveFunction::Si);
    }

    #[test]
    fn test_parse_rejects_unknown_codes() {
        let err = CognitiveFunction::parse("Xi").unwrap_err();
        assert_eq!(err, StackboardError::unknown_function("Xi"));
    }

    #[test]
    fn test_display_matches_code() {
        assert_eq!(CognitiveFunction::Fi.to_string(), "Fi");
        assert_eq!(CognitiveFunction::Se.as_ref(), "Se");
    }
}
