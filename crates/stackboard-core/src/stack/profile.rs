//! Profile identifiers.
//!
//! The content site publishes 32 profiles, one per (type, variant). They are
//! addressed as `INFP` for the standard variant and `INFP-J` or
//! `infp-jumper` for the jumper variant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::model::{Stack, Variant};
use super::table::PersonalityType;
use crate::error::{Result, StackboardError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId {
    pub personality_type: PersonalityType,
    pub variant: Variant,
}

impl ProfileId {
    pub fn new(personality_type: PersonalityType, variant: Variant) -> Self {
        Self {
            personality_type,
            variant,
        }
    }

    /// All 32 profiles, standard before jumper for each type.
    pub fn all() -> impl Iterator<Item = Self> {
        PersonalityType::all().flat_map(|t| {
            [Variant::Standard, Variant::Jumper]
                .into_iter()
                .map(move |v| Self::new(t, v))
        })
    }

    pub fn stack(self) -> Stack {
        Stack::for_type(self.personality_type, self.variant)
    }
}

impl FromStr for ProfileId {
    type Err = StackboardError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (code, suffix) = match trimmed.split_once('-') {
            Some((code, suffix)) => (code, Some(suffix)),
            None => (trimmed, None),
        };
        let personality_type = PersonalityType::parse(code)?;
        let variant = match suffix.map(str::to_ascii_lowercase).as_deref() {
            None => Variant::Standard,
            Some("j") => Variant::Jumper,
            Some("s") => Variant::Standard,
            Some(other) => other.parse()?,
        };
        Ok(Self::new(personality_type, variant))
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant {
            Variant::Standard => write!(f, "{}", self.personality_type),
            Variant::Jumper => write!(f, "{}-J", self.personality_type),
        }
    }
}
