//! Rendering skins.
//!
//! A skin is passed through to the renderer next to a `BoardLayout`. The
//! layout engine never reads it, so every skin shares the same geometry.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{Result, StackboardError};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum BoardSkin {
    #[default]
    Glossy,
    Neon,
    Glass,
    Flat,
    Sketch,
    Neumorphic,
    Metallic,
    Pixel,
    Watercolor,
}

impl BoardSkin {
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name.trim()).map_err(|_| {
            let known: Vec<String> = Self::iter().map(|s| s.to_string()).collect();
            StackboardError::config(format!(
                "unknown skin '{name}', expected one of: {}",
                known.join(", ")
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_skins() {
        assert_eq!(BoardSkin::iter().count(), 9);
    }

    #[test]
    fn test_parse_and_display_agree() {
        for skin in BoardSkin::iter() {
            assert_eq!(BoardSkin::parse(&skin.to_string()).unwrap(), skin);
        }
        assert_eq!(BoardSkin::parse("NEON").unwrap(), BoardSkin::Neon);
    }

    #[test]
    fn test_unknown_skin_lists_choices() {
        let err = BoardSkin::parse("chrome").unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("watercolor"));
    }

    #[test]
    fn test_serde_name() {
        assert_eq!(
            serde_json::to_value(BoardSkin::Neumorphic).unwrap(),
            "neumorphic"
        );
    }
}
