//! Layout configuration.
//!
//! Every field has a default, so a partial `board.toml` only overrides the
//! values it names:
//!
//! ```toml
//! [radii]
//! hero = 48.0
//! middle = 36.0
//! inferior = 26.0
//!
//! [compact]
//! inferior_inset = 0.2
//! ```

use serde::{Deserialize, Serialize};

use crate::board::BoardGeometry;
use crate::error::{Result, StackboardError};
use crate::stack::Slot;

/// A size per rank tier. Ranks 2 and 3 share the middle tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankSizes {
    pub hero: f64,
    pub middle: f64,
    pub inferior: f64,
}

impl RankSizes {
    pub fn for_slot(&self, slot: Slot) -> f64 {
        match slot {
            Slot::A => self.hero,
            Slot::B | Slot::C => self.middle,
            Slot::D => self.inferior,
        }
    }

    fn scaled(&self, scale: &RankSizes) -> RankSizes {
        RankSizes {
            hero: self.hero * scale.hero,
            middle: self.middle * scale.middle,
            inferior: self.inferior * scale.inferior,
        }
    }

    fn is_strictly_descending(&self) -> bool {
        self.hero > self.middle && self.middle > self.inferior && self.inferior > 0.0
    }

    fn default_radii() -> Self {
        Self {
            hero: 44.0,
            middle: 34.0,
            inferior: 26.0,
        }
    }

    fn default_font_sizes() -> Self {
        Self {
            hero: 20.0,
            middle: 16.0,
            inferior: 13.0,
        }
    }
}

/// Compact-mode insets and scale factors.
///
/// Insets are the fraction of the distance to the pair midpoint that an
/// endpoint moves. The hero and inferior insets are independent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompactConfig {
    pub hero_inset: f64,
    pub inferior_inset: f64,
    pub middle_inset: f64,
    pub radius_scale: RankSizes,
    pub font_scale: RankSizes,
}

impl Default for CompactConfig {
    fn default() -> Self {
        Self {
            hero_inset: 0.12,
            inferior_inset: 0.18,
            middle_inset: 0.08,
            radius_scale: RankSizes {
                hero: 0.90,
                middle: 0.80,
                inferior: 0.70,
            },
            font_scale: RankSizes {
                hero: 0.95,
                middle: 0.85,
                inferior: 0.75,
            },
        }
    }
}

/// Everything the layout engine reads besides the stack and coin state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub geometry: BoardGeometry,
    pub radii: RankSizes,
    pub font_sizes: RankSizes,
    pub compact: CompactConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            geometry: BoardGeometry::default(),
            radii: RankSizes::default_radii(),
            font_sizes: RankSizes::default_font_sizes(),
            compact: CompactConfig::default(),
        }
    }
}

impl LayoutConfig {
    /// Radius for a slot, with compact scaling applied when requested.
    pub fn radius(&self, slot: Slot, compact: bool) -> f64 {
        let base = self.radii.for_slot(slot);
        if compact {
            base * self.compact.radius_scale.for_slot(slot)
        } else {
            base
        }
    }

    pub fn font_size(&self, slot: Slot, compact: bool) -> f64 {
        let base = self.font_sizes.for_slot(slot);
        if compact {
            base * self.compact.font_scale.for_slot(slot)
        } else {
            base
        }
    }

    /// Rejects configurations that break the rank ordering, push an endpoint
    /// past its pair midpoint, or place anchors where the layout rules no
    /// longer hold.
    ///
    /// Radii and font sizes must be strictly hero > middle > inferior both
    /// as configured and after compact scaling.
    pub fn validate(&self) -> Result<()> {
        self.geometry.validate()?;

        let checks = [
            ("radii", self.radii),
            ("font_sizes", self.font_sizes),
            ("compact radii", self.radii.scaled(&self.compact.radius_scale)),
            ("compact font sizes", self.font_sizes.scaled(&self.compact.font_scale)),
        ];
        for (name, sizes) in checks {
            if !sizes.is_strictly_descending() {
                return Err(StackboardError::config(format!(
                    "{name} must satisfy hero > middle > inferior > 0, got {} / {} / {}",
                    sizes.hero, sizes.middle, sizes.inferior
                )));
            }
        }

        let insets = [
            ("hero_inset", self.compact.hero_inset),
            ("inferior_inset", self.compact.inferior_inset),
            ("middle_inset", self.compact.middle_inset),
        ];
        for (name, inset) in insets {
            if !(0.0..0.5).contains(&inset) {
                return Err(StackboardError::config(format!(
                    "compact.{name} must be in [0, 0.5), got {inset}"
                )));
            }
        }

        Ok(())
    }
}

/// Persistence for the layout configuration.
///
/// Decouples the engine from where overrides live (a TOML file for the CLI,
/// embedded defaults elsewhere).
pub trait LayoutConfigRepository: Send + Sync {
    /// Loads the configuration, falling back to defaults when none is stored.
    fn load(&self) -> Result<LayoutConfig>;

    /// Stores the configuration, replacing any existing one.
    fn save(&self, config: &LayoutConfig) -> Result<()>;
}
