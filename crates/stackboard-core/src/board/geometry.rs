//! Board coordinates and anchor points.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StackboardError};

/// Side length of the normalized board canvas.
pub const CANVAS_SIZE: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Moves `fraction` of the way from `self` toward `target`.
    pub fn toward(self, target: Point, fraction: f64) -> Point {
        Point::new(
            self.x + (target.x - self.x) * fraction,
            self.y + (target.y - self.y) * fraction,
        )
    }
}

/// Column of the board. A function's column comes from its own attitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Left,
    Right,
}

impl Column {
    pub fn other(self) -> Self {
        match self {
            Column::Left => Column::Right,
            Column::Right => Column::Left,
        }
    }
}

/// Row of the board: top is the savior row, bottom the demon row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Row {
    Top,
    Bottom,
}

impl Row {
    pub fn other(self) -> Self {
        match self {
            Row::Top => Row::Bottom,
            Row::Bottom => Row::Top,
        }
    }
}

/// The eight fixed anchors of the board.
///
/// The outer corners hold the hero (top) and inferior (bottom); the inner
/// square holds the middle pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardGeometry {
    pub hero_left: Point,
    pub hero_right: Point,
    pub demon_left: Point,
    pub demon_right: Point,
    pub inner_left_top: Point,
    pub inner_right_top: Point,
    pub inner_left_bottom: Point,
    pub inner_right_bottom: Point,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            hero_left: Point::new(75.0, 60.0),
            hero_right: Point::new(225.0, 60.0),
            demon_left: Point::new(75.0, 240.0),
            demon_right: Point::new(225.0, 240.0),
            inner_left_top: Point::new(115.0, 125.0),
            inner_right_top: Point::new(185.0, 125.0),
            inner_left_bottom: Point::new(115.0, 175.0),
            inner_right_bottom: Point::new(185.0, 175.0),
        }
    }
}

impl BoardGeometry {
    /// Outer corner anchor: top row is the hero row, bottom the demon row.
    pub fn outer(&self, row: Row, column: Column) -> Point {
        match (row, column) {
            (Row::Top, Column::Left) => self.hero_left,
            (Row::Top, Column::Right) => self.hero_right,
            (Row::Bottom, Column::Left) => self.demon_left,
            (Row::Bottom, Column::Right) => self.demon_right,
        }
    }

    pub fn inner(&self, row: Row, column: Column) -> Point {
        match (row, column) {
            (Row::Top, Column::Left) => self.inner_left_top,
            (Row::Top, Column::Right) => self.inner_right_top,
            (Row::Bottom, Column::Left) => self.inner_left_bottom,
            (Row::Bottom, Column::Right) => self.inner_right_bottom,
        }
    }

    /// All anchors, for bounds checks.
    pub fn anchors(&self) -> [Point; 8] {
        [
            self.hero_left,
            self.hero_right,
            self.demon_left,
            self.demon_right,
            self.inner_left_top,
            self.inner_right_top,
            self.inner_left_bottom,
            self.inner_right_bottom,
        ]
    }

    /// Rejects anchor sets the layout rules cannot be drawn on.
    ///
    /// Every anchor must be distinct, left must lie left of right within each
    /// row, and the top row must lie above the bottom row within each column.
    pub fn validate(&self) -> Result<()> {
        let anchors = self.anchors();
        for (i, p) in anchors.iter().enumerate() {
            if anchors[i + 1..].contains(p) {
                return Err(StackboardError::config(format!(
                    "geometry anchors must be distinct, ({}, {}) is used twice",
                    p.x, p.y
                )));
            }
        }

        let squares: [(&str, fn(&Self, Row, Column) -> Point); 2] =
            [("outer", Self::outer), ("inner", Self::inner)];
        for (name, anchor) in squares {
            for row in [Row::Top, Row::Bottom] {
                let left = anchor(self, row, Column::Left);
                let right = anchor(self, row, Column::Right);
                if left.x >= right.x {
                    return Err(StackboardError::config(format!(
                        "{name} {row:?} row: left x {} must be less than right x {}",
                        left.x, right.x
                    )));
                }
            }
            for column in [Column::Left, Column::Right] {
                let top = anchor(self, Row::Top, column);
                let bottom = anchor(self, Row::Bottom, column);
                if top.y >= bottom.y {
                    return Err(StackboardError::config(format!(
                        "{name} {column:?} column: top y {} must be less than bottom y {}",
                        top.y, bottom.y
                    )));
                }
            }
        }

        Ok(())
    }
}
