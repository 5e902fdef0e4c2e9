//! Function-stack board: geometry, coin state and layout.
//!
//! # Module Structure
//!
//! - `geometry`: canvas points and the eight anchors
//! - `coin`: the outer/inner coin-flip state
//! - `layout`: the pure layout function and its output descriptors
//! - `model`: `Board`, the per-instance state holder that handles clicks
//!
//! # Usage
//!
//! ```
//! use stackboard_core::board::{Board, BoardOptions, BoardTarget};
//! use stackboard_core::config::LayoutConfig;
//! use stackboard_core::stack::{generate_stack, Slot, Variant};
//!
//! let stack = generate_stack("INFP", Variant::Standard).unwrap();
//! let mut board = Board::new(stack, BoardOptions::default());
//! board.click(BoardTarget::Active(Slot::A));
//!
//! let config = LayoutConfig::default();
//! let layout = board.layout(&config);
//! assert_eq!(layout.active(Slot::A), config.geometry.hero_right);
//! ```

mod coin;
mod geometry;
mod layout;
mod model;

pub use coin::{CoinPair, CoinState};
pub use geometry::{BoardGeometry, CANVAS_SIZE, Column, Point, Row};
pub use layout::{BoardLayout, SlotLayout, column_of, layout};
pub use model::{Board, BoardOptions, BoardTarget};
