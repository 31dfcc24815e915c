pub mod config;
pub mod core;
pub mod utils;
pub mod wire;

// module re-exports
pub use crate::core::boring2d::Boring2D;
pub use crate::core::definitions::{Color, Error, Move, Piece, PieceType, Result};
pub use crate::core::engine::{Board, Match, RuleSet};
pub use crate::core::hyperboard::Hyperboard;
pub use crate::core::position::{Position, Position2D, Position4D};
pub use crate::core::registry::Registry;

#[cfg(test)]
mod tests;
