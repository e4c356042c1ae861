//! Core chess types and representations
//!
//! This module contains the rule-free building blocks of the game:
//! - Squares, colors and pieces
//! - The board grid and its mutations
//! - Square sets
//! - Parse errors

pub mod board;
pub mod error;
pub mod square_set;

pub use board::{Board, Color, Piece, PieceKind, Square};
pub use error::BoardError;
pub use square_set::{SquareSet, SquareSetIter};
