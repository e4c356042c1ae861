pub mod core;
pub mod engine;
pub mod game;
pub mod shell;

pub use crate::core::{Board, Color, Piece, PieceKind, Square, SquareSet};
pub use crate::engine::MoveRules;
pub use crate::game::{ClickOutcome, GameState};
pub use crate::shell::Shell;
