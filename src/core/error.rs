//! Errors raised while building boards and squares from text.

use thiserror::Error;

/// Parse and construction failures for board types.
///
/// Illegal moves are not errors; the rule engine reports them as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),

    #[error("invalid piece character: {0}")]
    InvalidPiece(char),
}
