//! Move legality under simplified rules
//!
//! Each piece kind has a shape predicate over the `(row, col)` offset of a
//! move. The predicates look at board occupancy only for the destination
//! square:
//! - Same-color destinations are always rejected
//! - Sliding pieces (queen, rook, bishop) are not blocked by pieces in between
//! - A pawn's two-square first advance does not inspect the square it skips
//!
//! Check, castling and en passant are not modeled.

use crate::core::board::{Board, Color, Piece, PieceKind, Square};
use crate::core::square_set::SquareSet;

/// Stateless rule engine
pub struct MoveRules;

impl MoveRules {
    /// Whether `piece` standing on `from` may move to `to` on `board`.
    ///
    /// `piece` is taken as given; it does not have to be on `from`.
    pub fn is_legal(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
        if let Some(target) = board.piece_at(to) {
            if target.color == piece.color {
                return false;
            }
        }

        if from == to {
            return false;
        }

        let (dr, dc) = from.delta(to);
        match piece.kind {
            PieceKind::King => Self::king_shape(dr, dc),
            PieceKind::Queen => Self::rook_shape(dr, dc) || Self::bishop_shape(dr, dc),
            PieceKind::Rook => Self::rook_shape(dr, dc),
            PieceKind::Bishop => Self::bishop_shape(dr, dc),
            PieceKind::Knight => Self::knight_shape(dr, dc),
            PieceKind::Pawn => Self::pawn_move(piece.color, from, to, board),
        }
    }

    /// Every square `is_legal` accepts for `piece` on `from`.
    pub fn legal_destinations(piece: Piece, from: Square, board: &Board) -> SquareSet {
        Square::all()
            .filter(|&to| Self::is_legal(piece, from, to, board))
            .collect()
    }

    /// Chebyshev distance of one
    #[inline]
    fn king_shape(dr: i8, dc: i8) -> bool {
        dr.abs() <= 1 && dc.abs() <= 1
    }

    /// Same row or same column
    #[inline]
    fn rook_shape(dr: i8, dc: i8) -> bool {
        dr == 0 || dc == 0
    }

    #[inline]
    fn bishop_shape(dr: i8, dc: i8) -> bool {
        dr != 0 && dr.abs() == dc.abs()
    }

    #[inline]
    fn knight_shape(dr: i8, dc: i8) -> bool {
        matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2))
    }

    fn pawn_move(color: Color, from: Square, to: Square, board: &Board) -> bool {
        let (dr, dc) = from.delta(to);
        // Rows advanced in the pawn's own forward direction
        let advance = dr * color.pawn_direction();
        let occupied = !board.is_empty(to);

        if dc == 0 {
            if occupied {
                return false;
            }
            // The skipped square is not checked on a double step
            if from.row() == color.pawn_home_row() {
                return advance == 1 || advance == 2;
            }
            return advance == 1;
        }

        // Diagonal capture; a same-color target was already rejected
        dc.abs() == 1 && advance == 1 && occupied
    }
}
