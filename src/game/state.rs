//! Turn and selection state machine
//!
//! A game is either waiting for a piece to be picked (no selection) or has
//! one piece picked together with its legal destinations. Every click on a
//! square advances this machine by one step.

use crate::core::board::{Board, Color, Piece, PieceKind, Square};
use crate::core::square_set::SquareSet;
use crate::engine::rules::MoveRules;

/// A picked piece and where it may go
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Selection {
    pub square: Square,
    pub piece: Piece,
    pub destinations: SquareSet,
}

/// A move that was validated and written to the board
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AppliedMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

/// Result of one click
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClickOutcome {
    /// Nothing was selected and the square holds no piece of the side to move.
    Ignored,
    /// A piece of the side to move was picked.
    Selected(Selection),
    /// The picked piece moved; the turn has passed to the other side.
    Moved(AppliedMove),
    /// The picked piece could not go there; only the selection was dropped.
    Rejected { from: Square, to: Square },
}

/// Board, side to move and current selection
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    turn: Color,
    selection: Option<Selection>,
}

impl GameState {
    /// Initial layout with White to move
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Color::White)
    }

    pub fn from_board(board: Board, turn: Color) -> Self {
        GameState {
            board,
            turn,
            selection: None,
        }
    }

    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
        self.selection = None;
    }

    #[inline]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Whether `sq` is a highlighted destination of the current selection
    pub fn is_destination(&self, sq: Square) -> bool {
        self.selection
            .is_some_and(|selection| selection.destinations.contains(sq))
    }

    /// Feed one click on `sq` into the state machine.
    pub fn click(&mut self, sq: Square) -> ClickOutcome {
        match self.selection.take() {
            None => self.select(sq),
            Some(selection) => self.try_move(selection.square, sq),
        }
    }

    fn select(&mut self, sq: Square) -> ClickOutcome {
        match self.board.piece_at(sq) {
            Some(piece) if piece.color == self.turn => {
                let selection = Selection {
                    square: sq,
                    piece,
                    destinations: MoveRules::legal_destinations(piece, sq, &self.board),
                };
                self.selection = Some(selection);
                ClickOutcome::Selected(selection)
            }
            _ => ClickOutcome::Ignored,
        }
    }

    /// Validate against the live board rather than the cached destinations,
    /// then move, promote and pass the turn.
    fn try_move(&mut self, from: Square, to: Square) -> ClickOutcome {
        let piece = match self.board.piece_at(from) {
            Some(piece) => piece,
            None => return ClickOutcome::Rejected { from, to },
        };
        if !MoveRules::is_legal(piece, from, to, &self.board) {
            return ClickOutcome::Rejected { from, to };
        }

        let captured = self.board.piece_at(to);
        self.board.move_piece(from, to);

        let promoted = piece.kind == PieceKind::Pawn && (to.row() == 0 || to.row() == 7);
        if promoted {
            self.board.promote(to, piece.color);
        }

        self.turn = self.turn.opposite();

        ClickOutcome::Moved(AppliedMove {
            from,
            to,
            piece,
            captured,
            promoted,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
