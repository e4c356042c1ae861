//! Screen layout of the board
//!
//! Maps pointer positions to squares and describes how each square should
//! be painted. Actual drawing is left to whichever front end owns a window.

use super::state::GameState;
use crate::core::board::{Color, Square};

/// Default window edge in pixels
pub const DEFAULT_BOARD_PIXELS: u32 = 700;

/// Square board of `size_px` pixels, row 0 at the top
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoardGeometry {
    size_px: u32,
}

impl BoardGeometry {
    pub const fn new(size_px: u32) -> Self {
        BoardGeometry { size_px }
    }

    #[inline]
    pub const fn size_px(self) -> u32 {
        self.size_px
    }

    /// Edge of one square; integer division may leave a sliver on the
    /// right and bottom that belongs to no square.
    #[inline]
    pub const fn square_size(self) -> u32 {
        self.size_px / 8
    }

    /// Square under pixel `(x, y)`, or `None` outside the grid
    pub fn square_at(self, x: u32, y: u32) -> Option<Square> {
        let size = self.square_size();
        if size == 0 {
            return None;
        }
        let row = i32::try_from(y / size).ok()?;
        let col = i32::try_from(x / size).ok()?;
        Square::try_new(row, col)
    }

    /// Top-left pixel of `sq`
    pub const fn square_origin(self, sq: Square) -> (u32, u32) {
        let size = self.square_size();
        (sq.col() as u32 * size, sq.row() as u32 * size)
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        BoardGeometry::new(DEFAULT_BOARD_PIXELS)
    }
}

/// Base color of a square
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    pub const fn of(sq: Square) -> Self {
        if (sq.row() + sq.col()) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        }
    }
}

/// Overlay painted on top of a square's shade
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Highlight {
    None,
    Selected,
    Destination,
}

impl Highlight {
    /// Destination marks are painted after the selection mark and win.
    pub fn of(state: &GameState, sq: Square) -> Self {
        match state.selection() {
            Some(selection) if selection.destinations.contains(sq) => Highlight::Destination,
            Some(selection) if selection.square == sq => Highlight::Selected,
            _ => Highlight::None,
        }
    }
}

/// Banner text naming the side to move
pub fn turn_banner(turn: Color) -> String {
    format!("{}'s Turn", turn)
}
