//! Chess board representation
//!
//! An 8x8 grid of optional pieces addressed by `(row, col)`. Row 0 holds
//! White's back rank and is drawn at the top of the screen. The board knows
//! nothing about which moves are legal; see [`crate::engine::rules`].

use super::error::BoardError;
use std::fmt;
use std::str::FromStr;

/// Square on the board, stored as `row * 8 + col`.
///
/// Both coordinates are always in `0..8`, so an off-board square cannot be
/// constructed. Columns map to files `a..h` and rows to ranks `1..8`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Create a square from in-range coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..8`.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square coordinates out of range");
        Square(row * 8 + col)
    }

    /// Checked constructor for coordinates coming from arithmetic or input.
    #[inline]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square((row * 8 + col) as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 >> 3
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 & 7
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    /// Signed `(row, col)` offset from `self` to `to`.
    #[inline]
    pub const fn delta(self, to: Square) -> (i8, i8) {
        (
            to.row() as i8 - self.row() as i8,
            to.col() as i8 - self.col() as i8,
        )
    }

    /// Parse a square from algebraic notation (e.g., "e4")
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = bytes[0].to_ascii_lowercase().wrapping_sub(b'a');
        let row = bytes[1].wrapping_sub(b'1');
        if col < 8 && row < 8 {
            Some(Square::new(row, col))
        } else {
            None
        }
    }

    /// Convert to algebraic notation
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col()) as char;
        let rank = (b'1' + self.row()) as char;
        format!("{}{}", file, rank)
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s.trim()).ok_or_else(|| BoardError::InvalidSquare(s.to_string()))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl From<Square> for shakmaty::Square {
    fn from(sq: Square) -> Self {
        shakmaty::Square::from_coords(
            shakmaty::File::new(u32::from(sq.col())),
            shakmaty::Rank::new(u32::from(sq.row())),
        )
    }
}

impl From<shakmaty::Square> for Square {
    fn from(sq: shakmaty::Square) -> Self {
        Square::new(sq.rank().to_u32() as u8, sq.file().to_u32() as u8)
    }
}

/// Piece color
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step of a forward pawn move (+1 for white, -1 for black)
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row the pawns of this color start on
    #[inline]
    pub const fn pawn_home_row(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row on which this color's pawns promote
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        self.opposite().back_row()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;
    fn not(self) -> Self::Output {
        self.opposite()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<shakmaty::Color> for Color {
    fn from(color: shakmaty::Color) -> Self {
        match color {
            shakmaty::Color::White => Color::White,
            shakmaty::Color::Black => Color::Black,
        }
    }
}

impl From<Color> for shakmaty::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::White => shakmaty::Color::White,
            Color::Black => shakmaty::Color::Black,
        }
    }
}

/// Piece kind
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Back rank from column 0 to column 7, identical for both colors
    pub const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Get the character representation of the piece kind
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }

    /// Parse piece kind from character
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceKind::King),
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<shakmaty::Role> for PieceKind {
    fn from(role: shakmaty::Role) -> Self {
        match role {
            shakmaty::Role::King => PieceKind::King,
            shakmaty::Role::Queen => PieceKind::Queen,
            shakmaty::Role::Rook => PieceKind::Rook,
            shakmaty::Role::Bishop => PieceKind::Bishop,
            shakmaty::Role::Knight => PieceKind::Knight,
            shakmaty::Role::Pawn => PieceKind::Pawn,
        }
    }
}

impl From<PieceKind> for shakmaty::Role {
    fn from(kind: PieceKind) -> Self {
        match kind {
            PieceKind::King => shakmaty::Role::King,
            PieceKind::Queen => shakmaty::Role::Queen,
            PieceKind::Rook => shakmaty::Role::Rook,
            PieceKind::Bishop => shakmaty::Role::Bishop,
            PieceKind::Knight => shakmaty::Role::Knight,
            PieceKind::Pawn => shakmaty::Role::Pawn,
        }
    }
}

/// A colored piece
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Get the character representation (uppercase for white, lowercase for black)
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parse a piece from character
    pub fn from_char(c: char) -> Result<Self, BoardError> {
        let kind = PieceKind::from_char(c).ok_or(BoardError::InvalidPiece(c))?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(Piece::new(kind, color))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

impl From<shakmaty::Piece> for Piece {
    fn from(piece: shakmaty::Piece) -> Self {
        Piece::new(piece.role.into(), piece.color.into())
    }
}

impl From<Piece> for shakmaty::Piece {
    fn from(piece: Piece) -> Self {
        shakmaty::Piece {
            color: piece.color.into(),
            role: piece.kind.into(),
        }
    }
}

/// The board grid, indexed `[row][col]`
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Create a new empty board
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting layout: White on rows 0 and 1, Black on rows 6 and 7
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            for (col, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
                let col = col as u8;
                board.put_piece(Square::new(color.back_row(), col), Piece::new(kind, color));
                board.put_piece(
                    Square::new(color.pawn_home_row(), col),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    /// Build a board from the piece-placement field of a FEN string
    /// (e.g. `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`).
    ///
    /// No king or piece-count constraints are applied.
    pub fn from_placement(placement: &str) -> Result<Self, BoardError> {
        let board: shakmaty::Board = placement
            .trim()
            .parse()
            .map_err(|e: shakmaty::fen::ParseFenError| {
                BoardError::InvalidPlacement(format!("{placement}: {e}"))
            })?;
        Ok(Board::from(&board))
    }

    /// Piece-placement field of a FEN string for this board
    pub fn placement(&self) -> String {
        shakmaty::Board::from(self).to_string()
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Put a piece on the board, replacing whatever was there
    pub fn put_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.row() as usize][sq.col() as usize] = Some(piece);
    }

    /// Remove a piece from the board
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize].take()
    }

    /// Overwrite `to` with the content of `from` and clear `from`.
    ///
    /// No legality check is made; callers validate first.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        let moving = self.remove_piece(from);
        self.squares[to.row() as usize][to.col() as usize] = moving;
    }

    /// Replace the content of `sq` with a queen of `color`.
    ///
    /// Callers check that a pawn just reached its promotion row.
    pub fn promote(&mut self, sq: Square, color: Color) {
        self.put_piece(sq, Piece::new(PieceKind::Queen, color));
    }

    /// Occupied squares in index order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.pieces().filter(|&(_, p)| p == piece).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl From<&shakmaty::Board> for Board {
    fn from(other: &shakmaty::Board) -> Self {
        let mut board = Board::empty();
        for sq in Square::all() {
            if let Some(piece) = other.piece_at(sq.into()) {
                board.put_piece(sq, piece.into());
            }
        }
        board
    }
}

impl From<&Board> for shakmaty::Board {
    fn from(board: &Board) -> Self {
        let mut out = shakmaty::Board::empty();
        for (sq, piece) in board.pieces() {
            out.set_piece_at(sq.into(), piece.into());
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "  {} ", row + 1)?;
            for col in 0..8 {
                match self.piece_at(Square::new(row, col)) {
                    Some(piece) => write!(f, "{} ", piece.to_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "    a b c d e f g h")?;
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.placement())
    }
}
