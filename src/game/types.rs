//! Type definitions and utilities for tile-board chess
//!
//! Provides newtype patterns for the identifiers that cross the boundary between
//! the rules engine and its collaborators (players, tables, world tokens), plus
//! the board coordinate itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of files (and ranks) on a board
pub const BOARD_SIZE: i8 = 8;

/// Board coordinate (file, rank)
///
/// Both components live in `0..8`. World/rendering positions are an affine
/// transform of this owned by the presentation layer, never by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub file: i8,
    pub rank: i8,
}

impl Coord {
    /// Create a coordinate without bounds checking
    ///
    /// Use [`Coord::checked`] for values coming from outside the engine.
    pub const fn new(file: i8, rank: i8) -> Self {
        Coord { file, rank }
    }

    /// Create a coordinate only if it lies on the board
    pub fn checked(file: i8, rank: i8) -> Option<Self> {
        let coord = Coord::new(file, rank);
        coord.is_on_board().then_some(coord)
    }

    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.file) && (0..BOARD_SIZE).contains(&self.rank)
    }

    /// Step by `(df, dr)`, returning `None` when the result leaves the board
    pub fn offset(self, df: i8, dr: i8) -> Option<Self> {
        Coord::checked(self.file.checked_add(df)?, self.rank.checked_add(dr)?)
    }

    /// Flat index into a 64-entry square array (rank-major)
    pub fn index(self) -> Option<usize> {
        self.is_on_board()
            .then(|| self.rank as usize * BOARD_SIZE as usize + self.file as usize)
    }

    /// Every coordinate on the board, rank by rank
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Coord::new(file, rank)))
    }

    /// Checkerboard parity: `true` for the dark tiles
    pub fn is_dark(self) -> bool {
        (self.file ^ self.rank) & 1 != 0
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.file, self.rank)
    }
}

impl From<(i8, i8)> for Coord {
    fn from((file, rank): (i8, i8)) -> Self {
        Coord::new(file, rank)
    }
}

/// The two sides of a table. White always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Pawn advance direction along the rank axis
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Index into a table's player list (first joiner plays White)
    pub const fn seat_index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    pub fn from_seat_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Side::White),
            1 => Some(Side::Black),
            _ => None,
        }
    }

    /// Rank of the back row for this side
    pub const fn home_rank(self) -> i8 {
        match self {
            Side::White => 0,
            Side::Black => BOARD_SIZE - 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Side::White => "white",
            Side::Black => "black",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The closed set of piece kinds
///
/// Declaration order is the sort order used by [`crate::game::rules::Board::all_pieces`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        }
    }

    /// Board-diagram letter, uppercase for White
    pub fn symbol(self, side: Side) -> char {
        let letter = match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        };
        match side {
            Side::White => letter,
            Side::Black => letter.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle of a piece inside one board's arena
///
/// Handles are never reused, so a captured piece's handle simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub usize);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque player identity supplied by the session layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

/// Index of a table inside the [`crate::game::registry::GameRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TableId(pub usize);

/// Grid location of a physical table in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TableLocation {
    pub x: i32,
    pub z: i32,
}

impl TableLocation {
    pub const fn new(x: i32, z: i32) -> Self {
        TableLocation { x, z }
    }

    /// The next free location along the x axis
    pub const fn next(self) -> Self {
        TableLocation::new(self.x + 1, self.z)
    }
}

impl fmt::Display for TableLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.z)
    }
}

/// Reference to a visual token owned by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenRef(pub u64);
