//! Board state representation for move validation
//!
//! The board is an arena of pieces plus a 64-entry square index. A piece is
//! addressed by its [`PieceId`]; the arena slot and the square index are only
//! ever updated together, so a piece's cached coordinate always matches the
//! square that points back at it.

use crate::game::components::Piece;
use crate::game::error::{GameError, GameResult};
use crate::game::types::{Coord, PieceId, PieceKind, Side, TokenRef, BOARD_SIZE};
use std::fmt;
use tracing::{debug, error};

const SQUARES: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Authoritative occupancy for one table
#[derive(Debug, Clone)]
pub struct Board {
    /// Arena; a captured piece leaves a `None` behind so handles stay unique
    slots: Vec<Option<Piece>>,
    squares: [Option<PieceId>; SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board
    pub fn new() -> Self {
        Board {
            slots: Vec::new(),
            squares: [None; SQUARES],
        }
    }

    /// Create a new piece and place it on `coord`
    pub fn spawn(&mut self, kind: PieceKind, side: Side, coord: Coord) -> GameResult<PieceId> {
        let index = coord.index().ok_or(GameError::OffBoard { coord })?;
        let id = PieceId(self.slots.len());
        if let Some(occupant) = self.squares[index] {
            return Err(self.conflict(coord, occupant, id));
        }
        self.slots.push(Some(Piece::new(id, kind, side, coord)));
        self.squares[index] = Some(id);
        Ok(id)
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn piece_mut(&mut self, id: PieceId) -> GameResult<&mut Piece> {
        self.slots
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(GameError::PieceNotFound { piece: id })
    }

    /// The piece standing on `coord`, if any. Off-board coordinates are empty.
    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        let id = coord.index().and_then(|index| self.squares[index])?;
        self.piece(id)
    }

    pub fn is_empty(&self, coord: Coord) -> bool {
        self.piece_at(coord).is_none()
    }

    pub fn side_at(&self, coord: Coord) -> Option<Side> {
        self.piece_at(coord).map(|piece| piece.side)
    }

    /// Move an existing piece to `coord`
    ///
    /// The destination must be empty. Capturing is done by the caller with
    /// [`Board::remove`] first; a second piece is never silently displaced.
    pub fn place(&mut self, id: PieceId, coord: Coord) -> GameResult<()> {
        let index = coord.index().ok_or(GameError::OffBoard { coord })?;
        if let Some(occupant) = self.squares[index] {
            if occupant == id {
                return Ok(());
            }
            return Err(self.conflict(coord, occupant, id));
        }

        let piece = self.piece_mut(id)?;
        let from = piece.coord;
        piece.coord = coord;
        if let Some(old) = from.index() {
            self.squares[old] = None;
        }
        self.squares[index] = Some(id);
        debug!("[BOARD] {} moved {} -> {}", id, from, coord);
        Ok(())
    }

    /// Take a piece off the board for good
    pub fn remove(&mut self, id: PieceId) -> GameResult<Piece> {
        let piece = self
            .slots
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(GameError::PieceNotFound { piece: id })?;
        if let Some(index) = piece.coord.index() {
            if self.squares[index] == Some(id) {
                self.squares[index] = None;
            }
        }
        debug!("[BOARD] {} {} removed from {}", piece.describe(), id, piece.coord);
        Ok(piece)
    }

    pub fn mark_moved(&mut self, id: PieceId) -> GameResult<()> {
        self.piece_mut(id)?.has_moved = true;
        Ok(())
    }

    pub fn set_token(&mut self, id: PieceId, token: Option<TokenRef>) -> GameResult<()> {
        self.piece_mut(id)?.token = token;
        Ok(())
    }

    /// Live pieces sorted by side, then kind, then coordinate
    pub fn all_pieces(&self) -> Vec<&Piece> {
        let mut pieces: Vec<&Piece> = self.pieces().collect();
        pieces.sort_by_key(|piece| (piece.side, piece.kind, piece.coord));
        pieces
    }

    /// Live pieces in arena order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.slots.iter().flatten()
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |piece| piece.side == side)
    }

    pub fn king(&self, side: Side) -> Option<&Piece> {
        self.pieces_of(side).find(|piece| piece.kind == PieceKind::King)
    }

    pub fn piece_with_token(&self, token: TokenRef) -> Option<&Piece> {
        self.pieces().find(|piece| piece.token == Some(token))
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Verify that the square index and the arena agree in both directions
    pub fn verify(&self) -> GameResult<()> {
        for piece in self.pieces() {
            let indexed = piece.coord.index().and_then(|index| self.squares[index]);
            if indexed != Some(piece.id) {
                error!(
                    "[BOARD] Index mismatch: {} {} thinks it is at {} but the square holds {:?}",
                    piece.describe(),
                    piece.id,
                    piece.coord,
                    indexed
                );
                return Err(GameError::IndexMismatch {
                    piece: piece.id,
                    coord: piece.coord,
                });
            }
        }
        for (index, slot) in self.squares.iter().enumerate() {
            let Some(id) = slot else { continue };
            let coord = Coord::new(
                (index % BOARD_SIZE as usize) as i8,
                (index / BOARD_SIZE as usize) as i8,
            );
            if self.piece(*id).map(Piece::coord) != Some(coord) {
                error!("[BOARD] Square {} points at stale piece {}", coord, id);
                return Err(GameError::IndexMismatch { piece: *id, coord });
            }
        }
        Ok(())
    }

    fn conflict(&self, coord: Coord, occupant: PieceId, incoming: PieceId) -> GameError {
        error!(
            "[BOARD] Refusing to stack {} on {} at {}: one piece per square",
            incoming, occupant, coord
        );
        GameError::OccupancyConflict {
            coord,
            occupant,
            incoming,
        }
    }
}

impl fmt::Display for Board {
    /// Text diagram with rank 7 on top, uppercase for White
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", rank)?;
            for file in 0..BOARD_SIZE {
                let symbol = self
                    .piece_at(Coord::new(file, rank))
                    .map(|piece| piece.kind.symbol(piece.side))
                    .unwrap_or('.');
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "  01234567")
    }
}
