//! Error types for game module
//!
//! Two vocabularies live here. [`GameError`] covers genuine internal-consistency
//! faults that abort the current interaction. [`Rejection`] covers the expected,
//! first-class outcomes of an action that cannot proceed; those never travel as
//! `Err`, they are turned into status text for the player.

use crate::game::types::{Coord, PieceId, PieceKind, Side, TableId};

/// Internal-consistency faults in game logic
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    /// Two pieces resolved to the same square
    #[error("Occupancy conflict at ({coord}): {occupant} already there, refusing {incoming}")]
    OccupancyConflict {
        coord: Coord,
        occupant: PieceId,
        incoming: PieceId,
    },

    /// A piece's cached coordinate disagrees with the board index
    #[error("Board index out of sync for piece {piece} at ({coord})")]
    IndexMismatch { piece: PieceId, coord: Coord },

    /// Coordinate outside the 8x8 board
    #[error("Coordinate ({coord}) is off the board")]
    OffBoard { coord: Coord },

    /// Piece handle does not resolve to a live piece
    #[error("Piece {piece} not found")]
    PieceNotFound { piece: PieceId },

    /// Both seats at a table are taken
    #[error("Table {} is full", .table.0)]
    TableFull { table: TableId },

    /// Table index not present in the registry
    #[error("Table {} not found", .table.0)]
    UnknownTable { table: TableId },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;

/// Reasons an interaction was refused without changing any state
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("You are not in a game")]
    NotInGame,

    #[error("You are already in a game")]
    AlreadySeated,

    #[error("Waiting for an opponent to join")]
    GameNotStarted,

    #[error("It is not your turn")]
    NotYourTurn,

    #[error("Cannot select {kind} at {at} belongs to {owner}")]
    BelongsTo {
        kind: PieceKind,
        at: Coord,
        owner: Side,
    },

    #[error("Cannot attack {kind} at {at} belongs to you")]
    BelongsToYou { kind: PieceKind, at: Coord },

    #[error("Cannot select {kind} at {at} there are no moves available")]
    NoMovesAvailable { kind: PieceKind, at: Coord },
}
