//! Inbound interaction targets and outbound game events
//!
//! Events carry content only. How they reach a client is the host's business;
//! they derive serde so a host can forward them as JSON unchanged.

use crate::game::components::{KingState, MoveCandidate};
use crate::game::types::{Coord, PieceId, PieceKind, PlayerId, Side, TableId, TableLocation, TokenRef};
use serde::{Deserialize, Serialize};

/// What a player's interaction points at, as derived by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Piece(PieceId),
    Square(Coord),
    /// A spawned piece or marker token
    Token(TokenRef),
}

impl From<Coord> for Target {
    fn from(coord: Coord) -> Self {
        Target::Square(coord)
    }
}

impl From<PieceId> for Target {
    fn from(piece: PieceId) -> Self {
        Target::Piece(piece)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    TableCreated {
        table: TableId,
        location: TableLocation,
    },
    PlayerSeated {
        table: TableId,
        player: PlayerId,
        /// 1 for the first joiner, 2 for the second
        seat: usize,
        side: Side,
    },
    GameStarted {
        table: TableId,
        players: Vec<PlayerId>,
        location: TableLocation,
    },
    PieceSelected {
        piece: PieceId,
        from: Coord,
        moves: Vec<MoveCandidate>,
    },
    SelectionCancelled {
        piece: PieceId,
    },
    PieceMoved {
        piece: PieceId,
        from: Coord,
        to: Coord,
    },
    PieceCaptured {
        at: Coord,
        kind: PieceKind,
        side: Side,
    },
    TurnChanged {
        side: Side,
    },
    KingStatus {
        side: Side,
        state: KingState,
        escapes: usize,
    },
    GameOver {
        winner: Side,
    },
    /// Human-readable line for direct display; not for programmatic branching
    Status { text: String },
}

impl GameEvent {
    pub fn status(text: impl Into<String>) -> Self {
        GameEvent::Status { text: text.into() }
    }

    pub fn as_status(&self) -> Option<&str> {
        match self {
            GameEvent::Status { text } => Some(text),
            _ => None,
        }
    }
}
