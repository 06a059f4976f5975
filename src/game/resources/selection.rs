//! Selection state for one table
//!
//! Only the side to move can ever hold a selection, so the selection lives on
//! the table rather than on a player.

use crate::game::components::{Marker, MoveCandidate};
use crate::game::types::{Coord, PieceId, TokenRef};

/// Idle, or a piece picked up together with the moves it was offered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    PieceSelected {
        piece: PieceId,
        from: Coord,
        moves: Vec<MoveCandidate>,
        /// Marker tokens shown for `moves`, destroyed when the selection ends
        markers: Vec<Marker>,
    },
}

impl Selection {
    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::PieceSelected { .. })
    }

    pub fn piece(&self) -> Option<PieceId> {
        match self {
            Selection::Idle => None,
            Selection::PieceSelected { piece, .. } => Some(*piece),
        }
    }

    /// The offered move landing on `to`, if any
    pub fn move_to(&self, to: Coord) -> Option<MoveCandidate> {
        match self {
            Selection::Idle => None,
            Selection::PieceSelected { moves, .. } => moves.iter().copied().find(|m| m.to == to),
        }
    }

    /// Square of the marker whose token is `token`
    pub fn marker_square(&self, token: TokenRef) -> Option<Coord> {
        match self {
            Selection::Idle => None,
            Selection::PieceSelected { markers, .. } => markers
                .iter()
                .find(|marker| marker.token == token)
                .map(|marker| marker.at),
        }
    }

    /// Return to idle, handing back the markers that were on display
    pub fn clear(&mut self) -> Vec<Marker> {
        match std::mem::take(self) {
            Selection::Idle => Vec::new(),
            Selection::PieceSelected { markers, .. } => markers,
        }
    }
}
