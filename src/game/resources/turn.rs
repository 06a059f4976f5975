//! Turn state for one table
//!
//! Tracks whose turn it is and where the table is in its lifecycle. Lifecycle
//! transitions are validated: an invalid one is a logic error, logged always
//! and fatal in debug builds.

use crate::game::types::Side;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Table lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TablePhase {
    /// Fewer than two players seated
    ///
    /// Valid transitions: → Playing
    #[default]
    AwaitingPlayers,

    /// Both seats filled, moves are accepted
    ///
    /// Valid transitions: → Complete
    Playing,

    /// Checkmate or king captured. Terminal state.
    Complete,
}

impl TablePhase {
    pub fn accepts_moves(self) -> bool {
        matches!(self, TablePhase::Playing)
    }
}

/// Whose turn it is, the move counter and the table phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub side_to_move: Side,
    pub phase: TablePhase,
    /// Increments after Black moves
    pub move_number: u32,
}

impl Default for TurnState {
    fn default() -> Self {
        Self {
            side_to_move: Side::White,
            phase: TablePhase::AwaitingPlayers,
            move_number: 1,
        }
    }
}

impl TurnState {
    /// Move to another lifecycle phase
    ///
    /// # Panics
    /// In debug builds, panics if the transition is invalid
    pub fn transition_to(&mut self, next: TablePhase) {
        let valid = matches!(
            (self.phase, next),
            (TablePhase::AwaitingPlayers, TablePhase::Playing)
                | (TablePhase::Playing, TablePhase::Complete)
        );

        if !valid {
            error!(
                "[TURN] Invalid table phase transition: {:?} -> {:?}",
                self.phase, next
            );
            #[cfg(debug_assertions)]
            {
                panic!("Invalid table phase transition: {:?} -> {:?}", self.phase, next);
            }
        }

        self.phase = next;
    }

    /// Hand the move to the other side
    pub fn switch_turn(&mut self) {
        self.side_to_move = match self.side_to_move {
            Side::White => Side::Black,
            Side::Black => {
                self.move_number += 1;
                Side::White
            }
        };
    }

    pub fn is_complete(&self) -> bool {
        self.phase == TablePhase::Complete
    }
}
