//! Collaborator seams: the presentation layer and the player directory
//!
//! The engine calls out through these traits and never the other way round.
//! Calls are fire-and-forget; nothing in the engine waits on an answer other
//! than the token handle a spawn returns.

use crate::game::types::{Coord, PieceKind, PlayerId, Side, TableLocation, TokenRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a spawned token depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    Piece { kind: PieceKind, side: Side },
    /// Move marker shown while a piece is selected
    Marker { side: Side, capture: bool },
}

/// Board tile tint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileVariant {
    Light,
    Dark,
    /// Hovered square
    Highlight,
}

impl TileVariant {
    /// Resting checker variant of a square
    pub fn checker(at: Coord) -> Self {
        if at.is_dark() {
            TileVariant::Dark
        } else {
            TileVariant::Light
        }
    }
}

/// World-side rendering of a table
pub trait Presentation {
    fn spawn_token(&mut self, table: TableLocation, token: TokenKind, at: Coord) -> TokenRef;

    fn destroy_token(&mut self, table: TableLocation, token: TokenRef);

    fn tint_tile(&mut self, table: TableLocation, at: Coord, variant: TileVariant);

    /// Move an existing token. Hosts that cannot move tokens get a respawn.
    fn relocate_token(
        &mut self,
        table: TableLocation,
        token: TokenRef,
        kind: TokenKind,
        to: Coord,
    ) -> TokenRef {
        self.destroy_token(table, token);
        self.spawn_token(table, kind, to)
    }
}

/// Player session layer; names are for status text only
pub trait PlayerDirectory {
    fn display_name(&self, player: PlayerId) -> String;
}

impl PlayerDirectory for BTreeMap<PlayerId, String> {
    fn display_name(&self, player: PlayerId) -> String {
        self.get(&player)
            .cloned()
            .unwrap_or_else(|| format!("Player {}", player.0))
    }
}

/// One call received by a [`Recorder`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresentationCall {
    Spawn {
        table: TableLocation,
        token: TokenRef,
        kind: TokenKind,
        at: Coord,
    },
    Destroy {
        table: TableLocation,
        token: TokenRef,
    },
    Tint {
        table: TableLocation,
        at: Coord,
        variant: TileVariant,
    },
}

/// In-memory presentation layer that records every call
///
/// Also tracks which tokens are alive and where, so callers can check that
/// the world mirrors the board.
#[derive(Debug, Default)]
pub struct Recorder {
    calls: Vec<PresentationCall>,
    live: BTreeMap<TokenRef, (TokenKind, Coord)>,
    names: BTreeMap<PlayerId, String>,
    next_token: u64,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, player: PlayerId, name: impl Into<String>) -> Self {
        self.names.insert(player, name.into());
        self
    }

    pub fn calls(&self) -> &[PresentationCall] {
        &self.calls
    }

    /// Drain the recorded calls, leaving token tracking intact
    pub fn take_calls(&mut self) -> Vec<PresentationCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn live_tokens(&self) -> &BTreeMap<TokenRef, (TokenKind, Coord)> {
        &self.live
    }

    /// Live piece tokens, as the board would list them
    pub fn piece_tokens(&self) -> impl Iterator<Item = (PieceKind, Side, Coord)> + '_ {
        self.live.values().filter_map(|(kind, at)| match kind {
            TokenKind::Piece { kind, side } => Some((*kind, *side, *at)),
            TokenKind::Marker { .. } => None,
        })
    }

    pub fn marker_count(&self) -> usize {
        self.live
            .values()
            .filter(|(kind, _)| matches!(kind, TokenKind::Marker { .. }))
            .count()
    }
}

impl Presentation for Recorder {
    fn spawn_token(&mut self, table: TableLocation, kind: TokenKind, at: Coord) -> TokenRef {
        self.next_token += 1;
        let token = TokenRef(self.next_token);
        self.live.insert(token, (kind, at));
        self.calls.push(PresentationCall::Spawn {
            table,
            token,
            kind,
            at,
        });
        token
    }

    fn destroy_token(&mut self, table: TableLocation, token: TokenRef) {
        self.live.remove(&token);
        self.calls.push(PresentationCall::Destroy { table, token });
    }

    fn tint_tile(&mut self, table: TableLocation, at: Coord, variant: TileVariant) {
        self.calls.push(PresentationCall::Tint { table, at, variant });
    }
}

impl PlayerDirectory for Recorder {
    fn display_name(&self, player: PlayerId) -> String {
        self.names.display_name(player)
    }
}
