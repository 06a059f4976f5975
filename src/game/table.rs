//! One chess table: board, seats and the turn controller
//!
//! A table is driven entirely by [`Table::interact`]. The turn controller is a
//! two-state machine held in [`Selection`]:
//!
//! - `Idle` + own piece with moves → `PieceSelected`, markers shown
//! - `Idle` + own piece without moves → stays `Idle`, "no moves available"
//! - `PieceSelected` + same piece → cancel, back to `Idle`
//! - `PieceSelected` + another own piece → rejected, selection kept
//! - `PieceSelected` + offered destination → commit, advance the turn
//! - anything else → no-op
//!
//! Refusals are returned as status events, never as `Err`. `Err` is reserved
//! for board faults that abort the interaction.

use crate::core::settings::TableSettings;
use crate::game::components::{KingState, Marker, MoveKind, MoveRecord};
use crate::game::error::{GameError, GameResult, Rejection};
use crate::game::events::{GameEvent, Target};
use crate::game::presentation::{Presentation, PlayerDirectory, TileVariant, TokenKind};
use crate::game::resources::{
    AvailableMoves, CapturedPieces, MoveHistory, Selection, TablePhase, TurnState,
};
use crate::game::rules::{king_state, Board, MoveRules};
use crate::game::types::{Coord, PieceId, PlayerId, Side, TableId, TableLocation};
use tracing::{debug, info};

/// What an interaction target turned out to point at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolved {
    Piece(PieceId),
    Square(Coord),
    Nothing,
}

/// A seat handed out by [`Table::seat`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    /// 1 for White, 2 for Black
    pub number: usize,
    pub side: Side,
}

#[derive(Debug, Clone)]
pub struct Table {
    id: TableId,
    location: TableLocation,
    players: Vec<PlayerId>,
    board: Board,
    turn: TurnState,
    selection: Selection,
    moves: AvailableMoves,
    history: MoveHistory,
    captured: CapturedPieces,
    hover: Option<Coord>,
    winner: Option<Side>,
    rules: MoveRules,
    announce_king_status: bool,
}

impl Table {
    /// A table in the configured opening
    pub fn new(id: TableId, location: TableLocation, settings: &TableSettings) -> GameResult<Self> {
        let board = settings.opening.board()?;
        Ok(Self::with_board(id, location, board, settings))
    }

    /// A table starting from an arbitrary position
    pub fn with_board(
        id: TableId,
        location: TableLocation,
        board: Board,
        settings: &TableSettings,
    ) -> Self {
        let rules = settings.move_rules();
        let moves = AvailableMoves::build(&board, rules);
        Table {
            id,
            location,
            players: Vec::with_capacity(2),
            board,
            turn: TurnState::default(),
            selection: Selection::Idle,
            moves,
            history: MoveHistory::default(),
            captured: CapturedPieces::default(),
            hover: None,
            winner: None,
            rules,
            announce_king_status: settings.announce_king_status,
        }
    }

    /// Tint every tile and spawn a token for every piece
    pub fn render(&mut self, presentation: &mut dyn Presentation) -> GameResult<()> {
        for at in Coord::all() {
            presentation.tint_tile(self.location, at, TileVariant::checker(at));
        }

        let spawns: Vec<(PieceId, TokenKind, Coord)> = self
            .board
            .all_pieces()
            .iter()
            .map(|piece| {
                let kind = TokenKind::Piece {
                    kind: piece.kind,
                    side: piece.side,
                };
                (piece.id, kind, piece.coord())
            })
            .collect();
        for (id, kind, at) in spawns {
            let token = presentation.spawn_token(self.location, kind, at);
            self.board.set_token(id, Some(token))?;
        }

        debug!(
            "[TABLE] Rendered table {} at {} with {} pieces",
            self.id.0,
            self.location,
            self.board.piece_count()
        );
        Ok(())
    }

    /// Give `player` the next free seat. Filling the second seat starts the game.
    pub fn seat(&mut self, player: PlayerId) -> Option<Seat> {
        let side = Side::from_seat_index(self.players.len())?;
        self.players.push(player);
        if side == Side::Black {
            self.turn.transition_to(TablePhase::Playing);
            info!(
                "[TABLE] Table {} started: {:?} vs {:?}",
                self.id.0, self.players[0], self.players[1]
            );
        }
        Some(Seat {
            number: side.seat_index() + 1,
            side,
        })
    }

    /// Handle one interaction from `player`
    pub fn interact(
        &mut self,
        player: PlayerId,
        target: Target,
        presentation: &mut dyn Presentation,
        names: &dyn PlayerDirectory,
    ) -> GameResult<Vec<GameEvent>> {
        if self.turn.is_complete() {
            debug!("[TURN] Table {} is complete, ignoring {:?}", self.id.0, target);
            return Ok(Vec::new());
        }
        let Some(side) = self.side_of(player) else {
            return Ok(reject(Rejection::NotInGame));
        };
        if !self.turn.phase.accepts_moves() {
            return Ok(reject(Rejection::GameNotStarted));
        }
        if side != self.turn.side_to_move {
            return Ok(reject(Rejection::NotYourTurn));
        }

        let resolved = self.resolve(target);
        match self.selection.piece() {
            None => self.select(side, resolved, presentation),
            Some(selected) => self.act_on_selection(selected, side, resolved, presentation, names),
        }
    }

    /// Move the hover highlight. Returns `false` when nothing changed.
    pub fn notify_hover(&mut self, at: Option<Coord>, presentation: &mut dyn Presentation) -> bool {
        let at = at.filter(|coord| coord.is_on_board());
        if at == self.hover {
            return false;
        }

        if let Some(old) = self.hover {
            presentation.tint_tile(self.location, old, TileVariant::checker(old));
        }
        if let Some(new) = at {
            presentation.tint_tile(self.location, new, TileVariant::Highlight);
        }
        debug!("[HOVER] Table {}: {:?} -> {:?}", self.id.0, self.hover, at);
        self.hover = at;
        true
    }

    fn resolve(&self, target: Target) -> Resolved {
        match target {
            Target::Piece(id) => match self.board.piece(id) {
                Some(_) => Resolved::Piece(id),
                None => Resolved::Nothing,
            },
            Target::Square(at) => self.resolve_square(at),
            Target::Token(token) => {
                if let Some(piece) = self.board.piece_with_token(token) {
                    Resolved::Piece(piece.id)
                } else if let Some(at) = self.selection.marker_square(token) {
                    self.resolve_square(at)
                } else {
                    Resolved::Nothing
                }
            }
        }
    }

    fn resolve_square(&self, at: Coord) -> Resolved {
        match self.board.piece_at(at) {
            Some(piece) => Resolved::Piece(piece.id),
            None if at.is_on_board() => Resolved::Square(at),
            None => Resolved::Nothing,
        }
    }

    fn select(
        &mut self,
        side: Side,
        resolved: Resolved,
        presentation: &mut dyn Presentation,
    ) -> GameResult<Vec<GameEvent>> {
        let Resolved::Piece(id) = resolved else {
            return Ok(Vec::new());
        };
        let piece = self.board.piece(id).ok_or(GameError::PieceNotFound { piece: id })?;
        let (kind, from, owner) = (piece.kind, piece.coord(), piece.side);
        let described = piece.describe();

        if owner != side {
            return Ok(reject(Rejection::BelongsTo {
                kind,
                at: from,
                owner,
            }));
        }

        let moves = self.moves.get(id).to_vec();
        if moves.is_empty() {
            return Ok(reject(Rejection::NoMovesAvailable { kind, at: from }));
        }

        let markers: Vec<Marker> = moves
            .iter()
            .map(|candidate| {
                let is_capture = candidate.kind == MoveKind::Attack;
                let token = presentation.spawn_token(
                    self.location,
                    TokenKind::Marker {
                        side,
                        capture: is_capture,
                    },
                    candidate.to,
                );
                Marker {
                    token,
                    at: candidate.to,
                    side,
                    is_capture,
                }
            })
            .collect();

        debug!(
            "[TURN] Selected {} at {} with {} moves",
            described,
            from,
            moves.len()
        );
        self.selection = Selection::PieceSelected {
            piece: id,
            from,
            moves: moves.clone(),
            markers,
        };

        Ok(vec![
            GameEvent::PieceSelected {
                piece: id,
                from,
                moves,
            },
            GameEvent::status(format!("Selected {} at {}", described, from)),
        ])
    }

    fn act_on_selection(
        &mut self,
        selected: PieceId,
        side: Side,
        resolved: Resolved,
        presentation: &mut dyn Presentation,
        names: &dyn PlayerDirectory,
    ) -> GameResult<Vec<GameEvent>> {
        match resolved {
            Resolved::Piece(id) if id == selected => Ok(self.cancel(selected, presentation)),
            Resolved::Piece(id) => {
                let target = self.board.piece(id).ok_or(GameError::PieceNotFound { piece: id })?;
                let (kind, at) = (target.kind, target.coord());
                if target.side == side {
                    return Ok(reject(Rejection::BelongsToYou { kind, at }));
                }
                match self.selection.move_to(at) {
                    Some(candidate) if candidate.kind == MoveKind::Attack => {
                        self.commit(selected, at, Some(id), presentation, names)
                    }
                    _ => Ok(Vec::new()),
                }
            }
            Resolved::Square(at) => match self.selection.move_to(at) {
                Some(candidate) if candidate.kind == MoveKind::Empty => {
                    self.commit(selected, at, None, presentation, names)
                }
                _ => Ok(Vec::new()),
            },
            Resolved::Nothing => Ok(Vec::new()),
        }
    }

    fn cancel(&mut self, piece: PieceId, presentation: &mut dyn Presentation) -> Vec<GameEvent> {
        self.clear_markers(presentation);
        let described = self
            .board
            .piece(piece)
            .map(|p| format!("{} at {}", p.describe(), p.coord()))
            .unwrap_or_else(|| piece.to_string());
        debug!("[TURN] Cancelled move for {}", described);

        vec![
            GameEvent::SelectionCancelled { piece },
            GameEvent::status(format!("Cancelled move for {}", described)),
        ]
    }

    fn clear_markers(&mut self, presentation: &mut dyn Presentation) {
        for marker in self.selection.clear() {
            presentation.destroy_token(self.location, marker.token);
        }
    }

    /// Apply a selected move: capture, relocate, then advance the turn
    fn commit(
        &mut self,
        piece: PieceId,
        to: Coord,
        victim: Option<PieceId>,
        presentation: &mut dyn Presentation,
        names: &dyn PlayerDirectory,
    ) -> GameResult<Vec<GameEvent>> {
        let mover = self.board.piece(piece).ok_or(GameError::PieceNotFound { piece })?;
        let (side, kind, from, token) = (mover.side, mover.kind, mover.coord(), mover.token);
        let described = mover.describe();
        let mut events = Vec::new();

        self.clear_markers(presentation);

        let mut captured = None;
        if let Some(victim) = victim {
            let taken = self.board.remove(victim)?;
            if let Some(token) = taken.token {
                presentation.destroy_token(self.location, token);
            }
            self.captured.add_capture(taken.side, taken.kind);
            captured = Some(taken.kind);
            info!("[TURN] {} at {} takes {} at {}", described, from, taken.describe(), to);
            events.push(GameEvent::PieceCaptured {
                at: to,
                kind: taken.kind,
                side: taken.side,
            });
            events.push(GameEvent::status(format!(
                "Attacking {} at {}",
                taken.describe(),
                to
            )));
        }

        self.board.place(piece, to)?;
        self.board.mark_moved(piece)?;
        if let Some(token) = token {
            let moved = presentation.relocate_token(
                self.location,
                token,
                TokenKind::Piece { kind, side },
                to,
            );
            self.board.set_token(piece, Some(moved))?;
        }
        self.board.verify()?;

        debug!("[TURN] Moved {} {} -> {}", described, from, to);
        events.push(GameEvent::PieceMoved { piece, from, to });

        let opponent_king = self.advance_turn(side, names, &mut events);
        self.history.add_move(MoveRecord {
            side,
            kind,
            from,
            to,
            captured,
            opponent_king,
        });
        Ok(events)
    }

    /// Recompute moves, flip the side to move and judge the new mover's king
    fn advance_turn(
        &mut self,
        mover: Side,
        names: &dyn PlayerDirectory,
        events: &mut Vec<GameEvent>,
    ) -> Option<KingState> {
        self.moves.rebuild(&self.board, self.rules);
        self.turn.switch_turn();
        let next = self.turn.side_to_move;

        let Some(report) = king_state(&self.board, next, self.rules) else {
            info!("[TABLE] Table {}: {} king was captured", self.id.0, next);
            self.finish(mover, names, events);
            return None;
        };

        if self.announce_king_status {
            events.push(GameEvent::KingStatus {
                side: next,
                state: report.state,
                escapes: report.escapes.len(),
            });
            if report.state != KingState::Safe {
                events.push(GameEvent::status(format!(
                    "{} king has {} moves - {}",
                    next,
                    report.escapes.len(),
                    report.state
                )));
            }
        }

        if report.state == KingState::CheckMate {
            self.finish(mover, names, events);
        } else {
            info!(
                "[TURN] Move #{}: {} to move",
                self.turn.move_number, next
            );
            events.push(GameEvent::TurnChanged { side: next });
            events.push(GameEvent::status(format!(
                "It is now {}'s turn",
                self.player_name(next, names)
            )));
        }
        Some(report.state)
    }

    fn finish(&mut self, winner: Side, names: &dyn PlayerDirectory, events: &mut Vec<GameEvent>) {
        self.turn.transition_to(TablePhase::Complete);
        self.winner = Some(winner);
        info!(
            "[TABLE] Table {} complete after move #{}: {} wins",
            self.id.0, self.turn.move_number, winner
        );
        events.push(GameEvent::GameOver { winner });
        events.push(GameEvent::status(format!(
            "{} has won the game",
            self.player_name(winner, names)
        )));
    }

    fn player_name(&self, side: Side, names: &dyn PlayerDirectory) -> String {
        self.players
            .get(side.seat_index())
            .map(|player| names.display_name(*player))
            .unwrap_or_else(|| side.to_string())
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn location(&self) -> TableLocation {
        self.location
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn side_of(&self, player: PlayerId) -> Option<Side> {
        let index = self.players.iter().position(|p| *p == player)?;
        Side::from_seat_index(index)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn side_to_move(&self) -> Side {
        self.turn.side_to_move
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn available_moves(&self) -> &AvailableMoves {
        &self.moves
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    pub fn hover(&self) -> Option<Coord> {
        self.hover
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_started(&self) -> bool {
        self.turn.phase != TablePhase::AwaitingPlayers
    }

    pub fn is_complete(&self) -> bool {
        self.turn.is_complete()
    }
}

fn reject(rejection: Rejection) -> Vec<GameEvent> {
    debug!("[TURN] Rejected: {}", rejection);
    vec![GameEvent::status(rejection.to_string())]
}
