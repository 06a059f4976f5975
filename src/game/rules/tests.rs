//! Test suite for move generation and king safety
//!
//! Tests piece movement rules and board state using pure functions, without
//! any table, player or presentation layer.
//!
//! # Test Organization
//!
//! - `test_board_*` - Board arena/index operations
//! - `test_pawn_*` - Pawn forward step, blocking, diagonal capture
//! - `test_knight_*` - Knight offsets
//! - `test_slider_*` - Bishop/rook/queen ray walking and termination
//! - `test_king_*` - King steps
//! - `test_check_*` - King safety classification
//! - `test_opening_*` - Starting layouts

use super::piece_moves::candidates_from;
use super::*;
use crate::game::components::{KingState, MoveCandidate, MoveKind};
use crate::game::error::GameError;
use crate::game::types::{Coord, PieceId, PieceKind, Side};

/// Build a board from `(kind, side, (file, rank))` tuples
///
/// ```rust,ignore
/// let board = create_test_board(&[
///     (PieceKind::Rook, Side::White, (0, 0)),
///     (PieceKind::Pawn, Side::Black, (0, 3)),
/// ]);
/// ```
fn create_test_board(pieces: &[(PieceKind, Side, (i8, i8))]) -> Board {
    let mut board = Board::new();
    for &(kind, side, (file, rank)) in pieces {
        board
            .spawn(kind, side, Coord::new(file, rank))
            .expect("test pieces must not overlap");
    }
    board
}

fn moves_at(board: &Board, file: i8, rank: i8) -> Vec<MoveCandidate> {
    let piece = board
        .piece_at(Coord::new(file, rank))
        .expect("a piece on the probed square");
    moves_for(board, piece)
}

fn destinations(moves: &[MoveCandidate]) -> Vec<Coord> {
    moves.iter().map(|m| m.to).collect()
}

// ============================================================================
// Board Tests
// ============================================================================

#[test]
fn test_board_piece_at_and_empty() {
    let board = create_test_board(&[(PieceKind::Pawn, Side::White, (3, 3))]);

    assert!(board.is_empty(Coord::new(2, 2)), "Adjacent square should be empty");
    assert!(!board.is_empty(Coord::new(3, 3)), "Square with piece should not be empty");
    assert_eq!(board.side_at(Coord::new(3, 3)), Some(Side::White));
    assert!(board.piece_at(Coord::new(9, 9)).is_none(), "Off-board squares read empty");
}

#[test]
fn test_board_place_keeps_index_in_sync() {
    //! Moving a piece updates both its cached coordinate and the square index.
    let mut board = create_test_board(&[(PieceKind::Rook, Side::White, (0, 0))]);
    let id = PieceId(0);

    board.place(id, Coord::new(0, 5)).unwrap();

    assert!(board.is_empty(Coord::new(0, 0)));
    assert_eq!(board.piece_at(Coord::new(0, 5)).map(|p| p.id), Some(id));
    assert_eq!(board.piece(id).unwrap().coord(), Coord::new(0, 5));
    assert!(board.verify().is_ok());
}

#[test]
fn test_board_refuses_second_occupant() {
    //! Two pieces on one square is a fault, reported and never repaired.
    let mut board = create_test_board(&[
        (PieceKind::Rook, Side::White, (0, 0)),
        (PieceKind::Pawn, Side::Black, (0, 3)),
    ]);

    let err = board.place(PieceId(0), Coord::new(0, 3)).unwrap_err();
    assert_eq!(
        err,
        GameError::OccupancyConflict {
            coord: Coord::new(0, 3),
            occupant: PieceId(1),
            incoming: PieceId(0),
        }
    );
    assert_eq!(board.piece(PieceId(0)).unwrap().coord(), Coord::new(0, 0));
    assert_eq!(board.piece_at(Coord::new(0, 3)).unwrap().id, PieceId(1));

    let err = board.spawn(PieceKind::Queen, Side::White, Coord::new(0, 0));
    assert!(matches!(err, Err(GameError::OccupancyConflict { .. })));
}

#[test]
fn test_board_remove_invalidates_handle() {
    let mut board = create_test_board(&[
        (PieceKind::Rook, Side::White, (0, 0)),
        (PieceKind::Pawn, Side::Black, (0, 3)),
    ]);

    let removed = board.remove(PieceId(1)).unwrap();
    assert_eq!(removed.kind, PieceKind::Pawn);
    assert!(board.piece(PieceId(1)).is_none());
    assert!(board.is_empty(Coord::new(0, 3)));
    assert_eq!(
        board.remove(PieceId(1)),
        Err(GameError::PieceNotFound { piece: PieceId(1) })
    );
    assert_eq!(board.piece_count(), 1);
}

#[test]
fn test_board_all_pieces_ordering() {
    //! Deterministic ordering: side, then kind, then coordinate.
    let board = create_test_board(&[
        (PieceKind::Pawn, Side::Black, (1, 6)),
        (PieceKind::Pawn, Side::White, (5, 1)),
        (PieceKind::King, Side::White, (3, 0)),
        (PieceKind::Pawn, Side::White, (2, 1)),
        (PieceKind::King, Side::Black, (3, 7)),
    ]);

    let order: Vec<(Side, PieceKind, Coord)> = board
        .all_pieces()
        .iter()
        .map(|p| (p.side, p.kind, p.coord()))
        .collect();

    assert_eq!(
        order,
        vec![
            (Side::White, PieceKind::King, Coord::new(3, 0)),
            (Side::White, PieceKind::Pawn, Coord::new(2, 1)),
            (Side::White, PieceKind::Pawn, Coord::new(5, 1)),
            (Side::Black, PieceKind::King, Coord::new(3, 7)),
            (Side::Black, PieceKind::Pawn, Coord::new(1, 6)),
        ]
    );
}

// ============================================================================
// Pawn Movement Tests
// ============================================================================

#[test]
fn test_pawn_single_forward_move_from_start() {
    //! From the initial position the e-file pawn has exactly one move:
    //! a single step. There is no double step and nothing to capture.
    let board = Opening::Standard.board().unwrap();
    let moves = moves_at(&board, 4, 1);

    assert_eq!(moves, vec![MoveCandidate::new(Coord::new(4, 2), MoveKind::Empty)]);
}

#[test]
fn test_black_pawn_moves_down() {
    let board = Opening::Standard.board().unwrap();
    let moves = moves_at(&board, 2, 6);

    assert_eq!(moves, vec![MoveCandidate::new(Coord::new(2, 5), MoveKind::Empty)]);
}

#[test]
fn test_pawn_blocked_by_enemy() {
    //! An enemy piece straight ahead is `Blocked`, never an attack.
    let board = create_test_board(&[
        (PieceKind::Pawn, Side::White, (3, 3)),
        (PieceKind::Knight, Side::Black, (3, 4)),
    ]);
    let pawn = board.piece_at(Coord::new(3, 3)).unwrap();

    let all = candidates_from(&board, pawn, pawn.coord(), MoveRules::default());
    assert_eq!(all, vec![MoveCandidate::new(Coord::new(3, 4), MoveKind::Blocked)]);
    assert!(moves_for(&board, pawn).is_empty(), "Blocked pawn has no moves");
}

#[test]
fn test_pawn_blocked_by_friend() {
    let board = create_test_board(&[
        (PieceKind::Pawn, Side::White, (3, 3)),
        (PieceKind::Knight, Side::White, (3, 4)),
    ]);
    let pawn = board.piece_at(Coord::new(3, 3)).unwrap();

    let all = candidates_from(&board, pawn, pawn.coord(), MoveRules::default());
    assert_eq!(all, vec![MoveCandidate::new(Coord::new(3, 4), MoveKind::Guarding)]);
    assert!(moves_for(&board, pawn).is_empty());
}

#[test]
fn test_pawn_diagonal_capture() {
    //! Diagonal probes only survive when they land on an enemy.
    let board = create_test_board(&[
        (PieceKind::Pawn, Side::White, (3, 3)),
        (PieceKind::Knight, Side::Black, (4, 4)),
        (PieceKind::Knight, Side::White, (2, 4)),
    ]);

    let moves = moves_at(&board, 3, 3);
    assert_eq!(
        moves,
        vec![
            MoveCandidate::new(Coord::new(3, 4), MoveKind::Empty),
            MoveCandidate::new(Coord::new(4, 4), MoveKind::Attack),
        ]
    );
}

#[test]
fn test_pawn_on_last_rank_has_no_moves() {
    let board = create_test_board(&[(PieceKind::Pawn, Side::White, (0, 7))]);
    assert!(moves_at(&board, 0, 7).is_empty(), "Nothing beyond the board edge");
}

#[test]
fn test_pawn_double_step_when_enabled() {
    //! The double step is an opt-in switch gated on the has-moved flag.
    let mut board = Opening::Standard.board().unwrap();
    let rules = MoveRules {
        pawn_double_step: true,
    };
    let pawn = board.piece_at(Coord::new(4, 1)).unwrap().clone();

    assert_eq!(
        destinations(&moves_with(&board, &pawn, rules)),
        vec![Coord::new(4, 2), Coord::new(4, 3)]
    );

    board.place(pawn.id, Coord::new(4, 2)).unwrap();
    board.mark_moved(pawn.id).unwrap();
    let pawn = board.piece(pawn.id).unwrap();
    assert_eq!(destinations(&moves_with(&board, pawn, rules)), vec![Coord::new(4, 3)]);
}

#[test]
fn test_pawn_double_step_needs_clear_path() {
    let board = create_test_board(&[
        (PieceKind::Pawn, Side::White, (4, 1)),
        (PieceKind::Bishop, Side::Black, (4, 2)),
    ]);
    let rules = MoveRules {
        pawn_double_step: true,
    };
    let pawn = board.piece_at(Coord::new(4, 1)).unwrap();
    assert!(moves_with(&board, pawn, rules).is_empty());
}

// ============================================================================
// Knight Movement Tests
// ============================================================================

#[test]
fn test_knight_corner_and_center() {
    //! Two jumps from any corner, eight from a central square.
    for (file, rank) in [(0, 0), (7, 0), (0, 7), (7, 7)] {
        let board = create_test_board(&[(PieceKind::Knight, Side::White, (file, rank))]);
        assert_eq!(moves_at(&board, file, rank).len(), 2, "corner ({file},{rank})");
    }
    for (file, rank) in [(3, 3), (4, 4), (2, 5), (5, 2)] {
        let board = create_test_board(&[(PieceKind::Knight, Side::Black, (file, rank))]);
        assert_eq!(moves_at(&board, file, rank).len(), 8, "center ({file},{rank})");
    }
}

#[test]
fn test_knight_from_start() {
    //! Knights jump over the pawn wall; friendly pawns are guarded, not offered.
    let board = Opening::Standard.board().unwrap();
    assert_eq!(
        destinations(&moves_at(&board, 1, 0)),
        vec![Coord::new(0, 2), Coord::new(2, 2)]
    );
    assert_eq!(
        destinations(&moves_at(&board, 6, 7)),
        vec![Coord::new(5, 5), Coord::new(7, 5)]
    );
}

#[test]
fn test_knight_captures_enemy() {
    let board = create_test_board(&[
        (PieceKind::Knight, Side::White, (0, 0)),
        (PieceKind::Rook, Side::Black, (1, 2)),
        (PieceKind::Rook, Side::White, (2, 1)),
    ]);
    assert_eq!(
        moves_at(&board, 0, 0),
        vec![MoveCandidate::new(Coord::new(1, 2), MoveKind::Attack)]
    );
}

// ============================================================================
// Sliding Piece Tests
// ============================================================================

#[test]
fn test_slider_rook_stops_at_capture() {
    //! Rook at (0,0), enemy pawn at (0,3): the file ray yields two empty
    //! squares, the attack, and nothing beyond it.
    let board = create_test_board(&[
        (PieceKind::Rook, Side::White, (0, 0)),
        (PieceKind::Pawn, Side::Black, (0, 3)),
    ]);
    let moves = moves_at(&board, 0, 0);

    assert!(moves.contains(&MoveCandidate::new(Coord::new(0, 1), MoveKind::Empty)));
    assert!(moves.contains(&MoveCandidate::new(Coord::new(0, 2), MoveKind::Empty)));
    assert!(moves.contains(&MoveCandidate::new(Coord::new(0, 3), MoveKind::Attack)));
    assert!(!destinations(&moves).contains(&Coord::new(0, 4)));
    assert!(!destinations(&moves).contains(&Coord::new(0, 7)));
    assert_eq!(moves.len(), 3 + 7, "three along the file, seven along the rank");
}

#[test]
fn test_slider_ray_terminates_at_first_occupied_square() {
    //! Whatever stops a ray, nothing past it is generated.
    let board = create_test_board(&[
        (PieceKind::Queen, Side::White, (3, 3)),
        (PieceKind::Pawn, Side::White, (3, 5)),
        (PieceKind::Pawn, Side::Black, (5, 5)),
        (PieceKind::Pawn, Side::White, (1, 3)),
    ]);
    let queen = board.piece_at(Coord::new(3, 3)).unwrap();
    let all = candidates_from(&board, queen, queen.coord(), MoveRules::default());

    let stops = [
        (Coord::new(3, 5), MoveKind::Guarding),
        (Coord::new(5, 5), MoveKind::Attack),
        (Coord::new(1, 3), MoveKind::Guarding),
    ];
    for (coord, kind) in stops {
        assert!(all.contains(&MoveCandidate::new(coord, kind)));
    }
    let forbidden = [
        Coord::new(3, 6),
        Coord::new(3, 7),
        Coord::new(6, 6),
        Coord::new(7, 7),
        Coord::new(0, 3),
    ];
    for coord in forbidden {
        assert!(
            !destinations(&all).contains(&coord),
            "({coord}) lies behind a blocker"
        );
    }
}

#[test]
fn test_slider_counts_on_empty_board() {
    let cases = [
        (PieceKind::Bishop, 13),
        (PieceKind::Rook, 14),
        (PieceKind::Queen, 27),
    ];
    for (kind, expected) in cases {
        let board = create_test_board(&[(kind, Side::White, (3, 3))]);
        assert_eq!(moves_at(&board, 3, 3).len(), expected, "{kind} from (3,3)");
    }
}

#[test]
fn test_slider_queen_is_rook_plus_bishop() {
    let board = create_test_board(&[
        (PieceKind::Queen, Side::White, (2, 5)),
        (PieceKind::Pawn, Side::Black, (2, 1)),
        (PieceKind::Pawn, Side::White, (5, 2)),
    ]);
    let queen = board.piece_at(Coord::new(2, 5)).unwrap().clone();

    let mut as_rook = queen.clone();
    as_rook.kind = PieceKind::Rook;
    let mut as_bishop = queen.clone();
    as_bishop.kind = PieceKind::Bishop;

    let mut union = moves_for(&board, &as_rook);
    union.extend(moves_for(&board, &as_bishop));
    assert_eq!(moves_for(&board, &queen), union);
}

#[test]
fn test_slider_never_offers_own_square() {
    let board = create_test_board(&[(PieceKind::Queen, Side::Black, (0, 0))]);
    assert!(!destinations(&moves_at(&board, 0, 0)).contains(&Coord::new(0, 0)));
}

// ============================================================================
// King Movement Tests
// ============================================================================

#[test]
fn test_king_steps() {
    let board = create_test_board(&[(PieceKind::King, Side::White, (3, 3))]);
    assert_eq!(moves_at(&board, 3, 3).len(), 8);

    let board = create_test_board(&[(PieceKind::King, Side::White, (0, 0))]);
    assert_eq!(moves_at(&board, 0, 0).len(), 3);
}

#[test]
fn test_king_boxed_in_at_start() {
    let board = Opening::Standard.board().unwrap();
    assert!(moves_at(&board, 3, 0).is_empty());
    assert!(moves_at(&board, 3, 7).is_empty());
}

// ============================================================================
// King Safety Tests
// ============================================================================

#[test]
fn test_check_initial_position_is_safe() {
    let board = Opening::Standard.board().unwrap();
    for side in [Side::White, Side::Black] {
        let report = king_state(&board, side, MoveRules::default()).unwrap();
        assert_eq!(report.state, KingState::Safe, "{side} king at start");
    }
}

#[test]
fn test_check_detected() {
    //! A rook on the king's file gives check; the king can step aside.
    let board = create_test_board(&[
        (PieceKind::King, Side::Black, (3, 7)),
        (PieceKind::Rook, Side::White, (3, 0)),
    ]);
    let report = king_state(&board, Side::Black, MoveRules::default()).unwrap();

    assert_eq!(report.state, KingState::Check);
    assert!(destinations(&report.escapes).contains(&Coord::new(2, 7)));
    assert!(!destinations(&report.escapes).contains(&Coord::new(3, 6)));
}

#[test]
fn test_check_back_rank_mate() {
    //! Rook on the back rank, king walled in by its own pawns and bishop.
    let board = create_test_board(&[
        (PieceKind::King, Side::Black, (3, 7)),
        (PieceKind::Bishop, Side::Black, (4, 7)),
        (PieceKind::Pawn, Side::Black, (2, 6)),
        (PieceKind::Pawn, Side::Black, (3, 6)),
        (PieceKind::Pawn, Side::Black, (4, 6)),
        (PieceKind::Rook, Side::White, (0, 7)),
        (PieceKind::King, Side::White, (3, 0)),
    ]);
    let report = king_state(&board, Side::Black, MoveRules::default()).unwrap();

    assert_eq!(report.state, KingState::CheckMate);
    assert!(report.escapes.is_empty());
}

#[test]
fn test_check_trapped_without_check() {
    //! Every step is covered but the king itself is not attacked.
    let board = create_test_board(&[
        (PieceKind::King, Side::Black, (0, 7)),
        (PieceKind::Queen, Side::White, (1, 5)),
    ]);
    let report = king_state(&board, Side::Black, MoveRules::default()).unwrap();

    assert_eq!(report.state, KingState::Trapped);
}

#[test]
fn test_check_hypothetical_square() {
    //! The evaluator judges the coordinate it is handed, not the stored one.
    let board = create_test_board(&[
        (PieceKind::King, Side::White, (4, 0)),
        (PieceKind::Rook, Side::Black, (7, 3)),
    ]);
    let king = board.king(Side::White).unwrap();

    let here = evaluate_king(&board, king, king.coord(), MoveRules::default()).unwrap();
    assert_eq!(here.state, KingState::Safe);

    let there = evaluate_king(&board, king, Coord::new(4, 3), MoveRules::default()).unwrap();
    assert_eq!(there.state, KingState::Check);
}

#[test]
fn test_check_off_board_square_is_refused() {
    //! Squares just past the edge and at the limits of `i8` are both refused
    //! before any king moves are generated.
    let board = create_test_board(&[
        (PieceKind::King, Side::White, (4, 0)),
        (PieceKind::Rook, Side::Black, (7, 3)),
    ]);
    let king = board.king(Side::White).unwrap();

    for at in [
        Coord::new(8, 3),
        Coord::new(-1, 0),
        Coord::new(i8::MAX, 3),
        Coord::new(i8::MIN, i8::MAX),
    ] {
        assert_eq!(
            evaluate_king(&board, king, at, MoveRules::default()),
            Err(GameError::OffBoard { coord: at }),
            "{at}"
        );
    }
}

#[test]
fn test_slider_off_board_origin_yields_nothing() {
    let board = create_test_board(&[(PieceKind::Queen, Side::White, (3, 3))]);
    let queen = board.piece_at(Coord::new(3, 3)).unwrap();

    for origin in [Coord::new(8, 3), Coord::new(i8::MAX, i8::MAX), Coord::new(-1, -1)] {
        assert!(candidates_from(&board, queen, origin, MoveRules::default()).is_empty());
    }
}

#[test]
fn test_check_escape_by_capture_of_undefended_attacker() {
    //! Capturing the checking piece counts as an escape when nothing else
    //! reaches that square.
    let board = create_test_board(&[
        (PieceKind::King, Side::Black, (7, 7)),
        (PieceKind::Pawn, Side::Black, (6, 6)),
        (PieceKind::Pawn, Side::Black, (7, 6)),
        (PieceKind::Rook, Side::White, (6, 7)),
    ]);
    let report = king_state(&board, Side::Black, MoveRules::default()).unwrap();

    assert_eq!(report.state, KingState::Check);
    assert_eq!(
        report.escapes,
        vec![MoveCandidate::new(Coord::new(6, 7), MoveKind::Attack)]
    );
}

#[test]
fn test_check_missing_king() {
    let board = create_test_board(&[(PieceKind::Rook, Side::White, (0, 0))]);
    assert!(king_state(&board, Side::Black, MoveRules::default()).is_none());
}

#[test]
fn test_threatened_squares() {
    let board = create_test_board(&[
        (PieceKind::Rook, Side::White, (0, 0)),
        (PieceKind::Knight, Side::White, (0, 2)),
        (PieceKind::Pawn, Side::Black, (1, 4)),
    ]);

    let threatened = threatened_squares(&board, Side::White, MoveRules::default());
    assert!(threatened.contains(&Coord::new(1, 4)), "knight attacks the pawn");
    assert!(threatened.contains(&Coord::new(0, 1)));
    assert!(!threatened.contains(&Coord::new(0, 2)), "own pieces are not threats");
}

// ============================================================================
// Opening Tests
// ============================================================================

#[test]
fn test_opening_standard_layout() {
    let board = Opening::Standard.board().unwrap();

    assert_eq!(board.piece_count(), 32);
    assert_eq!(board.king(Side::White).unwrap().coord(), Coord::new(3, 0));
    assert_eq!(board.king(Side::Black).unwrap().coord(), Coord::new(3, 7));
    assert_eq!(
        board.piece_at(Coord::new(4, 0)).map(|p| p.kind),
        Some(PieceKind::Queen)
    );
    assert!(board.verify().is_ok());
}

#[test]
fn test_opening_blitz_layout() {
    let board = Opening::Blitz.board().unwrap();

    assert_eq!(board.piece_count(), 32);
    let at = |f, r| board.piece_at(Coord::new(f, r)).map(|p| (p.kind, p.side));
    assert_eq!(at(5, 3), Some((PieceKind::Bishop, Side::White)));
    assert_eq!(at(0, 4), Some((PieceKind::Queen, Side::White)));
    assert_eq!(at(3, 2), Some((PieceKind::Pawn, Side::White)));
    assert_eq!(at(7, 3), Some((PieceKind::Pawn, Side::Black)));
    assert_eq!(at(2, 0), None);
    assert_eq!(at(4, 0), None);
    assert_eq!(at(7, 6), None);
}

#[test]
fn test_board_display() {
    let board = Opening::Standard.board().unwrap();
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "7 rnbkqbnr");
    assert_eq!(lines[1], "6 pppppppp");
    assert_eq!(lines[7], "0 RNBKQBNR");
    assert_eq!(lines[8], "  01234567");
}
