use burrow::board::{Board, Color, Piece, START_FEN};
use burrow::eval::{Evaluator, Position};
use burrow::hash::zobrist::zobrist_keys;
use burrow::square::Square;
use std::str::FromStr;

#[test]
fn fen_round_trip_and_validation() {
    let b = Board::from_str(START_FEN).unwrap();
    assert_eq!(b.to_fen(), START_FEN);
    assert!(b.validate().is_ok());
    assert!(Board::from_str("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1").is_err());
}

#[test]
fn hash_depends_on_every_field() {
    let base = Board::from_str("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let no_castle = Board::from_str("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
    let moved = Board::from_str("r3k2r/8/8/8/8/8/8/R3K1R1 w Qkq - 0 1").unwrap();
    assert_ne!(base.zobrist, no_castle.zobrist);
    assert_ne!(base.zobrist, moved.zobrist);
    assert_eq!(base.zobrist, base.compute_zobrist_full());
    assert_ne!(zobrist_keys().side_to_move, 0);
}

#[test]
fn mirror_swaps_sides() {
    let b = Board::from_str("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
    let m = b.mirrored();
    assert_eq!(m.side_to_move, Color::Black);
    assert_eq!(m.piece_at(Square::from_str("e7").unwrap()), Some((Color::Black, Piece::Pawn)));
    assert_eq!(m.to_fen(), "4k3/4p3/8/8/8/8/8/4K3 b - - 0 1");
}

#[test]
fn refresh_pst_fills_both_sides() {
    let eval = Evaluator::default();
    let mut b = Board::new();
    eval.refresh_pst(&mut b);
    assert_eq!(Position::pst(&b, Color::White), Position::pst(&b, Color::Black));
    assert!(Position::pst(&b, Color::White).mg > 3_900);
}
