//! Fixed piece configurations that the general terms misjudge.

use super::accumulator::EvalBuilder;
use super::config::Factor;
use super::params::{BLOCKED_CENTRAL_BISHOP, KING_BLOCKS_ROOK, TRAPPED_BISHOP, TRAPPED_KNIGHT};
use super::position::Position;
use super::Score;
use crate::board::{Color, Piece};
use crate::square::Square;

/// Squares given from white's side, a1 = 0.
struct Pattern {
    /// Own piece and where it stands.
    piece: (Piece, u8),
    /// Any of these own pieces.
    own: &'static [(Piece, u8)],
    /// Any of these enemy pieces.
    theirs: &'static [(Piece, u8)],
    /// Square that must be occupied by anything.
    blocked: Option<u8>,
    score: Score,
}

const A7: u8 = 48;
const H7: u8 = 55;
const B6: u8 = 41;
const G6: u8 = 46;
const A8: u8 = 56;
const H8: u8 = 63;
const C7: u8 = 50;
const F7: u8 = 53;
const C1: u8 = 2;
const D2: u8 = 11;
const D3: u8 = 19;
const F1: u8 = 5;
const E2: u8 = 12;
const E3: u8 = 20;
const G1: u8 = 6;
const H1: u8 = 7;

const PATTERNS: &[Pattern] = &[
    Pattern { piece: (Piece::Bishop, A7), own: &[], theirs: &[(Piece::Pawn, B6)], blocked: None, score: TRAPPED_BISHOP },
    Pattern { piece: (Piece::Bishop, H7), own: &[], theirs: &[(Piece::Pawn, G6)], blocked: None, score: TRAPPED_BISHOP },
    Pattern {
        piece: (Piece::Knight, A8),
        own: &[],
        theirs: &[(Piece::Pawn, A7), (Piece::Pawn, C7)],
        blocked: None,
        score: TRAPPED_KNIGHT,
    },
    Pattern {
        piece: (Piece::Knight, H8),
        own: &[],
        theirs: &[(Piece::Pawn, H7), (Piece::Pawn, F7)],
        blocked: None,
        score: TRAPPED_KNIGHT,
    },
    Pattern {
        piece: (Piece::Bishop, C1),
        own: &[(Piece::Pawn, D2)],
        theirs: &[],
        blocked: Some(D3),
        score: BLOCKED_CENTRAL_BISHOP,
    },
    Pattern {
        piece: (Piece::Bishop, F1),
        own: &[(Piece::Pawn, E2)],
        theirs: &[],
        blocked: Some(E3),
        score: BLOCKED_CENTRAL_BISHOP,
    },
    Pattern {
        piece: (Piece::King, F1),
        own: &[(Piece::Rook, G1), (Piece::Rook, H1)],
        theirs: &[],
        blocked: None,
        score: KING_BLOCKS_ROOK,
    },
    Pattern { piece: (Piece::King, G1), own: &[(Piece::Rook, H1)], theirs: &[], blocked: None, score: KING_BLOCKS_ROOK },
];

/// Any of `list` owned by `owner`, squares mirrored for `view`. Empty lists match.
#[inline(always)]
fn any_on<P: Position>(pos: &P, owner: Color, view: Color, list: &[(Piece, u8)]) -> bool {
    list.is_empty()
        || list
            .iter()
            .any(|&(p, sq)| pos.pieces(p, owner) & Square::from_index(sq).relative(view).bb() != 0)
}

pub(crate) fn score_patterns<P: Position>(pos: &P, sd: Color, acc: &mut EvalBuilder) {
    for pat in PATTERNS {
        if !any_on(pos, sd, sd, std::slice::from_ref(&pat.piece)) {
            continue;
        }
        let blocked = pat
            .blocked
            .is_none_or(|sq| pos.occupied() & Square::from_index(sq).relative(sd).bb() != 0);
        if blocked && any_on(pos, sd, sd, pat.own) && any_on(pos, !sd, sd, pat.theirs) {
            acc.add_score(sd, Factor::Others, pat.score);
        }
    }
}
