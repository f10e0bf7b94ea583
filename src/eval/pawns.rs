//! Pawn structure and king shelter.

use super::accumulator::EvalBuilder;
use super::config::Factor;
use super::context::{AttackMaps, EvalContext};
use super::params::*;
use super::position::Position;
use crate::bitboard::{Bits, FILE_A, front_span, shift_east, shift_forward};
use crate::board::{Color, Piece};
use crate::square::Square;

pub(crate) fn score_pawn_structure<P: Position>(
    ctx: &EvalContext<'_, P>,
    sd: Color,
    maps: &AttackMaps,
    acc: &mut EvalBuilder,
) {
    let pos = ctx.pos;
    let t = ctx.tables;
    let op = !sd;
    let own_pawns = pos.pieces(Piece::Pawn, sd);
    let their_pawns = pos.pieces(Piece::Pawn, op);

    for sq in Bits(own_pawns) {
        let bb = 1u64 << sq;
        let s = sq as usize;
        let unopposed = front_span(bb, sd) & their_pawns == 0;

        if front_span(bb, sd) & own_pawns != 0 {
            acc.add_score(sd, Factor::Pawns, DOUBLED);
        }
        // scored once per pair, on the western pawn
        if shift_east(bb) & own_pawns != 0 {
            acc.add_score(sd, Factor::Pawns, t.phalanx[sd as usize][s]);
        }
        if bb & maps.pawn_takes[sd as usize] != 0 {
            acc.add_score(sd, Factor::Pawns, t.defended[sd as usize][s]);
        }

        let file = Square::from_index(sq).file() as usize;
        if t.adjacent_files[file] & own_pawns == 0 {
            acc.add_score(sd, Factor::Pawns, ISOLATED);
            if unopposed {
                acc.add_score(sd, Factor::Pawns, ISOLATED_OPEN);
            }
        } else if t.support_mask[sd as usize][s] & own_pawns == 0
            && shift_forward(bb, sd) & maps.pawn_takes[op as usize] != 0
        {
            acc.add_score(sd, Factor::Pawns, BACKWARD);
            if unopposed {
                acc.add_score(sd, Factor::Pawns, BACKWARD_OPEN);
            }
        }
    }
}

/// Pawn closest to `sd`'s back rank in `bb`, as a relative rank. 0 when empty.
#[inline(always)]
fn nearest_rank(bb: u64, sd: Color) -> usize {
    if bb == 0 {
        return 0;
    }
    let sq = match sd {
        Color::White => bb.trailing_zeros(),
        Color::Black => 63 - bb.leading_zeros(),
    };
    Square::from_index(sq as u8).relative_rank(sd) as usize
}

/// Shield and storm on the king file and its neighbours. Midgame only.
pub(crate) fn score_king_shelter<P: Position>(ctx: &EvalContext<'_, P>, sd: Color, acc: &mut EvalBuilder) {
    let pos = ctx.pos;
    let own_pawns = pos.pieces(Piece::Pawn, sd);
    let their_pawns = pos.pieces(Piece::Pawn, !sd);
    let kf = pos.king_square(sd).file();

    let mut total = 0;
    for f in kf.saturating_sub(1)..=(kf + 1).min(7) {
        let file = FILE_A << f;
        total += SHELTER[nearest_rank(file & own_pawns, sd)];
        total += STORM[nearest_rank(file & their_pawns, sd)];
    }
    acc.add(sd, Factor::Pawns, total, 0);
}
