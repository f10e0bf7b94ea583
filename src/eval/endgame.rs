//! Whole-position corrections: material imbalance, drawish material and mating help.

use super::config::EvalConfig;
use super::params::{IMBALANCE, PIECE_VALUE};
use super::position::Position;
use crate::bitboard::{BitboardExt, DARK_SQUARES, LIGHT_SQUARES};
use crate::board::{Color, Piece};
use crate::square::Square;
use crate::utils::manhattan_distance;

#[inline(always)]
fn majors<P: Position>(pos: &P, c: Color) -> i32 {
    pos.count(Piece::Rook, c) + 2 * pos.count(Piece::Queen, c)
}

#[inline(always)]
fn non_pawn_material<P: Position>(pos: &P, c: Color) -> i32 {
    [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen]
        .into_iter()
        .map(|p| pos.count(p, c) * PIECE_VALUE[p as usize])
        .sum()
}

/// White-relative correction for unequal major/minor trades.
pub(crate) fn imbalance<P: Position>(pos: &P, cfg: &EvalConfig) -> i32 {
    let major = (majors(pos, Color::White) - majors(pos, Color::Black)).clamp(-4, 4);
    let minor = (pos.minors(Color::White).popcnt() - pos.minors(Color::Black).popcnt()).clamp(-4, 4);
    IMBALANCE[(major + 4) as usize][(minor + 4) as usize] * cfg.material_pct / 100
}

/// Scale (out of 64) applied to the score when `sd` is ahead.
pub(crate) fn draw_factor<P: Position>(pos: &P, sd: Color) -> i32 {
    let op = !sd;

    if pos.count(Piece::Pawn, sd) == 0 {
        let edge = non_pawn_material(pos, sd) - non_pawn_material(pos, op);
        if edge <= PIECE_VALUE[Piece::Bishop as usize] {
            return 0;
        }
        if edge < PIECE_VALUE[Piece::Rook as usize] {
            return 16;
        }
    }

    let (ours, theirs) = (pos.pieces(Piece::Bishop, sd), pos.pieces(Piece::Bishop, op));
    if ours.popcnt() == 1 && theirs.popcnt() == 1 && (ours & DARK_SQUARES == 0) != (theirs & DARK_SQUARES == 0) {
        let queens = pos.pieces(Piece::Queen, sd) | pos.pieces(Piece::Queen, op);
        let others = pos.pieces(Piece::Knight, sd)
            | pos.pieces(Piece::Knight, op)
            | pos.pieces(Piece::Rook, sd)
            | pos.pieces(Piece::Rook, op);
        if queens == 0 {
            return if others == 0 { 32 } else { 48 };
        }
    }

    64
}

fn can_force_mate<P: Position>(pos: &P, c: Color) -> bool {
    let bishops = pos.pieces(Piece::Bishop, c);
    pos.count(Piece::Queen, c) > 0
        || pos.count(Piece::Rook, c) > 0
        || (bishops != 0 && pos.count(Piece::Knight, c) > 0)
        || (bishops & DARK_SQUARES != 0 && bishops & LIGHT_SQUARES != 0)
}

/// White-relative bonus for herding a bare king in pawnless endings.
pub(crate) fn checkmate_helper<P: Position>(pos: &P) -> i32 {
    if pos.pieces(Piece::Pawn, Color::White) | pos.pieces(Piece::Pawn, Color::Black) != 0 {
        return 0;
    }

    for strong in Color::ALL {
        let weak = !strong;
        if pos.occupancy(weak) != pos.pieces(Piece::King, weak) || !can_force_mate(pos, strong) {
            continue;
        }

        let wk = pos.king_square(weak);
        let sk = pos.king_square(strong);
        let bishops = pos.pieces(Piece::Bishop, strong);
        let knights = pos.pieces(Piece::Knight, strong);
        let kbn = bishops.popcnt() == 1
            && knights.popcnt() == 1
            && pos.straight_movers(strong) == 0;

        let edge = if kbn {
            // mate only happens in a corner of the bishop's colour
            let corners: [u8; 2] = if bishops & DARK_SQUARES != 0 { [0, 63] } else { [7, 56] };
            let nearest = corners.iter().map(|&c| manhattan_distance(wk.index(), c)).min().unwrap_or(14);
            14 - nearest
        } else {
            centre_distance(wk)
        };
        let proximity = 14 - manhattan_distance(wk.index(), sk.index());
        let v = 10 * edge + 4 * proximity;
        return if strong == Color::White { v } else { -v };
    }
    0
}

/// 2 in the centre, 14 in a corner.
#[inline(always)]
fn centre_distance(sq: Square) -> i32 {
    (2 * sq.rank() as i32 - 7).abs() + (2 * sq.file() as i32 - 7).abs()
}
