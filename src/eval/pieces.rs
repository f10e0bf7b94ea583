//! Piece activity: mobility, king attack, tropism, outposts, files and ranks,
//! plus material configuration.

use super::accumulator::EvalBuilder;
use super::config::Factor;
use super::context::{AttackMaps, EvalContext};
use super::params::*;
use super::position::Position;
use super::see::swap;
use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, rook_attacks};
use crate::bitboard::{BitboardExt, Bits, DARK_SQUARES, LIGHT_SQUARES, file_fill, relative_rank_mask, shift_forward};
use crate::board::{Color, Piece};
use crate::square::Square;

/// Squares a piece could check the enemy king from, plus the zone it attacks.
struct KingTarget {
    sq: u8,
    zone: u64,
    knight_checks: u64,
    straight_checks: u64,
    diag_checks: u64,
}

/// Running king attack tally for one side.
#[derive(Default)]
struct AttackTally {
    units: i32,
    attackers: i32,
}

impl KingTarget {
    fn new<P: Position>(ctx: &EvalContext<'_, P>, sd: Color) -> Self {
        let occ = ctx.pos.occupied();
        let sq = ctx.pos.king_square(!sd).index();
        KingTarget {
            sq,
            zone: ctx.tables.king_zone[sd as usize][sq as usize],
            knight_checks: knight_attacks(sq),
            straight_checks: rook_attacks(sq, occ),
            diag_checks: bishop_attacks(sq, occ),
        }
    }
}

/// Mobility ignores own pieces and squares enemy pawns control.
#[inline(always)]
fn mobility_area<P: Position>(pos: &P, sd: Color, maps: &AttackMaps) -> u64 {
    !pos.occupancy(sd) & !maps.pawn_takes[!sd as usize]
}

impl AttackTally {
    #[inline(always)]
    fn zone_hit(&mut self, piece: Piece, hits: u64) {
        if hits != 0 {
            self.attackers += 1;
            self.units += KING_ATT_UNITS[piece as usize] * hits.popcnt();
        }
    }
}

pub(crate) fn score_pieces<P: Position>(
    ctx: &EvalContext<'_, P>,
    sd: Color,
    maps: &mut AttackMaps,
    acc: &mut EvalBuilder,
) {
    let pos = ctx.pos;
    let target = KingTarget::new(ctx, sd);
    let mob_area = mobility_area(pos, sd, maps);

    let mut tally = AttackTally::default();

    score_material_config(ctx, sd, acc);
    score_knights(ctx, sd, &target, mob_area, maps, &mut tally, acc);
    score_bishops(ctx, sd, &target, mob_area, maps, &mut tally, acc);
    let rooks_on_7th = score_rooks(ctx, sd, &target, mob_area, maps, &mut tally, acc);
    score_queens(ctx, sd, &target, mob_area, maps, &mut tally, acc);

    if rooks_on_7th > 1 {
        acc.add_score(sd, Factor::Lines, TWO_ROOKS_ON_7TH);
    }

    // needs two attackers and a queen
    if tally.attackers > 1 && pos.count(Piece::Queen, sd) > 0 {
        let units = (tally.units.max(0) as usize).min(MAX_ATT_UNITS);
        let danger = ctx.tables.danger[units];
        acc.add(sd, Factor::Attack, danger, danger);
    }
}

/// Pawn-count adjustments, piece pairs and the queen-versus-minors imbalance.
fn score_material_config<P: Position>(ctx: &EvalContext<'_, P>, sd: Color, acc: &mut EvalBuilder) {
    let pos = ctx.pos;
    let op = !sd;
    let mat = ctx.config.material_pct;
    let pawns = pos.count(Piece::Pawn, sd).clamp(0, 8) as usize;
    let knights = pos.count(Piece::Knight, sd);
    let rooks = pos.count(Piece::Rook, sd);

    let mut tmp = N_PAWN_ADJ * PAWN_COUNT_ADJ[pawns] * knights - R_PAWN_ADJ * PAWN_COUNT_ADJ[pawns] * rooks;
    if knights > 1 {
        tmp += KNIGHT_PAIR;
    }
    if rooks > 1 {
        tmp += ROOK_PAIR;
    }
    if pos.count(Piece::Queen, sd) > 0 {
        tmp -= QUEEN_VS_MINOR * pos.minors(op).popcnt();
    }
    let tmp = tmp * mat / 100;
    acc.add(sd, Factor::Others, tmp, tmp);

    if pos.count(Piece::Bishop, sd) > 1 {
        acc.add_score(sd, Factor::Others, BISHOP_PAIR.percent(mat));
    }
}

fn score_knights<P: Position>(
    ctx: &EvalContext<'_, P>,
    sd: Color,
    target: &KingTarget,
    mob_area: u64,
    maps: &mut AttackMaps,
    tally: &mut AttackTally,
    acc: &mut EvalBuilder,
) {
    let t = ctx.tables;
    for sq in Bits(ctx.pos.pieces(Piece::Knight, sd)) {
        acc.add_score(sd, Factor::Tropism, TROPISM[Piece::Knight as usize] * t.dist[sq as usize][target.sq as usize]);

        let attacks = knight_attacks(sq);
        maps.all[sd as usize] |= attacks;
        maps.minor[sd as usize] |= attacks;

        let mob = attacks & mob_area;
        acc.add_score(sd, Factor::Mobility, t.mobility(Piece::Knight, mob.popcnt()));
        if mob & target.knight_checks != 0 {
            tally.units += CHECK_THREAT[Piece::Knight as usize];
        }
        tally.zone_hit(Piece::Knight, attacks & target.zone);

        score_outpost(ctx, sd, maps, 0, sq, acc);
        score_behind_pawn(ctx, sd, sq, acc);
    }
}

fn score_bishops<P: Position>(
    ctx: &EvalContext<'_, P>,
    sd: Color,
    target: &KingTarget,
    mob_area: u64,
    maps: &mut AttackMaps,
    tally: &mut AttackTally,
    acc: &mut EvalBuilder,
) {
    let pos = ctx.pos;
    let t = ctx.tables;
    let op = !sd;
    let occ = pos.occupied();
    let own_pawns = pos.pieces(Piece::Pawn, sd);
    let their_pawns = pos.pieces(Piece::Pawn, op);

    for sq in Bits(pos.pieces(Piece::Bishop, sd)) {
        acc.add_score(sd, Factor::Tropism, TROPISM[Piece::Bishop as usize] * t.dist[sq as usize][target.sq as usize]);

        let attacks = bishop_attacks(sq, occ);
        maps.all[sd as usize] |= attacks;
        maps.minor[sd as usize] |= attacks;

        if attacks & t.away[sd as usize] == 0 {
            acc.add_score(sd, Factor::Mobility, BISHOP_CONFINED);
        }

        let mob = attacks & mob_area;
        acc.add_score(sd, Factor::Mobility, t.mobility(Piece::Bishop, mob.popcnt()));
        if mob & target.diag_checks != 0 {
            tally.units += CHECK_THREAT[Piece::Bishop as usize];
        }
        // see through own queens
        let xray = bishop_attacks(sq, occ ^ pos.pieces(Piece::Queen, sd));
        tally.zone_hit(Piece::Bishop, xray & target.zone);

        score_outpost(ctx, sd, maps, 1, sq, acc);
        score_behind_pawn(ctx, sd, sq, acc);

        let same_color = if Square::from_index(sq).is_dark() { DARK_SQUARES } else { LIGHT_SQUARES };
        let own = (own_pawns & same_color).popcnt() - 4;
        let theirs = (their_pawns & same_color).popcnt() - 4;
        let v = -3 * own - theirs;
        acc.add(sd, Factor::Others, v, v);
    }
}

/// Returns the number of rooks on the seventh rank.
fn score_rooks<P: Position>(
    ctx: &EvalContext<'_, P>,
    sd: Color,
    target: &KingTarget,
    mob_area: u64,
    maps: &mut AttackMaps,
    tally: &mut AttackTally,
    acc: &mut EvalBuilder,
) -> i32 {
    let pos = ctx.pos;
    let t = ctx.tables;
    let op = !sd;
    let occ = pos.occupied();
    let own_pawns = pos.pieces(Piece::Pawn, sd);
    let their_pawns = pos.pieces(Piece::Pawn, op);
    let their_queens = pos.pieces(Piece::Queen, op);
    let mut on_7th = 0;

    for sq in Bits(pos.pieces(Piece::Rook, sd)) {
        acc.add_score(sd, Factor::Tropism, TROPISM[Piece::Rook as usize] * t.dist[sq as usize][target.sq as usize]);

        let attacks = rook_attacks(sq, occ);
        maps.all[sd as usize] |= attacks;

        let mob = attacks & mob_area;
        acc.add_score(sd, Factor::Mobility, t.mobility(Piece::Rook, mob.popcnt()));
        if mob & target.straight_checks != 0 {
            tally.units += CHECK_THREAT[Piece::Rook as usize];
            let contact = attacks & king_attacks(target.sq) & target.straight_checks & !pos.occupancy(sd);
            if has_safe_contact(ctx, sq, contact) {
                tally.units += ROOK_CONTACT_CHECK;
            }
        }
        // see through own rooks and queens
        let xray = rook_attacks(sq, occ ^ pos.straight_movers(sd));
        tally.zone_hit(Piece::Rook, xray & target.zone);

        let file = file_fill(1u64 << sq);
        if file & their_queens != 0 {
            acc.add_score(sd, Factor::Lines, ROOK_ON_QUEEN_FILE);
        }
        if file & own_pawns == 0 {
            let blockers = file & their_pawns;
            if blockers == 0 {
                acc.add_score(sd, Factor::Lines, ROOK_OPEN);
            } else if blockers & maps.pawn_takes[op as usize] != 0 {
                acc.add_score(sd, Factor::Lines, ROOK_HALF_OPEN_BAD);
            } else {
                acc.add_score(sd, Factor::Lines, ROOK_HALF_OPEN);
            }
        }

        if on_seventh(ctx, sd, sq) {
            acc.add_score(sd, Factor::Lines, ROOK_ON_7TH);
            on_7th += 1;
        }
    }
    on_7th
}

fn score_queens<P: Position>(
    ctx: &EvalContext<'_, P>,
    sd: Color,
    target: &KingTarget,
    mob_area: u64,
    maps: &mut AttackMaps,
    tally: &mut AttackTally,
    acc: &mut EvalBuilder,
) {
    let pos = ctx.pos;
    let t = ctx.tables;
    let op = !sd;
    let occ = pos.occupied();
    let their_queens = pos.pieces(Piece::Queen, op);

    for sq in Bits(pos.pieces(Piece::Queen, sd)) {
        acc.add_score(sd, Factor::Tropism, TROPISM[Piece::Queen as usize] * t.dist[sq as usize][target.sq as usize]);

        let attacks = bishop_attacks(sq, occ) | rook_attacks(sq, occ);
        maps.all[sd as usize] |= attacks;

        let mob = attacks & mob_area;
        acc.add_score(sd, Factor::Mobility, t.mobility(Piece::Queen, mob.popcnt()));
        if mob & (target.straight_checks | target.diag_checks) != 0 {
            tally.units += CHECK_THREAT[Piece::Queen as usize];
            let contact = attacks & king_attacks(target.sq) & !pos.occupancy(sd);
            if has_safe_contact(ctx, sq, contact) {
                tally.units += QUEEN_CONTACT_CHECK;
            }
        }
        let xray = bishop_attacks(sq, occ ^ pos.diag_movers(sd)) | rook_attacks(sq, occ ^ pos.straight_movers(sd));
        tally.zone_hit(Piece::Queen, xray & target.zone);

        if file_fill(1u64 << sq) & their_queens != 0 {
            acc.add_score(sd, Factor::Lines, QUEEN_ON_QUEEN_FILE);
        }
        if on_seventh(ctx, sd, sq) {
            acc.add_score(sd, Factor::Lines, QUEEN_ON_7TH);
        }
    }
}

/// Any contact check from `from` that does not lose material.
fn has_safe_contact<P: Position>(ctx: &EvalContext<'_, P>, from: u8, contact: u64) -> bool {
    let from = Square::from_index(from);
    Bits(contact).any(|to| swap(ctx.pos, from, Square::from_index(to)) >= 0)
}

/// Seventh rank counts when it holds enemy pawns or cuts off the enemy king.
fn on_seventh<P: Position>(ctx: &EvalContext<'_, P>, sd: Color, sq: u8) -> bool {
    let pos = ctx.pos;
    let op = !sd;
    if Square::from_index(sq).relative_rank(sd) != 6 {
        return false;
    }
    pos.pieces(Piece::Pawn, op) & relative_rank_mask(sd, 6) != 0
        || pos.pieces(Piece::King, op) & relative_rank_mask(sd, 7) != 0
}

/// `minor` is 0 for knights, 1 for bishops.
fn score_outpost<P: Position>(
    ctx: &EvalContext<'_, P>,
    sd: Color,
    maps: &AttackMaps,
    minor: usize,
    sq: u8,
    acc: &mut EvalBuilder,
) {
    let base = ctx.tables.outpost[sd as usize][minor][sq as usize];
    if base == 0 {
        return;
    }
    let bb = 1u64 << sq;
    let mut mul = 0;
    if bb & !maps.pawn_can_take[!sd as usize] != 0 {
        mul += 2;
    }
    if bb & maps.pawn_takes[sd as usize] != 0 {
        mul += 1;
    }
    if bb & maps.two_pawns_take[sd as usize] != 0 {
        mul += 1;
    }
    let v = base * mul / 2;
    acc.add(sd, Factor::Outposts, v, v);
}

fn score_behind_pawn<P: Position>(ctx: &EvalContext<'_, P>, sd: Color, sq: u8, acc: &mut EvalBuilder) {
    let bb = 1u64 << sq;
    if bb & ctx.tables.home[sd as usize] != 0 && shift_forward(bb, sd) & ctx.pos.pieces(Piece::Pawn, sd) != 0 {
        acc.add_score(sd, Factor::Outposts, MINOR_BEHIND_PAWN);
    }
}
