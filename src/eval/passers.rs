//! Passed pawns and pawn races.

use super::accumulator::EvalBuilder;
use super::config::Factor;
use super::context::{AttackMaps, EvalContext};
use super::params::*;
use super::position::Position;
use crate::bitboard::{BitboardExt, Bits, front_span, shift_forward};
use crate::board::{Color, Piece};
use crate::square::Square;
use crate::utils::chebyshev_distance;

#[inline(always)]
fn is_passed<P: Position>(ctx: &EvalContext<'_, P>, sd: Color, sq: u8) -> bool {
    ctx.tables.passed_mask[sd as usize][sq as usize] & ctx.pos.pieces(Piece::Pawn, !sd) == 0
}

pub(crate) fn score_passers<P: Position>(
    ctx: &EvalContext<'_, P>,
    sd: Color,
    maps: &AttackMaps,
    acc: &mut EvalBuilder,
) {
    let pos = ctx.pos;
    let op = !sd;
    let their_king = pos.king_square(op).idx();

    for sq in Bits(pos.pieces(Piece::Pawn, sd)) {
        if !is_passed(ctx, sd, sq) {
            continue;
        }
        let stop = shift_forward(1u64 << sq, sd);
        if stop == 0 {
            continue;
        }
        let rank = Square::from_index(sq).relative_rank(sd) as usize;
        let mg = PASSED_MG[rank];
        let mut eg = PASSED_EG[rank];
        eg -= eg * ctx.tables.dist[stop.lsb() as usize][their_king] / 30;

        let pct = if stop & pos.occupied() != 0 {
            PASSER_BLOCKED_PCT
        } else if stop & maps.all[sd as usize] != 0 && stop & maps.all[op as usize] == 0 {
            PASSER_FREE_PCT
        } else {
            100
        };
        acc.add(sd, Factor::Passers, mg * pct / 100, eg * pct / 100);
    }
}

/// Fewest moves `sd` needs to queen a passer the enemy king cannot catch, if any.
fn fastest_runner<P: Position>(ctx: &EvalContext<'_, P>, sd: Color) -> Option<i32> {
    let pos = ctx.pos;
    let op = !sd;
    let defender = pos.king_square(op).index();
    let own_king = pos.pieces(Piece::King, sd);
    let tempo = i32::from(pos.side_to_move() == op);

    Bits(pos.pieces(Piece::Pawn, sd))
        .filter(|&sq| is_passed(ctx, sd, sq))
        .filter_map(|sq| {
            let promo = Square::from_file_rank(Square::from_index(sq).file(), 7).relative(sd).index();
            let mut dist = chebyshev_distance(sq, promo).min(5);
            if dist >= chebyshev_distance(defender, promo) - tempo {
                return None;
            }
            // own king in the way costs a move
            if front_span(1u64 << sq, sd) & own_king != 0 {
                dist += 1;
            }
            Some(dist)
        })
        .min()
}

/// Pawn-only endings: a passer the king cannot catch wins outright, unless the
/// other side has one too.
pub(crate) fn score_unstoppable<P: Position>(ctx: &EvalContext<'_, P>, acc: &mut EvalBuilder) {
    let pos = ctx.pos;
    if !pos.has_no_pieces(Color::White) || !pos.has_no_pieces(Color::Black) {
        return;
    }
    match (fastest_runner(ctx, Color::White), fastest_runner(ctx, Color::Black)) {
        (Some(_), None) => acc.add(Color::White, Factor::Passers, 0, UNSTOPPABLE_PASSER),
        (None, Some(_)) => acc.add(Color::Black, Factor::Passers, 0, UNSTOPPABLE_PASSER),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::eval::config::EvalConfig;
    use crate::eval::tables::Tables;
    use crate::eval::Score;
    use std::str::FromStr;

    fn run(fen: &str) -> EvalBuilder {
        let board = Board::from_str(fen).unwrap();
        let config = EvalConfig::default();
        let tables = Tables::new(&config);
        let ctx = EvalContext { pos: &board, tables: &tables, config: &config };
        let maps = AttackMaps::new(&board);
        let mut acc = EvalBuilder::new();
        for sd in Color::ALL {
            score_passers(&ctx, sd, &maps, &mut acc);
        }
        score_unstoppable(&ctx, &mut acc);
        acc
    }

    #[test]
    fn advanced_free_passer_beats_blocked_one() {
        // e7 pawn escorted by the king on d7; black king far away
        let free = run("8/3KP3/8/8/8/8/8/k7 w - - 0 1").get(Color::White, Factor::Passers);
        // e2 pawn blocked on e3
        let blocked = run("k7/8/8/8/8/4n3/4P3/4K3 w - - 0 1").get(Color::White, Factor::Passers);
        assert!(free.eg > blocked.eg);
        assert!(free.mg > blocked.mg);
    }

    #[test]
    fn opposed_pawn_is_not_passed() {
        let acc = run("4k3/3p4/8/8/4P3/8/8/4K3 w - - 0 1");
        assert_eq!(acc.get(Color::White, Factor::Passers), Score::ZERO);
    }

    #[test]
    fn king_far_from_stop_square_helps() {
        let near = run("8/8/4k3/8/4P3/8/8/K7 w - - 0 1").get(Color::White, Factor::Passers);
        let far = run("k7/8/8/8/4P3/8/8/K7 w - - 0 1").get(Color::White, Factor::Passers);
        assert!(far.eg > near.eg);
    }

    #[test]
    fn runaway_pawn_is_unstoppable() {
        let acc = run("8/4P3/8/8/8/8/8/k6K w - - 0 1");
        assert!(acc.get(Color::White, Factor::Passers).eg >= UNSTOPPABLE_PASSER);
    }

    #[test]
    fn black_runner_counts_too() {
        let acc = run("K6k/8/8/8/8/8/3p4/8 b - - 0 1");
        assert!(acc.get(Color::Black, Factor::Passers).eg >= UNSTOPPABLE_PASSER);
        assert!(acc.get(Color::White, Factor::Passers).eg < UNSTOPPABLE_PASSER);
    }

    #[test]
    fn mutual_runners_cancel() {
        let acc = run("7k/P7/8/8/8/8/7p/K7 w - - 0 1");
        assert!(acc.get(Color::White, Factor::Passers).eg < UNSTOPPABLE_PASSER);
        assert!(acc.get(Color::Black, Factor::Passers).eg < UNSTOPPABLE_PASSER);
    }

    #[test]
    fn king_in_reach_stops_the_runner() {
        let acc = run("4k3/8/8/8/4P3/8/8/K7 b - - 0 1");
        assert!(acc.get(Color::White, Factor::Passers).eg < UNSTOPPABLE_PASSER);
    }

    #[test]
    fn pieces_on_board_disable_the_race() {
        let acc = run("8/4P3/8/8/8/8/8/k5NK w - - 0 1");
        assert!(acc.get(Color::White, Factor::Passers).eg < UNSTOPPABLE_PASSER);
    }
}
