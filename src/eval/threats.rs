use super::accumulator::EvalBuilder;
use super::config::Factor;
use super::context::{AttackMaps, EvalContext};
use super::params::{DEFENDED_ATTACKED_BASE, HANGING_BASE, PIECE_VALUE};
use super::position::Position;
use crate::bitboard::Bits;
use crate::board::{Color, Piece};
use crate::square::Square;

/// Pressure `sd` puts on enemy pieces. Runs after both sides' attack maps are complete.
pub(crate) fn score_hanging<P: Position>(
    ctx: &EvalContext<'_, P>,
    sd: Color,
    maps: &AttackMaps,
    acc: &mut EvalBuilder,
) {
    let pos = ctx.pos;
    let op = !sd;
    let (s, o) = (sd as usize, op as usize);
    let targets = pos.occupancy(op) & !pos.pieces(Piece::Pawn, op) & !pos.pieces(Piece::King, op);

    // undefended, or hit by a pawn where defence does not help
    let hanging = ((targets & !maps.all[o]) | (targets & maps.pawn_takes[s])) & maps.all[s];
    let defended = targets & maps.all[o] & maps.minor[s] & !hanging;

    for sq in Bits(hanging) {
        let v = value_at(pos, sq) / 64;
        acc.add(sd, Factor::Pressure, HANGING_BASE.mg + v, HANGING_BASE.eg + v);
    }
    for sq in Bits(defended) {
        let v = value_at(pos, sq) / 96;
        acc.add(sd, Factor::Pressure, DEFENDED_ATTACKED_BASE.mg + v, DEFENDED_ATTACKED_BASE.eg + v);
    }
}

#[inline(always)]
fn value_at<P: Position>(pos: &P, sq: u8) -> i32 {
    pos.piece_type_at(Square::from_index(sq)).map_or(0, |p| PIECE_VALUE[p as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::eval::config::EvalConfig;
    use crate::eval::pieces::score_pieces;
    use crate::eval::tables::Tables;
    use crate::eval::{EvalBuilder, Score};
    use std::str::FromStr;

    fn pressure(fen: &str, sd: Color) -> Score {
        let board = Board::from_str(fen).unwrap();
        let config = EvalConfig::default();
        let tables = Tables::new(&config);
        let ctx = EvalContext { pos: &board, tables: &tables, config: &config };
        let mut maps = AttackMaps::new(&board);
        let mut acc = EvalBuilder::new();
        for color in Color::ALL {
            score_pieces(&ctx, color, &mut maps, &mut acc);
        }
        score_hanging(&ctx, sd, &maps, &mut acc);
        acc.get(sd, Factor::Pressure)
    }

    #[test]
    fn undefended_piece_hangs() {
        // white rook hits the loose knight on d5
        let s = pressure("4k3/8/8/3n4/8/8/8/3RK3 w - - 0 1", Color::White);
        let v = PIECE_VALUE[Piece::Knight as usize] / 64;
        assert_eq!(s, Score::new(HANGING_BASE.mg + v, HANGING_BASE.eg + v));
    }

    #[test]
    fn pawn_attack_beats_defence() {
        // e6 pawn defends the d5 knight, the c4 pawn still wins it
        let s = pressure("4k3/8/4p3/3n4/2P5/8/8/4K3 w - - 0 1", Color::White);
        let v = PIECE_VALUE[Piece::Knight as usize] / 64;
        assert_eq!(s, Score::new(HANGING_BASE.mg + v, HANGING_BASE.eg + v));
    }

    #[test]
    fn defended_piece_under_minor_attack() {
        let s = pressure("4k3/8/4p3/3r4/8/4N3/8/4K3 w - - 0 1", Color::White);
        let v = PIECE_VALUE[Piece::Rook as usize] / 96;
        assert_eq!(s, Score::new(DEFENDED_ATTACKED_BASE.mg + v, DEFENDED_ATTACKED_BASE.eg + v));
    }

    #[test]
    fn pawns_and_kings_are_never_targets() {
        let s = pressure("4k3/8/8/3p4/8/8/8/3RK3 w - - 0 1", Color::White);
        assert_eq!(s, Score::ZERO);
    }
}
