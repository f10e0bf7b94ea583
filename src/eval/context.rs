use super::config::EvalConfig;
use super::position::Position;
use super::tables::Tables;
use crate::attacks::king_attacks;
use crate::bitboard::{pawn_control, pawn_double_control, pawn_reach};
use crate::board::{Color, Piece};

/// Read-only inputs shared by every scoring pass of one evaluation.
pub(crate) struct EvalContext<'a, P: Position> {
    pub pos: &'a P,
    pub tables: &'a Tables,
    pub config: &'a EvalConfig,
}

/// Attack maps built up during one evaluation, indexed by color.
#[derive(Debug, Clone, Default)]
pub(crate) struct AttackMaps {
    pub pawn_takes: [u64; 2],
    pub two_pawns_take: [u64; 2],
    /// Squares own pawns attack now or after advancing.
    pub pawn_can_take: [u64; 2],
    /// Everything attacked so far, own pieces included. Starts as pawns and king.
    pub all: [u64; 2],
    /// Knight and bishop attacks.
    pub minor: [u64; 2],
}

impl AttackMaps {
    pub fn new<P: Position>(pos: &P) -> Self {
        let mut maps = AttackMaps::default();
        for color in Color::ALL {
            let c = color as usize;
            let pawns = pos.pieces(Piece::Pawn, color);
            maps.pawn_takes[c] = pawn_control(pawns, color);
            maps.two_pawns_take[c] = pawn_double_control(pawns, color);
            maps.pawn_can_take[c] = pawn_reach(pawns, color);
            maps.all[c] = maps.pawn_takes[c] | king_attacks(pos.king_square(color).index());
        }
        maps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::square::Square;
    use std::str::FromStr;

    #[test]
    fn seeds_pawn_and_king_control() {
        let b = Board::from_str("4k3/8/8/8/8/8/3PP3/4K3 w - - 0 1").unwrap();
        let maps = AttackMaps::new(&b);
        let w = Color::White as usize;
        let d3 = Square::from_str("d3").unwrap().bb();
        let e3 = Square::from_str("e3").unwrap().bb();
        let f2 = Square::from_str("f2").unwrap().bb();
        assert_eq!(maps.two_pawns_take[w], 0);
        assert!(maps.pawn_takes[w] & d3 != 0);
        assert!(maps.all[w] & f2 != 0, "king ring");
        assert!(maps.pawn_can_take[w] & Square::from_str("c7").unwrap().bb() != 0);
        assert!(maps.pawn_takes[w] & e3 != 0);
        assert_eq!(maps.minor[w], 0);
    }
}
