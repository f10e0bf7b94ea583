use super::params::SEE_VALUE;
use super::position::Position;
use crate::attacks::attacks_to_through;
use crate::bitboard::BitboardExt;
use crate::board::{Color, Piece};
use crate::square::Square;
use arrayvec::ArrayVec;

/// Least valuable piece of `side` among `attackers`.
fn least_valuable<P: Position>(pos: &P, attackers: u64, side: Color) -> Option<(u8, Piece)> {
    let ours = attackers & pos.occupancy(side);
    if ours == 0 {
        return None;
    }
    Piece::ALL.into_iter().find_map(|piece| {
        let subset = ours & pos.pieces(piece, side);
        (subset != 0).then(|| (subset.lsb(), piece))
    })
}

/// Static exchange outcome, in centipawns for the mover, of moving the piece on
/// `from` to `to` and letting both sides recapture with their cheapest piece.
/// Works for quiet moves too (the first gain is then zero).
/// Returns 0 when `from` is empty.
pub fn swap<P: Position>(pos: &P, from: Square, to: Square) -> i32 {
    let (Some(mover), Some(side)) = (pos.piece_type_at(from), pos.color_at(from)) else {
        return 0;
    };

    let mut gain: ArrayVec<i32, 32> = ArrayVec::new();
    gain.push(pos.piece_type_at(to).map_or(0, |p| SEE_VALUE[p as usize]));

    let mut occ = pos.occupied() & !from.bb();
    let mut on_square = SEE_VALUE[mover as usize];
    let mut stm = !side;

    loop {
        let attackers = attacks_to_through(pos, to, occ) & occ;
        let Some((sq, piece)) = least_valuable(pos, attackers, stm) else {
            break;
        };
        if gain.is_full() {
            break;
        }
        let last = gain.last().copied().unwrap_or(0);
        gain.push(on_square - last);
        on_square = SEE_VALUE[piece as usize];
        occ &= !(1u64 << sq);
        stm = !stm;
    }

    while gain.len() > 1 {
        let deeper = gain.pop().unwrap_or(0);
        if let Some(prev) = gain.last_mut() {
            *prev = -(-*prev).max(deeper);
        }
    }
    gain[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use std::str::FromStr;

    fn sq(name: &str) -> Square {
        Square::from_str(name).unwrap()
    }

    #[test]
    fn free_capture_wins_the_piece() {
        let b = Board::from_str("4k3/8/8/3r4/8/8/8/3RK3 w - - 0 1").unwrap();
        assert_eq!(swap(&b, sq("d1"), sq("d5")), 500);
    }

    #[test]
    fn defended_pawn_costs_the_queen() {
        let b = Board::from_str("4k3/2p5/3p4/8/8/8/8/3QK3 w - - 0 1").unwrap();
        assert_eq!(swap(&b, sq("d1"), sq("d6")), 100 - 975);
    }

    #[test]
    fn xray_recapture_counts() {
        // Rxd5 Rxd5 Rxd5: the doubled white rook wins the exchange back
        let b = Board::from_str("3rk3/8/8/3p4/8/8/3R4/3RK3 w - - 0 1").unwrap();
        assert_eq!(swap(&b, sq("d2"), sq("d5")), 100);
    }

    #[test]
    fn quiet_move_onto_attacked_square() {
        let b = Board::from_str("4k3/8/2p5/8/8/8/8/3QK3 w - - 0 1").unwrap();
        assert_eq!(swap(&b, sq("d1"), sq("d4")), 0);
        assert_eq!(swap(&b, sq("d1"), sq("d5")), -975);
        assert_eq!(swap(&b, sq("d1"), sq("b5")), -975);
    }

    #[test]
    fn king_cannot_recapture_into_defence() {
        // Qxf7+ is backed by the bishop, so the king may not take back
        let b = Board::from_str("4k3/5p2/8/8/2B5/8/8/3QK2Q w - - 0 1").unwrap();
        assert_eq!(swap(&b, sq("h1"), sq("f7")), 100);
        let lone = Board::from_str("4k3/5p2/8/7Q/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(swap(&lone, sq("h5"), sq("f7")), -875);
    }

    #[test]
    fn empty_origin_is_neutral() {
        let b = Board::new();
        assert_eq!(swap(&b, sq("e4"), sq("e5")), 0);
    }
}
