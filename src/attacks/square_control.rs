use crate::attacks::leapers::{king_attacks, knight_attacks, pawn_attacks};
use crate::attacks::magic::{bishop_attacks, queen_attacks, rook_attacks};
use crate::board::{Color, Piece};
use crate::eval::Position;
use crate::square::Square;

/// Attack set of whatever stands on `sq`, empty when the square is empty.
/// Sliders stop at (and include) the first blocker.
pub fn attacks_from<P: Position>(pos: &P, sq: Square) -> u64 {
    let s = sq.index();
    match pos.piece_type_at(sq) {
        None => 0,
        Some(Piece::Pawn) => {
            let color = if pos.occupancy(Color::White) & sq.bb() != 0 {
                Color::White
            } else {
                Color::Black
            };
            pawn_attacks(s, color)
        }
        Some(Piece::Knight) => knight_attacks(s),
        Some(Piece::Bishop) => bishop_attacks(s, pos.occupied()),
        Some(Piece::Rook) => rook_attacks(s, pos.occupied()),
        Some(Piece::Queen) => queen_attacks(s, pos.occupied()),
        Some(Piece::King) => king_attacks(s),
    }
}

/// Pieces of `side` attacking `sq`.
pub fn attackers_of<P: Position>(pos: &P, sq: Square, side: Color) -> u64 {
    let s = sq.index();
    let occ = pos.occupied();
    (pos.pieces(Piece::Pawn, side) & pawn_attacks(s, !side))
        | (pos.pieces(Piece::Knight, side) & knight_attacks(s))
        | (pos.diag_movers(side) & bishop_attacks(s, occ))
        | (pos.straight_movers(side) & rook_attacks(s, occ))
        | (pos.pieces(Piece::King, side) & king_attacks(s))
}

/// Attackers of `sq` from both sides.
pub fn attacks_to<P: Position>(pos: &P, sq: Square) -> u64 {
    attacks_to_through(pos, sq, pos.occupied())
}

/// Attackers of `sq` from both sides with sliders blocked only by `occ`.
/// Pieces missing from `occ` still show up; callers mask them out.
pub fn attacks_to_through<P: Position>(pos: &P, sq: Square, occ: u64) -> u64 {
    let s = sq.index();
    let diag = pos.diag_movers(Color::White) | pos.diag_movers(Color::Black);
    let straight = pos.straight_movers(Color::White) | pos.straight_movers(Color::Black);
    (pos.pieces(Piece::Pawn, Color::White) & pawn_attacks(s, Color::Black))
        | (pos.pieces(Piece::Pawn, Color::Black) & pawn_attacks(s, Color::White))
        | ((pos.pieces(Piece::Knight, Color::White) | pos.pieces(Piece::Knight, Color::Black)) & knight_attacks(s))
        | (diag & bishop_attacks(s, occ))
        | (straight & rook_attacks(s, occ))
        | ((pos.pieces(Piece::King, Color::White) | pos.pieces(Piece::King, Color::Black)) & king_attacks(s))
}

#[inline]
pub fn is_attacked<P: Position>(pos: &P, sq: Square, side: Color) -> bool {
    attackers_of(pos, sq, side) != 0
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
    fn attacks_from_empty_square_is_empty() {
        let b = Board::new();
        assert_eq!(attacks_from(&b, sq("e4")), 0);
    }

    #[test]
    fn attacks_from_uses_pawn_color() {
        let b = Board::new();
        assert_eq!(attacks_from(&b, sq("e2")), sq("d3").bb() | sq("f3").bb());
        assert_eq!(attacks_from(&b, sq("e7")), sq("d6").bb() | sq("f6").bb());
    }

    #[test]
    fn slider_stops_at_first_blocker() {
        let b = Board::from_str("4k3/8/8/8/R2p3r/8/8/4K3 w - - 0 1").unwrap();
        let a = attacks_from(&b, sq("a4"));
        assert!(a & sq("d4").bb() != 0, "blocker itself is attacked");
        assert!(a & sq("e4").bb() == 0, "nothing behind the blocker");
    }

    #[test]
    fn attackers_by_side() {
        let b = Board::from_str("4k3/8/8/3p4/4N3/8/8/4K2R w - - 0 1").unwrap();
        assert_eq!(attackers_of(&b, sq("c3"), Color::White), sq("e4").bb());
        assert_eq!(attackers_of(&b, sq("e4"), Color::Black), sq("d5").bb());
        assert!(is_attacked(&b, sq("h8"), Color::White));
        assert!(!is_attacked(&b, sq("a8"), Color::White));
        assert_eq!(attacks_to(&b, sq("f2")), sq("e1").bb() | sq("e4").bb());
    }

    #[test]
    fn removing_a_blocker_reveals_xray() {
        let b = Board::from_str("4k3/8/8/8/8/8/R7/R3K3 w - - 0 1").unwrap();
        assert_eq!(attacks_to(&b, sq("a5")), sq("a2").bb());
        let occ = b.occupied() ^ sq("a2").bb();
        assert_eq!(attacks_to_through(&b, sq("a5"), occ) & occ, sq("a1").bb());
    }
}
