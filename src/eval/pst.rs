//! Piece-square shapes, white's point of view (a1 = 0), before material and
//! percentage scaling. Built from per-file and per-rank profiles.

use super::Score;
use crate::board::Piece;

const PAWN_FILE: [i32; 8] = [-3, -1, 0, 1, 1, 0, -1, -3];
const KNIGHT_LINE: [i32; 8] = [-4, -2, 0, 1, 1, 0, -2, -4];
const KNIGHT_RANK: [i32; 8] = [-2, -1, 0, 1, 2, 3, 2, 1];
const BISHOP_LINE: [i32; 8] = [-3, -1, 0, 1, 1, 0, -1, -3];
const ROOK_FILE: [i32; 8] = [-2, -1, 0, 1, 1, 0, -1, -2];
const QUEEN_LINE: [i32; 8] = [-3, -1, 0, 1, 1, 0, -1, -3];
const KING_LINE: [i32; 8] = [-3, -1, 0, 1, 1, 0, -1, -3];
const KING_FILE: [i32; 8] = [3, 4, 2, 0, 0, 2, 4, 3];
const KING_RANK: [i32; 8] = [1, 0, -2, -3, -4, -5, -6, -7];

fn shape(piece: Piece, file: usize, rank: usize) -> Score {
    match piece {
        Piece::Pawn => {
            let centre = if (3..=4).contains(&file) && (2..=4).contains(&rank) { 10 } else { 0 };
            let advance = if rank >= 1 { (rank as i32 - 1) * 2 } else { 0 };
            Score::new(PAWN_FILE[file] * 5 + centre, advance)
        }
        Piece::Knight => {
            let centre = (KNIGHT_LINE[file] + KNIGHT_LINE[rank]) * 5;
            let back = if rank == 0 { -10 } else { 0 };
            Score::new(centre + KNIGHT_RANK[rank] * 5 + back, centre)
        }
        Piece::Bishop => {
            let centre = BISHOP_LINE[file] + BISHOP_LINE[rank];
            let back = if rank == 0 { -10 } else { 0 };
            let diagonal = if file == rank || file + rank == 7 { 4 } else { 0 };
            Score::new(centre * 2 + back + diagonal, centre * 3)
        }
        Piece::Rook => Score::new(ROOK_FILE[file] * 3, 0),
        Piece::Queen => {
            let back = if rank == 0 { -5 } else { 0 };
            Score::new(back, (QUEEN_LINE[file] + QUEEN_LINE[rank]) * 4)
        }
        Piece::King => Score::new(
            (KING_FILE[file] + KING_RANK[rank]) * 10,
            (KING_LINE[file] + KING_LINE[rank]) * 10,
        ),
    }
}

/// Unscaled positional table for `piece`.
pub fn piece_shape(piece: Piece) -> [Score; 64] {
    let mut table = [Score::ZERO; 64];
    for (sq, entry) in table.iter_mut().enumerate() {
        *entry = shape(piece, sq & 7, sq >> 3);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_are_left_right_symmetric() {
        for piece in Piece::ALL {
            let t = piece_shape(piece);
            for sq in 0..64usize {
                let mirror = sq ^ 7;
                assert_eq!(t[sq], t[mirror], "{:?} on {}", piece, sq);
            }
        }
    }

    #[test]
    fn knights_prefer_the_centre() {
        let t = piece_shape(Piece::Knight);
        assert!(t[27].mg > t[0].mg); // d4 vs a1
        assert!(t[27].eg > t[0].eg);
    }

    #[test]
    fn king_hides_in_midgame_and_centralises_in_endgame() {
        let t = piece_shape(Piece::King);
        // g1 vs e4
        assert!(t[6].mg > t[28].mg);
        assert!(t[28].eg > t[6].eg);
    }
}
